//! Infrastructure layer: I/O implementations, rendering boundary and DI container
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod html;
pub mod stylesheet;
pub mod traits;

pub use error::InfraError;
