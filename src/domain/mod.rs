//! Domain layer: view tree, components and layout
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod components;
pub mod destination;
pub mod error;
pub mod icons;
pub mod layout;
pub mod node;

pub use components::{Page, PageSpec, FEEDBACK_LABEL, FEEDBACK_PATH, REPOSITORY_LABEL};
pub use destination::Destination;
pub use error::DomainError;
pub use layout::{
    Arrangement, Breakpoint, LayoutPlan, Viewport, BREAKPOINT_TIERS, DEFAULT_BREAKPOINT,
};
pub use node::*;
