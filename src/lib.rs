//! feedpage: a static landing page built from three components
//!
//! - [`domain`]: view tree, components, responsive layout
//! - [`application`]: page rendering service
//! - [`infrastructure`]: filesystem, stylesheet mapping, HTML rendering
//! - [`cli`]: command line surface

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
