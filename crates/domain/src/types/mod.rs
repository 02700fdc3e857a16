//! Domain types and models

pub mod event;
pub mod layout;

pub use event::CanonicalEvent;
pub use layout::{Language, LayoutContext, ViewType};
