//! Core types for the sfoweb integration
//!
//! This crate provides the shared surface the lifecycle code runs against:
//! the structured [`ConfigEntry`] record, the [`Platform`] identifiers, the
//! host runtime contract ([`PlatformForwarder`]) and the [`RuntimeContext`]
//! that owns the per-entry [`DataRegistry`].

mod context;
mod entry;
mod platform;
mod registry;

pub use context::{PlatformError, PlatformForwarder, PlatformResult, RuntimeContext};
pub use entry::{ConfigEntry, Credentials};
pub use platform::Platform;
pub use registry::{DataRegistry, ResourceBundle};
