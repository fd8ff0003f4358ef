//! Route handlers for the REST API
//!
//! Handlers are organized by domain:
//! - [`audio`] — Audio URL resolution
//! - [`text`] — Quran text passthrough
//! - [`system`] — Health and OpenAPI

mod audio;
mod system;
mod text;

// Re-export all handlers so `routes::function_name` works
pub use audio::*;
pub use system::*;
pub use text::*;
