//! Application state for the API server

use crate::{Config, resolver::AudioResolver, text_proxy::TextProxy};
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// Cloned for each request (cheap Arc clones). Nothing in here is mutable;
/// concurrent requests share the resolver and proxy without coordination.
#[derive(Clone)]
pub struct AppState {
    /// The audio URL resolver
    pub resolver: Arc<AudioResolver>,

    /// The Quran-text passthrough client
    pub text_proxy: Arc<TextProxy>,

    /// Configuration (read access)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(resolver: Arc<AudioResolver>, text_proxy: Arc<TextProxy>, config: Arc<Config>) -> Self {
        Self {
            resolver,
            text_proxy,
            config,
        }
    }
}
