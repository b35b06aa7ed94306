use crate::sentiment::GenerativeModel;
use std::sync::Arc;

/// Shared handler state. Built once at startup and cloned per request; the
/// model client is the only shared resource and it is immutable.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn GenerativeModel>,
}

impl AppState {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }
}
