use std::sync::Arc;

use crate::ai::client::ModelApi;
use crate::handler::RequestHandler;

/// Shared application state, cloned into every route handler.
pub struct AppState<C: ModelApi> {
    pub handler: Arc<RequestHandler<C>>,
}

impl<C: ModelApi> AppState<C> {
    pub fn new(handler: RequestHandler<C>) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}

// Manual impl: deriving Clone would require C: Clone, which the Arc makes
// unnecessary.
impl<C: ModelApi> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
        }
    }
}
