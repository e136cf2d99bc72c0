//! State

use std::sync::Arc;

use fircrest_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Request header carrying the gateway-verified caller identity.
    pub(crate) identity_header: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, identity_header: String) -> Self {
        Self {
            app,
            identity_header,
        }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, identity_header: String) -> Arc<Self> {
        Arc::new(Self::new(app, identity_header))
    }
}
