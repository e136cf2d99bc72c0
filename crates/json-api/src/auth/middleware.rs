//! Identity middleware.

use std::sync::Arc;

use fircrest_app::identity::UserUuid;
use salvo::prelude::*;
use uuid::Uuid;

use crate::{identity::IdentityDepotExt as _, state::State};

/// Copies the gateway-verified caller identity into the depot.
///
/// The auth gateway in front of this service owns credential validation and
/// forwards the resulting identity in a request header; a missing or
/// malformed header means an anonymous request. Handlers decide whether
/// identity is required, so this hoop never rejects.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let header = match depot.obtain::<Arc<State>>() {
        Ok(state) => state.identity_header.clone(),
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    if let Some(user) = extract_identity(req, &header) {
        depot.insert_identity(user);
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_identity(req: &Request, header: &str) -> Option<UserUuid> {
    let value = req.headers().get(header)?.to_str().ok()?;

    value.trim().parse::<Uuid>().ok().map(UserUuid::from_uuid)
}
