use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use crate::auth::router::{self, Access, Area, Event};
use crate::auth::session;

/// Shared guard for every protected scope.
/// A token-bound role without a token is logged out and sent to the landing page once;
/// the landing page itself is never guarded, so the redirect cannot loop.
async fn guard(
    area: Area,
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let sess = req.get_session();
    let state = session::get(&sess);

    let location = match router::authorize(&state, area) {
        Access::Granted(_) => {
            return next.call(req).await.map(|res| res.map_into_left_body());
        }
        Access::ForceLogout => {
            log::info!("{} {}: token missing for {:?}, forcing logout", req.method(), req.path(), state.role);
            router::apply(&sess, Event::TokenMissing)?;
            router::LANDING
        }
        Access::Redirect(to) => to,
    };

    let response = HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish();
    Ok(req.into_response(response).map_into_right_body())
}

pub async fn require_admin(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    guard(Area::Admin, req, next).await
}

pub async fn require_doctor(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    guard(Area::Doctor, req, next).await
}

pub async fn require_patient(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    guard(Area::Patient, req, next).await
}

pub async fn require_logged_patient(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    guard(Area::PatientAccount, req, next).await
}
