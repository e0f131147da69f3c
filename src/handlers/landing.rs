use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::router::{self, Event};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::templates_structs::{LandingTemplate, PageContext};

/// Role selection. Visiting it always resets the session; a pending flash
/// (forced logout, logout) is still shown once.
pub async fn index(
    config: web::Data<AppConfig>,
    sess: Session,
) -> Result<HttpResponse, AppError> {
    router::apply(&sess, Event::LandingVisited)?;
    let ctx = PageContext::for_role(&sess, &config.app_name, None);
    render(LandingTemplate { ctx })
}
