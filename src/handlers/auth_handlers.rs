use std::net::{IpAddr, Ipv4Addr};

use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::api::{self, ApiClient, ApiError};
use crate::auth::csrf;
use crate::auth::rate_limit::LoginThrottle;
use crate::auth::router::{self, Event};
use crate::auth::session::{self, Role};
use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::handlers::CsrfOnly;
use crate::models::patient::SignupForm;
use crate::templates_structs::{LoginTemplate, PageContext, SignupTemplate};

pub const LOGIN_OK: &str = "Login Successful!";
const TOO_MANY_ATTEMPTS: &str = "Too many failed login attempts. Please try again later.";
const SIGNUP_OK: &str = "Signup successful! Please log in.";

#[derive(Deserialize)]
pub struct RoleForm {
    pub role: String,
    pub csrf_token: String,
}

/// Admin logs in with `username`, doctors and patients with `email`.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(alias = "username", alias = "email")]
    pub identifier: String,
    pub password: String,
    pub csrf_token: String,
}

/// Everything that differs between the three login forms.
struct LoginPage {
    role: Role,
    title: &'static str,
    action: &'static str,
    identifier_name: &'static str,
    identifier_label: &'static str,
    identifier_type: &'static str,
    show_signup: bool,
    invalid: &'static str,
    unavailable: &'static str,
}

const ADMIN_LOGIN: LoginPage = LoginPage {
    role: Role::Admin,
    title: "Admin Login",
    action: "/login/admin",
    identifier_name: "username",
    identifier_label: "Username",
    identifier_type: "text",
    show_signup: false,
    invalid: "Invalid Admin credentials. Please try again.",
    unavailable: "An error occurred during login. Please try again later.",
};

const DOCTOR_LOGIN: LoginPage = LoginPage {
    role: Role::Doctor,
    title: "Doctor Login",
    action: "/login/doctor",
    identifier_name: "email",
    identifier_label: "Email",
    identifier_type: "email",
    show_signup: false,
    invalid: "Invalid Doctor credentials.",
    unavailable: "System error. Please contact support.",
};

const PATIENT_LOGIN: LoginPage = LoginPage {
    role: Role::LoggedPatient,
    title: "Patient Login",
    action: "/login/patient",
    identifier_name: "email",
    identifier_label: "Email",
    identifier_type: "email",
    show_signup: true,
    invalid: "Invalid Patient credentials.",
    unavailable: "An error occurred during login. Please try again later.",
};

impl LoginPage {
    fn show(
        &self,
        sess: &Session,
        config: &AppConfig,
        identifier: &str,
        error: Option<&str>,
    ) -> Result<HttpResponse, AppError> {
        let ctx = PageContext::build(sess, &config.app_name);
        render(LoginTemplate {
            ctx,
            title: self.title,
            action: self.action,
            identifier_name: self.identifier_name,
            identifier_label: self.identifier_label,
            identifier_type: self.identifier_type,
            identifier_value: identifier.to_string(),
            show_signup: self.show_signup,
            error: error.map(String::from),
        })
    }

    async fn call_backend(&self, api: &ApiClient, identifier: &str, password: &str) -> Result<String, ApiError> {
        match self.role {
            Role::Admin => api::auth::admin_login(api, identifier, password).await,
            Role::Doctor => api::auth::doctor_login(api, identifier, password).await,
            Role::Patient | Role::LoggedPatient => api::auth::patient_login(api, identifier, password).await,
        }
    }
}

fn client_ip(req: &HttpRequest) -> IpAddr {
    req.peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Role buttons on the landing page. Admin and doctor go to their login form;
/// patients browse doctors as guests right away.
pub async fn select_role(
    sess: Session,
    form: web::Form<RoleForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&sess, &form.csrf_token)?;

    let location = match Role::parse(&form.role) {
        Some(Role::Admin) => ADMIN_LOGIN.action,
        Some(Role::Doctor) => DOCTOR_LOGIN.action,
        Some(Role::Patient | Role::LoggedPatient) => {
            router::apply(&sess, Event::PickedPatient)?;
            router::home_route(Role::Patient)
        }
        None => router::LANDING,
    };
    Ok(see_other(location))
}

pub async fn admin_login_page(config: web::Data<AppConfig>, sess: Session) -> Result<HttpResponse, AppError> {
    ADMIN_LOGIN.show(&sess, &config, "", None)
}

pub async fn doctor_login_page(config: web::Data<AppConfig>, sess: Session) -> Result<HttpResponse, AppError> {
    DOCTOR_LOGIN.show(&sess, &config, "", None)
}

pub async fn patient_login_page(config: web::Data<AppConfig>, sess: Session) -> Result<HttpResponse, AppError> {
    PATIENT_LOGIN.show(&sess, &config, "", None)
}

pub async fn admin_login_submit(
    req: HttpRequest,
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    throttle: web::Data<LoginThrottle>,
    sess: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    login_submit(&ADMIN_LOGIN, &req, &api, &config, &throttle, &sess, &form).await
}

pub async fn doctor_login_submit(
    req: HttpRequest,
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    throttle: web::Data<LoginThrottle>,
    sess: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    login_submit(&DOCTOR_LOGIN, &req, &api, &config, &throttle, &sess, &form).await
}

pub async fn patient_login_submit(
    req: HttpRequest,
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    throttle: web::Data<LoginThrottle>,
    sess: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    login_submit(&PATIENT_LOGIN, &req, &api, &config, &throttle, &sess, &form).await
}

async fn login_submit(
    page: &LoginPage,
    req: &HttpRequest,
    api: &ApiClient,
    config: &AppConfig,
    throttle: &LoginThrottle,
    sess: &Session,
    form: &LoginForm,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(sess, &form.csrf_token)?;

    // Throttle before the backend sees the credentials
    let ip = client_ip(req);
    if throttle.is_blocked(ip, page.role) {
        return page.show(sess, config, &form.identifier, Some(TOO_MANY_ATTEMPTS));
    }

    match page.call_backend(api, form.identifier.trim(), &form.password).await {
        Ok(token) => {
            throttle.clear(ip, page.role);
            let state = router::apply(sess, Event::LoggedIn { role: page.role, token: &token })?;
            log::info!("{} login accepted, now {:?}", page.role.as_str(), state);
            session::set_flash(sess, LOGIN_OK);
            Ok(see_other(router::home_route(page.role)))
        }
        Err(e @ (ApiError::Status { .. } | ApiError::Decode(_))) => {
            log::info!("{} login rejected: {e}", page.role.as_str());
            throttle.record_failure(ip, page.role);
            page.show(sess, config, &form.identifier, Some(page.invalid))
        }
        Err(e) => {
            log::error!("{} login failed: {e}", page.role.as_str());
            page.show(sess, config, &form.identifier, Some(page.unavailable))
        }
    }
}

pub async fn signup_page(config: web::Data<AppConfig>, sess: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&sess, &config.app_name);
    render(SignupTemplate {
        ctx,
        errors: Vec::new(),
        name: String::new(),
        email: String::new(),
        phone: String::new(),
        address: String::new(),
    })
}

pub async fn signup_submit(
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    sess: Session,
    form: web::Form<SignupForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&sess, &form.csrf_token)?;

    let mut errors = form.validate();
    if errors.is_empty() {
        let outcome = api::patients::signup(&api, &form.to_new_patient()).await;
        if outcome.success {
            session::set_flash(&sess, SIGNUP_OK);
            return Ok(see_other(PATIENT_LOGIN.action));
        }
        errors.push(outcome.message);
    }

    let ctx = PageContext::build(&sess, &config.app_name);
    render(SignupTemplate {
        ctx,
        errors,
        name: form.name.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
        address: form.address.clone(),
    })
}

pub async fn logout(sess: Session, form: web::Form<CsrfOnly>) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&sess, &form.csrf_token)?;
    router::apply(&sess, Event::LoggedOut)?;
    Ok(see_other(router::LANDING))
}

/// Drops the patient token but keeps the guest role, so browsing continues.
pub async fn patient_logout(sess: Session, form: web::Form<CsrfOnly>) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&sess, &form.csrf_token)?;
    router::apply(&sess, Event::PatientLoggedOut)?;
    Ok(see_other(router::home_route(Role::Patient)))
}
