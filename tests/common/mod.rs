//! Shared test infrastructure for the HTTP-level tests.
//!
//! - `MockBackend::start()` runs a small in-process REST backend on an
//!   ephemeral port and records every request it receives.
//! - `test_app!(backend)` builds the real route table against it.
//! - `call!(app, cookies, request)` sends a request, carries the session
//!   cookie forward and returns the response as a `Page`.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use regex::Regex;
use serde_json::{Value, json};

use hospital_cms::api::ApiClient;
use hospital_cms::auth::rate_limit::LoginThrottle;
use hospital_cms::config::AppConfig;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const SESSION_KEY: &str = "test-session-key-0123456789abcdef0123456789abcdef0123456789abcdef";

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "admin123";
pub const ADMIN_TOKEN: &str = "abc123";

pub const DOCTOR_EMAIL: &str = "house@example.com";
pub const DOCTOR_PASS: &str = "vicodin";
pub const DOCTOR_TOKEN: &str = "doc-token";

pub const PATIENT_EMAIL: &str = "jane@example.com";
pub const PATIENT_PASS: &str = "secret1";
pub const PATIENT_TOKEN: &str = "patient-token";
pub const PATIENT_ID: i64 = 7;

pub const SESSION_EXPIRED: &str = "Session expired or invalid login. Please log in again.";

// ============================================================================
// MOCK BACKEND
// ============================================================================

/// Data served by the mock backend plus switches for failure paths.
#[derive(Default)]
pub struct MockState {
    pub doctors: Vec<Value>,
    pub appointments: Vec<Value>,
    pub patient_appointments: Vec<Value>,
    /// DELETE /doctor answers 500 instead of removing the doctor.
    pub fail_deletes: bool,
    /// Token-bound reads answer 401.
    pub reject_tokens: bool,
    /// GET /patient/{token} answers 500.
    pub fail_profile: bool,
    /// `"METHOD /path"` of every request, path still percent-encoded.
    pub requests: Vec<String>,
    /// JSON bodies of every POST, in order.
    pub bodies: Vec<Value>,
}

pub fn doctor(id: i64, name: &str, specialty: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "phone": "5551234567",
        "specialty": specialty,
        "availableTimes": ["09:00-10:00", "14:00-15:00"],
    })
}

pub fn appointment(id: i64, patient_id: i64, patient_name: &str, time: &str) -> Value {
    json!({
        "id": id,
        "appointmentTime": time,
        "status": 0,
        "patient": {
            "id": patient_id,
            "name": patient_name,
            "phone": "5559876543",
            "email": "patient@example.com",
            "address": "1 Main St",
        },
    })
}

pub struct MockBackend {
    pub addr: SocketAddr,
    pub state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub async fn start(state: MockState) -> MockBackend {
        let state = Arc::new(Mutex::new(state));
        let data = web::Data::from(state.clone());

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(dispatch))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind mock backend");

        let addr = server.addrs()[0];
        actix_rt::spawn(server.run());

        MockBackend { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.lock().expect("mock state poisoned").requests.clone()
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.state.lock().expect("mock state poisoned").bodies.clone()
    }

    pub fn with_state(&self, f: impl FnOnce(&mut MockState)) {
        f(&mut self.state.lock().expect("mock state poisoned"));
    }
}

async fn dispatch(req: HttpRequest, body: web::Bytes, state: web::Data<Mutex<MockState>>) -> HttpResponse {
    let mut st = state.lock().expect("mock state poisoned");
    let method = req.method().as_str().to_string();
    let path = req.path().to_string();
    st.requests.push(format!("{method} {path}"));

    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    if method == "POST" {
        st.bodies.push(body.clone());
    }

    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    match (method.as_str(), segments.as_slice()) {
        ("POST", ["admin"]) => {
            if body["username"] == ADMIN_USER && body["password"] == ADMIN_PASS {
                HttpResponse::Ok().json(json!({ "token": ADMIN_TOKEN }))
            } else {
                HttpResponse::Unauthorized().json(json!({ "error": "Invalid credentials" }))
            }
        }
        ("POST", ["doctor", "login"]) => {
            if body["email"] == DOCTOR_EMAIL && body["password"] == DOCTOR_PASS {
                HttpResponse::Ok().json(json!({ "token": DOCTOR_TOKEN }))
            } else {
                HttpResponse::Unauthorized().json(json!({ "error": "Invalid credentials" }))
            }
        }
        ("POST", ["patient", "login"]) => {
            if body["email"] == PATIENT_EMAIL && body["password"] == PATIENT_PASS {
                HttpResponse::Ok().json(json!({ "token": PATIENT_TOKEN }))
            } else {
                HttpResponse::Unauthorized().json(json!({ "error": "Invalid credentials" }))
            }
        }
        ("POST", ["patient"]) => HttpResponse::Created().json(json!({ "message": "Signup successful" })),
        ("GET", ["doctor"]) => HttpResponse::Ok().json(json!({ "doctors": st.doctors })),
        ("GET", ["doctor", "search", name, _time, _specialty]) => {
            let found: Vec<Value> = st
                .doctors
                .iter()
                .filter(|d| *name == "null" || d["name"].as_str().is_some_and(|n| n.contains(*name)))
                .cloned()
                .collect();
            HttpResponse::Ok().json(json!({ "doctors": found }))
        }
        ("POST", ["doctor", token]) => {
            if *token != ADMIN_TOKEN {
                return HttpResponse::Unauthorized().json(json!({ "message": "Token invalid" }));
            }
            let id = st.doctors.len() as i64 + 100;
            let mut added = body.clone();
            added["id"] = json!(id);
            st.doctors.push(added);
            HttpResponse::Created().json(json!({ "message": "Doctor added to db" }))
        }
        ("DELETE", ["doctor", id, token]) => {
            if *token != ADMIN_TOKEN {
                return HttpResponse::Unauthorized().json(json!({ "message": "Token invalid" }));
            }
            if st.fail_deletes {
                return HttpResponse::InternalServerError()
                    .json(json!({ "message": "Some internal error occurred" }));
            }
            let id: i64 = id.parse().unwrap_or(-1);
            st.doctors.retain(|d| d["id"] != json!(id));
            HttpResponse::Ok().json(json!({ "message": "Doctor deleted successfully" }))
        }
        ("GET", ["appointments", _date, _name, _token]) => {
            if st.reject_tokens {
                return HttpResponse::Unauthorized().json(json!({ "error": "Invalid token" }));
            }
            HttpResponse::Ok().json(json!({ "appointments": st.appointments }))
        }
        ("POST", ["appointments", _token]) => {
            HttpResponse::Created().json(json!({ "message": "Appointment Booked Successfully" }))
        }
        ("GET", ["patient", token]) => {
            if st.reject_tokens || *token != PATIENT_TOKEN {
                return HttpResponse::Unauthorized().json(json!({ "error": "Invalid token" }));
            }
            if st.fail_profile {
                return HttpResponse::InternalServerError().json(json!({ "error": "Database unavailable" }));
            }
            HttpResponse::Ok().json(json!({
                "patient": {
                    "id": PATIENT_ID,
                    "name": "Jane Roe",
                    "phone": "5550001111",
                    "email": PATIENT_EMAIL,
                    "address": "2 Side St",
                }
            }))
        }
        ("GET", ["patient", _id, _token]) => {
            HttpResponse::Ok().json(json!({ "appointments": st.patient_appointments }))
        }
        _ => HttpResponse::NotFound().json(json!({ "error": "no such endpoint" })),
    }
}

// ============================================================================
// APP UNDER TEST
// ============================================================================

/// Shared app data pointed at `backend`.
pub fn app_state(
    backend: &MockBackend,
) -> (web::Data<ApiClient>, web::Data<AppConfig>, web::Data<LoginThrottle>) {
    let backend_url = backend.url();
    let config = AppConfig::from_lookup(|name| match name {
        "BACKEND_URL" => Some(backend_url.clone()),
        "SESSION_KEY" => Some(SESSION_KEY.to_string()),
        "BACKEND_TIMEOUT_SECS" => Some("5".to_string()),
        _ => None,
    })
    .expect("Failed to build test config");
    let api = ApiClient::from_config(&config).expect("Failed to build API client");
    (web::Data::new(api), web::Data::new(config), web::Data::new(LoginThrottle::new()))
}

/// Build the full app (session, routes, 404 page) against a mock backend.
macro_rules! test_app {
    ($backend:expr) => {{
        let (api, config, throttle) = common::app_state(&$backend);
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(hospital_cms::session_middleware(config.session_key.clone()))
                .app_data(api)
                .app_data(config)
                .app_data(throttle)
                .configure(hospital_cms::routes)
                .default_service(actix_web::web::to(hospital_cms::handlers::not_found)),
        )
        .await
    }};
}

/// Send one request with the stored cookies and keep whatever the response sets.
macro_rules! call {
    ($app:expr, $cookies:expr, $req:expr) => {{
        let req = $cookies.apply($req).to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        $cookies.update(resp.response().cookies());
        common::Page::read(resp).await
    }};
}

/// Fetch a form page for its CSRF token, then post `fields` to the same path.
macro_rules! submit_form {
    ($app:expr, $cookies:expr, $form_page:expr, $action:expr, $fields:expr) => {{
        let page = call!($app, $cookies, actix_web::test::TestRequest::get().uri($form_page));
        let mut form: Vec<(&str, String)> = $fields.iter().map(|(k, v)| (*k, v.to_string())).collect();
        form.push(("csrf_token", page.csrf_token()));
        call!($app, $cookies, actix_web::test::TestRequest::post().uri($action).set_form(&form))
    }};
}

// ============================================================================
// BROWSER HELPERS
// ============================================================================

/// Minimal cookie jar: the session cookie travels from one request to the next.
#[derive(Default)]
pub struct Cookies(Vec<Cookie<'static>>);

impl Cookies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, mut req: actix_web::test::TestRequest) -> actix_web::test::TestRequest {
        for c in &self.0 {
            req = req.cookie(c.clone());
        }
        req
    }

    pub fn update<'a>(&mut self, set: impl Iterator<Item = Cookie<'a>>) {
        for c in set {
            let c = c.into_owned();
            self.0.retain(|old| old.name() != c.name());
            if !c.value().is_empty() {
                self.0.push(c);
            }
        }
    }
}

/// What the browser got back.
pub struct Page {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl Page {
    pub async fn read<B: MessageBody>(resp: ServiceResponse<B>) -> Page {
        let status = resp.status();
        let location = resp
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = actix_web::test::read_body(resp).await;
        Page { status, location, body: String::from_utf8_lossy(&body).into_owned() }
    }

    pub fn is_redirect_to(&self, to: &str) -> bool {
        self.status == StatusCode::SEE_OTHER && self.location.as_deref() == Some(to)
    }

    /// The CSRF token embedded in the page's forms.
    pub fn csrf_token(&self) -> String {
        let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]+)""#).expect("valid regex");
        re.captures(&self.body)
            .map(|c| c[1].to_string())
            .expect("page has no CSRF token")
    }

    /// Ids of the rendered doctor cards, in page order.
    pub fn card_ids(&self) -> Vec<i64> {
        let re = Regex::new(r#"class="doctor-card" data-id="(\d+)""#).expect("valid regex");
        re.captures_iter(&self.body)
            .filter_map(|c| c[1].parse().ok())
            .collect()
    }

    /// Ids of the rendered table rows (`<tr data-id=..>`), placeholders excluded.
    pub fn row_ids(&self) -> Vec<i64> {
        let re = Regex::new(r#"<tr data-id="(\d+)""#).expect("valid regex");
        re.captures_iter(&self.body)
            .filter_map(|c| c[1].parse().ok())
            .collect()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.body.matches(needle).count()
    }
}
