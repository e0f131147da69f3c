use askama::Template;

use super::PageContext;

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub ctx: PageContext,
}

/// One template serves the admin, doctor and patient login forms.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    pub title: &'static str,
    pub action: &'static str,
    pub identifier_name: &'static str,
    pub identifier_label: &'static str,
    pub identifier_type: &'static str,
    pub identifier_value: String,
    pub show_signup: bool,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupTemplate {
    pub ctx: PageContext,
    pub errors: Vec<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}
