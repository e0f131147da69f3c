pub mod csrf;
pub mod middleware;
pub mod rate_limit;
pub mod router;
pub mod session;
pub mod validate;
