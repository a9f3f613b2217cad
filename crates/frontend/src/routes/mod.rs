pub mod route;
pub mod router;
#[allow(clippy::module_inception)]
pub mod routes;
