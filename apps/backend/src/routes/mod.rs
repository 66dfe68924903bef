pub mod completions;
pub mod health;

use actix_web::web::ServiceConfig;

/// Register every route the server exposes.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.configure(completions::configure_routes);
}
