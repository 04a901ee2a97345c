use actix_web::web;

use crate::entities::{booking, hostel, profile, university};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    booking::configure_routes(cfg);
    hostel::configure_routes(cfg);
    profile::configure_routes(cfg);
    university::configure_routes(cfg);
}
