use serde::Serialize;

pub mod booking;
pub mod hostel;
pub mod profile;
pub mod university;

/// Envoltorio de error que comparten casi todos los handlers.
/// El mensaje es genérico; el detalle del driver va solo al log.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: &'static str,
}

impl ErrorResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: false,
            message,
        }
    }
}
