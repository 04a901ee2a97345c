use actix_web::{post, web, HttpResponse, Responder};
use mongodb::{
    bson::{self, DateTime, Document},
    Database,
};
use serde_json::{json, Value};

use crate::entities::ErrorResponse;
use crate::json::document_to_json;
use crate::log::write_log;

#[post("/api/bookings")]
async fn create_booking_handler(db: web::Data<Database>, body: web::Json<Value>) -> impl Responder {
    let mut booking = match bson::to_document(&body.into_inner()) {
        Ok(booking) => booking,
        Err(e) => {
            write_log(&format!("Error al crear reserva: {}", e)).ok();
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to process booking"));
        }
    };
    // La marca de tiempo la pone el servidor, nunca el cliente.
    booking.insert("createdAt", DateTime::now());

    let collection = db.collection::<Document>("bookings");
    match collection.insert_one(&booking).await {
        Ok(result) => {
            booking.insert("_id", result.inserted_id);
            HttpResponse::Created().json(json!({
                "success": true,
                "message": "Booking created successfully",
                "data": document_to_json(&booking),
            }))
        }
        Err(e) => {
            write_log(&format!("Error al crear reserva: {}", e)).ok();
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to process booking"))
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_booking_handler);
}
