use actix_web::{get, post, web, HttpResponse, Responder};
use futures_util::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Database,
};
use serde_json::Value;

use crate::entities::ErrorResponse;
use crate::json::document_to_json;
use crate::log::write_log;

#[get("/api/hostel")]
async fn get_hostels_handler(db: web::Data<Database>) -> impl Responder {
    let collection = db.collection::<Document>("hostels");
    let cursor = match collection.find(doc! {}).await {
        Ok(cursor) => cursor,
        Err(e) => {
            write_log(&format!("Error al obtener hostels: {}", e)).ok();
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch hostels"));
        }
    };
    let hostels: Vec<Document> = match cursor.try_collect().await {
        Ok(hostels) => hostels,
        Err(e) => {
            write_log(&format!("Error al obtener hostels: {}", e)).ok();
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch hostels"));
        }
    };
    HttpResponse::Ok().json(hostels.iter().map(document_to_json).collect::<Vec<_>>())
}

// El frontend histórico pide los hostels universitarios en "/hostels".
#[get("/hostels")]
async fn get_unihostels_handler(db: web::Data<Database>) -> impl Responder {
    let collection = db.collection::<Document>("unihostels");
    let cursor = match collection.find(doc! {}).await {
        Ok(cursor) => cursor,
        Err(e) => {
            write_log(&format!("Error al obtener unihostels: {}", e)).ok();
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch hostels"));
        }
    };
    let hostels: Vec<Document> = match cursor.try_collect().await {
        Ok(hostels) => hostels,
        Err(e) => {
            write_log(&format!("Error al obtener unihostels: {}", e)).ok();
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch hostels"));
        }
    };
    HttpResponse::Ok().json(hostels.iter().map(document_to_json).collect::<Vec<_>>())
}

/// Busca un documento por el id recibido en el body y responde con el
/// documento tal cual, sin envoltorio. Un id mal formado cuenta como
/// error de operación (500), no como "no encontrado".
async fn find_by_body_id(db: &Database, collection_name: &str, body: &Value) -> HttpResponse {
    let id = body.get("id").and_then(|v| v.as_str()).unwrap_or_default();
    let obj_id = match ObjectId::parse_str(id) {
        Ok(obj_id) => obj_id,
        Err(e) => {
            write_log(&format!("Error al obtener hostel ({}): {}", collection_name, e)).ok();
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch hostel"));
        }
    };
    let collection = db.collection::<Document>(collection_name);
    match collection.find_one(doc! {"_id": obj_id}).await {
        Ok(Some(hostel)) => HttpResponse::Ok().json(document_to_json(&hostel)),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::new("Hostel not found")),
        Err(e) => {
            write_log(&format!("Error al obtener hostel ({}): {}", collection_name, e)).ok();
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to fetch hostel"))
        }
    }
}

#[post("/api/hosteldata")]
async fn get_hostel_handler(db: web::Data<Database>, body: web::Json<Value>) -> impl Responder {
    find_by_body_id(&db, "hostels", &body).await
}

#[post("/api/hosteldatauni")]
async fn get_unihostel_handler(db: web::Data<Database>, body: web::Json<Value>) -> impl Responder {
    find_by_body_id(&db, "unihostels", &body).await
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_hostels_handler)
        .service(get_unihostels_handler)
        .service(get_hostel_handler)
        .service(get_unihostel_handler);
}
