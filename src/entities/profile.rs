use actix_web::{post, web, HttpResponse, Responder};
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    Database,
};
use serde_json::{json, Value};

use crate::entities::ErrorResponse;
use crate::json::document_to_json;
use crate::log::write_log;

#[post("/api/profile")]
async fn create_profile_handler(db: web::Data<Database>, body: web::Json<Value>) -> impl Responder {
    // El perfil se guarda tal cual llega; no hay esquema que validar.
    let profile = match bson::to_document(&body.into_inner()) {
        Ok(profile) => profile,
        Err(e) => {
            write_log(&format!("Error al crear perfil: {}", e)).ok();
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to add profile to database"));
        }
    };
    let collection = db.collection::<Document>("profiles");
    match collection.insert_one(profile).await {
        Ok(_) => HttpResponse::Created().json(json!({
            "success": true,
            "message": "Profile added to database",
        })),
        Err(e) => {
            write_log(&format!("Error al crear perfil: {}", e)).ok();
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to add profile to database"))
        }
    }
}

#[post("/api/user")]
async fn get_profile_handler(db: web::Data<Database>, body: web::Json<Value>) -> impl Responder {
    // Sin email no se consulta nada.
    let email = match body.get("email").and_then(|v| v.as_str()) {
        Some(email) => email,
        None => return HttpResponse::BadRequest().json(ErrorResponse::new("Email is required.")),
    };
    let collection = db.collection::<Document>("profiles");
    match collection.find_one(doc! {"email": email}).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(json!({
            "success": true,
            "profile": document_to_json(&profile),
        })),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::new("Profile not found")),
        Err(e) => {
            write_log(&format!("Error al buscar perfil por email: {}", e)).ok();
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}

/// Construye el $set de la actualización parcial: todos los campos del body
/// menos userId. Los valores sin representación BSON se descartan, como se
/// descartaban los campos indefinidos; lo que el cliente no envía no se toca.
pub(crate) fn collect_update_fields(body: &Value) -> Document {
    let mut fields = Document::new();
    if let Some(map) = body.as_object() {
        for (key, value) in map {
            if key == "userId" {
                continue;
            }
            if let Ok(value) = bson::to_bson(value) {
                fields.insert(key, value);
            }
        }
    }
    fields
}

#[post("/api/profileupdate")]
async fn update_profile_handler(db: web::Data<Database>, body: web::Json<Value>) -> impl Responder {
    let body = body.into_inner();
    let user_id = match body.get("userId").and_then(|v| v.as_str()) {
        Some(user_id) => user_id,
        None => {
            return HttpResponse::BadRequest().json(json!({"message": "User ID is required."}))
        }
    };
    let obj_id = match ObjectId::parse_str(user_id) {
        Ok(obj_id) => obj_id,
        Err(e) => {
            write_log(&format!("Error al actualizar perfil: {}", e)).ok();
            // Este handler es el único que expone el detalle del error.
            return HttpResponse::InternalServerError().json(json!({
                "message": "Failed to update profile",
                "error": e.to_string(),
            }));
        }
    };

    let fields_to_update = collect_update_fields(&body);
    let collection = db.collection::<Document>("profiles");
    match collection
        .update_one(doc! {"_id": obj_id}, doc! {"$set": fields_to_update})
        .await
    {
        // No distingue "id inexistente" de "actualización sin cambios".
        Ok(result) if result.modified_count == 0 => HttpResponse::NotFound()
            .json(json!({"message": "Profile not found or no changes made."})),
        Ok(_) => {
            // Se devuelve el documento actualizado sin los campos sensibles.
            match collection
                .find_one(doc! {"_id": obj_id})
                .projection(doc! {"password": 0, "confirmPassword": 0})
                .await
            {
                Ok(profile) => HttpResponse::Ok().json(json!({
                    "message": "Profile updated successfully",
                    "profile": profile.map(|p| document_to_json(&p)),
                })),
                Err(e) => {
                    write_log(&format!("Error al actualizar perfil: {}", e)).ok();
                    HttpResponse::InternalServerError().json(json!({
                        "message": "Failed to update profile",
                        "error": e.to_string(),
                    }))
                }
            }
        }
        Err(e) => {
            write_log(&format!("Error al actualizar perfil: {}", e)).ok();
            HttpResponse::InternalServerError().json(json!({
                "message": "Failed to update profile",
                "error": e.to_string(),
            }))
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_profile_handler)
        .service(get_profile_handler)
        .service(update_profile_handler);
}
