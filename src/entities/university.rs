use actix_web::{get, web, HttpResponse, Responder};
use futures_util::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Database,
};

use crate::entities::ErrorResponse;
use crate::json::document_to_json;
use crate::log::write_log;

#[get("/universities")]
async fn get_universities_handler(db: web::Data<Database>) -> impl Responder {
    let collection = db.collection::<Document>("universities");
    let cursor = match collection.find(doc! {}).await {
        Ok(cursor) => cursor,
        Err(e) => {
            write_log(&format!("Error al obtener universidades: {}", e)).ok();
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch universities"));
        }
    };
    let universities: Vec<Document> = match cursor.try_collect().await {
        Ok(universities) => universities,
        Err(e) => {
            write_log(&format!("Error al obtener universidades: {}", e)).ok();
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch universities"));
        }
    };
    HttpResponse::Ok().json(
        universities
            .iter()
            .map(document_to_json)
            .collect::<Vec<_>>(),
    )
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_universities_handler);
}
