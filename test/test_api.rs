// test/test_api.rs
// Requieren una instancia local de MongoDB; se ejecutan con `cargo test -- --ignored`.
use actix_web::{http::StatusCode, test, web, App};
use mongodb::bson::{doc, Document};
use mongodb::{Client, Database};
use serde_json::{json, Value};
use std::env;

use mydormie_api::routes::configure_routes;

/// Configura y devuelve una base de datos de prueba.
/// Esta función limpia las colecciones usadas antes de cada test.
async fn setup_test_db() -> Database {
    let client_uri =
        env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let client = Client::with_uri_str(&client_uri).await.unwrap();
    let db = client.database("test_mydormie");

    for name in ["hostels", "unihostels", "universities", "profiles", "bookings"] {
        db.collection::<Document>(name)
            .delete_many(doc! {})
            .await
            .unwrap();
    }
    db
}

#[actix_web::test]
#[ignore = "requiere una instancia local de MongoDB"]
async fn test_listar_hostels_vacio() {
    let db = setup_test_db().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/hostel").to_request();
    // Al estar la colección vacía, esperamos una lista vacía.
    let resp: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(resp.is_empty(), "La lista de hostels debe estar vacía");
}

#[actix_web::test]
#[ignore = "requiere una instancia local de MongoDB"]
async fn test_crear_y_buscar_perfil_por_email() {
    let db = setup_test_db().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .configure(configure_routes),
    )
    .await;

    // Creamos un perfil nuevo.
    let req = test::TestRequest::post()
        .uri("/api/profile")
        .set_json(json!({"email": "a@b.com", "name": "A"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED, "El perfil debería crearse");

    // Lo recuperamos por email.
    let req = test::TestRequest::post()
        .uri("/api/user")
        .set_json(json!({"email": "a@b.com"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["profile"]["name"], json!("A"), "El nombre debe coincidir");
}

#[actix_web::test]
#[ignore = "requiere una instancia local de MongoDB"]
async fn test_buscar_perfil_sin_email_devuelve_400() {
    let db = setup_test_db().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/user")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
#[ignore = "requiere una instancia local de MongoDB"]
async fn test_actualizar_perfil_sin_user_id_devuelve_400() {
    let db = setup_test_db().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/profileupdate")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "User ID is required."}));
}

#[actix_web::test]
#[ignore = "requiere una instancia local de MongoDB"]
async fn test_actualizar_perfil_redacta_password() {
    let db = setup_test_db().await;

    // Insertamos un perfil con campos sensibles directamente en la base de datos.
    let insert_result = db
        .collection::<Document>("profiles")
        .insert_one(doc! {
            "email": "u@b.com",
            "name": "Viejo",
            "password": "secreto",
            "confirmPassword": "secreto",
        })
        .await
        .unwrap();
    let user_id = insert_result.inserted_id.as_object_id().unwrap().to_hex();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/profileupdate")
        .set_json(json!({"userId": user_id, "name": "Nuevo"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["profile"]["name"], json!("Nuevo"));
    // La respuesta nunca incluye los campos sensibles.
    assert!(body["profile"].get("password").is_none());
    assert!(body["profile"].get("confirmPassword").is_none());
    // El resto de campos no enviados queda intacto.
    assert_eq!(body["profile"]["email"], json!("u@b.com"));
}

#[actix_web::test]
#[ignore = "requiere una instancia local de MongoDB"]
async fn test_actualizar_perfil_inexistente_devuelve_404() {
    let db = setup_test_db().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/profileupdate")
        .set_json(json!({"userId": "507f1f77bcf86cd799439011", "name": "X"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
#[ignore = "requiere una instancia local de MongoDB"]
async fn test_crear_reserva_agrega_created_at_e_id() {
    let db = setup_test_db().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .set_json(json!({"hostelId": "X", "userId": "Y"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["hostelId"], json!("X"));
    assert!(body["data"]["createdAt"].is_string(), "createdAt lo pone el servidor");
    assert!(body["data"]["_id"].is_string(), "la reserva debe tener _id");
}

#[actix_web::test]
#[ignore = "requiere una instancia local de MongoDB"]
async fn test_buscar_hostel_por_id() {
    let db = setup_test_db().await;

    let insert_result = db
        .collection::<Document>("hostels")
        .insert_one(doc! {"name": "Hostal Centro"})
        .await
        .unwrap();
    let hostel_id = insert_result.inserted_id.as_object_id().unwrap().to_hex();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/hosteldata")
        .set_json(json!({"id": hostel_id}))
        .to_request();
    // El detalle responde con el documento sin envoltorio.
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], json!("Hostal Centro"));
    assert_eq!(body["_id"], json!(hostel_id));
}

#[actix_web::test]
#[ignore = "requiere una instancia local de MongoDB"]
async fn test_buscar_hostel_con_id_bien_formado_pero_inexistente_devuelve_404() {
    let db = setup_test_db().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/hosteldata")
        .set_json(json!({"id": "507f1f77bcf86cd799439011"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"success": false, "message": "Hostel not found"}));
}
