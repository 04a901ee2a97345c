use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use mydormie_api::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Carga MONGODB_URI desde .env si existe.
    dotenv::dotenv().ok();

    // Inicializa la conexión a la base de datos.
    // La función init_db se asegura de que solo se cree una única instancia (singleton).
    let database = db::init_db()
        .await
        .expect("Error al inicializar la base de datos");
    println!("Base de datos lista");

    // Configura el servidor HTTP y define las rutas.
    let server = HttpServer::new(move || {
        App::new()
            // El frontend se sirve desde otro origen, así que se permite cualquiera.
            .wrap(Cors::permissive())
            // Se inyecta la base de datos como estado compartido en la app.
            .app_data(web::Data::new(database.clone()))
            .configure(routes::configure_routes)
    })
    .bind(("0.0.0.0", 3000))?
    .run();
    println!("Servidor escuchando en http://localhost:3000");
    server.await
}
