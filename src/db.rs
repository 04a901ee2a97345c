use mongodb::{Client, Database};
use once_cell::sync::OnceCell;
use std::env;

static DATABASE: OnceCell<Database> = OnceCell::new();

/// Inicializa la base de datos y la almacena en un singleton.
/// Si ya se creó, se devuelve la instancia existente sin reconectar.
pub async fn init_db() -> mongodb::error::Result<Database> {
    if let Some(db) = DATABASE.get() {
        return Ok(db.clone());
    }
    // La URI se toma de MONGODB_URI; si no está definida se usa la instancia local.
    let uri = env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017/mydormie".to_string());
    let client = Client::with_uri_str(&uri).await?;
    let db = client.database("mydormie");
    // Dos llamadas concurrentes pueden competir aquí; gana la primera
    // y la conexión sobrante se descarta.
    DATABASE.set(db.clone()).ok();
    Ok(db)
}
