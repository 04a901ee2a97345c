pub mod db;
pub mod entities;
pub mod json;
pub mod log;
pub mod routes;
