// Biblioteca raíz del crate `lichhoc`.
// Reexporta los módulos principales: el motor de recomendación (`algorithm`),
// el modelo de datos, la carga del catálogo y la capa HTTP.
pub mod algorithm;
pub mod api_json;
pub mod catalog;
pub mod models;
pub mod server;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
