// Lectura del catálogo de cursos desde el fichero JSON de datos.
// Es el único módulo que toca disco; el motor recibe la lista ya cargada.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::models::Offering;

const DEFAULT_CATALOG_PATH: &str = "data/data.json";

/// Registro crudo tal como viene en el fichero de datos. Los alias en
/// mayúscula cubren el export antiguo de la base de datos (`ID`, `Time`...).
#[derive(Debug, Deserialize)]
pub struct RawCourse {
    #[serde(alias = "ID")]
    pub id: Option<i64>,
    #[serde(alias = "Name")]
    pub name: Option<String>,
    #[serde(alias = "Lecturer")]
    pub lecturer: Option<String>,
    #[serde(alias = "Time")]
    pub time: Option<String>,
    #[serde(alias = "Room")]
    pub room: Option<String>,
    #[serde(alias = "Weeks")]
    pub weeks: Option<String>,
    // el cupo viene a veces como número y a veces como texto ("45")
    #[serde(rename = "Sỉ số", alias = "Quantity")]
    pub capacity: Option<serde_json::Value>,
}

fn capacity_of(value: &Option<serde_json::Value>) -> i32 {
    match value {
        Some(serde_json::Value::Number(n)) => n.as_i64().unwrap_or(0) as i32,
        Some(serde_json::Value::String(s)) => s.trim().parse::<i32>().unwrap_or(0),
        _ => 0,
    }
}

/// Transforma un registro crudo en una oferta, aplicando los mismos valores
/// por defecto que el importador original. Los registros sin nombre usable
/// se descartan.
pub fn offering_from_raw(raw: RawCourse) -> Option<Offering> {
    let name = raw.name.map(|n| n.trim().to_string()).unwrap_or_default();
    if name.is_empty() {
        return None;
    }
    let capacity = capacity_of(&raw.capacity);
    Some(Offering {
        id: raw.id.unwrap_or(0),
        name,
        lecturer: raw
            .lecturer
            .unwrap_or_else(|| "Chưa có thông tin".to_string()),
        raw_time: raw.time.unwrap_or_default(),
        room: raw.room.unwrap_or_else(|| "V.A101".to_string()),
        weeks: raw.weeks.unwrap_or_else(|| "1->18".to_string()),
        capacity,
    })
}

/// Parsea el contenido del fichero de catálogo (un array JSON de registros
/// crudos) a la lista de ofertas.
pub fn parse_catalog(contents: &str) -> Result<Vec<Offering>, String> {
    let raw: Vec<RawCourse> = serde_json::from_str(contents)
        .map_err(|e| format!("invalid catalog JSON: {}", e))?;
    Ok(raw.into_iter().filter_map(offering_from_raw).collect())
}

/// Ruta del fichero de catálogo: `CATALOG_PATH` si está definida, si no la
/// ruta por defecto `data/data.json`.
pub fn resolve_catalog_path() -> PathBuf {
    env::var("CATALOG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH))
}

pub fn load_catalog(path: &Path) -> Result<Vec<Offering>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("failed to read catalog '{}': {}", path.display(), e))?;
    parse_catalog(&contents)
}
