use serde::{Deserialize, Serialize};

use crate::models::PreferenceSet;

/// Parámetros de entrada para POST /recommend
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "studentId": "SV001",
///   "preferences": {
///     "maxCredits": 18,
///     "campus": "all",
///     "avoidMorning": false,
///     "avoidAfternoon": false,
///     "avoidEvening": false
///   }
/// }
/// ```
///
/// # Campos:
/// - `studentId`: identificador del estudiante (requerido, no vacío)
/// - `preferences`: preferencias blandas (opcional; sin ellas no se filtra)
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(rename = "studentId")]
    pub student_id: Option<String>,
    #[serde(default)]
    pub preferences: Option<PreferenceSet>,
}

/// Parámetros de entrada para POST /preferences. Aquí `preferences` sí es
/// obligatorio: guardar "nada" no tiene sentido.
#[derive(Debug, Serialize, Deserialize)]
pub struct PreferencesRequest {
    #[serde(rename = "studentId")]
    pub student_id: Option<String>,
    #[serde(default)]
    pub preferences: Option<PreferenceSet>,
}

pub fn parse_recommend_input(json_str: &str) -> Result<RecommendRequest, String> {
    let req: RecommendRequest = serde_json::from_str(json_str)
        .map_err(|e| format!("invalid JSON body: {}", e))?;
    validate_student_id(&req.student_id)?;
    Ok(req)
}

pub fn parse_preferences_input(json_str: &str) -> Result<PreferencesRequest, String> {
    let req: PreferencesRequest = serde_json::from_str(json_str)
        .map_err(|e| format!("invalid JSON body: {}", e))?;
    validate_student_id(&req.student_id)?;
    if req.preferences.is_none() {
        return Err("preferences is required".to_string());
    }
    Ok(req)
}

/// Única condición que sube como error al llamador (clase InvalidInput):
/// entrada estructuralmente inválida o identificación ausente.
fn validate_student_id(student_id: &Option<String>) -> Result<(), String> {
    match student_id {
        Some(id) if !id.trim().is_empty() => Ok(()),
        _ => Err("studentId is required".to_string()),
    }
}
