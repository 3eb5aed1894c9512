// Clasificación de salas por prefijo del código → campus.

use crate::models::Campus;

// Convención del catálogo: las salas "V.*" están en el campus A y las "K.*"
// en el campus B. Cualquier otro código cae al campus A.
const ROOM_PREFIXES: &[(&str, Campus)] = &[("V.", Campus::A), ("K.", Campus::B)];

/// Deduce el campus de una oferta a partir de su código de sala.
pub fn campus_of_room(room: &str) -> Campus {
    let code = room.trim();
    for (prefix, campus) in ROOM_PREFIXES {
        if code.starts_with(prefix) {
            return *campus;
        }
    }
    Campus::A
}
