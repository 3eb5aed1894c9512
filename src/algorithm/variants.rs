// Orquestador de variantes: llama al generador con semillas consecutivas y
// empaqueta la lista final.

use crate::algorithm::generator::generate;
use crate::models::{Offering, PreferenceSet, ScheduleVariant};

/// Número de variantes pedido por defecto por el API.
pub const DEFAULT_VARIANT_COUNT: usize = 3;

/// Genera `count` variantes con semillas 0..count y descarta las vacías
/// (una variante sin cursos no aporta nada al llamador). Las supervivientes
/// se devuelven en orden de semilla; no se deduplican variantes que
/// coincidan bajo semillas distintas.
pub fn generate_variants(
    offerings: &[Offering],
    prefs: Option<&PreferenceSet>,
    count: usize,
) -> Vec<ScheduleVariant> {
    let mut out: Vec<ScheduleVariant> = Vec::new();
    for seed in 0..count as u64 {
        let variant = generate(offerings, prefs, seed);
        if variant.courses.is_empty() {
            continue;
        }
        out.push(variant);
    }
    out
}
