// Módulo de alto nivel del motor de recomendación.
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
pub mod campus;
pub mod generator;
pub mod timeslot;
pub mod variants;

// Reexportar solo la API pública que se quiere exponer desde aquí
pub use campus::campus_of_room;
pub use generator::{FIXED_CREDITS, MAX_COURSES, SCAN_BOUND, generate};
pub use timeslot::{band_of, parse_time};
pub use variants::{DEFAULT_VARIANT_COUNT, generate_variants};
