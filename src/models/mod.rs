// Estructuras de datos principales del recomendador de horarios.

use serde::{Deserialize, Serialize};

/// Día de la semana lectiva (lunes a sábado). El catálogo usa los nombres
/// vietnamitas "Thứ 2".."Thứ 7"; `label` devuelve esa forma para presentación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Day {
    pub fn label(&self) -> &'static str {
        match self {
            Day::Mon => "Thứ 2",
            Day::Tue => "Thứ 3",
            Day::Wed => "Thứ 4",
            Day::Thu => "Thứ 5",
            Day::Fri => "Thứ 6",
            Day::Sat => "Thứ 7",
        }
    }
}

/// Franja del día derivada del tiết de inicio (1-5 mañana, 6-10 tarde,
/// resto noche).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    Morning,
    Afternoon,
    Evening,
}

impl Band {
    pub fn label(&self) -> &'static str {
        match self {
            Band::Morning => "Sáng (7h-11h)",
            Band::Afternoon => "Chiều (13h-17h)",
            Band::Evening => "Tối (18h-21h)",
        }
    }
}

/// Campus físico deducido del prefijo del código de sala.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Campus {
    A,
    B,
}

impl Campus {
    pub fn label(&self) -> &'static str {
        match self {
            Campus::A => "Cơ sở A",
            Campus::B => "Cơ sở B",
        }
    }
}

/// Preferencia de campus tal y como llega por el API: "all", "A" o "B".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampusChoice {
    #[serde(rename = "all", alias = "any")]
    Any,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
}

/// Una oferta del catálogo: franja semanal fija, sala y cupo.
/// `raw_time` viene sin parsear, p.ej. "Thứ 4 | Tiết 1->3".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offering {
    pub id: i64,
    pub name: String,
    pub lecturer: String,
    pub raw_time: String,
    pub room: String,
    pub weeks: String,
    pub capacity: i32,
}

/// Descriptor estructurado de la franja horaria de una oferta.
/// Invariante: `start_period <= end_period`; `band` es función de
/// `start_period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDescriptor {
    pub day: Day,
    pub start_period: i32,
    pub end_period: i32,
    pub band: Band,
}

/// Preferencias blandas del estudiante. Todos los campos son opcionales en
/// el wire; los valores por defecto replican el formulario de preferencias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceSet {
    pub max_credits: i32,
    pub campus: CampusChoice,
    pub avoid_morning: bool,
    pub avoid_afternoon: bool,
    pub avoid_evening: bool,
}

impl Default for PreferenceSet {
    fn default() -> Self {
        PreferenceSet {
            max_credits: 18,
            campus: CampusChoice::Any,
            avoid_morning: false,
            avoid_afternoon: false,
            avoid_evening: false,
        }
    }
}

/// Curso aceptado dentro de una variante: campos identificativos de la
/// oferta más su descriptor horario resuelto.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedCourse {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub lecturer: String,
    pub room: String,
    pub campus: Campus,
    pub slot: TimeDescriptor,
}

/// Una variante completa de horario semanal. Se construye por petición y
/// pertenece al llamador; el motor no retiene referencias.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleVariant {
    pub courses: Vec<SelectedCourse>,
    pub total_credits: i32,
}
