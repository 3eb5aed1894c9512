// Generador de candidatos: filtra el catálogo según las preferencias del
// estudiante, lo reordena de forma determinista según la semilla y selecciona
// en greedy un subconjunto sin choques de horario.

use std::collections::HashSet;

use crate::algorithm::campus::campus_of_room;
use crate::algorithm::timeslot::parse_time;
use crate::models::{
    Band, Campus, CampusChoice, Day, Offering, PreferenceSet, ScheduleVariant, SelectedCourse,
};

/// Créditos asignados a cada curso; el catálogo origen no trae créditos
/// reales por oferta.
pub const FIXED_CREDITS: i32 = 3;
/// Máximo de cursos por variante.
pub const MAX_COURSES: usize = 5;
/// Tope de candidatos a recorrer tras el reordenado; acota el coste por
/// llamada sea cual sea el tamaño del catálogo.
pub const SCAN_BOUND: usize = 50;

/// Finalizador estilo splitmix64: dispersa (id, semilla) en una clave de
/// ordenación de 64 bits.
fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^= x >> 31;
    x
}

fn shuffle_key(id: i64, seed: u64) -> u64 {
    mix64((id as u64).wrapping_add(seed.wrapping_mul(0x9e3779b97f4a7c15)))
}

/// True si la oferta pasa los filtros de preferencia (campus y franjas a
/// evitar).
fn passes_preferences(offering: &Offering, prefs: &PreferenceSet) -> bool {
    match prefs.campus {
        CampusChoice::Any => {}
        CampusChoice::A => {
            if campus_of_room(&offering.room) != Campus::A {
                return false;
            }
        }
        CampusChoice::B => {
            if campus_of_room(&offering.room) != Campus::B {
                return false;
            }
        }
    }

    let slot = parse_time(&offering.raw_time);
    match slot.band {
        Band::Morning if prefs.avoid_morning => false,
        Band::Afternoon if prefs.avoid_afternoon => false,
        Band::Evening if prefs.avoid_evening => false,
        _ => true,
    }
}

/// Genera una variante de horario para una semilla dada.
///
/// Pasos, en orden:
/// 1. elegibilidad: ofertas sin nombre o sin horario nunca son candidatas;
/// 2. preferencias (solo si `prefs` viene informado);
/// 3. reordenado determinista por semilla + truncado a `SCAN_BOUND`;
/// 4. selección greedy sobre claves de ocupación `(día, franja)`;
/// 5. acumulación de créditos a razón de `FIXED_CREDITS` por curso.
///
/// Función pura de sus entradas más la semilla: misma entrada, misma salida.
/// La variante puede volver vacía si nada sobrevive a los filtros.
pub fn generate(
    offerings: &[Offering],
    prefs: Option<&PreferenceSet>,
    seed: u64,
) -> ScheduleVariant {
    let mut candidates: Vec<&Offering> = offerings
        .iter()
        .filter(|o| !o.name.trim().is_empty() && !o.raw_time.trim().is_empty())
        .collect();

    if let Some(p) = prefs {
        candidates.retain(|o| passes_preferences(o, p));
    }

    // orden estable: a igualdad de clave se conserva el orden del catálogo,
    // así la salida es reproducible también con ids repetidos
    candidates.sort_by_key(|o| shuffle_key(o.id, seed));
    candidates.truncate(SCAN_BOUND);

    let credit_ceiling = prefs.map(|p| p.max_credits).unwrap_or(0);
    let mut occupied: HashSet<(Day, Band)> = HashSet::new();
    let mut courses: Vec<SelectedCourse> = Vec::new();
    let mut total_credits = 0;

    for offering in candidates {
        if courses.len() >= MAX_COURSES {
            break;
        }
        if credit_ceiling > 0 && total_credits + FIXED_CREDITS > credit_ceiling {
            break;
        }
        let slot = parse_time(&offering.raw_time);
        let key = (slot.day, slot.band);
        if occupied.contains(&key) {
            continue;
        }
        occupied.insert(key);
        courses.push(SelectedCourse {
            id: offering.id,
            code: format!("COURSE{}", offering.id),
            name: offering.name.clone(),
            lecturer: offering.lecturer.clone(),
            room: offering.room.clone(),
            campus: campus_of_room(&offering.room),
            slot,
        });
        total_credits += FIXED_CREDITS;
    }

    ScheduleVariant {
        courses,
        total_credits,
    }
}
