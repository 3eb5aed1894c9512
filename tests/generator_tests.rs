use std::collections::HashSet;

use lichhoc::algorithm::{FIXED_CREDITS, MAX_COURSES, generate};
use lichhoc::models::{Band, Campus, CampusChoice, Offering, PreferenceSet};

fn make_offering(id: i64, name: &str, raw_time: &str, room: &str) -> Offering {
    Offering {
        id,
        name: name.to_string(),
        lecturer: "GV".to_string(),
        raw_time: raw_time.to_string(),
        room: room.to_string(),
        weeks: "1->18".to_string(),
        capacity: 40,
    }
}

/// Catálogo con una oferta por cada combinación (día, franja): 18 claves de
/// ocupación distintas, todas en salas del campus A.
fn full_week_catalog() -> Vec<Offering> {
    let days = ["Thứ 2", "Thứ 3", "Thứ 4", "Thứ 5", "Thứ 6", "Thứ 7"];
    let starts = [1, 6, 11];
    let mut out = Vec::new();
    let mut id = 1;
    for day in days {
        for start in starts {
            out.push(make_offering(
                id,
                &format!("Môn {}", id),
                &format!("{} | Tiết {}->{}", day, start, start + 2),
                "V.A101",
            ));
            id += 1;
        }
    }
    out
}

#[test]
fn test_determinism_for_fixed_inputs() {
    let offerings = full_week_catalog();
    let prefs = PreferenceSet::default();
    let a = generate(&offerings, Some(&prefs), 2);
    let b = generate(&offerings, Some(&prefs), 2);
    assert_eq!(a, b);
}

#[test]
fn test_no_self_conflict_in_any_variant() {
    let offerings = full_week_catalog();
    for seed in 0..10 {
        let variant = generate(&offerings, None, seed);
        let mut keys = HashSet::new();
        for course in &variant.courses {
            assert!(
                keys.insert((course.slot.day, course.slot.band)),
                "clave de ocupación repetida en la semilla {}",
                seed
            );
        }
    }
}

#[test]
fn test_course_count_and_credit_bound() {
    let offerings = full_week_catalog();
    for seed in 0..10 {
        let variant = generate(&offerings, None, seed);
        assert!(variant.courses.len() <= MAX_COURSES);
        assert_eq!(
            variant.total_credits,
            variant.courses.len() as i32 * FIXED_CREDITS
        );
    }
}

#[test]
fn test_incomplete_records_never_selected() {
    let offerings = vec![
        make_offering(1, "", "Thứ 2 | Tiết 1->3", "V.A101"),
        make_offering(2, "Mạng máy tính", "", "V.A101"),
        make_offering(3, "Cơ sở dữ liệu", "Thứ 3 | Tiết 1->3", "V.A101"),
    ];
    let variant = generate(&offerings, None, 0);
    assert_eq!(variant.courses.len(), 1);
    assert_eq!(variant.courses[0].id, 3);
}

#[test]
fn test_avoid_morning_respected() {
    let offerings = full_week_catalog();
    let prefs = PreferenceSet {
        avoid_morning: true,
        ..PreferenceSet::default()
    };
    for seed in 0..5 {
        let variant = generate(&offerings, Some(&prefs), seed);
        assert!(!variant.courses.is_empty());
        for course in &variant.courses {
            assert_ne!(course.slot.band, Band::Morning);
        }
    }
}

#[test]
fn test_avoid_all_bands_yields_empty_variant() {
    let offerings = full_week_catalog();
    let prefs = PreferenceSet {
        avoid_morning: true,
        avoid_afternoon: true,
        avoid_evening: true,
        ..PreferenceSet::default()
    };
    let variant = generate(&offerings, Some(&prefs), 0);
    assert!(variant.courses.is_empty());
    assert_eq!(variant.total_credits, 0);
}

#[test]
fn test_campus_preference_drops_other_campus() {
    let mut offerings = full_week_catalog(); // todas en V.* (campus A)
    offerings.push(make_offering(
        100,
        "Tiếng Anh chuyên ngành",
        "Thứ 7 | Tiết 1->3",
        "K.E202",
    ));
    let prefs = PreferenceSet {
        campus: CampusChoice::B,
        ..PreferenceSet::default()
    };
    let variant = generate(&offerings, Some(&prefs), 0);
    // solo la sala K.* sobrevive, aunque el resto no tuviera choques
    assert_eq!(variant.courses.len(), 1);
    assert_eq!(variant.courses[0].id, 100);
    assert_eq!(variant.courses[0].campus, Campus::B);
}

#[test]
fn test_credit_ceiling_limits_selection() {
    let offerings = full_week_catalog();
    let prefs = PreferenceSet {
        max_credits: 6,
        ..PreferenceSet::default()
    };
    for seed in 0..5 {
        let variant = generate(&offerings, Some(&prefs), seed);
        assert!(variant.total_credits <= 6);
        assert!(variant.courses.len() <= 2);
    }
}

#[test]
fn test_without_preferences_no_filtering() {
    // una única oferta de mañana: sin preferencias debe poder seleccionarse
    let offerings = vec![make_offering(1, "Toán cao cấp A1", "Thứ 2 | Tiết 1->3", "K.D101")];
    let variant = generate(&offerings, None, 0);
    assert_eq!(variant.courses.len(), 1);
    assert_eq!(variant.total_credits, FIXED_CREDITS);
}
