// Flujo completo catálogo crudo -> ofertas -> variantes, sin pasar por HTTP.

use lichhoc::algorithm::{FIXED_CREDITS, generate_variants};
use lichhoc::catalog::parse_catalog;
use lichhoc::models::{Band, PreferenceSet};

const RAW_CATALOG: &str = r#"[
    {"id": 1, "name": "Lập trình căn bản", "lecturer": "Nguyễn Văn A", "time": "Thứ 2 | Tiết 1->3", "room": "V.A101", "weeks": "1->18", "Sỉ số": "60"},
    {"id": 2, "name": "Cấu trúc dữ liệu và giải thuật", "lecturer": "Trần Thị B", "time": "Thứ 3 | Tiết 1->3", "room": "V.A203", "weeks": "1->18", "Sỉ số": "55"},
    {"id": 3, "name": "Cơ sở dữ liệu", "lecturer": "Lê Văn C", "time": "Thứ 2 | Tiết 6->8", "room": "K.B105", "weeks": "1->15", "Sỉ số": 45},
    {"id": 4, "name": "Toán cao cấp A1", "lecturer": "Phạm Thị D", "time": "Thứ 6 | Tiết 6->8", "room": "K.D102", "weeks": "1->18", "Sỉ số": "70"},
    {"id": 5, "name": "Tiếng Anh chuyên ngành", "time": "Thứ 7 | Tiết 1->3", "room": "K.E202"},
    {"id": 6, "name": "", "time": "Thứ 4 | Tiết 1->3", "room": "V.A301"},
    {"id": 7, "name": "Mạng máy tính", "time": "sin-horario"}
]"#;

#[test]
fn test_catalog_to_variants_flow() {
    let offerings = parse_catalog(RAW_CATALOG).expect("catálogo válido");
    // el registro 6 no tiene nombre; el 7 queda con horario por defecto
    assert_eq!(offerings.len(), 6);

    let variants = generate_variants(&offerings, None, 3);
    assert!(!variants.is_empty());
    for variant in &variants {
        assert_eq!(
            variant.total_credits,
            variant.courses.len() as i32 * FIXED_CREDITS
        );
        // sin choques bajo la clave (día, franja)
        let mut keys = std::collections::HashSet::new();
        for course in &variant.courses {
            assert!(keys.insert((course.slot.day, course.slot.band)));
        }
    }
}

#[test]
fn test_flow_with_preferences() {
    let offerings = parse_catalog(RAW_CATALOG).expect("catálogo válido");
    let prefs = PreferenceSet {
        avoid_morning: true,
        ..PreferenceSet::default()
    };
    let variants = generate_variants(&offerings, Some(&prefs), 3);
    for variant in &variants {
        for course in &variant.courses {
            assert_ne!(course.slot.band, Band::Morning);
        }
    }
}

#[test]
fn test_malformed_time_degrades_to_default_slot() {
    let offerings = parse_catalog(RAW_CATALOG).expect("catálogo válido");
    let mangled = offerings
        .iter()
        .find(|o| o.raw_time == "sin-horario")
        .expect("debe existir la oferta 7");
    let slot = lichhoc::algorithm::parse_time(&mangled.raw_time);
    assert_eq!(slot.start_period, 1);
    assert_eq!(slot.end_period, 1);
    assert_eq!(slot.band, Band::Morning);
}
