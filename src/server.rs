use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;

use crate::algorithm::{DEFAULT_VARIANT_COUNT, FIXED_CREDITS, generate_variants, parse_time};
use crate::api_json::{RecommendRequest, parse_preferences_input, parse_recommend_input};
use crate::catalog::{load_catalog, resolve_catalog_path};
use crate::models::{Offering, PreferenceSet, ScheduleVariant};

#[derive(Serialize)]
struct SlotDto {
    day: String,
    time: String,
    room: String,
    campus: String,
}

#[derive(Serialize)]
struct RecommendedCourseDto {
    #[serde(rename = "courseCode")]
    course_code: String,
    #[serde(rename = "courseName")]
    course_name: String,
    lecturer: String,
    slot: SlotDto,
}

#[derive(Serialize)]
struct VariantDto {
    #[serde(rename = "totalCredits")]
    total_credits: i32,
    courses: Vec<RecommendedCourseDto>,
}

/// Listado de cursos para el frontend (forma del endpoint original).
#[derive(Serialize)]
struct CourseListingDto {
    id: i64,
    code: String,
    name: String,
    semester: String,
    credits: i32,
    lecturer: String,
    slots: Vec<CourseSlotDto>,
}

#[derive(Serialize)]
struct CourseSlotDto {
    day: String,
    time: String,
    room: String,
    campus: String,
    weeks: String,
    capacity: i32,
}

fn variant_to_dto(variant: &ScheduleVariant) -> VariantDto {
    VariantDto {
        total_credits: variant.total_credits,
        courses: variant
            .courses
            .iter()
            .map(|c| RecommendedCourseDto {
                course_code: c.code.clone(),
                course_name: c.name.clone(),
                lecturer: c.lecturer.clone(),
                slot: SlotDto {
                    day: c.slot.day.label().to_string(),
                    time: c.slot.band.label().to_string(),
                    room: c.room.clone(),
                    campus: c.campus.label().to_string(),
                },
            })
            .collect(),
    }
}

fn offering_to_listing(offering: &Offering, semester: &str) -> CourseListingDto {
    let slot = parse_time(&offering.raw_time);
    CourseListingDto {
        id: offering.id,
        code: format!("COURSE{}", offering.id),
        name: offering.name.clone(),
        semester: semester.to_string(),
        credits: FIXED_CREDITS,
        lecturer: offering.lecturer.clone(),
        slots: vec![CourseSlotDto {
            day: slot.day.label().to_string(),
            time: slot.band.label().to_string(),
            room: offering.room.clone(),
            campus: crate::algorithm::campus_of_room(&offering.room)
                .label()
                .to_string(),
            weeks: offering.weeks.clone(),
            capacity: offering.capacity,
        }],
    }
}

/// POST /recommend
/// Genera las variantes de horario para un estudiante según sus preferencias.
async fn recommend_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let body_value = body.into_inner();
    let json_str = match serde_json::to_string(&body_value) {
        Ok(s) => s,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(json!({"error": format!("invalid JSON body: {}", e)}));
        }
    };

    let req: RecommendRequest = match parse_recommend_input(&json_str) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e})),
    };
    // validado en parse_recommend_input
    let student_id = req.student_id.unwrap_or_default();

    let offerings = match load_catalog(&resolve_catalog_path()) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("recommend: {}", e);
            return HttpResponse::InternalServerError()
                .json(json!({"error": "Failed to load courses", "message": e}));
        }
    };

    let variants = generate_variants(&offerings, req.preferences.as_ref(), DEFAULT_VARIANT_COUNT);
    let recommendations: Vec<VariantDto> = variants.iter().map(variant_to_dto).collect();

    HttpResponse::Ok().json(json!({
        "message": "Schedule recommendations generated successfully",
        "studentId": student_id,
        "recommendations": recommendations,
        "generatedAt": Utc::now().to_rfc3339(),
    }))
}

/// GET /courses?semester=2025A
/// Devuelve el catálogo transformado a la forma de presentación.
async fn courses_handler(query: web::Query<HashMap<String, String>>) -> impl Responder {
    let qm = query.into_inner();
    let semester = qm
        .get("semester")
        .and_then(|s| {
            if s.trim().is_empty() {
                None
            } else {
                Some(s.clone())
            }
        })
        .unwrap_or_else(|| "2025A".to_string());

    match load_catalog(&resolve_catalog_path()) {
        Ok(offerings) => {
            let courses: Vec<CourseListingDto> = offerings
                .iter()
                .map(|o| offering_to_listing(o, &semester))
                .collect();
            println!("courses: {} ofertas cargadas del catálogo", courses.len());
            HttpResponse::Ok().json(courses)
        }
        Err(e) => {
            eprintln!("courses: {}", e);
            HttpResponse::InternalServerError()
                .json(json!({"error": "Failed to load courses", "message": e}))
        }
    }
}

/// POST /preferences
/// Valida y confirma las preferencias del estudiante. La persistencia real
/// vive en un colaborador externo; aquí solo se valida y se devuelve eco.
async fn preferences_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let body_value = body.into_inner();
    let json_str = match serde_json::to_string(&body_value) {
        Ok(s) => s,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(json!({"error": format!("invalid JSON body: {}", e)}));
        }
    };

    let req = match parse_preferences_input(&json_str) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e})),
    };

    HttpResponse::Ok().json(json!({
        "message": "Preferences saved successfully",
        "studentId": req.student_id.unwrap_or_default(),
        "prefs": req.preferences,
        "savedAt": Utc::now().to_rfc3339(),
    }))
}

async fn help_handler() -> impl Responder {
    // Ejemplo de body esperado por POST /recommend
    let example = RecommendRequest {
        student_id: Some("SV001".to_string()),
        preferences: Some(PreferenceSet::default()),
    };

    let help = json!({
        "description": "API de recomendación de horarios. POST /recommend genera variantes de horario sin choques a partir del catálogo y las preferencias del estudiante. GET /courses lista el catálogo transformado. POST /preferences valida y confirma preferencias.",
        "post_example": example,
        "campus_values": ["all", "A", "B"],
        "note": "Las preferencias son opcionales: sin ellas no se aplica ningún filtro de campus ni de franja horaria.",
    });

    HttpResponse::Ok().json(help)
}

pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    HttpServer::new(|| {
        App::new()
            .wrap(Cors::permissive())
            .route("/recommend", web::post().to(recommend_handler))
            .route("/courses", web::get().to(courses_handler))
            .route("/preferences", web::post().to(preferences_handler))
            .route("/help", web::get().to(help_handler))
    })
    .bind(bind_addr)?
    .run()
    .await
}
