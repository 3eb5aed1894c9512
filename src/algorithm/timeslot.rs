// Parseo de franjas horarias del catálogo a descriptores estructurados.
//
// El texto viene como "<día> | Tiết <inicio>[-><fin>]", p.ej.
// "Thứ 4 | Tiết 1->3" o "Thứ 6 | Tiết 7". Entradas malformadas degradan a
// una franja por defecto (lunes, tiết 1); el parser nunca falla y nunca
// excluye una oferta del catálogo.

use crate::models::{Band, Day, TimeDescriptor};

const SEPARATOR: &str = " | ";
const PERIOD_TOKEN: &str = "Tiết";

/// Franja del día en función del tiết de inicio. La partición 1-5 / 6-10 /
/// resto es la convención del catálogo y la usan los filtros de preferencia;
/// no cambiarla.
pub fn band_of(start_period: i32) -> Band {
    if (1..=5).contains(&start_period) {
        Band::Morning
    } else if (6..=10).contains(&start_period) {
        Band::Afternoon
    } else {
        Band::Evening
    }
}

/// Normaliza un token de día. Acepta la forma numérica ("Thứ 2".."Thứ 7"),
/// la forma escrita ("Thứ Hai".."Thứ Bảy") y abreviaturas inglesas.
fn parse_day(token: &str) -> Option<Day> {
    match token.trim() {
        "Thứ 2" | "Thứ Hai" | "Mon" => Some(Day::Mon),
        "Thứ 3" | "Thứ Ba" | "Tue" => Some(Day::Tue),
        "Thứ 4" | "Thứ Tư" | "Wed" => Some(Day::Wed),
        "Thứ 5" | "Thứ Năm" | "Thu" => Some(Day::Thu),
        "Thứ 6" | "Thứ Sáu" | "Fri" => Some(Day::Fri),
        "Thứ 7" | "Thứ Bảy" | "Sat" => Some(Day::Sat),
        _ => None,
    }
}

/// Parsea "Tiết 6->8" o "Tiết 3" a (inicio, fin). Con un solo entero,
/// inicio == fin.
fn parse_periods(token: &str) -> Option<(i32, i32)> {
    let rest = token.trim().strip_prefix(PERIOD_TOKEN)?.trim();
    let (start_tok, end_tok) = match rest.split_once("->") {
        Some((a, b)) => (a, Some(b)),
        None => (rest, None),
    };
    let start = start_tok.trim().parse::<i32>().ok()?;
    let end = match end_tok {
        Some(e) => e.trim().parse::<i32>().unwrap_or(start),
        None => start,
    };
    // mantener el invariante inicio <= fin aunque el texto venga invertido
    if end < start {
        Some((start, start))
    } else {
        Some((start, end))
    }
}

/// Convierte el texto de horario crudo de una oferta en un `TimeDescriptor`.
/// Si falta el separador " | " o cualquiera de los dos lados no se entiende,
/// ese lado cae al valor por defecto (lunes / tiết 1). Decisión de política:
/// degradar en silencio, nunca devolver error.
pub fn parse_time(raw: &str) -> TimeDescriptor {
    let mut day = Day::Mon;
    let mut periods = (1, 1);

    if let Some((day_tok, time_tok)) = raw.split_once(SEPARATOR) {
        if let Some(d) = parse_day(day_tok) {
            day = d;
        }
        if let Some(p) = parse_periods(time_tok) {
            periods = p;
        }
    }

    TimeDescriptor {
        day,
        start_period: periods.0,
        end_period: periods.1,
        band: band_of(periods.0),
    }
}
