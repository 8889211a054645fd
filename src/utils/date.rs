use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Like [`parse_date`] but failing with `InvalidDate`.
pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn weekday_name(d: Weekday) -> &'static str {
    match d {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "enero",
        2 => "febrero",
        3 => "marzo",
        4 => "abril",
        5 => "mayo",
        6 => "junio",
        7 => "julio",
        8 => "agosto",
        9 => "septiembre",
        10 => "octubre",
        11 => "noviembre",
        12 => "diciembre",
        _ => "",
    }
}

/// "Lunes, 13 de octubre de 2025" (two-digit day, capitalised weekday).
pub fn long_date(d: NaiveDate) -> String {
    let weekday = weekday_name(d.weekday());
    let mut chars = weekday.chars();
    let weekday = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!(
        "{weekday}, {:02} de {} de {}",
        d.day(),
        month_name(d.month()),
        d.year()
    )
}

/// Inclusive number of calendar days between two dates (0 if reversed).
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> u32 {
    let diff = (end - start).num_days();
    if diff < 0 { 0 } else { diff as u32 + 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_is_spanish() {
        let d = NaiveDate::from_ymd_opt(2025, 10, 13).unwrap();
        assert_eq!(long_date(d), "Lunes, 13 de octubre de 2025");
        let d = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        assert_eq!(long_date(d), "Miércoles, 01 de octubre de 2025");
    }

    #[test]
    fn days_are_inclusive() {
        let a = NaiveDate::from_ymd_opt(2025, 9, 25).unwrap();
        let b = NaiveDate::from_ymd_opt(2025, 9, 29).unwrap();
        assert_eq!(days_inclusive(a, a), 1);
        assert_eq!(days_inclusive(a, b), 5);
        assert_eq!(days_inclusive(b, a), 0);
    }

    #[test]
    fn bad_dates_are_rejected() {
        assert!(parse_date("2025-13-01").is_none());
        assert!(matches!(require_date("13/10/2025"), Err(AppError::InvalidDate(_))));
    }
}
