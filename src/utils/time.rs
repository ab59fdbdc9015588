// ============================================================================
// TIME - Formato de reloj/fechas (hora local del navegador vía chrono)
// ============================================================================

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Fecha de hoy en calendario local, `YYYY-MM-DD`
pub fn today_iso() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Milisegundos desde epoch (reloj de pared)
pub fn now_ms() -> f64 {
    Utc::now().timestamp_millis() as f64
}

/// Reloj del header: `hh:mm:ss AM`
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%I:%M:%S %p").to_string()
}

/// Validar la fecha del selector de logs
pub fn parse_log_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Hora corta de un timestamp ISO del backend (`hh:mm AM`).
/// Sin zona horaria se asume hora local; ilegible → se devuelve tal cual.
pub fn format_log_time(raw: Option<&str>) -> String {
    let raw = match raw.map(str::trim) {
        Some(r) if !r.is_empty() => r,
        _ => return "-".to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format("%I:%M %p").to_string();
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return naive.format("%I:%M %p").to_string();
        }
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_uses_twelve_hour_format() {
        let t = NaiveTime::from_hms_opt(13, 4, 5).unwrap();
        assert_eq!(format_clock(t), "01:04:05 PM");
        let t = NaiveTime::from_hms_opt(0, 0, 9).unwrap();
        assert_eq!(format_clock(t), "12:00:09 AM");
    }

    #[test]
    fn log_time_accepts_python_isoformat() {
        assert_eq!(format_log_time(Some("2024-05-01T09:05:30.123456")), "09:05 AM");
        assert_eq!(format_log_time(Some("2024-05-01T17:45:00")), "05:45 PM");
    }

    #[test]
    fn log_time_dash_and_passthrough() {
        assert_eq!(format_log_time(None), "-");
        assert_eq!(format_log_time(Some("  ")), "-");
        assert_eq!(format_log_time(Some("yesterday")), "yesterday");
    }

    #[test]
    fn log_date_validation() {
        assert!(parse_log_date("2024-05-01").is_some());
        assert!(parse_log_date("01/05/2024").is_none());
        assert_eq!(today_iso().len(), 10);
    }
}
