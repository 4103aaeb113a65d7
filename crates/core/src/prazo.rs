//! Deadline arithmetic and date rendering
//!
//! The backend emits timestamps in whichever of ISO-8601 or
//! `YYYY-MM-DD HH:MM:SS` the row happened to be written with, so parsing
//! accepts both (plus bare dates).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days until `data_fim`, ceiling-rounded
///
/// A deadline later today counts as 1, not 0, until the instant passes;
/// a deadline that passed earlier today counts as 0 going on -1.
pub fn dias_restantes(data_fim: DateTime<Utc>, agora: DateTime<Utc>) -> i64 {
    let diff_ms = data_fim.signed_duration_since(agora).num_milliseconds();
    diff_ms.div_euclid(MS_PER_DAY) + i64::from(diff_ms.rem_euclid(MS_PER_DAY) != 0)
}

/// [`dias_restantes`] over a raw wire timestamp; `None` when unparseable
pub fn dias_restantes_para(data_fim: &str, agora: DateTime<Utc>) -> Option<i64> {
    parse_data(data_fim).map(|fim| dias_restantes(fim, agora))
}

/// Parse a wire timestamp into UTC
pub fn parse_data(valor: &str) -> Option<DateTime<Utc>> {
    let valor = valor.trim();
    if valor.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(valor) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(valor, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(valor, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(valor, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Render as `dd/mm/aaaa hh:mm:ss`; empty input stays empty, and an
/// unparseable value is passed through untouched
pub fn formatar_data(valor: &str) -> String {
    match parse_data(valor) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M:%S").to_string(),
        None => valor.trim().to_string(),
    }
}

/// Render as `dd/mm/aaaa`
pub fn formatar_data_simples(valor: &str) -> String {
    match parse_data(valor) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => valor.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn dias_restantes_ceils_partial_days() {
        let agora = utc(2025, 3, 10, 12, 0, 0);
        // 23.1 hours away is still "1 day remaining"
        let fim = agora + chrono::Duration::minutes(23 * 60 + 6);
        assert_eq!(dias_restantes(fim, agora), 1);
    }

    #[test]
    fn dias_restantes_exact_days_stay_exact() {
        let agora = utc(2025, 3, 10, 12, 0, 0);
        assert_eq!(dias_restantes(agora + chrono::Duration::days(1), agora), 1);
        assert_eq!(dias_restantes(agora + chrono::Duration::days(30), agora), 30);
    }

    #[test]
    fn dias_restantes_grows_by_one_per_added_day() {
        let agora = utc(2025, 3, 10, 12, 0, 0);
        let fim = utc(2025, 3, 15, 9, 30, 0);
        let base = dias_restantes(fim, agora);
        for extra in 1..5 {
            assert_eq!(
                dias_restantes(fim + chrono::Duration::days(extra), agora),
                base + extra
            );
        }
    }

    #[test]
    fn dias_restantes_is_idempotent_for_fixed_now() {
        let agora = utc(2025, 3, 10, 12, 0, 0);
        let fim = utc(2025, 4, 1, 0, 0, 0);
        let primeiro = dias_restantes(fim, agora);
        assert_eq!(dias_restantes(fim, agora), primeiro);
        assert_eq!(dias_restantes(fim, agora), primeiro);
    }

    #[test]
    fn dias_restantes_past_deadline_goes_negative() {
        let agora = utc(2025, 3, 10, 12, 0, 0);
        // passed earlier today: ceil of a small negative fraction is 0
        assert_eq!(dias_restantes(agora - chrono::Duration::hours(3), agora), 0);
        assert_eq!(
            dias_restantes(agora - chrono::Duration::hours(36), agora),
            -1
        );
    }

    #[test]
    fn parse_data_accepts_backend_formats() {
        assert!(parse_data("2025-03-10T12:00:00+00:00").is_some());
        assert!(parse_data("2025-03-10T12:00:00Z").is_some());
        assert!(parse_data("2025-03-10 12:00:00").is_some());
        assert!(parse_data("2025-03-10T12:00:00").is_some());
        assert!(parse_data("2025-03-10").is_some());
        assert!(parse_data("").is_none());
        assert!(parse_data("amanhã").is_none());
    }

    #[test]
    fn formata_datas_no_padrao_brasileiro() {
        assert_eq!(formatar_data("2025-03-10 08:05:00"), "10/03/2025 08:05:00");
        assert_eq!(formatar_data_simples("2025-03-10 08:05:00"), "10/03/2025");
        assert_eq!(formatar_data(""), "");
        assert_eq!(formatar_data_simples("sem data"), "sem data");
    }
}
