//! 日付ユーティリティ

use chrono::{DateTime, Local, NaiveDate};

const ISO_DATE: &str = "%Y-%m-%d";
const DISPLAY_DATE: &str = "%d/%m/%Y";

/// "2025-08-15" 形式を解析
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE)
}

/// 画面表示用（fr-FR: 15/08/2025）
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE).to_string()
}

/// ブラウザのローカル日付
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// シードデータの更新日時（ビルド時に埋め込み）
pub fn format_seed_modified_time() -> String {
    let timestamp: i64 = option_env!("SEED_DATA_MODIFIED")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    format_modified_timestamp(timestamp)
}

fn format_modified_timestamp(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0).filter(|_| timestamp > 0) {
        Some(dt) => format!("Données mises à jour le {} UTC", dt.format("%d/%m/%Y %H:%M")),
        None => "Données mises à jour: inconnu".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let date = parse_date("2025-08-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
        assert_eq!(format_date(date), "15/08/2025");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_date("15/08/2025").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_modified_timestamp() {
        assert_eq!(format_modified_timestamp(0), "Données mises à jour: inconnu");
        // 2025-01-01 00:00:00 UTC
        assert_eq!(
            format_modified_timestamp(1_735_689_600),
            "Données mises à jour le 01/01/2025 00:00 UTC"
        );
    }
}
