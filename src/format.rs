//! Display Formatting

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::i18n::Language;

/// Parse the server's date field. Accepts RFC 3339, naive timestamps and plain dates.
pub fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

pub fn format_date(date: NaiveDate, lang: Language) -> String {
    match lang {
        Language::Pt => date.format("%d/%m/%Y").to_string(),
        Language::En => date.format("%m/%d/%Y").to_string(),
    }
}

/// Table cell text for an entry's date
pub fn entry_date_label(raw: Option<&str>, lang: Language, t: impl Fn(&str) -> String) -> String {
    match raw.filter(|r| !r.trim().is_empty()) {
        None => t("dashboard.noDate"),
        Some(raw) => match parse_entry_date(raw) {
            Some(date) => format_date(date, lang),
            None => t("dashboard.invalidDate"),
        },
    }
}

/// Today's date as `YYYY-MM-DD`, the form's default
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::translate;

    fn t(key: &str) -> String {
        translate(Language::En, key, &[])
    }

    #[test]
    fn test_parse_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5);
        assert_eq!(parse_entry_date("2024-03-05"), expected);
        assert_eq!(parse_entry_date("2024-03-05T14:30:00"), expected);
        assert_eq!(parse_entry_date("2024-03-05T14:30:00.123456"), expected);
        assert_eq!(parse_entry_date("2024-03-05 14:30:00"), expected);
        assert_eq!(parse_entry_date("2024-03-05T14:30:00+00:00"), expected);
        assert_eq!(parse_entry_date("yesterday"), None);
    }

    #[test]
    fn test_label_per_language() {
        assert_eq!(entry_date_label(Some("2024-03-05"), Language::Pt, t), "05/03/2024");
        assert_eq!(entry_date_label(Some("2024-03-05"), Language::En, t), "03/05/2024");
    }

    #[test]
    fn test_label_missing_or_invalid() {
        assert_eq!(entry_date_label(None, Language::En, t), "No date");
        assert_eq!(entry_date_label(Some(""), Language::En, t), "No date");
        assert_eq!(entry_date_label(Some("not a date"), Language::En, t), "Invalid date");
    }
}
