//! Display helpers shared by table cells and the dashboard.

use chrono::{DateTime, Utc};

const MONTH_KEYS: [&str; 12] = [
    "month_january",
    "month_february",
    "month_march",
    "month_april",
    "month_may",
    "month_june",
    "month_july",
    "month_august",
    "month_september",
    "month_october",
    "month_november",
    "month_december",
];

/// `1234567.5, "USD"` -> `1,234,567.50 USD`
pub fn currency(amount: f64, code: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{whole}.{:02} {code}", cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn percentage(part: f64, whole: f64) -> String {
    if whole == 0.0 {
        return "0%".to_string();
    }
    let pct = part / whole * 100.0;
    let rounded = (pct * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}%")
    } else {
        format!("{rounded:.1}%")
    }
}

pub fn duration_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

pub fn date(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Translation key for a 1-based month number.
pub fn month_name_key(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_KEYS.get(idx as usize))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_currency() {
        assert_eq!(currency(1234567.5, "USD"), "1,234,567.50 USD");
        assert_eq!(currency(0.0, "EGP"), "0.00 EGP");
        assert_eq!(currency(-12.5, "USD"), "-12.50 USD");
        assert_eq!(currency(999.999, "USD"), "1,000.00 USD");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1.0, 8.0), "12.5%");
        assert_eq!(percentage(1.0, 4.0), "25%");
        assert_eq!(percentage(3.0, 0.0), "0%");
    }

    #[test]
    fn test_duration() {
        assert_eq!(duration_minutes(45), "45m");
        assert_eq!(duration_minutes(120), "2h");
        assert_eq!(duration_minutes(90), "1h 30m");
    }

    #[test]
    fn test_date() {
        let value = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(date(&value), "2024-03-05 14:30");
    }

    #[test]
    fn test_month_name_key() {
        assert_eq!(month_name_key(1), Some("month_january"));
        assert_eq!(month_name_key(12), Some("month_december"));
        assert_eq!(month_name_key(0), None);
        assert_eq!(month_name_key(13), None);
    }
}
