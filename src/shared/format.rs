use rust_decimal::{Decimal, RoundingStrategy};

/// Operating hours as returned by the API: weekday label to free-form time
/// range, in insertion order.
pub type OperatingHours = serde_json::Map<String, serde_json::Value>;

/// Format a numeric amount as US-dollar currency text, e.g. `1234.5` ->
/// `"$1,234.50"`.
///
/// Non-finite amounts format as zero.
pub fn format_currency(amount: f64) -> String {
    let value = Decimal::from_f64_retain(amount).unwrap_or_default();
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let fixed = format!("{:.2}", rounded.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if negative { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(units), cents)
}

/// Render an operating-hours mapping as an HTML fragment, one list item per
/// day, in insertion order. Absent hours render as an empty string.
///
/// Values are not escaped; callers must ensure they are trusted.
pub fn format_operating_hours(hours: Option<&OperatingHours>) -> String {
    let Some(hours) = hours else {
        return String::new();
    };

    let mut html =
        String::from("<div class=\"mt-3\"><h6>Operating Hours</h6><ul class=\"list-unstyled\">");
    for (day, time) in hours {
        let time = match time {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        html.push_str(&format!("<li><strong>{}:</strong> {}</li>", day, time));
    }
    html.push_str("</ul></div>");
    html
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(12.0), "$12.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-9.5), "-$9.50");
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "$0.00");
    }

    #[test]
    fn test_operating_hours_absent() {
        assert_eq!(format_operating_hours(None), "");
    }

    #[test]
    fn test_operating_hours_list_items() {
        let mut hours = OperatingHours::new();
        hours.insert("Mon".to_string(), serde_json::json!("9-5"));
        let html = format_operating_hours(Some(&hours));
        assert!(html.contains("<li><strong>Mon:</strong> 9-5</li>"));
        assert!(html.contains("Operating Hours"));
    }

    #[test]
    fn test_operating_hours_insertion_order() {
        let mut hours = OperatingHours::new();
        hours.insert("Sat".to_string(), serde_json::json!("10-2"));
        hours.insert("Mon".to_string(), serde_json::json!("9-5"));
        let html = format_operating_hours(Some(&hours));
        let sat = html.find("Sat").unwrap();
        let mon = html.find("Mon").unwrap();
        assert!(sat < mon);
    }
}
