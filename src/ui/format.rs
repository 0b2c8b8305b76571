use chrono::{DateTime, NaiveDate};

pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$0.00".to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "$0.00".to_string();
    }
    if rounded < 0.0 {
        format!("-${:.2}", -rounded)
    } else {
        format!("${rounded:.2}")
    }
}

fn parse_quote_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }
    NaiveDate::parse_from_str(trimmed.get(..10)?, "%Y-%m-%d").ok()
}

/// `YYYY-MM-DD`, or the raw text when it is not a recognisable date.
pub fn format_quote_date(text: &str) -> String {
    parse_quote_date(text)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| text.to_string())
}

/// Value for an `<input type="date">`; empty when the date is unknown.
pub fn date_input_value(text: &str) -> String {
    parse_quote_date(text)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Converts a date input value back to the stored timestamp form.
pub fn quote_date_from_input(value: &str) -> String {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|date| format!("{}T00:00:00.000Z", date.format("%Y-%m-%d")))
        .unwrap_or_default()
}

/// Amount typed so far; `None` while the text is blank or incomplete ("-").
pub fn parse_amount_draft(value: &str) -> Option<f64> {
    value
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// Number inputs fall back to zero when cleared or unparseable.
pub fn parse_amount_input(value: &str) -> f64 {
    parse_amount_draft(value).unwrap_or(0.0)
}

pub fn committed_label(committed: bool) -> &'static str {
    if committed {
        "Yes"
    } else {
        "No"
    }
}
