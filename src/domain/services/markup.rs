#[cfg(test)]
#[path = "markup_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;

/// Renders the lightweight markup the service uses in generated content:
/// `**bold**` and `*italic*` spans. Newlines pass through untouched.
pub fn render_inline(text: &str) -> String {
    let bolded = apply_marker(text, "**", &|span| return span.bold().to_string());
    return apply_marker(&bolded, "*", &|span| return span.italic().to_string());
}

/// Replaces paired markers with styled spans. Unpaired or empty markers are
/// left as literal text.
fn apply_marker(text: &str, marker: &str, style: &dyn Fn(&str) -> String) -> String {
    let mut out = String::new();
    let mut remainder = text;

    while let Some(start) = remainder.find(marker) {
        let after = &remainder[start + marker.len()..];
        match after.find(marker) {
            Some(0) => {
                out.push_str(&remainder[..start + marker.len()]);
                remainder = after;
            }
            Some(len) => {
                out.push_str(&remainder[..start]);
                out.push_str(&style(&after[..len]));
                remainder = &after[len + marker.len()..];
            }
            None => break,
        }
    }

    out.push_str(remainder);
    return out;
}

/// Relative rendering of the ISO timestamps the service emits, matching
/// what a person expects in a sidebar: clock time today, "Yesterday", a
/// day count for the past week, a plain date beyond that.
pub fn format_timestamp(timestamp: &str) -> String {
    // The service emits naive ISO timestamps; client-side ones carry an
    // offset. Accept both, fall back to the raw string.
    let parsed = match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.naive_local(),
        Err(_) => match timestamp.parse::<NaiveDateTime>() {
            Ok(parsed) => parsed,
            Err(_) => return timestamp.to_string(),
        },
    };

    let days = (Local::now().naive_local().date() - parsed.date()).num_days();
    if days <= 0 {
        return parsed.format("%H:%M").to_string();
    }
    if days == 1 {
        return "Yesterday".to_string();
    }
    if days < 7 {
        return format!("{days} days ago");
    }

    return parsed.format("%Y-%m-%d").to_string();
}
