use std::fmt::Write;

/// Separator between the activity and time-of-day labels in a playlist title.
pub const TITLE_SEPARATOR: &str = "•";

/// Renders milliseconds as `minutes:SS`. Minutes are never rolled into hours.
pub fn format_duration(duration_ms: u64) -> String {
    let seconds = duration_ms / 1000;
    let minutes = seconds / 60;
    let remaining = seconds % 60;
    format!("{}:{:02}", minutes, remaining)
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn playlist_title(mood: &str, activity: &str, time_of_day: &str) -> String {
    format!(
        "{} {} {} {}",
        capitalize(mood),
        capitalize(activity),
        TITLE_SEPARATOR,
        capitalize(time_of_day)
    )
}

/// Makes backend-supplied text safe to print into the terminal: control
/// characters (escape sequences included) are shown in their escaped form.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_control() {
            let _ = write!(escaped, "{}", c.escape_unicode());
        } else {
            escaped.push(c);
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_durations_as_minutes_and_padded_seconds() {
        assert_eq!(format_duration(125_000), "2:05");
        assert_eq!(format_duration(59_999), "0:59");
        assert_eq!(format_duration(600_000), "10:00");
        assert_eq!(format_duration(0), "0:00");
    }

    #[test]
    fn long_durations_stay_in_minutes() {
        assert_eq!(format_duration(3_725_000), "62:05");
    }

    #[test]
    fn capitalizes_first_character_only() {
        assert_eq!(capitalize("happy"), "Happy");
        assert_eq!(capitalize("lo-fi beats"), "Lo-fi beats");
        assert_eq!(capitalize("Calm"), "Calm");
        assert_eq!(capitalize("éte"), "Éte");
    }

    #[test]
    fn capitalize_keeps_empty_input_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn title_joins_labels_with_separator() {
        assert_eq!(
            playlist_title("happy", "working", "morning"),
            "Happy Working • Morning"
        );
    }

    #[test]
    fn escapes_terminal_control_sequences() {
        assert_eq!(escape_text("plain <b>text</b>"), "plain <b>text</b>");
        assert_eq!(escape_text("a\u{1b}[31mb"), "a\\u{1b}[31mb");
        assert_eq!(escape_text("line\nbreak"), "line\\u{a}break");
    }
}
