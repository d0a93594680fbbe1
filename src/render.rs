use chrono::NaiveDate;

use crate::types::{weekday_name, WeekdayBucket};

/// Render one line per weekday: `Monday: Alice, Carol`
pub fn render_text(days: &[WeekdayBucket]) -> String {
    let mut output = String::new();
    for day in days {
        output.push_str(&format!(
            "{}: {}\n",
            weekday_name(day.weekday),
            day.names.join(", ")
        ));
    }
    output
}

/// Render weekday buckets as a JSON array
pub fn render_json(days: &[WeekdayBucket]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(days)
}

/// Render weekday buckets as Markdown
pub fn render_markdown(days: &[WeekdayBucket], today: NaiveDate) -> String {
    let mut output = format!("# Birthdays from {today}\n\n");

    for day in days {
        output.push_str(&format!("## {}\n\n", weekday_name(day.weekday)));
        for name in &day.names {
            output.push_str(&format!("- {name}\n"));
        }
        output.push('\n');
    }

    output
}

/// Render weekday buckets as HTML
pub fn render_html(days: &[WeekdayBucket], today: NaiveDate) -> String {
    let mut output = format!("<html><body><h1>Birthdays from {today}</h1>\n");

    for day in days {
        output.push_str(&format!("<h2>{}</h2>\n<ul>\n", weekday_name(day.weekday)));
        for name in &day.names {
            output.push_str(&format!("<li>{}</li>\n", html_escape(name)));
        }
        output.push_str("</ul>\n");
    }

    output.push_str("</body></html>");
    output
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn sample() -> Vec<WeekdayBucket> {
        vec![
            WeekdayBucket {
                weekday: Weekday::Mon,
                names: vec!["Alice".to_string(), "Carol".to_string()],
            },
            WeekdayBucket {
                weekday: Weekday::Fri,
                names: vec!["Bob".to_string()],
            },
        ]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("A & B"), "A &amp; B");
    }

    #[test]
    fn test_render_text() {
        assert_eq!(render_text(&sample()), "Monday: Alice, Carol\nFriday: Bob\n");
        assert_eq!(render_text(&[]), "");
    }

    #[test]
    fn test_render_json() {
        let output = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["weekday"], "Monday");
        assert_eq!(value[0]["names"][1], "Carol");
        assert_eq!(value[1]["weekday"], "Friday");
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_render_markdown_basic() {
        let output = render_markdown(&sample(), today());
        assert!(output.contains("# Birthdays from 2024-01-01"));
        assert!(output.contains("## Monday\n\n- Alice\n- Carol\n"));
        assert!(output.contains("## Friday"));
    }

    #[test]
    fn test_render_html_escapes() {
        let days = vec![WeekdayBucket {
            weekday: Weekday::Tue,
            names: vec!["Tom & <Jerry>".to_string()],
        }];
        let output = render_html(&days, today());
        assert!(output.contains("<h2>Tuesday</h2>"));
        assert!(output.contains("Tom &amp; &lt;Jerry&gt;"));
    }
}
