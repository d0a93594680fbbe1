use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{BirthdateError, InputError};
use crate::types::{Birthdate, Person};

/// Record line as printed by the older Python tooling:
/// {'name': 'Jane Doe', 'birthday': datetime.datetime(1990, 5, 3, 0, 0)}
static RECORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^\{\s*['"]name['"]\s*:\s*(?:'([^']*)'|"([^"]*)")\s*,"#,
        r#"\s*['"]birthday['"]\s*:\s*(?:datetime\.)*datetime\("#,
        r"\s*(\d{1,4})\s*,\s*(\d{1,2})\s*,\s*(\d{1,2})(?:\s*,\s*\d+)*\s*\)\s*\}$",
    ))
    .expect("Invalid RECORD_RE regex")
});

/// Load people from a file, or from stdin when no path is given
pub fn load_people(path: Option<&Path>) -> Result<Vec<Person>, InputError> {
    let content = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_people(&content)
}

/// Parse people from a JSON array, JSON lines, or record lines.
///
/// Lines of the latter two shapes may be mixed; blank lines are ignored.
pub fn parse_people(content: &str) -> Result<Vec<Person>, InputError> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(InputError::JsonArray);
    }

    let mut people = Vec::new();
    for (ix, line) in content.lines().enumerate() {
        let line_no = ix + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let person = match parse_record_line(line) {
            Some(parsed) => parsed.map_err(|source| InputError::Birthdate {
                line: line_no,
                source,
            })?,
            None => serde_json::from_str(line).map_err(|source| InputError::Json {
                line: line_no,
                source,
            })?,
        };
        people.push(person);
    }
    Ok(people)
}

/// `None` when the line is not a record line at all
fn parse_record_line(line: &str) -> Option<Result<Person, BirthdateError>> {
    let caps = RECORD_RE.captures(line)?;
    let name = caps.get(1).or_else(|| caps.get(2))?.as_str().to_string();

    let raw = format!("{}-{}-{}", &caps[3], &caps[4], &caps[5]);
    let parts = (
        caps[3].parse::<i32>(),
        caps[4].parse::<u32>(),
        caps[5].parse::<u32>(),
    );
    let (Ok(year), Ok(month), Ok(day)) = parts else {
        return Some(Err(BirthdateError::Format(raw)));
    };

    Some(
        Birthdate::new(year, month, day)
            .map(|birthday| Person::new(name, birthday))
            .ok_or(BirthdateError::OutOfRange(raw)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birthdate(year: i32, month: u32, day: u32) -> Birthdate {
        Birthdate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_json_array() {
        let content = r#"
            [
              {"name": "Alice", "birthday": "2023-12-30"},
              {"name": "Bob", "birthday": "2024-01-05T08:15:00"}
            ]"#;
        let people = parse_people(content).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "Alice");
        assert_eq!(people[1].birthday, birthdate(2024, 1, 5));
    }

    #[test]
    fn test_parse_json_lines() {
        let content = "{\"name\": \"Alice\", \"birthday\": \"2023-12-30\"}\n\n{\"name\": \"Bob\", \"birthday\": \"2024-01-05\"}\n";
        let people = parse_people(content).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[1].name, "Bob");
    }

    #[test]
    fn test_parse_record_lines() {
        let content = concat!(
            "{'name': 'Jane Doe', 'birthday': datetime.datetime(1990, 5, 3, 0, 0)}\n",
            "{'name': \"Mary O'Hara\", 'birthday': datetime(1996, 2, 29)}\n",
        );
        let people = parse_people(content).unwrap();
        assert_eq!(people[0], Person::new("Jane Doe", birthdate(1990, 5, 3)));
        assert_eq!(people[1], Person::new("Mary O'Hara", birthdate(1996, 2, 29)));
    }

    #[test]
    fn test_malformed_leap_day_is_loaded() {
        let content = "{'name': 'Broken', 'birthday': datetime.datetime(1997, 2, 29, 0, 0)}";
        let people = parse_people(content).unwrap();
        assert_eq!(people[0].birthday, birthdate(1997, 2, 29));
    }

    #[test]
    fn test_bad_record_reports_line() {
        let content = concat!(
            "{\"name\": \"Alice\", \"birthday\": \"2023-12-30\"}\n",
            "{'name': 'Bad', 'birthday': datetime.datetime(1990, 2, 30, 0, 0)}\n",
        );
        let err = parse_people(content).unwrap_err();
        assert!(matches!(
            err,
            InputError::Birthdate {
                line: 2,
                source: BirthdateError::OutOfRange(_)
            }
        ));
    }

    #[test]
    fn test_bad_json_reports_line() {
        let content = "\n{\"name\": \"Alice\", \"birthday\": \"30.12.2023\"}";
        let err = parse_people(content).unwrap_err();
        assert!(matches!(err, InputError::Json { line: 2, .. }));
        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_people("").unwrap().is_empty());
        assert!(parse_people("[]").unwrap().is_empty());
    }
}
