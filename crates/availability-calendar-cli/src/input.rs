//! Reading availability lists from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read raw date strings from `path`, or stdin when `path` is `-`.
pub fn read_dates(path: &Path) -> Result<Vec<String>> {
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read dates from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dates from {}", path.display()))?
    };
    parse_date_list(&contents)
}

/// Split a date list: a JSON array of strings, or whitespace/comma separated.
pub fn parse_date_list(contents: &str) -> Result<Vec<String>> {
    let trimmed = contents.trim();
    if trimmed.starts_with('[') {
        return serde_json::from_str::<Vec<String>>(trimmed)
            .context("dates file is not a JSON array of strings");
    }
    Ok(trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_array() {
        let dates = parse_date_list(r#" ["2024-06-01", "2024-06-03"] "#).unwrap();
        assert_eq!(dates, vec!["2024-06-01", "2024-06-03"]);
    }

    #[test]
    fn test_parse_plain_list() {
        let dates = parse_date_list("2024-06-01\n2024-06-03, 2024-06-05\n\n").unwrap();
        assert_eq!(dates, vec!["2024-06-01", "2024-06-03", "2024-06-05"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_date_list("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_with_non_strings_fails() {
        assert!(parse_date_list("[1, 2]").is_err());
    }
}
