//! Utility functions for the trip server

use chrono::NaiveDate;

/// Formats a date as an ISO 8601 calendar date
///
/// Example output: "2025-06-14"
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Normalize a configured route prefix
///
/// Empty and "/" mean no prefix. Anything else gets exactly one leading
/// slash and no trailing slash, so "api/" becomes "/api".
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Location of a client resource under the given base path
pub fn client_location(base_path: &str, client_id: i32) -> String {
    format!("{}/clients/{}", normalize_base_path(base_path), client_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(format_iso_date(date), "2025-03-09");
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("api"), "/api");
        assert_eq!(normalize_base_path("/api/"), "/api");
        assert_eq!(normalize_base_path("/travel/v1"), "/travel/v1");
    }

    #[test]
    fn test_client_location() {
        assert_eq!(client_location("", 5), "/clients/5");
        assert_eq!(client_location("/api", 12), "/api/clients/12");
    }
}
