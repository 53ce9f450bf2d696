//! Current-time provider for defaulted dates

use chrono::Local;

/// Format of every timestamp the service generates itself
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local time now, formatted as `YYYY-MM-DD HH:MM:SS`
pub fn current_datestring() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_current_datestring_format() {
        let now = current_datestring();
        assert_eq!(now.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&now, DATE_FORMAT).is_ok());
    }
}
