//! Shared utility functions for DFP crates.

/// Date utility functions
pub mod dates {
    use chrono::{Local, NaiveDate, TimeDelta};

    /// Date format sent upstream and used by `<input type="date">`: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Days the until date sits after the since date by default.
    pub const DEFAULT_SPAN_DAYS: i64 = 7;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

    /// Parse the value of a date picker. A cleared picker yields an empty
    /// string, which maps to `None` just like an unparseable one.
    pub fn parse_picker_value(s: &str) -> Option<NaiveDate> {
        if s.trim().is_empty() {
            return None;
        }
        parse_date(s).ok()
    }

    /// Today's date in local time.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// The date `DEFAULT_SPAN_DAYS` after `date`.
    pub fn week_after(date: &NaiveDate) -> NaiveDate {
        *date + TimeDelta::days(DEFAULT_SPAN_DAYS)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_format_pads_month_and_day() {
            let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
            assert_eq!(format_date(&date), "2024-01-05");
        }

        #[test]
        fn test_parse_picker_value() {
            assert_eq!(parse_picker_value(""), None);
            assert_eq!(parse_picker_value("  "), None);
            assert_eq!(parse_picker_value("12/19/2023"), None);
            assert_eq!(
                parse_picker_value("2023-12-19"),
                NaiveDate::from_ymd_opt(2023, 12, 19)
            );
        }

        #[test]
        fn test_week_after_crosses_month_and_year() {
            let dec28 = NaiveDate::from_ymd_opt(2023, 12, 28).unwrap();
            assert_eq!(
                week_after(&dec28),
                NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()
            );

            let feb25 = NaiveDate::from_ymd_opt(2024, 2, 25).unwrap();
            assert_eq!(
                week_after(&feb25),
                NaiveDate::from_ymd_opt(2024, 3, 3).unwrap()
            );
        }
    }
}

/// Number formatting
pub mod numbers {
    /// Fraction digits kept when formatting, matching en-US locale output.
    const MAX_FRACTION_DIGITS: usize = 3;

    /// Format a number the way the en-US locale does: comma thousands
    /// separators, at most three fraction digits, trailing zeros dropped.
    ///
    /// `1234567.5` -> `"1,234,567.5"`, `12000` -> `"12,000"`.
    pub fn group_thousands(value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
        let (int_part, frac_part) = match rendered.split_once('.') {
            Some((i, f)) => (i, f.trim_end_matches('0')),
            None => (rendered.as_str(), ""),
        };

        let digits = int_part.as_bytes();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, d) in digits.iter().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(*d as char);
        }

        let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&grouped);
        if !frac_part.is_empty() {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_group_thousands_integers() {
            assert_eq!(group_thousands(0.0), "0");
            assert_eq!(group_thousands(7.0), "7");
            assert_eq!(group_thousands(999.0), "999");
            assert_eq!(group_thousands(1000.0), "1,000");
            assert_eq!(group_thousands(12345.0), "12,345");
            assert_eq!(group_thousands(1234567.0), "1,234,567");
        }

        #[test]
        fn test_group_thousands_fractions() {
            assert_eq!(group_thousands(1234.5), "1,234.5");
            assert_eq!(group_thousands(0.25), "0.25");
            // en-US keeps at most three fraction digits
            assert_eq!(group_thousands(1.23456), "1.235");
            assert_eq!(group_thousands(9999.9999), "10,000");
        }

        #[test]
        fn test_group_thousands_negative() {
            assert_eq!(group_thousands(-4200.0), "-4,200");
            assert_eq!(group_thousands(-0.0001), "0");
        }
    }
}
