use chrono::NaiveDate;

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// Number of calendar days covered by `from..=to`; 0 when the range is inverted.
pub fn inclusive_days(from: NaiveDate, to: NaiveDate) -> i64 {
    let diff = (to - from).num_days();
    if diff >= 0 {
        diff + 1
    } else {
        0
    }
}

/// `Jan 10, 2024`
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

pub fn parse_input_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_INPUT_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inclusive_days_counts_both_endpoints() {
        assert_eq!(inclusive_days(date(2024, 1, 10), date(2024, 1, 12)), 3);
        assert_eq!(inclusive_days(date(2024, 1, 10), date(2024, 1, 10)), 1);
        assert_eq!(inclusive_days(date(2024, 2, 28), date(2024, 3, 1)), 3);
    }

    #[test]
    fn inverted_range_has_no_days() {
        assert_eq!(inclusive_days(date(2024, 1, 12), date(2024, 1, 10)), 0);
    }

    #[test]
    fn display_format_matches_list_search_text() {
        assert_eq!(format_display_date(date(2024, 1, 5)), "Jan 05, 2024");
    }

    #[test]
    fn input_dates_must_be_iso() {
        assert_eq!(parse_input_date(" 2024-01-10 "), Some(date(2024, 1, 10)));
        assert_eq!(parse_input_date("10/01/2024"), None);
        assert_eq!(parse_input_date(""), None);
    }
}
