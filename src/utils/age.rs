//! Human-readable relative ages ("3 days ago").

/// Unit thresholds in seconds, largest first.
///
/// These are fixed approximations (365-day year, 30-day month) and are not
/// calendar-accurate.
const UNITS: [(&str, u64); 6] = [
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
];

/// Render an elapsed duration as a relative age.
///
/// The first unit whose threshold fits into `elapsed_secs` at least once is
/// used, with the count floored. Anything under a minute is `"just now"`.
///
/// # Examples
///
/// ```
/// # use project_finder::utils::relative_age;
/// assert_eq!(relative_age(3_661), "1 hour ago");
/// assert_eq!(relative_age(59), "just now");
/// ```
#[must_use]
pub fn relative_age(elapsed_secs: u64) -> String {
    for (unit, threshold) in UNITS {
        let count = elapsed_secs / threshold;

        if count >= 1 {
            let plural = if count == 1 { "" } else { "s" };
            return format!("{count} {unit}{plural} ago");
        }
    }

    "just now".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_just_now_below_one_minute() {
        assert_eq!(relative_age(0), "just now");
        assert_eq!(relative_age(59), "just now");
    }

    #[test]
    fn test_singular_units() {
        assert_eq!(relative_age(60), "1 minute ago");
        assert_eq!(relative_age(3_661), "1 hour ago");
        assert_eq!(relative_age(86_400), "1 day ago");
        assert_eq!(relative_age(604_800), "1 week ago");
        assert_eq!(relative_age(2_592_000), "1 month ago");
        assert_eq!(relative_age(31_536_000), "1 year ago");
    }

    #[test]
    fn test_plural_units_are_floored() {
        assert_eq!(relative_age(119), "1 minute ago");
        assert_eq!(relative_age(120), "2 minutes ago");
        assert_eq!(relative_age(7_199), "1 hour ago");
        assert_eq!(relative_age(6 * 86_400 + 86_399), "6 days ago");
        assert_eq!(relative_age(126_144_000), "4 years ago");
    }

    #[test]
    fn test_month_boundary_uses_thirty_days() {
        // 29 days is still weeks, 30 days flips to a month
        assert_eq!(relative_age(29 * 86_400), "4 weeks ago");
        assert_eq!(relative_age(30 * 86_400), "1 month ago");
        // 364 days is 12 months under the 30-day approximation
        assert_eq!(relative_age(364 * 86_400), "12 months ago");
    }
}
