use time::{Date, Duration, OffsetDateTime, UtcOffset};

/// Current calendar day in the board's offset.
pub fn today(offset: UtcOffset) -> Date {
    OffsetDateTime::now_utc().to_offset(offset).date()
}

/// `None` only past the representable calendar range.
pub fn previous_day(date: Date) -> Option<Date> {
    date.checked_sub(Duration::DAY)
}

pub fn next_day(date: Date) -> Option<Date> {
    date.checked_add(Duration::DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_shift_across_month_and_year() {
        assert_eq!(next_day(date!(2024 - 02 - 28)), Some(date!(2024 - 02 - 29)));
        assert_eq!(next_day(date!(2024 - 12 - 31)), Some(date!(2025 - 01 - 01)));
        assert_eq!(previous_day(date!(2024 - 03 - 01)), Some(date!(2024 - 02 - 29)));
    }

    #[test]
    fn test_shift_at_calendar_limits() {
        assert_eq!(next_day(Date::MAX), None);
        assert_eq!(previous_day(Date::MIN), None);
    }
}
