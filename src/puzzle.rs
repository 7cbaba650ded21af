use chrono::{DateTime, NaiveDate, Utc};

/// The calendar date of Wordle #0.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 19).expect("epoch date is a valid calendar date")
}

/// Puzzle number for a given UTC calendar date: whole days elapsed since the
/// epoch. Negative before the epoch.
pub fn puzzle_number_on(date: NaiveDate) -> i64 {
    date.signed_duration_since(epoch()).num_days()
}

/// Puzzle number for the instant `now`. Day boundaries are UTC calendar days,
/// not 24-hour windows from the epoch instant.
pub fn latest_puzzle_number(now: DateTime<Utc>) -> i64 {
    puzzle_number_on(now.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn epoch_day_is_puzzle_zero() {
        let date = NaiveDate::from_ymd_opt(2021, 6, 19).unwrap();
        assert_eq!(puzzle_number_on(date), 0);
    }

    #[test]
    fn counts_elapsed_calendar_days() {
        let date = NaiveDate::from_ymd_opt(2021, 6, 20).unwrap();
        assert_eq!(puzzle_number_on(date), 1);

        let date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        assert_eq!(puzzle_number_on(date), 196);
    }

    #[test]
    fn same_utc_date_yields_same_number() {
        let early = Utc.with_ymd_and_hms(2022, 3, 5, 0, 0, 1).unwrap();
        let late = Utc.with_ymd_and_hms(2022, 3, 5, 23, 59, 59).unwrap();
        assert_eq!(latest_puzzle_number(early), latest_puzzle_number(late));
    }

    #[test]
    fn dates_before_epoch_are_negative() {
        let date = NaiveDate::from_ymd_opt(2021, 6, 18).unwrap();
        assert_eq!(puzzle_number_on(date), -1);
    }
}
