use chrono::NaiveDate;

/// Counts consecutive days with at least one entry, ending at `today`.
///
/// Walks distinct dates from most recent backward and stops at the first gap.
/// If there is no entry today the streak is 0, even after a long run ending yesterday.
pub fn compute_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut distinct = dates.to_vec();
    distinct.sort_unstable_by(|a, b| b.cmp(a));
    distinct.dedup();

    let mut streak = 0;
    let mut expected = today;
    for date in distinct {
        if date != expected {
            break;
        }
        streak += 1;
        match expected.pred_opt() {
            Some(prev) => expected = prev,
            None => break,
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    #[test]
    fn test_three_consecutive_days() {
        let dates = vec![days_ago(0), days_ago(1), days_ago(2)];
        assert_eq!(compute_streak(&dates, today()), 3);
    }

    #[test]
    fn test_no_entry_today_breaks_streak() {
        let dates = vec![days_ago(1), days_ago(2)];
        assert_eq!(compute_streak(&dates, today()), 0);
    }

    #[test]
    fn test_gap_stops_the_walk() {
        let dates = vec![days_ago(0), days_ago(1), days_ago(3), days_ago(4)];
        assert_eq!(compute_streak(&dates, today()), 2);
    }

    #[test]
    fn test_duplicates_and_order_do_not_matter() {
        let dates = vec![days_ago(1), days_ago(0), days_ago(1), days_ago(0), days_ago(2)];
        assert_eq!(compute_streak(&dates, today()), 3);
    }

    #[test]
    fn test_future_dates_do_not_count() {
        let dates = vec![days_ago(-1), days_ago(0)];
        assert_eq!(compute_streak(&dates, today()), 0);
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(compute_streak(&[], today()), 0);
    }
}
