//! Calendar date generators.

use chrono::{Days, NaiveDate};
use rand::Rng;

/// Width of the "recent" window, in days before today.
pub const RECENT_DAYS: u64 = 30;

/// First day of the historical window.
pub const HISTORY_START: (i32, u32, u32) = (2020, 1, 1);

/// Which window sale dates are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    /// `[today - RECENT_DAYS, today]`
    Recent,
    /// `[HISTORY_START, today]`
    SinceHistoryStart,
}

impl DateWindow {
    pub fn generate<R: Rng>(&self, rng: &mut R, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Recent => recent_date(rng, today),
            Self::SinceHistoryStart => date_since(rng, history_start(), today),
        }
    }
}

fn history_start() -> NaiveDate {
    let (y, m, d) = HISTORY_START;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Generate a date within the last [`RECENT_DAYS`] days, today included.
pub fn recent_date<R: Rng>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    let back = rng.random_range(0..=RECENT_DAYS);
    today.checked_sub_days(Days::new(back)).unwrap_or(today)
}

/// Generate a date uniformly in `[start, end]`.
///
/// If `end` is before `start`, `start` is returned.
pub fn date_since<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days();
    if span <= 0 {
        return start;
    }

    let offset = rng.random_range(0..=span as u64);
    start.checked_add_days(Days::new(offset)).unwrap_or(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_recent_date_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let lower = today() - Days::new(RECENT_DAYS);

        for _ in 0..500 {
            let date = recent_date(&mut rng, today());
            assert!(date >= lower && date <= today(), "{date} out of window");
        }
    }

    #[test]
    fn test_date_since_window() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let date = DateWindow::SinceHistoryStart.generate(&mut rng, today());
            assert!(date >= history_start() && date <= today());
        }
    }

    #[test]
    fn test_date_since_inverted_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(date_since(&mut rng, start, today()), start);
    }

    #[test]
    fn test_dates_serialize_without_time() {
        let mut rng = StdRng::seed_from_u64(42);
        let date = recent_date(&mut rng, today());
        assert_eq!(date.to_string().len(), "2024-03-15".len());
    }
}
