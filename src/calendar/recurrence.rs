//! Expansion of a recurring event into concrete dates.
//!
//! The first date is always the event's own date. Later dates are produced by
//! advancing a cursor according to the rule until the end date passes, the
//! weekday scan finds nothing, or [`MAX_OCCURRENCES`] dates have been emitted.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::models::{Recurrence, RecurrenceType};

/// Hard cap on the number of dates one event expands to, including the first.
pub const MAX_OCCURRENCES: usize = 100;

/// How far ahead the weekday scan looks before giving up.
const WEEKDAY_LOOKAHEAD_DAYS: u64 = 14;

/// Lazily yields the dates of a recurring event.
#[derive(Debug, Clone)]
pub struct Occurrences {
    start: NaiveDate,
    kind: RecurrenceType,
    interval: u32,
    end_date: Option<NaiveDate>,
    weekdays: Vec<u32>,
    cursor: Option<NaiveDate>,
    emitted: usize,
    done: bool,
}

impl Occurrences {
    pub fn new(start: NaiveDate, rule: &Recurrence) -> Self {
        let mut weekdays: Vec<u32> = rule
            .selected_days
            .iter()
            .filter(|&&d| d < 7)
            .map(|&d| d as u32)
            .collect();
        weekdays.sort_unstable();
        weekdays.dedup();

        Self {
            start,
            kind: rule.kind,
            interval: rule.interval.max(1),
            end_date: rule.end_date,
            weekdays,
            cursor: None,
            emitted: 0,
            done: false,
        }
    }

    fn advance(&self, cursor: NaiveDate) -> Option<NaiveDate> {
        let interval = self.interval as u64;
        match self.kind {
            RecurrenceType::None => None,
            RecurrenceType::Daily => cursor.checked_add_days(Days::new(interval)),
            RecurrenceType::Weekly if self.weekdays.is_empty() => {
                cursor.checked_add_days(Days::new(7 * interval))
            }
            RecurrenceType::Custom if self.weekdays.is_empty() => {
                cursor.checked_add_days(Days::new(interval))
            }
            RecurrenceType::Weekly | RecurrenceType::Custom => self.next_selected_weekday(cursor),
            RecurrenceType::Monthly => {
                // Counted from the start so a clamped day (31st -> 28th) does
                // not drift into later months.
                let months = self.interval.checked_mul(self.emitted as u32)?;
                self.start.checked_add_months(Months::new(months))
            }
        }
    }

    /// Scans day by day for the next date on a selected weekday. Crossing into
    /// a new week skips `interval - 1` further weeks.
    fn next_selected_weekday(&self, cursor: NaiveDate) -> Option<NaiveDate> {
        let cursor_week = week_start(cursor)?;
        for offset in 1..=WEEKDAY_LOOKAHEAD_DAYS {
            let candidate = cursor.checked_add_days(Days::new(offset))?;
            if !self
                .weekdays
                .contains(&candidate.weekday().num_days_from_sunday())
            {
                continue;
            }
            if week_start(candidate)? != cursor_week && self.interval > 1 {
                let skip = 7 * (self.interval as u64 - 1);
                return candidate.checked_add_days(Days::new(skip));
            }
            return Some(candidate);
        }
        None
    }
}

/// Sunday that begins the week containing `date`.
fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(date.weekday().num_days_from_sunday() as u64))
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.done || self.emitted >= MAX_OCCURRENCES {
            return None;
        }

        let next = match self.cursor {
            None => Some(self.start),
            Some(cursor) => self.advance(cursor),
        };

        match next {
            Some(date) if self.end_date.map_or(true, |end| date <= end) => {
                self.cursor = Some(date);
                self.emitted += 1;
                Some(date)
            }
            _ => {
                self.done = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expand(start: NaiveDate, rule: &Recurrence) -> Vec<NaiveDate> {
        Occurrences::new(start, rule).collect()
    }

    fn rule(kind: RecurrenceType, interval: u32) -> Recurrence {
        Recurrence {
            kind,
            interval,
            end_date: None,
            selected_days: Vec::new(),
        }
    }

    #[test]
    fn test_no_recurrence_yields_only_start() {
        let start = date(2025, 3, 3);
        assert_eq!(expand(start, &Recurrence::default()), vec![start]);
    }

    #[test]
    fn test_weekly_monday_wednesday_alternates_and_caps() {
        // 2025-03-03 is a Monday.
        let start = date(2025, 3, 3);
        let weekly = Recurrence {
            selected_days: vec![1, 3],
            ..rule(RecurrenceType::Weekly, 1)
        };

        let dates = expand(start, &weekly);

        let first_five: Vec<Weekday> = dates.iter().take(5).map(|d| d.weekday()).collect();
        assert_eq!(
            first_five,
            vec![
                Weekday::Mon,
                Weekday::Wed,
                Weekday::Mon,
                Weekday::Wed,
                Weekday::Mon
            ]
        );
        assert_eq!(dates[1], date(2025, 3, 5));
        assert_eq!(dates[2], date(2025, 3, 10));
        assert_eq!(dates.len(), MAX_OCCURRENCES);
    }

    #[test]
    fn test_daily_respects_interval_and_inclusive_end() {
        let start = date(2025, 1, 1);
        let every_third = Recurrence {
            end_date: Some(date(2025, 1, 10)),
            ..rule(RecurrenceType::Daily, 3)
        };
        assert_eq!(
            expand(start, &every_third),
            vec![
                date(2025, 1, 1),
                date(2025, 1, 4),
                date(2025, 1, 7),
                date(2025, 1, 10)
            ]
        );
    }

    #[test]
    fn test_weekly_without_days_steps_whole_weeks() {
        let start = date(2025, 3, 6);
        let fortnightly = Recurrence {
            end_date: Some(date(2025, 4, 10)),
            ..rule(RecurrenceType::Weekly, 2)
        };
        assert_eq!(
            expand(start, &fortnightly),
            vec![date(2025, 3, 6), date(2025, 3, 20), date(2025, 4, 3)]
        );
    }

    #[test]
    fn test_weekly_days_with_interval_skips_weeks() {
        // Monday start, Mon/Fri every second week.
        let start = date(2025, 3, 3);
        let rule = Recurrence {
            selected_days: vec![5, 1],
            ..rule(RecurrenceType::Weekly, 2)
        };
        let dates: Vec<NaiveDate> = Occurrences::new(start, &rule).take(4).collect();
        assert_eq!(
            dates,
            vec![
                date(2025, 3, 3),
                date(2025, 3, 7),
                date(2025, 3, 17),
                date(2025, 3, 21)
            ]
        );
    }

    #[test]
    fn test_monthly_clamps_without_drift() {
        let start = date(2025, 1, 31);
        let monthly = Recurrence {
            end_date: Some(date(2025, 4, 30)),
            ..rule(RecurrenceType::Monthly, 1)
        };
        assert_eq!(
            expand(start, &monthly),
            vec![
                date(2025, 1, 31),
                date(2025, 2, 28),
                date(2025, 3, 31),
                date(2025, 4, 30)
            ]
        );
    }

    #[test]
    fn test_custom_without_days_is_every_n_days() {
        let start = date(2025, 5, 1);
        let custom = Recurrence {
            end_date: Some(date(2025, 5, 12)),
            ..rule(RecurrenceType::Custom, 5)
        };
        assert_eq!(
            expand(start, &custom),
            vec![date(2025, 5, 1), date(2025, 5, 6), date(2025, 5, 11)]
        );
    }

    #[test]
    fn test_invalid_weekdays_are_ignored() {
        let start = date(2025, 3, 3);
        let weekly = Recurrence {
            selected_days: vec![9, 42],
            end_date: Some(date(2025, 3, 20)),
            ..rule(RecurrenceType::Weekly, 1)
        };
        // No usable weekday left, so it behaves like plain weekly.
        assert_eq!(
            expand(start, &weekly),
            vec![date(2025, 3, 3), date(2025, 3, 10), date(2025, 3, 17)]
        );
    }

    #[test]
    fn test_zero_interval_treated_as_one() {
        let start = date(2025, 1, 1);
        let daily = rule(RecurrenceType::Daily, 0);
        let dates: Vec<NaiveDate> = Occurrences::new(start, &daily).take(3).collect();
        assert_eq!(dates, vec![date(2025, 1, 1), date(2025, 1, 2), date(2025, 1, 3)]);
    }

    #[test]
    fn test_end_before_start_yields_nothing() {
        let start = date(2025, 1, 10);
        let daily = Recurrence {
            end_date: Some(date(2025, 1, 1)),
            ..rule(RecurrenceType::Daily, 1)
        };
        assert!(expand(start, &daily).is_empty());
    }
}
