use crate::models::{BusinessHours, TimeSlot};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Errors raised while setting up the slot grid
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid business hours: {start}..{end} (need start < end <= 24)")]
    InvalidHours { start: u32, end: u32 },
}

/// Generate the hourly slots of `day` that fall inside the tournament window
///
/// One slot per whole hour in `[hours.start, hours.end)`. A slot is kept when it
/// starts on/after `tournament_start` (or `day` is the first day of the window)
/// and ends on/before `tournament_end` (or `day` is the last day of the window),
/// so the boundary days still offer all their opening hours.
///
/// A day outside the window yields no slots, and neither does an hour whose end
/// is past the last representable instant.
pub fn generate_day_slots(
    day: NaiveDate,
    tournament_start: NaiveDateTime,
    tournament_end: NaiveDateTime,
    hours: BusinessHours,
) -> Vec<TimeSlot> {
    let first_day = day == tournament_start.date();
    let last_day = day == tournament_end.date();

    (hours.start()..hours.end())
        .filter_map(|hour| day.and_hms_opt(hour, 0, 0))
        .filter_map(TimeSlot::checked_starting_at)
        .filter(|slot| {
            (slot.start_time >= tournament_start || first_day)
                && (slot.end_time <= tournament_end || last_day)
        })
        .collect()
}

/// Every instant from `start` to `end` inclusive, in fixed 24-hour steps
///
/// Empty when `end < start`.
pub fn generate_date_range(start: NaiveDateTime, end: NaiveDateTime) -> Vec<NaiveDateTime> {
    let step = Duration::hours(24);
    let mut days = Vec::new();
    let mut current = start;

    while current <= end {
        days.push(current);
        match current.checked_add_signed(step) {
            Some(next) => current = next,
            None => break,
        }
    }

    days
}

/// Slot grid of one tournament window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGenerator {
    tournament_start: NaiveDateTime,
    tournament_end: NaiveDateTime,
    hours: BusinessHours,
}

impl SlotGenerator {
    pub fn new(
        tournament_start: NaiveDateTime,
        tournament_end: NaiveDateTime,
        hours: BusinessHours,
    ) -> Self {
        Self {
            tournament_start,
            tournament_end,
            hours,
        }
    }

    pub fn hours(&self) -> BusinessHours {
        self.hours
    }

    pub fn day_slots(&self, day: NaiveDate) -> Vec<TimeSlot> {
        generate_day_slots(day, self.tournament_start, self.tournament_end, self.hours)
    }

    /// Calendar days touched by the window
    ///
    /// Stepping starts from midnight of the first day so a late start time does
    /// not push the last day out of range.
    pub fn days(&self) -> Vec<NaiveDate> {
        let first = self.tournament_start.date().and_time(NaiveTime::MIN);
        generate_date_range(first, self.tournament_end)
            .into_iter()
            .map(|instant| instant.date())
            .collect()
    }

    /// Every day of the window with its available slots
    pub fn grid(&self) -> Vec<(NaiveDate, Vec<TimeSlot>)> {
        self.days()
            .into_iter()
            .map(|day| (day, self.day_slots(day)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_single_day_tournament_has_fourteen_slots() {
        let day = date(2025, 6, 14);
        let start = at(2025, 6, 14, 0);

        let slots = generate_day_slots(day, start, start, BusinessHours::default());

        assert_eq!(slots.len(), 14);
        for (i, slot) in slots.iter().enumerate() {
            assert_eq!(slot.hour as usize, 8 + i);
            assert_eq!(slot.end_time - slot.start_time, Duration::hours(1));
            assert_eq!(slot.day(), day);
        }
    }

    #[test]
    fn test_boundary_days_keep_all_hours() {
        let start = at(2025, 6, 13, 15);
        let end = at(2025, 6, 15, 11);
        let hours = BusinessHours::default();

        // First day: 8:00 is before the 15:00 start but still offered
        let first = generate_day_slots(date(2025, 6, 13), start, end, hours);
        assert_eq!(first.len(), 14);
        assert_eq!(first[0].hour, 8);

        // Last day: 21:00-22:00 ends after 11:00 but still offered
        let last = generate_day_slots(date(2025, 6, 15), start, end, hours);
        assert_eq!(last.len(), 14);
    }

    #[test]
    fn test_day_outside_window_is_empty() {
        let start = at(2025, 6, 13, 0);
        let end = at(2025, 6, 15, 0);
        let hours = BusinessHours::default();

        assert!(generate_day_slots(date(2025, 6, 12), start, end, hours).is_empty());
        assert!(generate_day_slots(date(2025, 6, 16), start, end, hours).is_empty());
        assert_eq!(generate_day_slots(date(2025, 6, 14), start, end, hours).len(), 14);
    }

    #[test]
    fn test_custom_hours() {
        let day = date(2025, 6, 14);
        let start = at(2025, 6, 14, 0);
        let hours = BusinessHours::new(0, 24).unwrap();

        let slots = generate_day_slots(day, start, start, hours);
        assert_eq!(slots.len(), 24);
        assert_eq!(slots[23].end_time, at(2025, 6, 15, 0));
    }

    #[test]
    fn test_last_representable_day_does_not_overflow() {
        let day = NaiveDate::MAX;
        let start = day.and_hms_opt(0, 0, 0).unwrap();
        let hours = BusinessHours::new(0, 24).unwrap();

        // The 23:00 slot would end past the last instant
        let slots = generate_day_slots(day, start, start, hours);
        assert_eq!(slots.len(), 23);
        assert_eq!(slots[22].hour, 22);

        let generator = SlotGenerator::new(start, start, hours);
        assert_eq!(generator.grid(), vec![(day, slots)]);
    }

    #[test]
    fn test_date_range_single_day() {
        let d = at(2025, 6, 14, 9);
        assert_eq!(generate_date_range(d, d), vec![d]);
    }

    #[test]
    fn test_date_range_inclusive() {
        let range = generate_date_range(at(2025, 6, 14, 0), at(2025, 6, 17, 0));
        assert_eq!(range.len(), 4);
        assert_eq!(range[3], at(2025, 6, 17, 0));
    }

    #[test]
    fn test_date_range_reversed_is_empty() {
        assert!(generate_date_range(at(2025, 6, 17, 0), at(2025, 6, 14, 0)).is_empty());
    }

    #[test]
    fn test_date_range_keeps_time_of_day() {
        // Fixed 24h steps: the last step at 10:00 overshoots a 09:00 end
        let range = generate_date_range(at(2025, 6, 14, 10), at(2025, 6, 16, 9));
        assert_eq!(range, vec![at(2025, 6, 14, 10), at(2025, 6, 15, 10)]);
    }

    #[test]
    fn test_generator_days_cover_late_start() {
        let generator = SlotGenerator::new(
            at(2025, 6, 14, 10),
            at(2025, 6, 16, 9),
            BusinessHours::default(),
        );
        assert_eq!(
            generator.days(),
            vec![date(2025, 6, 14), date(2025, 6, 15), date(2025, 6, 16)]
        );

        let grid = generator.grid();
        assert_eq!(grid.len(), 3);
        assert!(grid.iter().all(|(_, slots)| slots.len() == 14));
    }
}
