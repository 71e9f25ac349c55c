//! Slot calendar
//!
//! Holds the two configured durations the engine needs, the minimum stay
//! (slot length and booking granularity) and the horizon (how far ahead a
//! room can be booked), and generates slot sequences from them.

use chrono::{DateTime, Duration, Utc};
use landon_core::config::BookingConfig;
use landon_core::{LandonError, LandonResult};

use crate::slot::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCalendar {
    minimum_stay: Duration,
    horizon: Duration,
}

impl SlotCalendar {
    /// Both durations must be positive
    pub fn new(minimum_stay: Duration, horizon: Duration) -> LandonResult<Self> {
        if minimum_stay <= Duration::zero() {
            return Err(LandonError::Config(format!(
                "minimum stay must be positive, got {minimum_stay}"
            )));
        }
        if horizon <= Duration::zero() {
            return Err(LandonError::Config(format!(
                "booking horizon must be positive, got {horizon}"
            )));
        }

        Ok(Self {
            minimum_stay,
            horizon,
        })
    }

    pub fn from_config(config: &BookingConfig) -> LandonResult<Self> {
        Self::new(config.minimum_stay()?, config.horizon()?)
    }

    pub fn minimum_stay(&self) -> Duration {
        self.minimum_stay
    }

    pub fn minimum_stay_hours(&self) -> i64 {
        self.minimum_stay.num_hours()
    }

    pub fn horizon(&self) -> Duration {
        self.horizon
    }

    /// Saturates at the latest representable instant
    pub fn furthest_possible_booking(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_add_signed(self.horizon)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Round up to the next slot boundary, counting whole minimum stays
    /// from the Unix epoch. Instants already on a boundary are unchanged;
    /// when no later boundary is representable the result saturates.
    pub fn align_start(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let step = self.minimum_stay.num_milliseconds();
        let since_boundary = instant.timestamp_millis().rem_euclid(step);
        let sub_milli = i64::from(instant.timestamp_subsec_nanos() % 1_000_000);

        if since_boundary == 0 && sub_milli == 0 {
            return instant;
        }
        let to_next = self.minimum_stay
            - Duration::milliseconds(since_boundary)
            - Duration::nanoseconds(sub_milli);
        instant
            .checked_add_signed(to_next)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// The `[start, end)` window openings are listed for
    pub fn horizon_window(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.align_start(now), self.furthest_possible_booking(now))
    }

    /// Contiguous minimum-stay slots starting at `start`, stopping before a
    /// slot would run past `end`. A trailing remainder shorter than one slot
    /// is not emitted; `end <= start` yields nothing. Generation also stops
    /// at the last slot whose end is representable.
    pub fn generate_slots(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl Iterator<Item = TimeSlot> {
        let step = self.minimum_stay;
        std::iter::successors(Some(start), move |slot_start| {
            slot_start.checked_add_signed(step)
        })
        .map_while(move |slot_start| {
            slot_start
                .checked_add_signed(step)
                .map(|slot_end| TimeSlot::new(slot_start, slot_end))
        })
        .take_while(move |slot| slot.end_at <= end)
    }

    /// Whether `duration` is a whole, non-zero number of minimum stays
    pub fn is_aligned(&self, duration: Duration) -> bool {
        let whole_millis = Duration::milliseconds(duration.num_milliseconds());
        duration >= self.minimum_stay
            && duration == whole_millis
            && duration.num_milliseconds() % self.minimum_stay.num_milliseconds() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn calendar() -> SlotCalendar {
        SlotCalendar::new(Duration::hours(12), Duration::days(30)).unwrap()
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_durations() {
        let err = SlotCalendar::new(Duration::zero(), Duration::days(1)).unwrap_err();
        assert!(matches!(err, LandonError::Config(_)));
        assert!(SlotCalendar::new(Duration::hours(12), Duration::hours(-1)).is_err());
    }

    #[test]
    fn test_from_config() {
        let calendar = SlotCalendar::from_config(&BookingConfig::default()).unwrap();
        assert_eq!(calendar, self::calendar());
        assert_eq!(calendar.minimum_stay_hours(), 12);
    }

    #[test]
    fn test_generates_three_contiguous_slots() {
        let start = at(1, 0);
        let slots: Vec<TimeSlot> = calendar()
            .generate_slots(start, start + Duration::hours(36))
            .collect();

        assert_eq!(
            slots,
            vec![
                TimeSlot::new(at(1, 0), at(1, 12)),
                TimeSlot::new(at(1, 12), at(2, 0)),
                TimeSlot::new(at(2, 0), at(2, 12)),
            ]
        );
        for pair in slots.windows(2) {
            assert_eq!(pair[0].end_at, pair[1].start_at);
        }
    }

    #[test]
    fn test_generation_is_restartable() {
        let calendar = calendar();
        let first: Vec<_> = calendar.generate_slots(at(1, 0), at(3, 0)).collect();
        let second: Vec<_> = calendar.generate_slots(at(1, 0), at(3, 0)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_trailing_remainder_is_dropped() {
        let slots: Vec<_> = calendar().generate_slots(at(1, 0), at(1, 20)).collect();
        assert_eq!(slots, vec![TimeSlot::new(at(1, 0), at(1, 12))]);
    }

    #[test]
    fn test_empty_window() {
        assert_eq!(calendar().generate_slots(at(2, 0), at(2, 0)).count(), 0);
        assert_eq!(calendar().generate_slots(at(2, 0), at(1, 0)).count(), 0);
    }

    #[test]
    fn test_align_start() {
        let calendar = calendar();
        assert_eq!(calendar.align_start(at(1, 0)), at(1, 0));
        assert_eq!(calendar.align_start(at(1, 12)), at(1, 12));
        assert_eq!(calendar.align_start(at(1, 3)), at(1, 12));
        assert_eq!(
            calendar.align_start(at(1, 12) + Duration::nanoseconds(1)),
            at(2, 0)
        );
    }

    #[test]
    fn test_horizon_window() {
        let now = at(1, 9);
        let (start, end) = calendar().horizon_window(now);
        assert_eq!(start, at(1, 12));
        assert_eq!(end, at(31, 9));
    }

    #[test]
    fn test_from_config_rejects_out_of_range_durations() {
        let config = BookingConfig {
            minimum_stay_hours: i64::MAX / 10,
            ..BookingConfig::default()
        };
        let err = SlotCalendar::from_config(&config).unwrap_err();
        assert!(matches!(err, LandonError::Config(_)));

        let config = BookingConfig {
            furthest_booking_days: i64::MAX,
            ..BookingConfig::default()
        };
        assert!(SlotCalendar::from_config(&config).is_err());
    }

    #[test]
    fn test_generation_stops_at_latest_instant() {
        let end = DateTime::<Utc>::MAX_UTC - Duration::hours(6);
        let start = end - Duration::hours(36);
        let slots: Vec<_> = calendar().generate_slots(start, end).collect();
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[2].end_at, end);

        // the slot after the window ends past the latest instant
        let open_ended: Vec<_> = calendar()
            .generate_slots(start, DateTime::<Utc>::MAX_UTC)
            .collect();
        assert_eq!(open_ended.len(), 3);
    }

    #[test]
    fn test_horizon_window_saturates() {
        let now = DateTime::<Utc>::MAX_UTC - Duration::hours(1);
        let (start, end) = calendar().horizon_window(now);
        assert_eq!(end, DateTime::<Utc>::MAX_UTC);
        assert!(start >= now);
        assert_eq!(calendar().generate_slots(start, end).count(), 0);

        let huge = SlotCalendar::new(Duration::hours(12), Duration::days(200_000_000)).unwrap();
        assert_eq!(huge.furthest_possible_booking(at(1, 0)), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn test_is_aligned() {
        let calendar = calendar();
        assert!(calendar.is_aligned(Duration::hours(12)));
        assert!(calendar.is_aligned(Duration::hours(48)));
        assert!(!calendar.is_aligned(Duration::hours(18)));
        assert!(!calendar.is_aligned(Duration::zero()));
    }
}
