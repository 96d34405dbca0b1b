use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// The storefront's daily order cutoff, 17:00 local time.
pub const DEFAULT_CUTOFF: NaiveTime = match NaiveTime::from_hms_opt(17, 0, 0) {
    Some(t) => t,
    None => unreachable!(),
};

/// The next cutoff instant at or after `now`: today's cutoff, or
/// tomorrow's once today's has passed.
#[must_use]
pub fn next_cutoff(now: NaiveDateTime, cutoff: NaiveTime) -> NaiveDateTime {
    let today = now.date().and_time(cutoff);
    if now >= today {
        today + Duration::days(1)
    } else {
        today
    }
}

/// Time remaining until the next order cutoff, floor-divided into whole
/// hours, minutes, and seconds.
///
/// `Ended` is only reachable through recomputation lag (the cutoff
/// auto-advances), but it is kept as a defensive terminal state and
/// displays the literal `"Offer ended"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining { hours: i64, minutes: i64, seconds: i64 },
    Ended,
}

impl Countdown {
    /// Countdown to the next cutoff as seen from `now`. Pure: recompute
    /// once per second while displayed.
    #[must_use]
    pub fn at(now: NaiveDateTime, cutoff: NaiveTime) -> Self {
        let remaining = next_cutoff(now, cutoff) - now;
        if remaining <= Duration::zero() {
            return Countdown::Ended;
        }
        Countdown::Remaining {
            hours: remaining.num_hours(),
            minutes: remaining.num_minutes() % 60,
            seconds: remaining.num_seconds() % 60,
        }
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Countdown::Remaining {
                hours,
                minutes,
                seconds,
            } => write!(f, "{hours}h {minutes}m {seconds}s"),
            Countdown::Ended => write!(f, "Offer ended"),
        }
    }
}

/// Estimated delivery date range, derived from whether the order lands
/// before or after today's cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DeliveryWindow {
    /// Before today's cutoff the order ships tomorrow, arriving within
    /// [tomorrow, day after]; at or after the cutoff everything shifts a
    /// day.
    #[must_use]
    pub fn at(now: NaiveDateTime, cutoff: NaiveTime) -> Self {
        let today_cutoff = now.date().and_time(cutoff);
        let (start_offset, end_offset) = if now < today_cutoff { (1, 2) } else { (2, 3) };
        DeliveryWindow {
            start: now.date() + Duration::days(start_offset),
            end: now.date() + Duration::days(end_offset),
        }
    }
}

impl std::fmt::Display for DeliveryWindow {
    /// Formats as `"05 Jun - 07 Jun"`: day and month abbreviation, no
    /// year.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%d %b"),
            self.end.format("%d %b")
        )
    }
}
