use chrono::{DateTime, FixedOffset, Timelike, Utc};

const SECONDS_PER_HOUR: i32 = 3600;

/// Hour of day (0-23) at `offset_hours` from UTC.
pub fn local_hour(now: DateTime<Utc>, offset_hours: i32) -> u32 {
    match FixedOffset::east_opt(offset_hours * SECONDS_PER_HOUR) {
        Some(offset) => now.with_timezone(&offset).hour(),
        None => now.hour(),
    }
}

/// The word that follows "Good" in the /start greeting.
pub fn part_of_day(hour: u32) -> &'static str {
    match hour {
        0..=5 => "morning (You're either sleep deprived staying up so late or David Goggins waking up so early)",
        6..=12 => "morning",
        13..=18 => "afternoon",
        _ => "evening",
    }
}
