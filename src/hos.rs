//! Simplified hours-of-service duty log.
//!
//! Each day follows the same fixed shape: an on-duty block at the start of
//! the day, one driving block capped at the daily drive limit, and off duty
//! for the rest of the day whenever driving remains for a later day. There
//! are no 30-minute breaks, no sleeper-berth splits and no cycle accounting.

use crate::config::PlannerSettings;
use crate::error::PlanningError;
use crate::model::{ClockTime, DayLog, DutyBlock, DutyStatus};

/// Splits `total_drive_minutes` across as many days as the daily cap needs.
///
/// Settings that leave a day without driving time are rejected, so every
/// returned day carries a non-empty driving block.
pub fn build_logs(
    total_drive_minutes: u32,
    settings: &PlannerSettings,
) -> Result<Vec<DayLog>, PlanningError> {
    settings.validate()?;

    let day_start = settings.day_start;
    let drive_start = day_start.add_minutes(settings.pre_trip_min);
    let daily_cap = settings
        .max_drive_minutes_per_day()
        .min(ClockTime::END_OF_DAY.minutes() - drive_start.minutes());

    let mut logs = Vec::new();
    let mut minutes_left = total_drive_minutes;

    while minutes_left > 0 {
        let drive_today = minutes_left.min(daily_cap);
        let drive_end = drive_start.add_minutes(drive_today);

        let mut day = vec![
            DutyBlock::new(DutyStatus::OnDuty, day_start, drive_start),
            DutyBlock::new(DutyStatus::Driving, drive_start, drive_end),
        ];
        // Driving that runs to midnight leaves no room for a closing block.
        if drive_today < minutes_left && drive_end < ClockTime::END_OF_DAY {
            day.push(DutyBlock::new(DutyStatus::OffDuty, drive_end, ClockTime::END_OF_DAY));
        }

        logs.push(day);
        minutes_left -= drive_today;
    }

    Ok(logs)
}

/// Total driving minutes recorded across all days.
pub fn driving_minutes(logs: &[DayLog]) -> u32 {
    logs.iter()
        .flatten()
        .filter(|block| block.status == DutyStatus::Driving)
        .map(DutyBlock::minutes)
        .sum()
}
