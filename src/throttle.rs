//! Post-action pacing.

use chrono::{DateTime, Duration, Utc};

/// Tracks when the last response action happened and how long the caller
/// should pause before the next one. Pure bookkeeping: the caller sleeps.
#[derive(Debug, Clone)]
pub struct Cooldown {
    wait: Duration,
    last_action: DateTime<Utc>,
}

impl Cooldown {
    /// Cooldown of `wait_minutes` between actions, starting now.
    pub fn new(wait_minutes: i64) -> Self {
        Self::starting_at(wait_minutes, Utc::now())
    }

    /// Cooldown anchored to an explicit start instant.
    pub fn starting_at(wait_minutes: i64, now: DateTime<Utc>) -> Self {
        Self { wait: Duration::minutes(wait_minutes), last_action: now }
    }

    /// Record an action at `now` and return how long to pause before the
    /// next one: the configured wait minus the time already elapsed since
    /// the previous action.
    pub fn pause_after_action(&mut self, now: DateTime<Utc>) -> std::time::Duration {
        let elapsed = now - self.last_action;
        self.last_action = now;
        (self.wait - elapsed).to_std().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn pause_shrinks_by_the_elapsed_time() {
        let start = Utc.with_ymd_and_hms(2021, 9, 25, 12, 0, 0).unwrap();
        let mut cooldown = Cooldown::starting_at(10, start);

        let pause = cooldown.pause_after_action(start + Duration::minutes(1));
        assert_eq!(pause, std::time::Duration::from_secs(9 * 60));
    }

    #[test]
    fn no_pause_once_the_wait_has_elapsed() {
        let start = Utc.with_ymd_and_hms(2021, 9, 25, 12, 0, 0).unwrap();
        let mut cooldown = Cooldown::starting_at(10, start);

        let pause = cooldown.pause_after_action(start + Duration::minutes(11));
        assert_eq!(pause, std::time::Duration::ZERO);
    }

    #[test]
    fn each_action_resets_the_clock() {
        let start = Utc.with_ymd_and_hms(2021, 9, 25, 12, 0, 0).unwrap();
        let mut cooldown = Cooldown::starting_at(10, start);

        cooldown.pause_after_action(start + Duration::minutes(8));
        let pause = cooldown.pause_after_action(start + Duration::minutes(9));
        assert_eq!(pause, std::time::Duration::from_secs(9 * 60));
    }
}
