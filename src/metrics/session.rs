use std::time::{Duration, Instant};

/// Statistics for one process session, across restarts.
///
/// `record_game_over` is the single score report made when a game reaches
/// its terminal state.
pub struct SessionStats {
    started_at: Instant,
    elapsed: Duration,
    pub best_score: u32,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            elapsed: Duration::ZERO,
            best_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the elapsed-time reading for the current game
    pub fn update(&mut self) {
        self.elapsed = self.started_at.elapsed();
    }

    /// Restart the clock for a fresh game
    pub fn record_start(&mut self) {
        self.started_at = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    /// Report a finished game and its final score
    pub fn record_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    /// Elapsed time of the current game as mm:ss
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_score_is_monotonic() {
        let mut stats = SessionStats::new();

        stats.record_game_over(8);
        assert_eq!(stats.best_score, 8);
        assert_eq!(stats.games_played, 1);

        stats.record_game_over(5);
        assert_eq!(stats.best_score, 8);
        assert_eq!(stats.games_played, 2);

        stats.record_game_over(12);
        assert_eq!(stats.best_score, 12);
        assert_eq!(stats.games_played, 3);
    }

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();

        stats.elapsed = Duration::from_secs(0);
        assert_eq!(stats.format_time(), "00:00");

        stats.elapsed = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.elapsed = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_record_start_resets_clock() {
        let mut stats = SessionStats::new();
        std::thread::sleep(Duration::from_millis(20));
        stats.update();
        assert!(stats.elapsed.as_millis() >= 20);

        stats.record_start();
        assert_eq!(stats.elapsed, Duration::ZERO);
    }
}
