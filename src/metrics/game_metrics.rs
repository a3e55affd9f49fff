use std::time::Instant;

/// Per-session play statistics, surviving restarts
pub struct GameMetrics {
    game_start: Instant,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            game_start: Instant::now(),
            high_score: 0,
            games_played: 0,
        }
    }

    pub fn on_game_start(&mut self) {
        self.game_start = Instant::now();
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    /// Time in the current game as MM:SS
    pub fn format_time(&self) -> String {
        let total_secs = self.game_start.elapsed().as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
