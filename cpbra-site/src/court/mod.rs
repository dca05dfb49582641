//! Court status card state: clock, score simulation and court size.

mod clock;
mod score;

pub use clock::{ClockMode, ClockStatus, GameClock, TickOutcome, format_time};
pub use score::{Possession, Scoreboard, Side};

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const FULL_COURT_PLAYERS: u32 = 10;
pub const HALF_COURT_PLAYERS: u32 = 6;

/// Clock settings shared by every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtConfig {
    pub game_minutes: u32,
    pub game_over_hold_secs: u32,
    pub score_interval_secs: u32,
    pub mode: ClockMode,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            game_minutes: 12,
            game_over_hold_secs: 5,
            score_interval_secs: 4,
            mode: ClockMode::Looping,
        }
    }
}

/// Local state of one court card. Nothing here is shared between cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtState {
    pub half: bool,
    pub player_count: u32,
    pub clock: GameClock,
    pub score: Scoreboard,
}

impl CourtState {
    #[must_use]
    pub const fn new(config: &CourtConfig) -> Self {
        Self {
            half: false,
            player_count: FULL_COURT_PLAYERS,
            clock: GameClock::new(config.game_minutes, config.game_over_hold_secs, config.mode),
            score: Scoreboard { home: 0, away: 0 },
        }
    }

    /// One-second clock tick. A restart starts the next game from 0-0.
    pub const fn tick_clock(&mut self) -> TickOutcome {
        let outcome = self.clock.tick();
        if matches!(outcome, TickOutcome::Restarted) {
            self.score.reset();
        }
        outcome
    }

    /// Score tick; only live games score.
    pub fn tick_score<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Possession> {
        self.clock
            .is_running()
            .then(|| self.score.simulate_possession(rng))
    }

    /// Swap between full and half court and suggest the usual head count.
    pub const fn toggle_court_size(&mut self) {
        self.half = !self.half;
        self.player_count = if self.half {
            HALF_COURT_PLAYERS
        } else {
            FULL_COURT_PLAYERS
        };
    }

    /// Adjust the head count; a change that would go negative is ignored.
    pub const fn adjust_players(&mut self, amount: i32) {
        if let Some(next) = self.player_count.checked_add_signed(amount) {
            self.player_count = next;
        }
    }

    pub const fn reset(&mut self) {
        self.clock.reset();
        self.score.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn court_size_suggests_player_count() {
        let mut court = CourtState::new(&CourtConfig::default());
        assert_eq!(court.player_count, 10);
        court.toggle_court_size();
        assert!(court.half);
        assert_eq!(court.player_count, 6);
        court.toggle_court_size();
        assert_eq!(court.player_count, 10);
    }

    #[test]
    fn player_count_never_negative() {
        let mut court = CourtState::new(&CourtConfig::default());
        court.adjust_players(-10);
        assert_eq!(court.player_count, 0);
        court.adjust_players(-1);
        assert_eq!(court.player_count, 0);
        court.adjust_players(2);
        assert_eq!(court.player_count, 2);
    }

    #[test]
    fn paused_games_do_not_score() {
        let mut court = CourtState::new(&CourtConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(court.tick_score(&mut rng).is_none());
        court.clock.start();
        assert!(court.tick_score(&mut rng).is_some());
    }

    #[test]
    fn restart_clears_score() {
        let config = CourtConfig {
            game_minutes: 1,
            game_over_hold_secs: 0,
            ..CourtConfig::default()
        };
        let mut court = CourtState::new(&config);
        court.clock.start();
        court.score = Scoreboard { home: 21, away: 19 };
        for _ in 0..60 {
            court.tick_clock();
        }
        assert!(court.clock.is_game_over());
        assert_eq!(court.score.home, 21, "final score stays up during game over");
        assert_eq!(court.tick_clock(), TickOutcome::Restarted);
        assert_eq!(court.score, Scoreboard::default());
    }
}
