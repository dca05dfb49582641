use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// Result of one simulated possession.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Possession {
    pub side: Side,
    pub points: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub home: u32,
    pub away: u32,
}

impl Scoreboard {
    /// Pick a side at random and score a miss, a two or a three.
    ///
    /// Weights: 40% miss, 40% two, 20% three.
    pub fn simulate_possession<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Possession {
        let side = if rng.gen_bool(0.5) {
            Side::Home
        } else {
            Side::Away
        };
        let points = match rng.gen_range(0..10) {
            0..=3 => 0,
            4..=7 => 2,
            _ => 3,
        };
        self.add(side, points);
        Possession { side, points }
    }

    pub const fn add(&mut self, side: Side, points: u8) {
        match side {
            Side::Home => self.home += points as u32,
            Side::Away => self.away += points as u32,
        }
    }

    pub const fn reset(&mut self) {
        self.home = 0;
        self.away = 0;
    }
}
