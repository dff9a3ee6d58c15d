use crate::components::Side;
use crate::config::ScoringMode;

/// Per-side point counters; only ever incremented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    /// Apply this frame's boundary exits according to `mode`
    pub fn apply(&mut self, events: &Events, mode: ScoringMode) {
        if mode == ScoringMode::ResetOnly {
            return;
        }
        if let Some(side) = events.scored() {
            self.increment(side);
        }
    }
}

/// Seedable random source used for serves
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool, // ball left through the right edge
    pub ai_scored: bool,     // ball left through the left edge
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.ai_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    /// Side that won a point this frame; a single ball exits at most once
    pub fn scored(&self) -> Option<Side> {
        if self.player_scored {
            Some(Side::Player)
        } else if self.ai_scored {
            Some(Side::Ai)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Player);
        score.increment(Side::Player);
        score.increment(Side::Ai);
        assert_eq!(score, Score { player: 2, ai: 1 });
    }

    #[test]
    fn test_score_apply_tally() {
        let mut score = Score::new();
        let events = Events {
            ai_scored: true,
            ..Events::default()
        };
        score.apply(&events, ScoringMode::Tally);
        assert_eq!(score.ai, 1);
        assert_eq!(score.player, 0);

        score.apply(&Events::new(), ScoringMode::Tally);
        assert_eq!(score, Score { player: 0, ai: 1 }, "Quiet frame adds nothing");
    }

    #[test]
    fn test_events_scored_side() {
        let mut events = Events::new();
        assert_eq!(events.scored(), None);

        events.player_scored = true;
        assert_eq!(events.scored(), Some(Side::Player));

        events.clear();
        events.ai_scored = true;
        assert_eq!(events.scored(), Some(Side::Ai));
    }

    #[test]
    fn test_score_apply_reset_only() {
        let mut score = Score::new();
        let events = Events {
            player_scored: true,
            ..Events::default()
        };
        score.apply(&events, ScoringMode::ResetOnly);
        assert_eq!(score, Score::new(), "Reset-only mode never counts");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.ai_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert_eq!(events, Events::new());
        assert_eq!(events.scored(), None);
    }
}
