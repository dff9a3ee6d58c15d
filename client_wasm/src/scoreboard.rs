use pong_core::Score;
use web_sys::{Document, Element};

/// Which counters differ from what is on screen
pub fn changed_sides(shown: Option<Score>, next: Score) -> (bool, bool) {
    match shown {
        Some(prev) => (prev.player != next.player, prev.ai != next.ai),
        None => (true, true),
    }
}

/// Optional page elements showing the per-side score
pub struct ScoreBoard {
    player: Option<Element>,
    ai: Option<Element>,
    shown: Option<Score>,
}

impl ScoreBoard {
    pub fn find(document: &Document, player_id: &str, ai_id: &str) -> Self {
        Self {
            player: document.get_element_by_id(player_id),
            ai: document.get_element_by_id(ai_id),
            shown: None,
        }
    }

    pub fn update(&mut self, score: Score) {
        let (player_changed, ai_changed) = changed_sides(self.shown, score);
        if player_changed {
            if let Some(el) = &self.player {
                el.set_text_content(Some(&score.player.to_string()));
            }
        }
        if ai_changed {
            if let Some(el) = &self.ai {
                el.set_text_content(Some(&score.ai.to_string()));
            }
        }
        self.shown = Some(score);
    }
}
