use crate::data_loader::GameRecord;

// Substrings of the qualifier tag that mean the game went past regulation time
const EXTENDED_MARKERS: [&str; 3] = ["OVERTIME", "EXTENDED", "WINNING_SHOT"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    HomeRegulation,
    AwayRegulation,
    HomeExtended,
    AwayExtended,
}

impl Outcome {
    // Points as (home, away)
    pub fn points(self) -> (u32, u32) {
        match self {
            Outcome::HomeRegulation => (3, 0),
            Outcome::AwayRegulation => (0, 3),
            Outcome::HomeExtended   => (2, 1),
            Outcome::AwayExtended   => (1, 2),
        }
    }

    pub fn is_extended(self) -> bool {
        matches!(self, Outcome::HomeExtended | Outcome::AwayExtended)
    }

    pub fn home_won(self) -> bool {
        matches!(self, Outcome::HomeRegulation | Outcome::HomeExtended)
    }
}

pub fn is_extended_play(finished_type: &str) -> bool {
    EXTENDED_MARKERS.iter().any(|m| finished_type.contains(m))
}

// None for a regulation tie, which the league format shouldn't produce but the data occasionally does.
// A game past regulation always has a winner; equal recorded goals go to the away side.
pub fn classify(game: &GameRecord) -> Option<Outcome> {
    if is_extended_play(&game.finished_type) {
        return Some(if game.home_goals > game.away_goals { Outcome::HomeExtended } else { Outcome::AwayExtended });
    }

    match game.home_goals.cmp(&game.away_goals) {
        std::cmp::Ordering::Greater => Some(Outcome::HomeRegulation),
        std::cmp::Ordering::Less    => Some(Outcome::AwayRegulation),
        std::cmp::Ordering::Equal   => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regulation_wins() {
        let g = GameRecord::new("A", "B", 3, 0, "ENDED_DURING_REGULAR_GAME_TIME");
        assert_eq!(classify(&g), Some(Outcome::HomeRegulation));

        let g = GameRecord::new("A", "B", 1, 4, "");
        assert_eq!(classify(&g), Some(Outcome::AwayRegulation));
    }

    #[test]
    fn every_extended_marker_is_recognised() {
        for tag in ["ENDED_DURING_OVERTIME", "ENDED_DURING_EXTENDED_GAME_TIME", "ENDED_DURING_WINNING_SHOT_COMPETITION"] {
            let g = GameRecord::new("A", "B", 2, 1, tag);
            assert_eq!(classify(&g), Some(Outcome::HomeExtended), "{tag}");
        }
    }

    #[test]
    fn extended_away_win_and_level_score() {
        let g = GameRecord::new("A", "B", 1, 2, "ENDED_DURING_EXTENDED_GAME_TIME");
        assert_eq!(classify(&g), Some(Outcome::AwayExtended));

        let g = GameRecord::new("A", "B", 2, 2, "ENDED_DURING_WINNING_SHOT_COMPETITION");
        assert_eq!(classify(&g), Some(Outcome::AwayExtended));
    }

    #[test]
    fn regulation_tie_has_no_outcome() {
        let g = GameRecord::new("A", "B", 2, 2, "ENDED_DURING_REGULAR_GAME_TIME");
        assert_eq!(classify(&g), None);
    }

    #[test]
    fn points_always_sum_to_three() {
        for o in [Outcome::HomeRegulation, Outcome::AwayRegulation, Outcome::HomeExtended, Outcome::AwayExtended] {
            let (h, a) = o.points();
            assert_eq!(h + a, 3);
            assert_eq!(o.home_won(), h > a);
        }
    }
}
