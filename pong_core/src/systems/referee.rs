use crate::{Config, MatchState, Phase, Side};

/// Result of the end-of-tick check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Continues,
    Finished(Side),
}

/// Observe the post-physics score and finish the match once a side reaches
/// the winning score. Points are awarded by the goal-line check, never here.
pub fn check_end(state: &mut MatchState, config: &Config) -> MatchOutcome {
    match state.score.has_winner(config.win_score) {
        Some(winner) => {
            state.phase = Phase::Finished;
            MatchOutcome::Finished(winner)
        }
        None => MatchOutcome::Continues,
    }
}
