//! Column names and values the pipeline expects in the match dataset.

pub const DATE: &str = "Date";
pub const OPPONENT: &str = "Opponent";
pub const TEAM_SCORE: &str = "Team Score";
pub const OPPONENT_SCORE: &str = "Opponent Score";
pub const RESULT: &str = "Result";

/// Derived columns added by the visualization stage.
pub const TEAM_SCORE_JITTERED: &str = "Team Score Jittered";
pub const OPPONENT_SCORE_JITTERED: &str = "Opponent Score Jittered";

/// The `Result` value identifying a won match.
pub const WIN: &str = "Win";
