//! Request checks shared by the quiz rounds.

use optiquiz_config::BoardConfig;
use optiquiz_core::{QuizError, Result};

/// Checks a requested board side against the configured range.
pub fn validate_board_side(n: u32, board: &BoardConfig) -> Result<u32> {
    if !(board.min_n..=board.max_n).contains(&n) {
        return Err(QuizError::Validation(format!(
            "N must be between {} and {}",
            board.min_n, board.max_n
        )));
    }
    Ok(n)
}

/// Trims a player name and requires ASCII letters and spaces only.
///
/// # Example
///
/// ```
/// use optiquiz::validation::validate_player_name;
///
/// assert_eq!(validate_player_name("  Ada Lovelace ").unwrap(), "Ada Lovelace");
/// assert!(validate_player_name("R2D2").is_err());
/// ```
pub fn validate_player_name(name: &str) -> Result<&str> {
    let name = require_non_empty(name, "Player name is required")?;
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(QuizError::Validation(
            "Player name must contain only letters".into(),
        ));
    }
    Ok(name)
}

/// Trims `value`, failing with `message` if nothing is left.
pub fn require_non_empty<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(QuizError::Validation(message.to_string()));
    }
    Ok(value)
}
