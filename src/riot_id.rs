use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// A player identifier of the form `GameName#Tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl FromStr for RiotId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("Please enter a Riot ID".to_string()));
        }

        let (game_name, tag_line) = trimmed.split_once('#').ok_or(AppError::InvalidRiotId)?;
        let (game_name, tag_line) = (game_name.trim(), tag_line.trim());
        if game_name.is_empty() || tag_line.is_empty() {
            return Err(AppError::InvalidRiotId);
        }

        Ok(RiotId {
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
        })
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}
