use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while selecting a difficulty level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("invalid difficulty level number: {0} (expected 1, 2 or 3)")]
    InvalidNumber(u8),
    #[error("unknown difficulty level: {0:?}")]
    Unknown(String),
}

//
// ─── DIFFICULTY LEVEL ─────────────────────────────────────────────────────────
//

/// Coarse setting controlling the magnitude of generated operands.
///
/// - `Easy`: single digits, 0 to 9
/// - `Moderate`: two digits, 10 to 99
/// - `Advanced`: four digits, 1000 to 9999
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Moderate,
    Advanced,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [Self::Easy, Self::Moderate, Self::Advanced];

    /// Converts a menu number (1-3) to a `DifficultyLevel`.
    ///
    /// # Errors
    ///
    /// Returns `LevelError::InvalidNumber` if the value is not in the range 1-3.
    pub fn from_u8(value: u8) -> Result<Self, LevelError> {
        match value {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Moderate),
            3 => Ok(Self::Advanced),
            _ => Err(LevelError::InvalidNumber(value)),
        }
    }

    /// Menu number for this level, the inverse of [`DifficultyLevel::from_u8`].
    #[must_use]
    pub fn to_u8(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Moderate => 2,
            Self::Advanced => 3,
        }
    }

    /// Inclusive bounds operands are drawn from.
    #[must_use]
    pub fn operand_range(self) -> RangeInclusive<i64> {
        match self {
            Self::Easy => 0..=9,
            Self::Moderate => 10..=99,
            Self::Advanced => 1000..=9999,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Advanced => "advanced",
        }
    }

    /// Menu label including the operand range, e.g. `Easy (0 - 9)`.
    #[must_use]
    pub fn label(self) -> String {
        let range = self.operand_range();
        let title = match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Advanced => "Advanced",
        };
        format!("{title} ({} - {})", range.start(), range.end())
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DifficultyLevel {
    type Err = LevelError;

    /// Accepts a level name (case-insensitive) or its menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Self::from_u8(number);
        }
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LevelError::Unknown(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_match_levels() {
        assert_eq!(DifficultyLevel::Easy.operand_range(), 0..=9);
        assert_eq!(DifficultyLevel::Moderate.operand_range(), 10..=99);
        assert_eq!(DifficultyLevel::Advanced.operand_range(), 1000..=9999);
    }

    #[test]
    fn parses_names_and_numbers() {
        assert_eq!("easy".parse::<DifficultyLevel>(), Ok(DifficultyLevel::Easy));
        assert_eq!(" Moderate ".parse::<DifficultyLevel>(), Ok(DifficultyLevel::Moderate));
        assert_eq!("ADVANCED".parse::<DifficultyLevel>(), Ok(DifficultyLevel::Advanced));
        assert_eq!("2".parse::<DifficultyLevel>(), Ok(DifficultyLevel::Moderate));

        for level in DifficultyLevel::ALL {
            assert_eq!(DifficultyLevel::from_u8(level.to_u8()), Ok(level));
        }
    }

    #[test]
    fn rejects_unknown_levels() {
        assert_eq!(
            "0".parse::<DifficultyLevel>(),
            Err(LevelError::InvalidNumber(0))
        );
        assert_eq!(
            "expert".parse::<DifficultyLevel>(),
            Err(LevelError::Unknown("expert".to_string()))
        );
    }

    #[test]
    fn label_shows_bounds() {
        assert_eq!(DifficultyLevel::Easy.label(), "Easy (0 - 9)");
        assert_eq!(DifficultyLevel::Advanced.label(), "Advanced (1000 - 9999)");
    }
}
