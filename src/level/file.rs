//! Level file loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable level files, so a
//! custom level can be played with `samurai-rescue my_level.ron`.
//! Everything loaded from disk is validated against sane limits before it
//! reaches the assembler.

use std::fs;
use std::path::Path;

use super::LevelData;

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum placements of any single kind
    pub const MAX_PLACEMENTS: usize = 4096;
    /// Maximum coordinate magnitude (prevents overflow issues)
    pub const MAX_COORD: f32 = 1_000_000.0;
    /// Maximum string length for names and messages
    pub const MAX_STRING_LEN: usize = 256;
}

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::ParseError(e)
    }
}

impl From<ron::Error> for LevelError {
    fn from(e: ron::Error) -> Self {
        LevelError::SerializeError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::IoError(e) => write!(f, "IO error: {}", e),
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
            LevelError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            LevelError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// Load and validate a level from a RON file.
pub fn load_level_file(path: &Path) -> Result<LevelData, LevelError> {
    let text = fs::read_to_string(path)?;
    load_level_str(&text)
}

/// Parse and validate a level from RON text.
pub fn load_level_str(text: &str) -> Result<LevelData, LevelError> {
    let level: LevelData = ron::from_str(text)?;
    validate(&level)?;
    Ok(level)
}

/// Save a level as pretty-printed RON.
pub fn save_level_file(path: &Path, level: &LevelData) -> Result<(), LevelError> {
    let text = ron::ser::to_string_pretty(level, ron::ser::PrettyConfig::default())?;
    fs::write(path, text)?;
    Ok(())
}

fn check_coord(what: &str, value: f32) -> Result<(), LevelError> {
    if !value.is_finite() || value.abs() > limits::MAX_COORD {
        return Err(LevelError::ValidationError(format!(
            "{what} coordinate {value} out of range"
        )));
    }
    Ok(())
}

fn check_count(what: &str, count: usize) -> Result<(), LevelError> {
    if count > limits::MAX_PLACEMENTS {
        return Err(LevelError::ValidationError(format!(
            "too many {what}: {count} (max {})",
            limits::MAX_PLACEMENTS
        )));
    }
    Ok(())
}

/// Reject levels with out-of-range numbers or absurd placement counts.
pub fn validate(level: &LevelData) -> Result<(), LevelError> {
    if level.name.len() > limits::MAX_STRING_LEN {
        return Err(LevelError::ValidationError("level name too long".into()));
    }
    if level.width <= 0.0 || level.height <= 0.0 {
        return Err(LevelError::ValidationError(
            "level bounds must be positive".into(),
        ));
    }
    check_coord("width", level.width)?;
    check_coord("height", level.height)?;
    check_coord("start.x", level.start.x)?;
    check_coord("start.y", level.start.y)?;

    check_count("platforms", level.platforms.len())?;
    check_count("moving platforms", level.moving_platforms.len())?;
    check_count("walls", level.walls.len())?;
    check_count("coins", level.coins.len())?;
    check_count("melee enemies", level.melee_enemies.len())?;
    check_count("ranged enemies", level.ranged_enemies.len())?;
    check_count("spikes", level.spikes.len())?;
    check_count("health packs", level.health_packs.len())?;
    check_count("checkpoints", level.checkpoints.len())?;
    check_count("messages", level.messages.len())?;

    for message in &level.messages {
        if message.text.len() > limits::MAX_STRING_LEN {
            return Err(LevelError::ValidationError("message too long".into()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::data::campaign;
    use crate::level::point;

    #[test]
    fn test_campaign_levels_all_validate() {
        for level in campaign() {
            validate(&level).unwrap_or_else(|e| panic!("{}: {}", level.name, e));
        }
    }

    #[test]
    fn test_round_trip_through_ron_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.ron");
        let original = campaign().remove(0);

        save_level_file(&path, &original).unwrap();
        let loaded = load_level_file(&path).unwrap();

        assert_eq!(loaded.name, original.name);
        assert_eq!(loaded.width, original.width);
        assert_eq!(loaded.coins.len(), original.coins.len());
        assert_eq!(loaded.spikes.len(), original.spikes.len());
        assert_eq!(loaded.messages.len(), original.messages.len());
    }

    #[test]
    fn test_rejects_nonpositive_bounds() {
        let mut level = campaign().remove(0);
        level.width = 0.0;
        assert!(matches!(
            validate(&level),
            Err(LevelError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_absurd_coordinates() {
        let mut level = campaign().remove(0);
        level.start = point(5e7, 0.0);
        assert!(validate(&level).is_err());
    }

    #[test]
    fn test_rejects_placement_flood() {
        let mut level = campaign().remove(0);
        level.coins = vec![point(0.0, 0.0); limits::MAX_PLACEMENTS + 1];
        assert!(validate(&level).is_err());
    }

    #[test]
    fn test_parse_error_reported() {
        assert!(matches!(
            load_level_str("not ron at all ("),
            Err(LevelError::ParseError(_))
        ));
    }
}
