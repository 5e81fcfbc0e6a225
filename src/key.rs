//! Stable storage keys for puzzle instances
//!
//! A wrong key silently merges two unrelated puzzles' saved progress, so key
//! building fails loudly instead of defaulting when the identifying field for
//! the requested kind is missing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of puzzle identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleKind {
    /// Calendar-date puzzle, one per day
    Daily,
    /// Puzzle generated from a shareable seed
    Seed,
    /// Player-built level identified by its level code
    Custom,
}

impl PuzzleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PuzzleKind::Daily => "daily",
            PuzzleKind::Seed => "seed",
            PuzzleKind::Custom => "custom",
        }
    }
}

/// Identifying info for a puzzle. Exactly one field is required, matching the
/// kind the key is built for.
#[derive(Debug, Clone, Default)]
pub struct PuzzleKeyInfo {
    pub date_ymd: Option<String>,
    pub seed: Option<String>,
    pub level_code: Option<String>,
}

/// Key building errors. These indicate a caller bug and are never swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// The identifying field required by the kind is missing or empty.
    #[error("{kind} key requires a non-empty {field}")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
}

/// Build the stable string identity for a puzzle instance.
///
/// Pure and deterministic: `daily:<ymd>`, `seed:<seed>` or `level:<code>`.
pub fn make_puzzle_key(kind: PuzzleKind, info: &PuzzleKeyInfo) -> Result<String, KeyError> {
    match kind {
        PuzzleKind::Daily => {
            let ymd = require(&info.date_ymd, kind, "date_ymd")?;
            Ok(format!("daily:{ymd}"))
        }
        PuzzleKind::Seed => {
            let seed = require(&info.seed, kind, "seed")?;
            Ok(format!("seed:{seed}"))
        }
        PuzzleKind::Custom => {
            let code = require(&info.level_code, kind, "level_code")?;
            Ok(format!("level:{code}"))
        }
    }
}

fn require<'a>(
    value: &'a Option<String>,
    kind: PuzzleKind,
    field: &'static str,
) -> Result<&'a str, KeyError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(KeyError::MissingField {
            kind: kind.as_str(),
            field,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_puzzle_key_all_kinds() {
        let info = PuzzleKeyInfo {
            date_ymd: Some("2025-12-21".into()),
            ..Default::default()
        };
        assert_eq!(
            make_puzzle_key(PuzzleKind::Daily, &info).unwrap(),
            "daily:2025-12-21"
        );

        let info = PuzzleKeyInfo {
            seed: Some("123".into()),
            ..Default::default()
        };
        assert_eq!(make_puzzle_key(PuzzleKind::Seed, &info).unwrap(), "seed:123");

        let info = PuzzleKeyInfo {
            level_code: Some("abc".into()),
            ..Default::default()
        };
        assert_eq!(
            make_puzzle_key(PuzzleKind::Custom, &info).unwrap(),
            "level:abc"
        );
    }

    #[test]
    fn test_missing_field_errors_name_the_field() {
        let err = make_puzzle_key(PuzzleKind::Daily, &PuzzleKeyInfo::default()).unwrap_err();
        assert_eq!(
            err,
            KeyError::MissingField {
                kind: "daily",
                field: "date_ymd"
            }
        );
        assert_eq!(err.to_string(), "daily key requires a non-empty date_ymd");

        // The field for another kind does not satisfy the requested kind
        let info = PuzzleKeyInfo {
            date_ymd: Some("2025-12-21".into()),
            ..Default::default()
        };
        assert!(make_puzzle_key(PuzzleKind::Seed, &info).is_err());
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let info = PuzzleKeyInfo {
            seed: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            make_puzzle_key(PuzzleKind::Seed, &info).unwrap_err(),
            KeyError::MissingField {
                kind: "seed",
                field: "seed"
            }
        );
    }

    #[test]
    fn test_kind_serde_names() {
        assert_eq!(serde_json::to_string(&PuzzleKind::Daily).unwrap(), "\"daily\"");
        assert_eq!(
            serde_json::from_str::<PuzzleKind>("\"custom\"").unwrap(),
            PuzzleKind::Custom
        );
        assert!(serde_json::from_str::<PuzzleKind>("\"weekly\"").is_err());
    }
}
