//! Quadrant classification for creatives.
//!
//! A quadrant places a creative on the known/unknown grid. The wire form is
//! kebab-case (`known-unknown`); the legacy labels written by the earlier
//! tooling (`已知未知`, ...) are still accepted on input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    #[serde(alias = "已知已知")]
    KnownKnown,
    #[default]
    #[serde(alias = "已知未知")]
    KnownUnknown,
    #[serde(alias = "未知已知")]
    UnknownKnown,
    #[serde(alias = "未知未知")]
    UnknownUnknown,
}

impl Quadrant {
    /// Every quadrant, in grid order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::KnownKnown,
        Quadrant::KnownUnknown,
        Quadrant::UnknownKnown,
        Quadrant::UnknownUnknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Quadrant::KnownKnown => "known-known",
            Quadrant::KnownUnknown => "known-unknown",
            Quadrant::UnknownKnown => "unknown-known",
            Quadrant::UnknownUnknown => "unknown-unknown",
        }
    }

    /// Label used by documents created before the kebab-case labels.
    pub fn legacy_label(self) -> &'static str {
        match self {
            Quadrant::KnownKnown => "已知已知",
            Quadrant::KnownUnknown => "已知未知",
            Quadrant::UnknownKnown => "未知已知",
            Quadrant::UnknownUnknown => "未知未知",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quadrant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Quadrant::ALL
            .into_iter()
            .find(|q| q.as_str() == s || q.legacy_label() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Quadrant::ALL.iter().map(|q| q.as_str()).collect();
                CoreError::Validation(format!(
                    "Unknown quadrant: '{s}'. Valid quadrants: {}",
                    valid.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn default_is_known_unknown() {
        assert_eq!(Quadrant::default(), Quadrant::KnownUnknown);
    }

    #[test]
    fn parses_wire_labels() {
        for q in Quadrant::ALL {
            assert_eq!(q.as_str().parse::<Quadrant>().unwrap(), q);
        }
    }

    #[test]
    fn parses_legacy_labels() {
        assert_eq!("未知未知".parse::<Quadrant>().unwrap(), Quadrant::UnknownUnknown);
        assert_eq!("已知已知".parse::<Quadrant>().unwrap(), Quadrant::KnownKnown);
    }

    #[test]
    fn rejects_unknown_label() {
        assert_matches!("maybe-known".parse::<Quadrant>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_wrong_case() {
        assert!("Known-Unknown".parse::<Quadrant>().is_err());
    }

    #[test]
    fn serializes_kebab_case() {
        let json = serde_json::to_string(&Quadrant::UnknownKnown).unwrap();
        assert_eq!(json, "\"unknown-known\"");
    }

    #[test]
    fn deserializes_legacy_alias() {
        let q: Quadrant = serde_json::from_str("\"已知未知\"").unwrap();
        assert_eq!(q, Quadrant::KnownUnknown);
    }
}
