//! Load configuration.
//!
//! All settings are passed explicitly into the load call; there is no shared
//! mutable settings object. The region precedence rule lives in
//! [`RegionSelection::mode`] as an explicit branch.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Region include/exclude lists controlling which faces survive filtering.
///
/// The two lists are mutually exclusive in intent: a non-empty `include`
/// takes precedence and `remove` is ignored. Callers must not supply both
/// meaningfully; the precedence is documented, not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSelection {
    /// Region tags whose faces are dropped (used only when `include` is empty).
    pub remove: Vec<i32>,

    /// Region tags whose faces are kept; everything else is dropped.
    pub include: Vec<i32>,
}

/// The effective filtering mode for a [`RegionSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionMode<'a> {
    /// Keep only faces whose region tag is in the list.
    Include(&'a [i32]),
    /// Keep faces whose region tag is not in the list.
    Remove(&'a [i32]),
    /// Keep every face.
    All,
}

impl RegionSelection {
    /// Resolves the include/remove precedence into a single mode.
    pub fn mode(&self) -> RegionMode<'_> {
        if !self.include.is_empty() {
            RegionMode::Include(&self.include)
        } else if !self.remove.is_empty() {
            RegionMode::Remove(&self.remove)
        } else {
            RegionMode::All
        }
    }

    /// Returns whether a face with the given region tag survives filtering.
    pub fn keeps(&self, region: i32) -> bool {
        match self.mode() {
            RegionMode::Include(include) => include.contains(&region),
            RegionMode::Remove(remove) => !remove.contains(&region),
            RegionMode::All => true,
        }
    }
}

/// A source/target unit pair for one rescale step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRescale {
    /// Unit the source data is expressed in.
    pub from: String,
    /// Unit the output should be expressed in.
    pub to: String,
}

impl UnitRescale {
    /// Creates a rescale from `from` units to `to` units.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Configuration for one load operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Region filtering lists (see [`RegionSelection`]).
    pub regions: RegionSelection,

    /// Optional rescale applied to node coordinates.
    pub length_units: Option<UnitRescale>,

    /// Optional rescale applied to the first imported result column.
    pub pressure_units: Option<UnitRescale>,
}

impl LoadConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the configuration to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Non-empty include list wins over remove.
    #[test]
    fn test_include_precedence() {
        let selection = RegionSelection {
            remove: vec![3],
            include: vec![7, 4],
        };
        assert_eq!(selection.mode(), RegionMode::Include(&[7, 4][..]));
        assert!(selection.keeps(7));
        assert!(selection.keeps(4));
        assert!(!selection.keeps(3));
        // Region 3 is in remove, but include wins; 5 is simply not included.
        assert!(!selection.keeps(5));
    }

    /// Remove list applies when include is empty.
    #[test]
    fn test_remove_mode() {
        let selection = RegionSelection {
            remove: vec![3],
            include: vec![],
        };
        assert_eq!(selection.mode(), RegionMode::Remove(&[3][..]));
        assert!(!selection.keeps(3));
        assert!(selection.keeps(5));
    }

    /// Empty lists keep everything.
    #[test]
    fn test_no_op_selection() {
        let selection = RegionSelection::default();
        assert_eq!(selection.mode(), RegionMode::All);
        assert!(selection.keeps(0));
        assert!(selection.keeps(-1));
        assert!(selection.keeps(42));
    }

    /// Config round-trips through JSON.
    #[test]
    fn test_config_json_round_trip() {
        let config = LoadConfig {
            regions: RegionSelection {
                remove: vec![],
                include: vec![7, 4],
            },
            length_units: Some(UnitRescale::new("m", "in")),
            pressure_units: Some(UnitRescale::new("Pa", "psi")),
        };

        let text = config.to_json().expect("serialize failed");
        let parsed = LoadConfig::from_json(&text).expect("parse failed");

        assert_eq!(parsed.regions, config.regions);
        assert_eq!(parsed.length_units, config.length_units);
        assert_eq!(parsed.pressure_units, config.pressure_units);
    }

    /// Unknown JSON is a Json error, not a panic.
    #[test]
    fn test_config_bad_json() {
        assert!(LoadConfig::from_json("not json").is_err());
    }
}
