//! Reference data for an MHN network: years, zone ranges, time-of-day
//! periods and project catalogs.
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! base_year = 2010
//! min_node_id = 5001
//! max_node_id = 29999
//!
//! [bus_years]
//! base = 2015
//! current = 2016
//!
//! [centroid_ranges]
//! CBD = [1, 48]
//! POE = [1945, 1962]
//!
//! [scenario_years]
//! "100" = 2015
//! "200" = 2020
//!
//! [tod_periods.3]
//! label = "7AM-9AM"
//! query = '"STARTHOUR" IN (7, 8)'
//!
//! [projects.mcps]
//! "100002" = "I-190 Access Improvements"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read reference config: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse reference config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid reference config: {0}")]
    Invalid(String),
}

/// Half-open range of zone ids, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u32; 2]", into = "[u32; 2]")]
pub struct ZoneRange {
    pub start: u32,
    pub end: u32,
}

impl ZoneRange {
    pub fn contains(&self, zone: u32) -> bool {
        (self.start..self.end).contains(&zone)
    }

    /// Largest id in the range.
    pub fn last(&self) -> u32 {
        self.end - 1
    }
}

impl TryFrom<[u32; 2]> for ZoneRange {
    type Error = String;

    fn try_from([start, end]: [u32; 2]) -> Result<Self, Self::Error> {
        if start >= end {
            return Err(format!("empty zone range [{}, {})", start, end));
        }
        Ok(Self { start, end })
    }
}

impl From<ZoneRange> for [u32; 2] {
    fn from(range: ZoneRange) -> Self {
        [range.start, range.end]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusYears {
    pub base: u16,
    pub current: u16,
}

/// A named time-of-day window. `query` is an opaque filter expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodPeriod {
    pub label: String,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConfig {
    pub base_year: u16,
    pub min_node_id: u32,
    pub max_node_id: u32,
    pub bus_years: BusYears,
    #[serde(default)]
    pub centroid_ranges: BTreeMap<String, ZoneRange>,
    #[serde(default)]
    pub scenario_years: BTreeMap<String, u16>,
    #[serde(default)]
    pub tod_periods: BTreeMap<String, TodPeriod>,
    #[serde(default)]
    pub projects: BTreeMap<String, BTreeMap<String, String>>,
}

impl ReferenceConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ReferenceConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_toml_str(&fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            scenarios = config.scenario_years.len(),
            zone_ranges = config.centroid_ranges.len(),
            "loaded reference config"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_node_id > self.max_node_id {
            return Err(ConfigError::Invalid(format!(
                "min_node_id {} exceeds max_node_id {}",
                self.min_node_id, self.max_node_id
            )));
        }
        Ok(())
    }

    /// Earliest scenario year.
    pub fn min_year(&self) -> Option<u16> {
        self.scenario_years.values().copied().min()
    }

    /// Latest scenario year.
    pub fn max_year(&self) -> Option<u16> {
        self.scenario_years.values().copied().max()
    }

    pub fn scenario_year(&self, scenario: &str) -> Option<u16> {
        self.scenario_years.get(scenario).copied()
    }

    pub fn zone_range(&self, name: &str) -> Option<ZoneRange> {
        self.centroid_ranges.get(name).copied()
    }

    pub fn is_zone(&self, name: &str, zone: u32) -> bool {
        self.zone_range(name).is_some_and(|range| range.contains(zone))
    }

    /// First and last point-of-entry zone.
    pub fn poe_range(&self) -> Option<(u32, u32)> {
        self.zone_range("POE").map(|range| (range.start, range.last()))
    }

    /// Whether `node` falls in the id block reserved for regular network nodes.
    pub fn is_network_node(&self, node: u32) -> bool {
        (self.min_node_id..=self.max_node_id).contains(&node)
    }

    pub fn tod_period(&self, code: &str) -> Option<&TodPeriod> {
        self.tod_periods.get(code)
    }

    pub fn project_name(&self, catalog: &str, project_id: &str) -> Option<&str> {
        self.projects
            .get(catalog)
            .and_then(|projects| projects.get(project_id))
            .map(String::as_str)
    }
}

impl FromStr for ReferenceConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}
