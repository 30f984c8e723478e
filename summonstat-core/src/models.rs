use serde::{Deserialize, Serialize};

use crate::error::{Result, SummonError};

/// As of 2025-12-18 the game has 121 cards; more heroes than that is implausible.
pub const KNOWN_CARD_COUNT: u32 = 121;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummonParams {
    pub summons: u32,
    pub heroes: u32,
}

impl SummonParams {
    pub fn new(summons: u32, heroes: u32) -> Result<Self> {
        validate_params(summons, heroes)?;
        Ok(Self { summons, heroes })
    }

    /// Largest achievable number of unique heroes.
    pub fn max_unique(&self) -> u32 {
        self.summons.min(self.heroes)
    }

    pub fn exceeds_card_count(&self, limit: u32) -> bool {
        self.heroes > limit
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub min_unique: u32,
    pub max_unique: u32,
    pub mean: f64,
    pub variance: f64,
    pub mode: u32,
    /// n(1 - (1 - 1/n)^m), computed independently of the table.
    pub expected_closed_form: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub k: u32,
    pub probability: f64,
    pub at_least: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionReport {
    pub summons: u32,
    pub heroes: u32,
    pub summary: DistributionSummary,
    pub entries: Vec<DistributionEntry>,
}

pub fn validate_params(summons: u32, heroes: u32) -> Result<()> {
    if summons == 0 {
        return Err(SummonError::InvalidArgument(
            "number of summons must be at least 1".to_string(),
        ));
    }
    if heroes == 0 {
        return Err(SummonError::InvalidArgument(
            "number of heroes must be at least 1".to_string(),
        ));
    }
    Ok(())
}
