use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use thiserror::Error;

use super::credits::CreditId;

/// One marginal band. `max == None` is the open-ended top band.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct TaxBracket {
    pub min: f64,
    pub max: Option<f64>,
    pub rate: f64,
}

impl TaxBracket {
    pub const fn bounded(min: f64, max: f64, rate: f64) -> Self {
        Self {
            min,
            max: Some(max),
            rate,
        }
    }

    pub const fn open(min: f64, rate: f64) -> Self {
        Self {
            min,
            max: None,
            rate,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StateTaxPolicy {
    None,
    Flat { rate: f64 },
    Progressive { brackets: &'static [TaxBracket] },
    /// Washington-style tax on capital gains; wage income is never taxed.
    CapitalGainsOnly { rate: f64, threshold: f64 },
}

impl StateTaxPolicy {
    pub fn policy_type(&self) -> &'static str {
        match self {
            StateTaxPolicy::None => "none",
            StateTaxPolicy::Flat { .. } => "flat",
            StateTaxPolicy::Progressive { .. } => "progressive",
            StateTaxPolicy::CapitalGainsOnly { .. } => "capital_gains_only",
        }
    }

    pub fn label(&self) -> String {
        match self {
            StateTaxPolicy::None => "(No Income Tax)".to_string(),
            StateTaxPolicy::Flat { rate } => format!("(Flat {:.2}%)", rate * 100.0),
            StateTaxPolicy::Progressive { .. } => "(Progressive)".to_string(),
            StateTaxPolicy::CapitalGainsOnly { .. } => "(Capital Gains Only)".to_string(),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Jurisdiction {
    pub name: &'static str,
    pub policy: StateTaxPolicy,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TaxError {
    #[error("unknown jurisdiction: {0}")]
    UnknownJurisdiction(String),
    #[error("income ceiling must be a finite number > 0, got {0}")]
    InvalidIncomeCeiling(f64),
}

/// Snapshot of everything a recomputation depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub jurisdiction: String,
    pub income_ceiling: f64,
    pub show_danger_zones: bool,
    pub enabled_credits: BTreeSet<CreditId>,
    pub dependents: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomePoint {
    pub gross_income: f64,
    pub federal_tax: f64,
    pub state_tax: f64,
    pub total_tax: f64,
    pub credits: f64,
    pub net_income: f64,
    pub effective_rate: f64,
    /// Average total rate (`total_tax / gross_income`), kept under this name
    /// for existing consumers.
    pub marginal_rate: f64,
    pub credit_breakdown: BTreeMap<CreditId, f64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneLoss {
    pub income: f64,
    pub net_loss: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DangerZone {
    pub start: f64,
    pub end: f64,
    pub start_net: f64,
    pub end_net: f64,
    pub losses: Vec<ZoneLoss>,
}

impl DangerZone {
    pub fn peak_loss(&self) -> f64 {
        self.losses
            .iter()
            .map(|loss| loss.net_loss)
            .fold(0.0, f64::max)
    }

    /// Income of the first sample that reaches the peak loss.
    pub fn peak_income(&self) -> f64 {
        let peak = self.peak_loss();
        self.losses
            .iter()
            .find(|loss| loss.net_loss == peak)
            .map(|loss| loss.income)
            .unwrap_or(self.end)
    }

    pub fn total_loss(&self) -> f64 {
        self.start_net - self.end_net
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Visualization {
    pub points: Vec<IncomePoint>,
    pub danger_zones: Vec<DangerZone>,
}
