mod credits;
mod series;
mod tables;
mod tax;
mod traps;
mod types;

pub use credits::{
    CreditId, CreditTotals, EitcSchedule, child_tax_credit, compute_credits, earned_income_credit,
    eitc_schedule, medicaid_value, poverty_line, premium_subsidy, savers_credit,
    student_loan_interest,
};
pub use series::{SERIES_STEPS, generate_series};
pub use tables::{FEDERAL_BRACKETS, JURISDICTIONS, STANDARD_DEDUCTION, lookup_jurisdiction};
pub use tax::{compute_bracket_tax, federal_tax, marginal_bracket_rate, state_tax};
pub use traps::detect_danger_zones;
pub use types::{
    DangerZone, IncomePoint, Jurisdiction, Selection, StateTaxPolicy, TaxBracket, TaxError,
    Visualization, ZoneLoss,
};

/// Recomputes everything derived from `selection`. Zones are only scanned
/// when the selection asks for them.
pub fn run_visualization(selection: &Selection) -> Result<Visualization, TaxError> {
    let points = generate_series(selection)?;
    let danger_zones = if selection.show_danger_zones {
        detect_danger_zones(&points)
    } else {
        Vec::new()
    };
    Ok(Visualization {
        points,
        danger_zones,
    })
}
