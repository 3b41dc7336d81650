use super::tables::{FEDERAL_BRACKETS, STANDARD_DEDUCTION};
use super::types::{StateTaxPolicy, TaxBracket};

/// Marginal tax on `income - deduction` over contiguous ascending brackets.
///
/// Width is measured from the previous bracket's `max`, so a bracket's `max`
/// is the last dollar taxed at its rate. The open top bracket takes whatever
/// taxable income remains.
pub fn compute_bracket_tax(income: f64, brackets: &[TaxBracket], deduction: f64) -> f64 {
    let taxable = (income.max(0.0) - deduction.max(0.0)).max(0.0);
    let mut tax = 0.0;
    let mut previous_max = 0.0;

    for bracket in brackets {
        if taxable <= previous_max {
            break;
        }

        let remaining = taxable - previous_max;
        let in_bracket = match bracket.max {
            Some(max) => remaining.min(max - previous_max),
            None => remaining,
        };
        tax += in_bracket * bracket.rate;

        match bracket.max {
            Some(max) if taxable > max => previous_max = max,
            _ => break,
        }
    }

    tax
}

/// Statutory rate applied to the next dollar of taxable income.
pub fn marginal_bracket_rate(income: f64, brackets: &[TaxBracket], deduction: f64) -> f64 {
    let taxable = income.max(0.0) - deduction.max(0.0);
    if taxable < 0.0 {
        return 0.0;
    }
    brackets
        .iter()
        .find(|bracket| bracket.max.is_none_or(|max| taxable < max))
        .map(|bracket| bracket.rate)
        .unwrap_or(0.0)
}

pub fn federal_tax(income: f64) -> f64 {
    compute_bracket_tax(income, &FEDERAL_BRACKETS, STANDARD_DEDUCTION)
}

/// State brackets are defined over raw income; no deduction is applied.
pub fn state_tax(policy: &StateTaxPolicy, income: f64) -> f64 {
    let gross = income.max(0.0);
    match policy {
        StateTaxPolicy::None | StateTaxPolicy::CapitalGainsOnly { .. } => 0.0,
        StateTaxPolicy::Flat { rate } => gross * rate,
        StateTaxPolicy::Progressive { brackets } => compute_bracket_tax(gross, brackets, 0.0),
    }
}
