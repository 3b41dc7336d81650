use super::credits::compute_credits;
use super::tables::lookup_jurisdiction;
use super::tax::{federal_tax, state_tax};
use super::types::{IncomePoint, Selection, TaxError};

pub const SERIES_STEPS: u32 = 1_000;

pub fn generate_series(selection: &Selection) -> Result<Vec<IncomePoint>, TaxError> {
    let jurisdiction = lookup_jurisdiction(&selection.jurisdiction)
        .ok_or_else(|| TaxError::UnknownJurisdiction(selection.jurisdiction.clone()))?;
    let ceiling = selection.income_ceiling;
    if !ceiling.is_finite() || ceiling <= 0.0 {
        return Err(TaxError::InvalidIncomeCeiling(ceiling));
    }

    let step = ceiling / SERIES_STEPS as f64;
    let points = (0..=SERIES_STEPS)
        .map(|i| {
            let income = i as f64 * step;
            let federal = federal_tax(income);
            let state = state_tax(&jurisdiction.policy, income);
            let total = federal + state;
            let credits = compute_credits(&selection.enabled_credits, income, selection.dependents);
            let net = income - total + credits.total;

            let (effective_rate, marginal_rate) = if income > 0.0 {
                (
                    round_rate((federal + state) / income * 100.0),
                    round_rate(total / income * 100.0),
                )
            } else {
                (0.0, 0.0)
            };

            IncomePoint {
                gross_income: round_dollars(income),
                federal_tax: round_dollars(federal),
                state_tax: round_dollars(state),
                total_tax: round_dollars(total),
                credits: round_dollars(credits.total),
                net_income: round_dollars(net),
                effective_rate,
                marginal_rate,
                credit_breakdown: credits.breakdown,
            }
        })
        .collect();

    Ok(points)
}

/// Nearest whole dollar, halves rounded up.
fn round_dollars(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Percentage to two decimals, kept numeric rather than a formatted string.
/// Halves round away from zero; rates here are never negative.
fn round_rate(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::credits::CreditId;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
    use std::collections::BTreeSet;

    fn selection(state: &str, ceiling: f64, credits: &[CreditId], dependents: u32) -> Selection {
        Selection {
            jurisdiction: state.to_string(),
            income_ceiling: ceiling,
            show_danger_zones: true,
            enabled_credits: credits.iter().copied().collect::<BTreeSet<_>>(),
            dependents,
        }
    }

    #[test]
    fn series_has_1001_points_from_zero_to_ceiling() {
        let points = generate_series(&selection("Texas", 250_000.0, &[], 0)).expect("series");
        assert_eq!(points.len(), 1_001);
        assert_eq!(points[0].gross_income, 0.0);
        assert_eq!(points[1].gross_income, 250.0);
        assert_eq!(points[1_000].gross_income, 250_000.0);
    }

    #[test]
    fn zero_income_point_has_zero_rates() {
        let points =
            generate_series(&selection("California", 100_000.0, &[CreditId::Medicaid], 0))
                .expect("series");
        let first = &points[0];
        assert_eq!(first.total_tax, 0.0);
        assert_eq!(first.effective_rate, 0.0);
        assert_eq!(first.marginal_rate, 0.0);
        assert_eq!(first.credits, 8_000.0);
        assert_eq!(first.net_income, 8_000.0);
    }

    #[test]
    fn oracle_point_combines_federal_state_and_credits() {
        // Colorado, step 100; sample 500 is 50,000 gross.
        let points = generate_series(&selection(
            "Colorado",
            100_000.0,
            &[CreditId::StudentLoanInterest],
            0,
        ))
        .expect("series");
        let p = &points[500];
        assert_eq!(p.gross_income, 50_000.0);
        assert_eq!(p.federal_tax, 3_820.0);
        assert_eq!(p.state_tax, 2_200.0);
        assert_eq!(p.total_tax, 6_020.0);
        assert_eq!(p.credits, 2_500.0);
        assert_eq!(p.net_income, 50_000.0 - 6_020.0 + 2_500.0);
        assert_eq!(p.effective_rate, 12.04);
        assert_eq!(p.marginal_rate, 12.04);
        assert_eq!(p.credit_breakdown.len(), 1);
    }

    #[test]
    fn disabled_credits_are_absent_from_breakdown() {
        let points = generate_series(&selection("Texas", 50_000.0, &[], 2)).expect("series");
        assert!(points.iter().all(|p| p.credit_breakdown.is_empty() && p.credits == 0.0));
    }

    #[test]
    fn unknown_jurisdiction_is_rejected() {
        let err = generate_series(&selection("Atlantis", 100_000.0, &[], 0))
            .expect_err("must reject unknown jurisdiction");
        assert_eq!(err, TaxError::UnknownJurisdiction("Atlantis".to_string()));
    }

    #[test]
    fn non_positive_ceiling_is_rejected() {
        for ceiling in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let err = generate_series(&selection("Texas", ceiling, &[], 0))
                .expect_err("must reject invalid ceiling");
            assert!(matches!(err, TaxError::InvalidIncomeCeiling(_)));
        }
    }

    #[test]
    fn rounding_matches_half_up_currency_rounding() {
        assert_eq!(round_dollars(2.5), 3.0);
        assert_eq!(round_dollars(2.4999), 2.0);
        assert_eq!(round_rate(12.345_6), 12.35);
        assert_eq!(round_rate(7.0), 7.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(16))]

        #[test]
        fn prop_regeneration_is_identical(
            idx in 0usize..51,
            ceiling_steps in 5u32..101,
            credit_mask in 0u8..64,
            dependents in 0u32..6
        ) {
            let credits: Vec<CreditId> = CreditId::ALL
                .into_iter()
                .enumerate()
                .filter(|(bit, _)| credit_mask & (1 << bit) != 0)
                .map(|(_, id)| id)
                .collect();
            let name = crate::core::tables::JURISDICTIONS[idx].name;
            let sel = selection(name, ceiling_steps as f64 * 10_000.0, &credits, dependents);

            let first = generate_series(&sel).expect("series");
            let second = generate_series(&sel).expect("series");
            prop_assert_eq!(first.len(), 1_001);
            prop_assert!(first == second);
        }

        #[test]
        fn prop_without_credits_net_never_exceeds_gross(
            idx in 0usize..51,
            ceiling_steps in 5u32..101
        ) {
            let name = crate::core::tables::JURISDICTIONS[idx].name;
            let points = generate_series(&selection(name, ceiling_steps as f64 * 10_000.0, &[], 0))
                .expect("series");
            for p in &points {
                prop_assert!(p.net_income <= p.gross_income);
                prop_assert!(p.total_tax >= 0.0);
            }
        }
    }
}
