use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

const POVERTY_LINE_BASE: f64 = 15_060.0;
const POVERTY_LINE_PER_DEPENDENT: f64 = 5_380.0;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum CreditId {
    #[serde(rename = "aca_subsidy")]
    PremiumSubsidy,
    #[serde(rename = "eitc")]
    EarnedIncome,
    #[serde(rename = "ctc")]
    ChildTax,
    #[serde(rename = "student_loan_interest")]
    StudentLoanInterest,
    #[serde(rename = "medicaid")]
    Medicaid,
    #[serde(rename = "savers_credit")]
    Savers,
}

impl CreditId {
    pub const ALL: [CreditId; 6] = [
        CreditId::PremiumSubsidy,
        CreditId::EarnedIncome,
        CreditId::ChildTax,
        CreditId::StudentLoanInterest,
        CreditId::Medicaid,
        CreditId::Savers,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CreditId::PremiumSubsidy => "aca_subsidy",
            CreditId::EarnedIncome => "eitc",
            CreditId::ChildTax => "ctc",
            CreditId::StudentLoanInterest => "student_loan_interest",
            CreditId::Medicaid => "medicaid",
            CreditId::Savers => "savers_credit",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CreditId::PremiumSubsidy => "ACA Premium Tax Credit",
            CreditId::EarnedIncome => "Earned Income Tax Credit",
            CreditId::ChildTax => "Child Tax Credit",
            CreditId::StudentLoanInterest => "Student Loan Interest Deduction",
            CreditId::Medicaid => "Medicaid",
            CreditId::Savers => "Saver's Credit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CreditId::PremiumSubsidy => "Health insurance subsidy (Obamacare)",
            CreditId::EarnedIncome => "Refundable credit for low/moderate income workers",
            CreditId::ChildTax => "$2,200 per child under 17",
            CreditId::StudentLoanInterest => "Up to $2,500 deduction",
            CreditId::Medicaid => "Free health coverage (state-dependent)",
            CreditId::Savers => "Retirement savings credit",
        }
    }

    /// True when the benefit can drop straight to zero past a threshold.
    pub fn has_cliff(self) -> bool {
        matches!(self, CreditId::PremiumSubsidy | CreditId::Medicaid)
    }

    pub fn calculate(self, income: f64, dependents: u32) -> f64 {
        match self {
            CreditId::PremiumSubsidy => premium_subsidy(income, dependents),
            CreditId::EarnedIncome => earned_income_credit(income, dependents),
            CreditId::ChildTax => child_tax_credit(income, dependents),
            CreditId::StudentLoanInterest => student_loan_interest(income),
            CreditId::Medicaid => medicaid_value(income, dependents),
            CreditId::Savers => savers_credit(income),
        }
    }

    pub fn from_key(key: &str) -> Option<CreditId> {
        CreditId::ALL.into_iter().find(|id| id.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreditTotals {
    pub total: f64,
    pub breakdown: BTreeMap<CreditId, f64>,
}

pub fn compute_credits(enabled: &BTreeSet<CreditId>, income: f64, dependents: u32) -> CreditTotals {
    let breakdown: BTreeMap<CreditId, f64> = enabled
        .iter()
        .map(|&id| (id, id.calculate(income, dependents)))
        .collect();
    let total = breakdown.values().sum();
    CreditTotals { total, breakdown }
}

pub fn poverty_line(dependents: u32) -> f64 {
    POVERTY_LINE_BASE + dependents as f64 * POVERTY_LINE_PER_DEPENDENT
}

/// Benchmark premium minus the expected contribution; zero above 400% FPL.
pub fn premium_subsidy(income: f64, dependents: u32) -> f64 {
    let poverty = poverty_line(dependents);
    if income > poverty * 4.0 || income <= 0.0 {
        return 0.0;
    }

    let percent_of_income = (2.0 + (income / poverty) * 0.5).clamp(0.0, 8.5);
    let affordable_amount = income * percent_of_income / 100.0;
    let annual_premium = (400.0 + dependents as f64 * 150.0) * 12.0;

    (annual_premium - affordable_amount).max(0.0)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EitcSchedule {
    pub max: f64,
    pub phase_in_end: f64,
    pub phase_out_start: f64,
    pub phase_out_end: f64,
}

const EITC_SCHEDULES: [EitcSchedule; 4] = [
    EitcSchedule {
        max: 664.0,
        phase_in_end: 8_680.0,
        phase_out_start: 10_860.0,
        phase_out_end: 19_540.0,
    },
    EitcSchedule {
        max: 4_427.0,
        phase_in_end: 13_020.0,
        phase_out_start: 23_890.0,
        phase_out_end: 51_593.0,
    },
    EitcSchedule {
        max: 7_316.0,
        phase_in_end: 18_290.0,
        phase_out_start: 23_890.0,
        phase_out_end: 58_629.0,
    },
    EitcSchedule {
        max: 8_231.0,
        phase_in_end: 18_290.0,
        phase_out_start: 23_890.0,
        phase_out_end: 62_974.0,
    },
];

pub fn eitc_schedule(dependents: u32) -> EitcSchedule {
    EITC_SCHEDULES[dependents.min(3) as usize]
}

pub fn earned_income_credit(income: f64, dependents: u32) -> f64 {
    let s = eitc_schedule(dependents);
    if income >= s.phase_out_end {
        return 0.0;
    }
    if income <= s.phase_in_end {
        return (income.max(0.0) / s.phase_in_end) * s.max;
    }
    if income <= s.phase_out_start {
        return s.max;
    }

    let progress = (income - s.phase_out_start) / (s.phase_out_end - s.phase_out_start);
    s.max * (1.0 - progress)
}

/// $2,200 per child, reduced $50 per full $1,000 above $200,000.
pub fn child_tax_credit(income: f64, dependents: u32) -> f64 {
    const PER_CHILD: f64 = 2_200.0;
    const PHASE_OUT_START: f64 = 200_000.0;
    const REDUCTION_PER_THOUSAND: f64 = 50.0;

    if dependents == 0 {
        return 0.0;
    }
    let full = dependents as f64 * PER_CHILD;
    if income <= PHASE_OUT_START {
        return full;
    }

    let reduction = ((income - PHASE_OUT_START) / 1_000.0).floor() * REDUCTION_PER_THOUSAND;
    (full - reduction).max(0.0)
}

pub fn student_loan_interest(income: f64) -> f64 {
    const MAX_DEDUCTION: f64 = 2_500.0;
    const PHASE_OUT_START: f64 = 75_000.0;
    const PHASE_OUT_END: f64 = 90_000.0;

    if income >= PHASE_OUT_END {
        return 0.0;
    }
    if income <= PHASE_OUT_START {
        return MAX_DEDUCTION;
    }

    let progress = (income - PHASE_OUT_START) / (PHASE_OUT_END - PHASE_OUT_START);
    MAX_DEDUCTION * (1.0 - progress)
}

/// Flat coverage value up to 138% FPL, nothing above.
pub fn medicaid_value(income: f64, dependents: u32) -> f64 {
    const COVERAGE_VALUE: f64 = 8_000.0;
    if income > poverty_line(dependents) * 1.38 {
        0.0
    } else {
        COVERAGE_VALUE
    }
}

pub fn savers_credit(income: f64) -> f64 {
    const ELIGIBLE_CONTRIBUTION: f64 = 2_000.0;
    let rate = if income <= 23_000.0 {
        0.5
    } else if income <= 25_000.0 {
        0.2
    } else if income <= 38_750.0 {
        0.1
    } else {
        0.0
    };
    ELIGIBLE_CONTRIBUTION * rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assume, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    #[test]
    fn premium_subsidy_oracle_below_cliff() {
        // 30,000 / 15,060 FPL -> 2.996% expected contribution.
        assert_approx_tol(premium_subsidy(30_000.0, 0), 3_901.195_219, 1e-3);
        // Exactly 400% FPL: 4% of 60,240 against a 4,800 premium.
        assert_approx_tol(premium_subsidy(60_240.0, 0), 2_390.4, 1e-6);
    }

    #[test]
    fn premium_subsidy_cliffs_to_zero_above_four_times_poverty() {
        assert_approx(premium_subsidy(60_241.0, 0), 0.0);
        let threshold = poverty_line(2) * 4.0;
        assert!(premium_subsidy(threshold, 2) > 0.0);
        assert_approx(premium_subsidy(threshold + 1.0, 2), 0.0);
    }

    #[test]
    fn premium_subsidy_is_zero_without_income() {
        assert_approx(premium_subsidy(0.0, 3), 0.0);
    }

    #[test]
    fn eitc_ramps_in_plateaus_and_phases_out() {
        assert_approx(earned_income_credit(0.0, 0), 0.0);
        assert_approx(earned_income_credit(4_340.0, 0), 332.0);
        assert_approx(earned_income_credit(8_680.0, 0), 664.0);
        assert_approx(earned_income_credit(10_860.0, 0), 664.0);
        assert_approx(earned_income_credit(15_200.0, 0), 332.0);
        assert_approx(earned_income_credit(19_540.0, 0), 0.0);
        assert_approx(earned_income_credit(25_000.0, 0), 0.0);
    }

    #[test]
    fn eitc_caps_dependents_at_three() {
        assert_approx(earned_income_credit(20_000.0, 5), earned_income_credit(20_000.0, 3));
        assert_approx(earned_income_credit(20_000.0, 3), 8_231.0);
    }

    #[test]
    fn child_credit_is_flat_then_steps_down() {
        assert_approx(child_tax_credit(150_000.0, 0), 0.0);
        assert_approx(child_tax_credit(150_000.0, 2), 4_400.0);
        assert_approx(child_tax_credit(200_000.0, 2), 4_400.0);
        assert_approx(child_tax_credit(205_000.0, 2), 4_150.0);
        assert_approx(child_tax_credit(205_999.0, 2), 4_150.0);
        assert_approx(child_tax_credit(290_000.0, 2), 0.0);
        assert_approx(child_tax_credit(1_000_000.0, 2), 0.0);
    }

    #[test]
    fn student_loan_interest_phases_out_linearly() {
        assert_approx(student_loan_interest(50_000.0), 2_500.0);
        assert_approx(student_loan_interest(75_000.0), 2_500.0);
        assert_approx(student_loan_interest(82_500.0), 1_250.0);
        assert_approx(student_loan_interest(90_000.0), 0.0);
    }

    #[test]
    fn medicaid_cliffs_above_138_percent_of_poverty() {
        assert_approx(medicaid_value(0.0, 0), 8_000.0);
        assert_approx(medicaid_value(20_000.0, 0), 8_000.0);
        assert_approx(medicaid_value(21_000.0, 0), 0.0);
        assert_approx(medicaid_value(21_000.0, 1), 8_000.0);
    }

    #[test]
    fn savers_credit_steps_at_tier_ceilings() {
        assert_approx(savers_credit(23_000.0), 1_000.0);
        assert_approx(savers_credit(23_001.0), 400.0);
        assert_approx(savers_credit(25_000.0), 400.0);
        assert_approx(savers_credit(25_001.0), 200.0);
        assert_approx(savers_credit(38_750.0), 200.0);
        assert_approx(savers_credit(38_751.0), 0.0);
    }

    #[test]
    fn compute_credits_only_reports_enabled_ids() {
        let enabled: BTreeSet<CreditId> = [CreditId::ChildTax, CreditId::Medicaid]
            .into_iter()
            .collect();
        let totals = compute_credits(&enabled, 20_000.0, 1);

        assert_eq!(totals.breakdown.len(), 2);
        assert_approx(totals.breakdown[&CreditId::ChildTax], 2_200.0);
        assert_approx(totals.breakdown[&CreditId::Medicaid], 8_000.0);
        assert!(!totals.breakdown.contains_key(&CreditId::EarnedIncome));
        assert_approx(totals.total, 10_200.0);
    }

    #[test]
    fn compute_credits_with_nothing_enabled_is_empty() {
        let totals = compute_credits(&BTreeSet::new(), 20_000.0, 1);
        assert!(totals.breakdown.is_empty());
        assert_approx(totals.total, 0.0);
    }

    #[test]
    fn catalog_metadata_is_consistent() {
        for id in CreditId::ALL {
            assert_eq!(CreditId::from_key(id.key()), Some(id));
            let json = serde_json::to_string(&id).expect("serialize id");
            assert_eq!(json, format!("\"{}\"", id.key()));
        }
        let cliffs: Vec<_> = CreditId::ALL.into_iter().filter(|id| id.has_cliff()).collect();
        assert_eq!(cliffs, vec![CreditId::PremiumSubsidy, CreditId::Medicaid]);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(128))]

        #[test]
        fn prop_every_credit_is_non_negative(income in 0u32..1_500_000, dependents in 0u32..6) {
            for id in CreditId::ALL {
                let amount = id.calculate(income as f64, dependents);
                prop_assert!(amount.is_finite());
                prop_assert!(amount >= 0.0);
            }
        }

        #[test]
        fn prop_eitc_never_exceeds_schedule_max(income in 0u32..100_000, dependents in 0u32..6) {
            let s = eitc_schedule(dependents);
            let credit = earned_income_credit(income as f64, dependents);
            prop_assert!(credit <= s.max + EPS);
            if income as f64 >= s.phase_out_end {
                prop_assert!(credit == 0.0);
            }
        }

        #[test]
        fn prop_eitc_phases_rise_hold_then_fall(
            dependents in 0u32..4,
            a in 0u32..=1_000,
            b in 0u32..=1_000
        ) {
            prop_assume!(a != b);
            let (lo, hi) = (f64::from(a.min(b)) / 1_000.0, f64::from(a.max(b)) / 1_000.0);
            let s = eitc_schedule(dependents);
            let at = |start: f64, end: f64, t: f64| {
                earned_income_credit(start + (end - start) * t, dependents)
            };

            prop_assert!(at(0.0, s.phase_in_end, lo) < at(0.0, s.phase_in_end, hi));
            prop_assert!(at(s.phase_in_end, s.phase_out_start, lo) == s.max);
            prop_assert!(at(s.phase_in_end, s.phase_out_start, hi) == s.max);
            prop_assert!(
                at(s.phase_out_start, s.phase_out_end, lo) > at(s.phase_out_start, s.phase_out_end, hi)
            );
        }
    }
}
