use benefit_calculator::benefit::{
    compute, npv_at, payback_years, BenefitCalcError, CalculationInput, YearlyFlow,
    UNBOUNDED_RATIO,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {tol})"
    );
}

fn input(rate: f64, rows: &[(f64, f64)]) -> CalculationInput {
    CalculationInput {
        flows: rows
            .iter()
            .enumerate()
            .map(|(t, (b, c))| YearlyFlow::new(t as u32, *b, *c))
            .collect(),
        discount_rate: rate,
    }
}

#[test]
fn standard_business_case() {
    // 3%, 0년차 투자 500,000, 1~5년차 편익 200,000
    let mut rows = vec![(0.0, 500_000.0)];
    rows.extend(std::iter::repeat((200_000.0, 0.0)).take(5));
    let res = compute(&input(0.03, &rows)).expect("business case");

    let annuity: f64 = (1..=5).map(|t| 1.0 / 1.03_f64.powi(t)).sum();
    assert_close("pv_benefits", res.pv_benefits, 200_000.0 * annuity, 1e-6);
    assert_close("pv_costs", res.pv_costs, 500_000.0, 1e-9);
    assert!(res.npv > 0.0, "npv={}", res.npv);
    assert!(res.bcr > 1.0, "bcr={}", res.bcr);
    assert_close("sroi", res.sroi, res.bcr - 1.0, 1e-12);

    let payback = res.payback_years.expect("pays back");
    assert!((2.0..3.0).contains(&payback), "payback={payback}");
    assert_close("payback", payback, 2.5, 1e-12);

    let irr = res.irr.expect("irr");
    // 구간 폭 1e-7에 NPV 기울기(약 1e6)를 곱한 만큼의 오차는 허용
    assert!(npv_at(&res.net_per_year, irr).abs() < 0.1);
    assert!(irr > 0.03);

    assert_eq!(
        res.cumulative_per_year,
        vec![-500_000.0, -300_000.0, -100_000.0, 100_000.0, 300_000.0, 500_000.0]
    );
}

#[test]
fn single_year_uses_undiscounted_amounts() {
    let res = compute(&input(0.07, &[(80.0, 50.0)])).expect("single year");
    assert_eq!(res.pv_benefits, 80.0);
    assert_eq!(res.pv_costs, 50.0);
    assert_eq!(res.payback_years, Some(0.0));
    assert_eq!(res.irr, None);

    let res = compute(&input(0.07, &[(50.0, 80.0)])).expect("single year loss");
    assert_eq!(res.payback_years, None);
    assert_eq!(res.npv, -30.0);
}

#[test]
fn irr_round_trip_two_years() {
    let res = compute(&input(0.05, &[(0.0, 100.0), (110.0, 0.0)])).expect("two years");
    let irr = res.irr.expect("irr");
    assert_close("irr", irr, 0.1, 1e-6);
    assert!(npv_at(&res.net_per_year, irr).abs() < 1e-4);
}

#[test]
fn all_positive_net_has_no_irr() {
    let res = compute(&input(0.03, &[(100.0, 10.0), (120.0, 20.0), (90.0, 0.0)])).expect("calc");
    assert_eq!(res.irr, None);
    assert_eq!(res.payback_years, Some(0.0));
}

#[test]
fn pure_cost_has_no_irr_and_no_payback() {
    let res = compute(&input(0.03, &[(0.0, 100.0), (0.0, 50.0)])).expect("calc");
    assert_eq!(res.irr, None);
    assert_eq!(res.payback_years, None);
    assert_eq!(res.bcr, 0.0);
    assert_close("sroi", res.sroi, -1.0, 1e-12);
}

#[test]
fn payback_interpolates_within_crossing_year() {
    let net = [-100.0, 50.0, 60.0];
    let cumulative = [-100.0, -50.0, 10.0];
    let payback = payback_years(&net, &cumulative).expect("payback");
    assert_close("payback", payback, 1.0 + 50.0 / 60.0, 1e-12);
}

#[test]
fn payback_on_exact_zero_cumulative() {
    let payback = payback_years(&[-100.0, 100.0], &[-100.0, 0.0]);
    assert_eq!(payback, Some(1.0));
    assert_eq!(payback_years(&[-100.0, 10.0], &[-100.0, -90.0]), None);
}

#[test]
fn zero_costs_yield_unbounded_ratios() {
    let res = compute(&input(0.03, &[(0.0, 0.0), (100.0, 0.0), (100.0, 0.0)])).expect("calc");
    assert_eq!(res.bcr, UNBOUNDED_RATIO);
    assert_eq!(res.sroi, UNBOUNDED_RATIO);
    assert!(res.bcr_is_unbounded());
    assert!(!res.sroi.is_nan());
}

#[test]
fn all_zero_flows_yield_zero_ratios() {
    let res = compute(&input(0.03, &[(0.0, 0.0), (0.0, 0.0)])).expect("calc");
    assert_eq!(res.bcr, 0.0);
    assert_eq!(res.sroi, 0.0);
    assert_eq!(res.npv, 0.0);
    assert_eq!(res.irr, None);
    assert_eq!(res.payback_years, Some(0.0));
}

#[test]
fn equal_benefits_and_costs_give_zero_npv() {
    let res = compute(&input(0.11, &[(40.0, 40.0), (75.5, 75.5), (3.25, 3.25)])).expect("calc");
    assert_eq!(res.pv_benefits, res.pv_costs);
    assert_eq!(res.npv, 0.0);
    assert_eq!(res.bcr, 1.0);
}

#[test]
fn unordered_years_are_sorted() {
    let calc = CalculationInput {
        flows: vec![
            YearlyFlow::new(2, 60.0, 0.0),
            YearlyFlow::new(0, 0.0, 100.0),
            YearlyFlow::new(1, 50.0, 0.0),
        ],
        discount_rate: 0.0,
    };
    let res = compute(&calc).expect("calc");
    assert_eq!(res.net_per_year, vec![-100.0, 50.0, 60.0]);
    assert_eq!(res.cumulative_per_year, vec![-100.0, -50.0, 10.0]);
    assert_close("npv", res.npv, 10.0, 1e-12);
}

#[test]
fn negative_rate_above_minus_one_is_accepted() {
    let res = compute(&input(-0.5, &[(0.0, 0.0), (10.0, 0.0)])).expect("calc");
    assert_close("pv_benefits", res.pv_benefits, 20.0, 1e-12);
}

#[test]
fn empty_input_is_rejected() {
    let err = compute(&input(0.03, &[])).unwrap_err();
    assert_eq!(err, BenefitCalcError::EmptyHorizon);
}

#[test]
fn gaps_and_duplicates_are_rejected() {
    let gap = CalculationInput {
        flows: vec![YearlyFlow::new(0, 1.0, 0.0), YearlyFlow::new(2, 1.0, 0.0)],
        discount_rate: 0.03,
    };
    assert!(matches!(compute(&gap), Err(BenefitCalcError::InvalidHorizon(_))));

    let duplicate = CalculationInput {
        flows: vec![
            YearlyFlow::new(0, 1.0, 0.0),
            YearlyFlow::new(0, 2.0, 0.0),
            YearlyFlow::new(1, 1.0, 0.0),
        ],
        discount_rate: 0.03,
    };
    assert!(matches!(compute(&duplicate), Err(BenefitCalcError::InvalidHorizon(_))));

    let no_start = CalculationInput {
        flows: vec![YearlyFlow::new(1, 1.0, 0.0), YearlyFlow::new(2, 1.0, 0.0)],
        discount_rate: 0.03,
    };
    assert!(matches!(compute(&no_start), Err(BenefitCalcError::InvalidHorizon(_))));
}

#[test]
fn invalid_rates_are_rejected() {
    for rate in [-1.0, -1.5, f64::NAN] {
        let err = compute(&input(rate, &[(1.0, 0.0)])).unwrap_err();
        assert!(matches!(err, BenefitCalcError::InvalidRate(_)), "rate={rate}");
    }
}

#[test]
fn invalid_amounts_are_rejected() {
    let err = compute(&input(0.03, &[(1.0, 0.0), (-5.0, 0.0)])).unwrap_err();
    assert!(matches!(
        err,
        BenefitCalcError::InvalidFlow {
            year: 1,
            field: "benefits",
            ..
        }
    ));

    let err = compute(&input(0.03, &[(1.0, f64::NAN)])).unwrap_err();
    assert!(matches!(
        err,
        BenefitCalcError::InvalidFlow {
            year: 0,
            field: "costs",
            ..
        }
    ));
}
