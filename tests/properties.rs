use benefit_calculator::benefit::{compute, npv_at, CalculationInput, YearlyFlow};
use proptest::prelude::*;

fn flows_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.0..1_000_000.0f64, 0.0..1_000_000.0f64), 1..=30)
}

/// 0년차 투자 후 편익만 발생하는 일반적인 흐름
fn conventional_strategy() -> impl Strategy<Value = Vec<f64>> {
    (
        1.0..1_000_000.0f64,
        prop::collection::vec(0.0..500_000.0f64, 1..=10),
    )
        .prop_filter("needs some benefit", |(_, benefits)| {
            benefits.iter().any(|b| *b > 1.0)
        })
        .prop_map(|(cost, benefits)| {
            let mut net = vec![-cost];
            net.extend(benefits);
            net
        })
}

fn to_input(rows: &[(f64, f64)], rate: f64) -> CalculationInput {
    CalculationInput {
        flows: rows
            .iter()
            .enumerate()
            .map(|(t, (b, c))| YearlyFlow::new(t as u32, *b, *c))
            .collect(),
        discount_rate: rate,
    }
}

proptest! {
    /// NPV는 항상 편익 PV - 비용 PV이며 부호도 그 대소 관계를 따른다
    #[test]
    fn prop_npv_sign_follows_present_values(rows in flows_strategy(), rate in 0.0..0.2f64) {
        let res = compute(&to_input(&rows, rate)).unwrap();
        prop_assert_eq!(res.npv, res.pv_benefits - res.pv_costs);
        if res.pv_benefits > res.pv_costs {
            prop_assert!(res.npv > 0.0);
        }
        prop_assert!(!res.bcr.is_nan());
        prop_assert!(!res.sroi.is_nan());
    }

    /// 누적 흐름은 순흐름의 누적합이고 회수기간은 분석 기간 안에 있다
    #[test]
    fn prop_series_and_payback_are_consistent(rows in flows_strategy()) {
        let res = compute(&to_input(&rows, 0.05)).unwrap();
        prop_assert_eq!(res.net_per_year.len(), rows.len());
        prop_assert_eq!(res.cumulative_per_year.len(), rows.len());
        let mut acc = 0.0;
        for (net, cum) in res.net_per_year.iter().zip(&res.cumulative_per_year) {
            acc += net;
            prop_assert_eq!(acc, *cum);
        }
        if let Some(payback) = res.payback_years {
            prop_assert!(payback >= 0.0);
            prop_assert!(payback <= (rows.len() - 1) as f64);
        } else {
            prop_assert!(res.cumulative_per_year.iter().all(|c| *c < 0.0));
        }
    }

    /// 반환된 IRR 양쪽에서 NPV 부호가 바뀐다 (근이 맞다)
    #[test]
    fn prop_irr_is_a_root(net in conventional_strategy()) {
        let rows: Vec<(f64, f64)> = net
            .iter()
            .map(|v| if *v < 0.0 { (0.0, -v) } else { (*v, 0.0) })
            .collect();
        let res = compute(&to_input(&rows, 0.03)).unwrap();
        if let Some(irr) = res.irr {
            prop_assert!(npv_at(&net, irr - 1e-5) > 0.0);
            prop_assert!(npv_at(&net, irr + 1e-5) < 0.0);
        }
    }
}
