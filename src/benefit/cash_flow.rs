use serde::{Deserialize, Serialize};
use tracing::debug;

use super::BenefitCalcError;

/// 분석 기간 중 한 해의 편익/비용.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyFlow {
    /// 사업 시작 기준 연차(0부터)
    pub year: u32,
    /// 해당 연도 편익
    pub benefits: f64,
    /// 해당 연도 비용
    pub costs: f64,
}

impl YearlyFlow {
    pub fn new(year: u32, benefits: f64, costs: f64) -> Self {
        Self {
            year,
            benefits,
            costs,
        }
    }

    /// 할인 전 순현금흐름(편익 - 비용).
    pub fn net(&self) -> f64 {
        self.benefits - self.costs
    }
}

/// 연도 집합이 정확히 {0, .., N-1}인지 확인하고 연도순으로 정렬된 사본을 돌려준다.
pub fn normalize_flows(flows: &[YearlyFlow]) -> Result<Vec<YearlyFlow>, BenefitCalcError> {
    if flows.is_empty() {
        return Err(BenefitCalcError::EmptyHorizon);
    }
    let mut sorted = flows.to_vec();
    sorted.sort_by_key(|f| f.year);

    for (expected, flow) in sorted.iter().enumerate() {
        let expected = expected as u32;
        if flow.year == expected {
            continue;
        }
        // 정렬 후 기대값보다 작으면 앞 연도와 중복, 크면 기대 연도가 누락된 것
        let reason = if flow.year < expected {
            format!("{}년차가 중복되었습니다", flow.year)
        } else {
            format!("{expected}년차가 누락되었습니다")
        };
        return Err(BenefitCalcError::InvalidHorizon(reason));
    }

    debug!(horizon = sorted.len(), "cash flows normalized");
    Ok(sorted)
}

/// 연도별 순현금흐름(할인 전).
pub fn net_series(flows: &[YearlyFlow]) -> Vec<f64> {
    flows.iter().map(YearlyFlow::net).collect()
}

/// 순현금흐름의 누적합.
pub fn cumulative_series(net: &[f64]) -> Vec<f64> {
    net.iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}
