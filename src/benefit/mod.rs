//! 비용 편익 분석 엔진. 연도별 편익/비용과 할인율로 NPV, BCR, IRR, SROI, 회수기간을 계산한다.
//!
//! 모든 계산은 호출마다 새로 수행되는 순수 함수이며 상태를 보관하지 않는다.

pub mod cash_flow;
pub mod irr;
pub mod metrics;
pub mod present_value;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use cash_flow::{cumulative_series, net_series, normalize_flows, YearlyFlow};
pub use irr::{npv_at, solve_irr, IrrSettings};
pub use metrics::{compose, payback_years, CalculationResult, UNBOUNDED_RATIO};
pub use present_value::{discount_factor, present_values, PresentValues};

/// 입력 데이터가 데이터 모델 불변식을 어겼을 때의 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenefitCalcError {
    /// 연도 데이터가 하나도 없음
    #[error("분석 기간이 비어 있습니다.")]
    EmptyHorizon,
    /// 연도 집합이 {0, .., N-1}이 아님
    #[error("분석 기간 오류: {0}")]
    InvalidHorizon(String),
    /// 할인율이 -1 이하이거나 숫자가 아님
    #[error("할인율은 -1보다 커야 합니다: {0}")]
    InvalidRate(f64),
    /// 금액이 음수이거나 유한한 숫자가 아님
    #[error("{year}년차 {field} 값이 올바르지 않습니다: {value}")]
    InvalidFlow {
        year: u32,
        field: &'static str,
        value: f64,
    },
}

/// 엔진 입력. 할인율은 소수(3% = 0.03)로 받는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    pub flows: Vec<YearlyFlow>,
    pub discount_rate: f64,
}

/// 기본 IRR 탐색 설정으로 계산한다.
pub fn compute(input: &CalculationInput) -> Result<CalculationResult, BenefitCalcError> {
    compute_with(input, &IrrSettings::default())
}

/// IRR 탐색 설정을 지정하여 계산한다.
pub fn compute_with(
    input: &CalculationInput,
    settings: &IrrSettings,
) -> Result<CalculationResult, BenefitCalcError> {
    let flows = normalize_flows(&input.flows)?;
    let pv = present_values(&flows, input.discount_rate)?;
    let net = net_series(&flows);
    let cumulative = cumulative_series(&net);
    let irr = solve_irr(&net, settings);
    let result = compose(pv, net, cumulative, irr);
    debug!(
        npv = result.npv,
        bcr = result.bcr,
        irr = ?result.irr,
        payback = ?result.payback_years,
        "benefit calculation finished"
    );
    Ok(result)
}
