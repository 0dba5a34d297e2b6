use serde::{Deserialize, Serialize};

use super::PresentValues;

/// 현재가치 비용이 0이고 편익이 양수일 때 BCR/SROI에 쓰는 표식.
/// 일반적인 비율처럼 다루지 말고 호출 측에서 별도로 표시해야 한다.
pub const UNBOUNDED_RATIO: f64 = f64::INFINITY;

/// 비용 편익 분석 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// 순현재가치 = 편익 PV - 비용 PV
    pub npv: f64,
    /// 편익/비용 비율. 비용 PV가 0이면 [`UNBOUNDED_RATIO`] 또는 0
    #[serde(with = "ratio_serde")]
    pub bcr: f64,
    /// 내부수익률(소수). 구간 안에서 근을 찾지 못하면 None
    pub irr: Option<f64>,
    /// (편익 PV - 비용 PV) / 비용 PV. 비용 PV가 0이면 BCR과 같은 표식
    #[serde(with = "ratio_serde")]
    pub sroi: f64,
    /// 누적 순현금흐름이 처음 0 이상이 되는 시점[년]. 기간 내 회수 못하면 None
    pub payback_years: Option<f64>,
    /// 연도별 순현금흐름(할인 전)
    pub net_per_year: Vec<f64>,
    /// 누적 순현금흐름(할인 전)
    pub cumulative_per_year: Vec<f64>,
    /// 편익 현재가치 합계
    pub pv_benefits: f64,
    /// 비용 현재가치 합계
    pub pv_costs: f64,
}

impl CalculationResult {
    /// BCR이 비용 0으로 인한 표식 값인지 여부.
    pub fn bcr_is_unbounded(&self) -> bool {
        self.bcr.is_infinite()
    }
}

/// 분자/비용 PV 비율. 비용 PV가 0이면 분자 부호에 따라 표식 또는 0을 돌려준다.
fn ratio_or_sentinel(numerator: f64, pv_costs: f64) -> f64 {
    if pv_costs == 0.0 {
        if numerator > 0.0 {
            UNBOUNDED_RATIO
        } else {
            0.0
        }
    } else {
        numerator / pv_costs
    }
}

/// 누적 순현금흐름으로 회수기간을 구한다. 교차 연도 안에서는 선형 보간한다.
pub fn payback_years(net: &[f64], cumulative: &[f64]) -> Option<f64> {
    let i = cumulative.iter().position(|c| *c >= 0.0)?;
    if i == 0 {
        return Some(0.0);
    }
    let crossing = net[i];
    if crossing == 0.0 {
        return Some(i as f64);
    }
    Some((i - 1) as f64 + (-cumulative[i - 1]) / crossing)
}

/// 앞 단계에서 구한 값들로 최종 결과를 조립한다.
pub fn compose(
    pv: PresentValues,
    net_per_year: Vec<f64>,
    cumulative_per_year: Vec<f64>,
    irr: Option<f64>,
) -> CalculationResult {
    let npv = pv.benefits - pv.costs;
    let bcr = ratio_or_sentinel(pv.benefits, pv.costs);
    let sroi = ratio_or_sentinel(npv, pv.costs);
    let payback_years = payback_years(&net_per_year, &cumulative_per_year);
    CalculationResult {
        npv,
        bcr,
        irr,
        sroi,
        payback_years,
        net_per_year,
        cumulative_per_year,
        pv_benefits: pv.benefits,
        pv_costs: pv.costs,
    }
}

/// JSON에는 무한대 리터럴이 없으므로 표식 값은 "Infinity" 문자열로 주고받는다.
mod ratio_serde {
    use serde::{de, Deserialize, Deserializer, Serializer};

    const INFINITY_TEXT: &str = "Infinity";

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_infinite() && value.is_sign_positive() {
            serializer.serialize_str(INFINITY_TEXT)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(v),
            Repr::Text(s) if s == INFINITY_TEXT => Ok(f64::INFINITY),
            Repr::Text(s) => Err(de::Error::custom(format!("invalid ratio: {s}"))),
        }
    }
}
