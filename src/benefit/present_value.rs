use tracing::debug;

use super::{BenefitCalcError, YearlyFlow};

/// 현재가치로 환산한 편익/비용 합계.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentValues {
    pub benefits: f64,
    pub costs: f64,
}

/// t년차 할인계수 1 / (1 + r)^t. 0년차는 항상 1이다.
pub fn discount_factor(rate: f64, year: u32) -> f64 {
    1.0 / (1.0 + rate).powi(year as i32)
}

/// 할인율은 -1보다 커야 (1 + r)^t가 0이 아닌 양수로 정의된다.
pub fn validate_rate(rate: f64) -> Result<(), BenefitCalcError> {
    if rate.is_nan() || rate <= -1.0 {
        return Err(BenefitCalcError::InvalidRate(rate));
    }
    Ok(())
}

fn validate_amount(year: u32, field: &'static str, value: f64) -> Result<(), BenefitCalcError> {
    if !value.is_finite() || value < 0.0 {
        return Err(BenefitCalcError::InvalidFlow { year, field, value });
    }
    Ok(())
}

/// 정규화된 현금흐름을 할인율로 현재가치화하여 합산한다.
pub fn present_values(flows: &[YearlyFlow], rate: f64) -> Result<PresentValues, BenefitCalcError> {
    validate_rate(rate)?;
    let mut pv = PresentValues {
        benefits: 0.0,
        costs: 0.0,
    };
    for flow in flows {
        validate_amount(flow.year, "benefits", flow.benefits)?;
        validate_amount(flow.year, "costs", flow.costs)?;
        let df = discount_factor(rate, flow.year);
        pv.benefits += flow.benefits * df;
        pv.costs += flow.costs * df;
    }
    debug!(
        rate,
        pv_benefits = pv.benefits,
        pv_costs = pv.costs,
        "present values aggregated"
    );
    Ok(pv)
}
