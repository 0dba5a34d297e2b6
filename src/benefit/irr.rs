//! 내부수익률(IRR) 계산. 순현금흐름의 NPV가 0이 되는 할인율을 이분법으로 찾는다.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// 이분법 탐색 구간과 수렴 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrrSettings {
    /// 탐색 하한 (-1보다 커야 함)
    pub lower_bound: f64,
    /// 탐색 상한 (10.0 = 1000%)
    pub upper_bound: f64,
    /// 구간 폭이 이 값보다 작아지면 수렴으로 본다
    pub tolerance: f64,
    /// 최대 반복 횟수
    pub max_iterations: u32,
}

impl Default for IrrSettings {
    fn default() -> Self {
        Self {
            lower_bound: -0.99,
            upper_bound: 10.0,
            tolerance: 1e-7,
            max_iterations: 100,
        }
    }
}

impl IrrSettings {
    /// 설정값이 탐색 가능한 구간을 이루는지 확인한다.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.lower_bound.is_nan() || self.lower_bound <= -1.0 {
            return Err("IRR 탐색 하한은 -1보다 커야 합니다.");
        }
        if !self.upper_bound.is_finite() || self.upper_bound <= self.lower_bound {
            return Err("IRR 탐색 상한은 하한보다 큰 유한값이어야 합니다.");
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err("IRR 허용오차는 0보다 커야 합니다.");
        }
        if self.max_iterations == 0 {
            return Err("IRR 최대 반복 횟수는 1 이상이어야 합니다.");
        }
        Ok(())
    }
}

/// 할인 전 순현금흐름을 주어진 할인율로 현재가치화한 합.
pub fn npv_at(net: &[f64], rate: f64) -> f64 {
    let base = 1.0 + rate;
    net.iter()
        .enumerate()
        .map(|(t, v)| v / base.powi(t as i32))
        .sum()
}

fn has_sign_change(net: &[f64]) -> bool {
    net.iter().any(|v| *v > 0.0) && net.iter().any(|v| *v < 0.0)
}

/// 순현금흐름의 IRR을 구한다.
///
/// 구간 양 끝의 NPV 부호가 다르지 않거나 반복 한도 안에 수렴하지 못하면 `None`.
/// 근이 여러 개인 흐름은 이분법이 처음 좁혀 들어간 근 하나만 돌려준다.
pub fn solve_irr(net: &[f64], settings: &IrrSettings) -> Option<f64> {
    // 계수의 부호가 한 번도 바뀌지 않으면 (1+r) > 0 구간에 근이 없다
    if !has_sign_change(net) {
        debug!("IRR skipped: net flows never change sign");
        return None;
    }

    let mut lo = settings.lower_bound;
    let mut hi = settings.upper_bound;
    let mut f_lo = npv_at(net, lo);
    let f_hi = npv_at(net, hi);
    if !f_lo.is_finite() || !f_hi.is_finite() {
        debug!(f_lo, f_hi, "IRR skipped: NPV not finite at search bounds");
        return None;
    }
    if f_lo == 0.0 {
        return Some(lo);
    }
    if f_hi == 0.0 {
        return Some(hi);
    }
    if f_lo.signum() == f_hi.signum() {
        debug!(f_lo, f_hi, "IRR skipped: no sign change across search bounds");
        return None;
    }

    for iteration in 0..settings.max_iterations {
        let mid = 0.5 * (lo + hi);
        let f_mid = npv_at(net, mid);
        if f_mid == 0.0 {
            debug!(iteration, irr = mid, "IRR found exact root");
            return Some(mid);
        }
        if f_lo.signum() == f_mid.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
        if hi - lo < settings.tolerance {
            let irr = 0.5 * (lo + hi);
            debug!(iteration, irr, "IRR converged");
            return Some(irr);
        }
    }

    debug!(
        max_iterations = settings.max_iterations,
        width = hi - lo,
        "IRR did not converge"
    );
    None
}
