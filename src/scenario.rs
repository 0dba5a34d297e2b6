//! 편익/비용 항목(행) 단위로 입력하는 시나리오. 엔진에는 연도별 합계만 전달한다.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::benefit::{BenefitCalcError, CalculationInput, YearlyFlow};

/// 지원하는 최대 분석 기간 [년]
pub const MAX_HORIZON_YEARS: u32 = 30;

/// 시나리오 파일을 읽을 때의 오류.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("시나리오 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("시나리오 TOML 파싱 오류: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("시나리오 JSON 파싱 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 이름이 붙은 편익 또는 비용 한 줄. `amounts[t]`가 t년차 금액이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    #[serde(default)]
    pub amounts: Vec<f64>,
}

impl LineItem {
    pub fn new(label: impl Into<String>, amounts: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            amounts,
        }
    }
}

/// 분석 기간, 할인율(%)과 편익/비용 항목으로 구성된 시나리오.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    pub horizon_years: u32,
    /// 할인율 [%]
    pub discount_rate_percent: f64,
    #[serde(default)]
    pub benefits: Vec<LineItem>,
    #[serde(default)]
    pub costs: Vec<LineItem>,
}

/// 백분율 할인율을 소수로 바꾼다. (3 -> 0.03)
pub fn rate_from_percent(percent: f64) -> f64 {
    percent / 100.0
}

fn sum_rows(rows: &[LineItem], horizon: usize) -> Result<Vec<f64>, BenefitCalcError> {
    let mut totals = vec![0.0; horizon];
    for row in rows {
        if row.amounts.len() > horizon {
            return Err(BenefitCalcError::InvalidHorizon(format!(
                "'{}' 항목의 금액 수({})가 분석 기간({horizon}년)보다 많습니다",
                row.label,
                row.amounts.len()
            )));
        }
        // 짧은 행은 나머지 연도를 0으로 본다
        for (total, amount) in totals.iter_mut().zip(&row.amounts) {
            *total += amount;
        }
    }
    Ok(totals)
}

impl Scenario {
    /// 항목별 금액을 연도별로 합산해 엔진 입력으로 변환한다.
    pub fn to_input(&self) -> Result<CalculationInput, BenefitCalcError> {
        if self.horizon_years == 0 {
            return Err(BenefitCalcError::EmptyHorizon);
        }
        if self.horizon_years > MAX_HORIZON_YEARS {
            return Err(BenefitCalcError::InvalidHorizon(format!(
                "분석 기간은 1~{MAX_HORIZON_YEARS}년이어야 합니다 (입력: {}년)",
                self.horizon_years
            )));
        }
        let horizon = self.horizon_years as usize;
        let benefits = sum_rows(&self.benefits, horizon)?;
        let costs = sum_rows(&self.costs, horizon)?;
        let flows = benefits
            .into_iter()
            .zip(costs)
            .enumerate()
            .map(|(year, (b, c))| YearlyFlow::new(year as u32, b, c))
            .collect();
        Ok(CalculationInput {
            flows,
            discount_rate: rate_from_percent(self.discount_rate_percent),
        })
    }
}

/// 시나리오 파일을 읽는다. 확장자가 .toml이면 TOML, 그 밖에는 JSON으로 해석한다.
pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let content = fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
    let scenario: Scenario = if is_toml {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(scenario)
}
