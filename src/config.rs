use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::benefit::IrrSettings;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 사람이 읽는 표 형식
    Text,
    /// 다른 도구로 넘기기 위한 JSON
    Json,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어(ko/en/auto). 없으면 시스템 로케일을 따른다.
    pub language: Option<String>,
    /// 직접 입력 시 기본 할인율 [%]
    pub default_discount_rate_percent: f64,
    /// 직접 입력 시 기본 분석 기간 [년]
    pub default_horizon_years: u32,
    pub output_format: OutputFormat,
    /// IRR 탐색 구간/수렴 조건
    pub solver: IrrSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            default_discount_rate_percent: 3.0,
            default_horizon_years: 6,
            output_format: OutputFormat::Text,
            solver: IrrSettings::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// solver 구간 설정이 잘못됨
    #[error("IRR 설정 오류: {0}")]
    InvalidSolver(&'static str),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.solver.validate().map_err(ConfigError::InvalidSolver)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
