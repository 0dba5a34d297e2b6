use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::benefit::{self, BenefitCalcError, CalculationResult};
use crate::config::{Config, ConfigError, OutputFormat};
use crate::i18n::{self, Translator};
use crate::report;
use crate::scenario::{self, Scenario, ScenarioError};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 시나리오 파일 오류
    #[error("{0}")]
    Scenario(#[from] ScenarioError),
    /// 입력 데이터 검증 오류
    #[error("계산 오류: {0}")]
    Calc(#[from] BenefitCalcError),
    /// 결과 JSON 직렬화 오류
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 시나리오를 계산한다. `rate_percent_override`가 있으면 시나리오의 할인율 대신 쓴다.
pub fn compute_scenario(
    scenario: &Scenario,
    rate_percent_override: Option<f64>,
    config: &Config,
) -> Result<CalculationResult, AppError> {
    let mut input = scenario.to_input()?;
    if let Some(percent) = rate_percent_override {
        input.discount_rate = scenario::rate_from_percent(percent);
    }
    let result = benefit::compute_with(&input, &config.solver)?;
    Ok(result)
}

/// 결과를 요청한 형식의 문자열로 만든다.
pub fn render(
    result: &CalculationResult,
    format: OutputFormat,
    tr: &Translator,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(report::render_text(result, tr)),
        OutputFormat::Json => Ok(report::render_json(result)?),
    }
}

/// `compute` 하위 명령: 시나리오 파일을 읽어 계산 결과를 출력한다.
pub fn run_compute(
    path: &Path,
    format: Option<OutputFormat>,
    rate_percent_override: Option<f64>,
    config: &Config,
    tr: &Translator,
) -> Result<(), AppError> {
    let scenario = scenario::load_scenario(path)?;
    info!(
        path = %path.display(),
        name = scenario.name.as_deref().unwrap_or("-"),
        "scenario loaded"
    );
    let result = compute_scenario(&scenario, rate_percent_override, config)?;
    let output = render(&result, format.unwrap_or(config.output_format), tr)?;
    println!("{output}");
    Ok(())
}

/// 대화형 메인 루프를 실행한다. 종료 시 설정을 저장한다.
pub fn run_interactive(
    config: &mut Config,
    config_path: &Path,
    cli_lang: &str,
) -> Result<(), AppError> {
    let mut tr = Translator::new(&i18n::resolve_language(
        cli_lang,
        config.language.as_deref(),
    ));
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Manual => report_or_warn(ui_cli::handle_manual(&tr, config), &tr)?,
            MenuChoice::Scenario => report_or_warn(ui_cli::handle_scenario(&tr, config), &tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(&tr, config)?;
                config.save(config_path)?;
                tr = Translator::new(&i18n::resolve_language(
                    cli_lang,
                    config.language.as_deref(),
                ));
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 입력 데이터 문제는 메시지만 보여주고 메뉴로 돌아간다. 입출력 오류는 전파한다.
fn report_or_warn(outcome: Result<(), AppError>, tr: &Translator) -> Result<(), AppError> {
    match outcome {
        Err(AppError::Calc(e)) => {
            println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
            Ok(())
        }
        Err(AppError::Scenario(e)) => {
            println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
            Ok(())
        }
        other => other,
    }
}
