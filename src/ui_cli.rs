use std::io::{self, Write};
use std::path::Path;

use crate::app::{self, AppError};
use crate::benefit::{self, CalculationInput, YearlyFlow};
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::report;
use crate::scenario::{self, MAX_HORIZON_YEARS};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Manual,
    Scenario,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_MANUAL));
    println!("{}", tr.t(keys::MAIN_MENU_SCENARIO));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Manual),
            "2" => return Ok(MenuChoice::Scenario),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 연도별 편익/비용 합계를 직접 입력받아 계산한다.
pub fn handle_manual(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::MANUAL_HEADING));
    let horizon = loop {
        let years = read_f64_or(tr, keys::PROMPT_HORIZON, cfg.default_horizon_years as f64)?;
        if years.fract() == 0.0 && years >= 1.0 && years <= MAX_HORIZON_YEARS as f64 {
            break years as u32;
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };
    let rate_percent = read_f64_or(tr, keys::PROMPT_RATE_PERCENT, cfg.default_discount_rate_percent)?;

    let mut flows = Vec::with_capacity(horizon as usize);
    for year in 0..horizon {
        let benefits = read_f64(tr, &format!("[{year}] {}", tr.t(keys::PROMPT_YEAR_BENEFITS)))?;
        let costs = read_f64(tr, &format!("[{year}] {}", tr.t(keys::PROMPT_YEAR_COSTS)))?;
        flows.push(YearlyFlow::new(year, benefits, costs));
    }
    let input = CalculationInput {
        flows,
        discount_rate: scenario::rate_from_percent(rate_percent),
    };
    let result = benefit::compute_with(&input, &cfg.solver)?;
    println!("{}", report::render_text(&result, tr));
    Ok(())
}

/// 시나리오 파일 경로를 입력받아 계산한다.
pub fn handle_scenario(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let path = read_line(tr.t(keys::PROMPT_SCENARIO_PATH))?;
    let scenario = scenario::load_scenario(Path::new(path.trim()))?;
    let result = app::compute_scenario(&scenario, None, cfg)?;
    println!("{}", app::render(&result, cfg.output_format, tr)?);
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {:.2} % / {} {} / {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.default_discount_rate_percent,
        cfg.default_horizon_years,
        tr.t(keys::REPORT_YEARS_UNIT),
        cfg.language.as_deref().unwrap_or("auto")
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let rate = read_f64(tr, tr.t(keys::PROMPT_RATE_PERCENT))?;
            if rate <= -100.0 {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
            cfg.default_discount_rate_percent = rate;
        }
        "2" => {
            let years = read_f64(tr, tr.t(keys::PROMPT_HORIZON))?;
            if years.fract() != 0.0 || years < 1.0 || years > MAX_HORIZON_YEARS as f64 {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
            cfg.default_horizon_years = years as u32;
        }
        "3" => {
            let lang = read_line("ko / en / auto: ")?;
            cfg.language = match lang.trim().to_lowercase().as_str() {
                "auto" | "" => None,
                code @ ("ko" | "en") => Some(code.to_string()),
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            };
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        // 입력 스트림이 닫히면 같은 프롬프트를 무한히 반복하게 된다
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 기본값을 쓴다.
fn read_f64_or(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr.t(key))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
