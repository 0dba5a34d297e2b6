use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use benefit_calculator::app::{self, AppError};
use benefit_calculator::config::{self, OutputFormat, DEFAULT_CONFIG_PATH};
use benefit_calculator::i18n::{self, keys, Translator};

#[derive(Parser, Debug)]
#[command(name = "benefit_calculator")]
#[command(about = "NPV / BCR / IRR / SROI / payback calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// 표시 언어 (auto, ko, en)
    #[arg(long, global = true, default_value = "auto")]
    lang: String,

    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 계산 과정을 debug 로그로 출력
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 시나리오 파일(.toml/.json)을 계산한다
    Compute {
        scenario: PathBuf,

        /// 출력 형식 (기본값은 설정 파일)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// 시나리오의 할인율 대신 사용할 할인율 [%]
        #[arg(long)]
        rate_percent: Option<f64>,
    },
    /// 대화형 메뉴
    Interactive,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = try_run(&cli) {
        let tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_run(cli: &Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    match &cli.command {
        Some(Command::Compute {
            scenario,
            format,
            rate_percent,
        }) => {
            let tr = Translator::new(&i18n::resolve_language(&cli.lang, cfg.language.as_deref()));
            app::run_compute(scenario, *format, *rate_percent, &cfg, &tr)
        }
        Some(Command::Interactive) | None => app::run_interactive(&mut cfg, &cli.config, &cli.lang),
    }
}
