use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const NOT_AVAILABLE: &str = "general.not_available";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_MANUAL: &str = "main_menu.manual";
    pub const MAIN_MENU_SCENARIO: &str = "main_menu.scenario";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const MANUAL_HEADING: &str = "manual.heading";
    pub const PROMPT_HORIZON: &str = "prompt.horizon";
    pub const PROMPT_RATE_PERCENT: &str = "prompt.rate_percent";
    pub const PROMPT_YEAR_BENEFITS: &str = "prompt.year_benefits";
    pub const PROMPT_YEAR_COSTS: &str = "prompt.year_costs";
    pub const PROMPT_SCENARIO_PATH: &str = "prompt.scenario_path";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const REPORT_HEADING: &str = "report.heading";
    pub const REPORT_PV_BENEFITS: &str = "report.pv_benefits";
    pub const REPORT_PV_COSTS: &str = "report.pv_costs";
    pub const REPORT_NPV: &str = "report.npv";
    pub const REPORT_BCR: &str = "report.bcr";
    pub const REPORT_IRR: &str = "report.irr";
    pub const REPORT_SROI: &str = "report.sroi";
    pub const REPORT_PAYBACK: &str = "report.payback";
    pub const REPORT_YEARS_UNIT: &str = "report.years_unit";
    pub const REPORT_TABLE_HEADER: &str = "report.table_header";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 내장 문자열 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        NOT_AVAILABLE => "N/A",
        MAIN_MENU_TITLE => "\n=== 비용 편익 계산기 ===",
        MAIN_MENU_MANUAL => "1) 연도별 직접 입력",
        MAIN_MENU_SCENARIO => "2) 시나리오 파일 계산",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        MANUAL_HEADING => "\n-- 연도별 직접 입력 --",
        PROMPT_HORIZON => "분석 기간 [년] (엔터=기본값): ",
        PROMPT_RATE_PERCENT => "할인율 [%] (엔터=기본값): ",
        PROMPT_YEAR_BENEFITS => "편익: ",
        PROMPT_YEAR_COSTS => "비용: ",
        PROMPT_SCENARIO_PATH => "시나리오 파일 경로(.toml/.json): ",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 기본 할인율  2) 기본 분석 기간  3) 언어(ko/en/auto)",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다.",
        REPORT_HEADING => "\n-- 계산 결과 --",
        REPORT_PV_BENEFITS => "편익 현재가치",
        REPORT_PV_COSTS => "비용 현재가치",
        REPORT_NPV => "순현재가치(NPV)",
        REPORT_BCR => "편익비용비(BCR)",
        REPORT_IRR => "내부수익률(IRR)",
        REPORT_SROI => "사회적투자수익률(SROI)",
        REPORT_PAYBACK => "회수기간",
        REPORT_YEARS_UNIT => "년",
        REPORT_TABLE_HEADER => "연차 |          순현금흐름 |          누적 현금흐름",
        _ => "?",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Benefit Calculator ===",
        MAIN_MENU_MANUAL => "1) Enter yearly amounts",
        MAIN_MENU_SCENARIO => "2) Compute scenario file",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        MANUAL_HEADING => "\n-- Yearly amounts --",
        PROMPT_HORIZON => "Horizon [years] (enter=default): ",
        PROMPT_RATE_PERCENT => "Discount rate [%] (enter=default): ",
        PROMPT_YEAR_BENEFITS => "benefits: ",
        PROMPT_YEAR_COSTS => "costs: ",
        PROMPT_SCENARIO_PATH => "Scenario file path (.toml/.json): ",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Default rate  2) Default horizon  3) Language (ko/en/auto)",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings updated.",
        REPORT_HEADING => "\n-- Result --",
        REPORT_PV_BENEFITS => "PV of benefits",
        REPORT_PV_COSTS => "PV of costs",
        REPORT_NPV => "NPV",
        REPORT_BCR => "BCR",
        REPORT_IRR => "IRR",
        REPORT_SROI => "SROI",
        REPORT_PAYBACK => "Payback",
        REPORT_YEARS_UNIT => "years",
        REPORT_TABLE_HEADER => "Year |            Net flow |             Cumulative",
        _ => return None,
    })
}
