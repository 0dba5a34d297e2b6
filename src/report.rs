//! CLI 출력용 결과 렌더링. 통화/지역화 서식은 다루지 않는다.

use std::fmt::Write;

use crate::benefit::CalculationResult;
use crate::i18n::{keys, Translator};

const INFINITY_MARK: &str = "∞";

fn fmt_ratio(value: f64) -> String {
    if value.is_infinite() {
        INFINITY_MARK.to_string()
    } else {
        format!("{value:.3}")
    }
}

fn fmt_optional(value: Option<String>, tr: &Translator) -> String {
    value.unwrap_or_else(|| tr.t(keys::NOT_AVAILABLE).to_string())
}

/// 결과를 사람이 읽는 표 형식으로 만든다.
pub fn render_text(result: &CalculationResult, tr: &Translator) -> String {
    let irr = fmt_optional(result.irr.map(|r| format!("{:.2} %", r * 100.0)), tr);
    let payback = fmt_optional(
        result
            .payback_years
            .map(|y| format!("{y:.2} {}", tr.t(keys::REPORT_YEARS_UNIT))),
        tr,
    );

    let mut out = String::new();
    let rows = [
        (keys::REPORT_PV_BENEFITS, format!("{:.2}", result.pv_benefits)),
        (keys::REPORT_PV_COSTS, format!("{:.2}", result.pv_costs)),
        (keys::REPORT_NPV, format!("{:.2}", result.npv)),
        (keys::REPORT_BCR, fmt_ratio(result.bcr)),
        (keys::REPORT_IRR, irr),
        (keys::REPORT_SROI, fmt_ratio(result.sroi)),
        (keys::REPORT_PAYBACK, payback),
    ];
    // String에 대한 write!는 실패하지 않는다
    let _ = writeln!(out, "{}", tr.t(keys::REPORT_HEADING).trim_start());
    for (key, value) in rows {
        let _ = writeln!(out, "{}: {value}", tr.t(key));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", tr.t(keys::REPORT_TABLE_HEADER));
    for (year, (net, cum)) in result
        .net_per_year
        .iter()
        .zip(&result.cumulative_per_year)
        .enumerate()
    {
        let _ = writeln!(out, "{year:>4} | {net:>19.2} | {cum:>22.2}");
    }
    out
}

/// 결과를 JSON으로 직렬화한다.
pub fn render_json(result: &CalculationResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
