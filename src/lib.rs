//! 비용 편익 계산 엔진을 라이브러리로 분리하여 CLI 외의 화면에서도 그대로 호출할 수 있게 한다.

pub mod app;
pub mod benefit;
pub mod config;
pub mod i18n;
pub mod report;
pub mod scenario;
pub mod ui_cli;
