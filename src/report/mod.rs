// ==========================================
// 인쇄 발주 집계 시스템 - 보고서 계층
// ==========================================
// 책임: SummaryResult → 사람이 읽는 텍스트 / JSON
// ==========================================

pub mod text_report;

pub use text_report::render_text;

use crate::domain::summary::SummaryResult;

/// 집계 결과 → JSON (들여쓰기 포함), 결과가 없으면 `null`
pub fn render_json(summary: Option<&SummaryResult>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&summary)
}
