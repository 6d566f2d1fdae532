// ==========================================
// 인쇄 발주 집계 시스템 - 엔진 계층
// ==========================================
// 책임: 속도 상수 기반 작업 시간 산출, 그룹 집계
// 제약: 파일 접근 없음, 상태 없음
// ==========================================

pub mod order_aggregator;
pub mod time_format;

pub use order_aggregator::{BasicTotals, CoatingLengths, FileCounts, OrderAggregator};
pub use time_format::format_minutes;
