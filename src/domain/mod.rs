// ==========================================
// 인쇄 발주 집계 시스템 - 도메인 모델 계층
// ==========================================
// 책임: 발주 행, 집계 결과, 도메인 타입 정의
// 제약: 파일 접근 로직 없음, 계산 로직 없음
// ==========================================

pub mod order;
pub mod summary;
pub mod types;

// 핵심 타입 재노출
pub use order::{ImportBatch, ImportedOrders, OrderRow};
pub use summary::{OverThresholdItem, SummaryResult};
pub use types::{CoatingType, WingFlag};
