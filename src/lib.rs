// ==========================================
// 인쇄 발주 집계 시스템 - 핵심 라이브러리
// ==========================================
// 입력: 발주 스프레드시트 (.xlsx / .csv)
// 출력: 인쇄/제본/코팅 작업 시간, 1시간 이상 도서, 파일 수 집계
// ==========================================

// 국제화 초기화
rust_i18n::i18n!("locales", fallback = "ko");

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 계층 - 발주 행/집계 결과
pub mod domain;

// 설정 계층 - 생산 속도/가져오기 설정
pub mod config;

// 가져오기 계층 - 파일 파싱/필드 매핑
pub mod importer;

// 엔진 계층 - 발주 집계
pub mod engine;

// 보고서 계층 - 텍스트/JSON 출력
pub mod report;

// 로그
pub mod logging;

// 성능 로그
pub mod perf;

// 국제화
pub mod i18n;

// ==========================================
// 핵심 타입 재노출
// ==========================================

pub use config::{ConfigError, IngestConfig, ProductionRates};
pub use domain::{
    CoatingType, ImportBatch, ImportedOrders, OrderRow, OverThresholdItem, SummaryResult,
    WingFlag,
};
pub use engine::{format_minutes, OrderAggregator};
pub use importer::{ImportError, OrderImporter, OrderImporterImpl};

// ==========================================
// 상수
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "인쇄 발주 집계 시스템";
