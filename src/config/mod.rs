// ==========================================
// 인쇄 발주 집계 시스템 - 설정 계층
// ==========================================
// 책임: 생산 속도 상수 주입, 가져오기 경로/확장자 설정
// 저장: JSON 파일 / 환경 변수
// ==========================================

pub mod error;
pub mod ingest_config;
pub mod production_rates;

// 핵심 설정 재노출
pub use error::{ConfigError, ConfigResult};
pub use ingest_config::{default_upload_dir, IngestConfig, UPLOAD_DIR_ENV};
pub use production_rates::{CoatingLengthTable, ProductionRates};
