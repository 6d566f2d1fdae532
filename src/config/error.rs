// ==========================================
// 인쇄 발주 집계 시스템 - 설정 오류 타입
// ==========================================

use thiserror::Error;

/// 설정 모듈 오류 타입
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("설정 파일 읽기 실패 ({path}): {message}")]
    FileReadError { path: String, message: String },

    #[error("설정 파일 형식 오류 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("설정 값 오류 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

/// Result 타입 별칭
pub type ConfigResult<T> = Result<T, ConfigError>;
