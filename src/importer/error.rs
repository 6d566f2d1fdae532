// ==========================================
// 인쇄 발주 집계 시스템 - 가져오기 모듈 오류 타입
// ==========================================
// 도구: thiserror 파생 매크로
// ==========================================

use serde::Serialize;
use std::fmt;
use thiserror::Error;

// ==========================================
// FieldViolation - 행/필드 단위 위반
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    MissingField,   // 필수 열 없음 / 필수 값 비어 있음
    TypeConversion, // 숫자 변환 실패
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub row_number: usize,
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "행 {} [{}] {}", self.row_number, self.field, self.message)
    }
}

// 오류 메시지에 나열할 최대 위반 건수
const MAX_LISTED_VIOLATIONS: usize = 10;

fn summarize_violations(violations: &[FieldViolation]) -> String {
    let mut listed: Vec<String> = violations
        .iter()
        .take(MAX_LISTED_VIOLATIONS)
        .map(|v| v.to_string())
        .collect();
    if violations.len() > MAX_LISTED_VIOLATIONS {
        listed.push(format!("외 {}건", violations.len() - MAX_LISTED_VIOLATIONS));
    }
    listed.join("; ")
}

/// 가져오기 모듈 오류 타입
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 파일 관련 =====
    #[error("파일이 없습니다: {0}")]
    FileNotFound(String),

    #[error("지원하지 않는 파일 형식: {0} (허용: {1})")]
    UnsupportedFormat(String, String),

    #[error("파일 읽기 실패: {0}")]
    FileReadError(String),

    #[error("Excel 파싱 실패: {0}")]
    ExcelParseError(String),

    #[error("CSV 파싱 실패: {0}")]
    CsvParseError(String),

    // ===== 데이터 검증 =====
    #[error("데이터 검증 실패 ({}건): {}", .0.len(), summarize_violations(.0))]
    Validation(Vec<FieldViolation>),

    // ===== 기타 =====
    #[error("내부 오류: {0}")]
    InternalError(String),
}

impl ImportError {
    /// 검증 오류의 위반 목록 (그 외 오류는 빈 슬라이스)
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            ImportError::Validation(violations) => violations,
            _ => &[],
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 타입 별칭
pub type ImportResult<T> = Result<T, ImportError>;
