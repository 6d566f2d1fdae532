// ==========================================
// 인쇄 발주 집계 시스템 - 도메인 타입 정의
// ==========================================
// 원본 값: 엑셀 셀의 한글 표기 ("있음", "유광", "무광")
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 날개 (Wing Flag)
// ==========================================
// 표지 날개 유무, 코팅 재료 길이에 영향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WingFlag {
    Present, // 있음
    Absent,  // 없음
}

impl WingFlag {
    /// 셀 값 → 날개 유무 ("있음" 외의 값은 모두 없음)
    pub fn from_cell(value: &str) -> Self {
        if value.trim() == "있음" {
            WingFlag::Present
        } else {
            WingFlag::Absent
        }
    }
}

impl fmt::Display for WingFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WingFlag::Present => write!(f, "있음"),
            WingFlag::Absent => write!(f, "없음"),
        }
    }
}

// ==========================================
// 코팅 종류 (Coating Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoatingType {
    Glossy, // 유광
    Matte,  // 무광
    None,   // 코팅 없음 / 기타
}

impl CoatingType {
    /// 셀 값 → 코팅 종류
    pub fn from_cell(value: &str) -> Self {
        match value.trim() {
            "유광" => CoatingType::Glossy,
            "무광" => CoatingType::Matte,
            _ => CoatingType::None,
        }
    }
}

impl fmt::Display for CoatingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoatingType::Glossy => write!(f, "유광"),
            CoatingType::Matte => write!(f, "무광"),
            CoatingType::None => write!(f, "없음"),
        }
    }
}
