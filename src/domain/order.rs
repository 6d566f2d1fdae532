// ==========================================
// 인쇄 발주 집계 시스템 - 발주 도메인 모델
// ==========================================
// 용도: 가져오기 계층이 생성, 집계 엔진은 읽기만 함
// ==========================================

use crate::domain::types::{CoatingType, WingFlag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// OrderRow - 발주 행 (인쇄 작업 1건)
// ==========================================
// 불변식: 페이지 수는 이미 발주량이 곱해진 값
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    // ===== 식별 =====
    pub title: String,       // 도서명
    pub group_label: String, // 파일명(그룹명), 없으면 ""

    // ===== 수량 =====
    pub quantity: u64,    // 발주량
    pub bw_pages: u64,    // 흑백페이지수
    pub color_pages: u64, // 컬러페이지수

    // ===== 후가공 =====
    pub wing: WingFlag,       // 날개
    pub spec: String,         // 규격 (부분 문자열 매칭용)
    pub coating: CoatingType, // 코팅

    // ===== 파일 계획 =====
    pub process: String, // 공정구분
    pub folder: String,  // 폴더

    // 원본 파일 데이터 행 번호 (1부터)
    pub row_number: usize,
}

// ==========================================
// ImportBatch - 가져오기 배치
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportBatch {
    pub batch_id: String,            // 배치 ID (UUID)
    pub file_name: Option<String>,   // 원본 파일명
    pub stored_path: String,         // 업로드 폴더에 저장된 경로
    pub total_rows: usize,           // 행 수
    pub imported_at: DateTime<Utc>,  // 가져온 시각
}

// ==========================================
// ImportedOrders - 가져오기 결과
// ==========================================
#[derive(Debug, Clone)]
pub struct ImportedOrders {
    pub batch: ImportBatch,
    pub rows: Vec<OrderRow>,
}
