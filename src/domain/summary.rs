// ==========================================
// 인쇄 발주 집계 시스템 - 집계 결과 모델
// ==========================================
// 생명주기: 집계 엔진이 한 번 생성, 이후 변경 없음
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// OverThresholdItem - 1시간 이상 도서
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverThresholdItem {
    pub title: String,       // 도서명
    pub group_label: String, // 파일명(그룹명)
    pub pages: u64,          // 해당 색상 페이지 수
    pub duration: String,    // 소요 시간 (H:MM)
}

// ==========================================
// SummaryResult - 발주 집계 결과
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    // ===== 기본 합계 =====
    pub item_count: u64,         // 종수
    pub total_quantity: u128,    // 부수
    pub total_bw_pages: u128,    // 흑백페이지수
    pub total_color_pages: u128, // 칼라페이지수

    // ===== 작업 시간 (H:MM) =====
    pub bw_print_time: String,    // 흑백인쇄시간
    pub color_print_time: String, // 칼라인쇄시간
    pub bind_time: String,        // 제본시간
    pub glossy_coat_time: String, // 유광코팅시간
    pub matte_coat_time: String,  // 무광코팅시간

    // ===== 1시간 이상 도서 =====
    pub over_hour_bw: Vec<OverThresholdItem>,    // 1시간흑백
    pub over_hour_color: Vec<OverThresholdItem>, // 1시간칼라

    // ===== 파일/폴더 =====
    pub inner_files_by_folder: BTreeMap<String, u64>, // 폴더별
    pub cover_count: u64,                             // 표지수
    pub inner_file_count: u64,                        // 내지수
    pub grand_total: u64,                             // 총합
}
