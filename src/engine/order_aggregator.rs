// ==========================================
// 인쇄 발주 집계 시스템 - 발주 집계 엔진
// ==========================================
// 책임: 발주 행 → 작업 시간/1시간 이상 도서/파일 수 집계
// 입력: 검증이 끝난 OrderRow 목록
// 출력: SummaryResult
// ==========================================

use crate::config::ProductionRates;
use crate::domain::order::OrderRow;
use crate::domain::summary::{OverThresholdItem, SummaryResult};
use crate::domain::types::CoatingType;
use crate::engine::time_format::format_minutes;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

// ==========================================
// 단계별 중간 결과
// ==========================================

// 행 값은 u64, 합계는 u128 (u64 행을 아무리 더해도 넘치지 않음)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BasicTotals {
    pub item_count: u64,
    pub total_quantity: u128,
    pub total_bw_pages: u128,
    pub total_color_pages: u128,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoatingLengths {
    pub glossy_mm: f64,
    pub matte_mm: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileCounts {
    pub by_folder: BTreeMap<String, u64>,
    pub cover_count: u64,
    pub inner_file_count: u64,
    pub grand_total: u64,
}

// ==========================================
// OrderAggregator - 발주 집계 엔진
// ==========================================
// 상태 없음: 같은 입력이면 항상 같은 결과
pub struct OrderAggregator {
    rates: ProductionRates,
}

impl Default for OrderAggregator {
    fn default() -> Self {
        Self::new(ProductionRates::default())
    }
}

impl OrderAggregator {
    /// 주입된 속도 상수로 엔진 생성 (검증은 호출자 책임, `ProductionRates::validate`)
    pub fn new(rates: ProductionRates) -> Self {
        Self { rates }
    }

    // ==========================================
    // 핵심 메서드
    // ==========================================

    /// 발주 행 전체 집계
    ///
    /// 빈 목록이면 모든 값이 0인 결과를 반환한다.
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub fn aggregate(&self, rows: &[OrderRow]) -> SummaryResult {
        let _perf = crate::perf::PerfGuard::new("aggregate", rows.len());

        // 1. 기본 합계
        let totals = self.basic_totals(rows);

        // 2. 코팅 길이
        let coating = self.coating_lengths(rows);

        // 3. 1시간 이상 도서
        let (over_hour_bw, over_hour_color) = self.over_threshold_items(rows);

        // 4. 파일/폴더 수
        let files = self.file_counts(rows);

        debug!(
            items = totals.item_count,
            quantity = totals.total_quantity,
            bw_pages = totals.total_bw_pages,
            color_pages = totals.total_color_pages,
            glossy_mm = coating.glossy_mm,
            matte_mm = coating.matte_mm,
            over_bw = over_hour_bw.len(),
            over_color = over_hour_color.len(),
            "집계 완료"
        );

        SummaryResult {
            item_count: totals.item_count,
            total_quantity: totals.total_quantity,
            total_bw_pages: totals.total_bw_pages,
            total_color_pages: totals.total_color_pages,
            bw_print_time: format_minutes(per_hour_to_minutes(
                totals.total_bw_pages as f64,
                self.rates.bw_print_per_hour,
            )),
            color_print_time: format_minutes(per_hour_to_minutes(
                totals.total_color_pages as f64,
                self.rates.color_print_per_hour,
            )),
            bind_time: format_minutes(per_hour_to_minutes(
                totals.total_quantity as f64,
                self.rates.bind_per_hour,
            )),
            glossy_coat_time: format_minutes(self.coating_minutes(coating.glossy_mm)),
            matte_coat_time: format_minutes(self.coating_minutes(coating.matte_mm)),
            over_hour_bw,
            over_hour_color,
            inner_files_by_folder: files.by_folder,
            cover_count: files.cover_count,
            inner_file_count: files.inner_file_count,
            grand_total: files.grand_total,
        }
    }

    // ==========================================
    // 1. 기본 합계
    // ==========================================

    pub fn basic_totals(&self, rows: &[OrderRow]) -> BasicTotals {
        rows.iter().fold(
            BasicTotals {
                item_count: rows.len() as u64,
                ..BasicTotals::default()
            },
            |mut acc, row| {
                acc.total_quantity += u128::from(row.quantity);
                acc.total_bw_pages += u128::from(row.bw_pages);
                acc.total_color_pages += u128::from(row.color_pages);
                acc
            },
        )
    }

    // ==========================================
    // 2. 코팅 길이 누적
    // ==========================================

    /// 행별 코팅 길이 (부당 길이 × 발주량, mm)
    pub fn coating_length_of(&self, row: &OrderRow) -> f64 {
        let per_unit = self.rates.coating_lengths.length_for(
            row.wing,
            &row.spec,
            &self.rates.b5_marker,
        );
        per_unit * row.quantity as f64
    }

    /// 유광/무광 버킷별 누적 (코팅 없음은 제외)
    pub fn coating_lengths(&self, rows: &[OrderRow]) -> CoatingLengths {
        let mut lengths = CoatingLengths::default();
        for row in rows {
            match row.coating {
                CoatingType::Glossy => lengths.glossy_mm += self.coating_length_of(row),
                CoatingType::Matte => lengths.matte_mm += self.coating_length_of(row),
                CoatingType::None => {}
            }
        }
        lengths
    }

    /// 코팅 길이(mm) → 분
    pub fn coating_minutes(&self, length_mm: f64) -> f64 {
        (length_mm / self.rates.coating_mm_per_sec) / 60.0
    }

    // ==========================================
    // 3. 1시간 이상 도서
    // ==========================================

    /// 흑백/칼라 각각 기준 처리량으로 1시간 이상 걸리는 행 (행 순서 유지)
    pub fn over_threshold_items(
        &self,
        rows: &[OrderRow],
    ) -> (Vec<OverThresholdItem>, Vec<OverThresholdItem>) {
        let mut over_bw = Vec::new();
        let mut over_color = Vec::new();

        for row in rows {
            let bw_hours = row.bw_pages as f64 / self.rates.bw_threshold_per_hour;
            let color_hours = row.color_pages as f64 / self.rates.color_threshold_per_hour;

            if bw_hours >= 1.0 {
                over_bw.push(OverThresholdItem {
                    title: row.title.clone(),
                    group_label: row.group_label.clone(),
                    pages: row.bw_pages,
                    duration: format_minutes(bw_hours * 60.0),
                });
            }
            if color_hours >= 1.0 {
                over_color.push(OverThresholdItem {
                    title: row.title.clone(),
                    group_label: row.group_label.clone(),
                    pages: row.color_pages,
                    duration: format_minutes(color_hours * 60.0),
                });
            }
        }

        (over_bw, over_color)
    }

    // ==========================================
    // 4. 파일/폴더 수
    // ==========================================

    /// 행별 내지 파일 수 (혼합 공정 2, 그 외 1)
    pub fn inner_files_of(&self, row: &OrderRow) -> u64 {
        if row.process == self.rates.mixed_process_marker {
            2
        } else {
            1
        }
    }

    /// 표지수 = 종수, 총합 = 표지수 + 내지수
    ///
    /// 내지수는 행 수의 2배 이하이므로 u64 로 충분하다.
    pub fn file_counts(&self, rows: &[OrderRow]) -> FileCounts {
        let mut by_folder: BTreeMap<String, u64> = BTreeMap::new();
        let mut inner_file_count = 0;

        for row in rows {
            let files = self.inner_files_of(row);
            inner_file_count += files;
            *by_folder.entry(row.folder.clone()).or_insert(0) += files;
        }

        let cover_count = rows.len() as u64;
        FileCounts {
            by_folder,
            cover_count,
            inner_file_count,
            grand_total: cover_count + inner_file_count,
        }
    }
}

/// 수량 → 분 (시간당 처리량 기준)
fn per_hour_to_minutes(total: f64, per_hour: f64) -> f64 {
    total / (per_hour / 60.0)
}
