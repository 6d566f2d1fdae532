// ==========================================
// 인쇄 발주 집계 시스템 - 발주 가져오기 Trait
// ==========================================
// 책임: 가져오기 인터페이스 정의 (구현 없음)
// ==========================================

use crate::domain::order::{ImportedOrders, OrderRow};
use crate::importer::error::{FieldViolation, ImportError, ImportResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// RawRow - 파싱된 원시 행
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// 시트 상의 행 번호 (헤더 = 1)
    pub row_number: usize,
    /// 열 이름 → 셀 값 (trim 완료)
    pub fields: HashMap<String, String>,
}

// ==========================================
// ParsedSheet - 헤더 + 원시 행
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSheet {
    /// 헤더의 시트 상 행 번호 (보통 1)
    pub header_row: usize,
    /// 헤더 열 이름 (trim 완료, 데이터 행이 없어도 유지)
    pub headers: Vec<String>,
    /// 데이터 행 (빈 행 제외)
    pub rows: Vec<RawRow>,
}

// ==========================================
// OrderImporter Trait
// ==========================================
// 용도: 발주 파일 가져오기 주 인터페이스
// 구현자: OrderImporterImpl
#[async_trait]
pub trait OrderImporter: Send + Sync {
    /// 발주 파일 가져오기
    ///
    /// # 흐름
    /// 1. 확장자 확인
    /// 2. 업로드 폴더로 복사
    /// 3. 파일 파싱
    /// 4. 필드 매핑 (위반 사항은 파일 전체를 모아 한 번에 반환)
    ///
    /// # 반환
    /// - Ok(ImportedOrders): 배치 정보 + 발주 행
    /// - Err: 파일 오류 또는 `ImportError::Validation`
    async fn import_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportedOrders>;
}

// ==========================================
// FileParser Trait
// ==========================================
// 구현자: ExcelParser, CsvParser, UniversalFileParser
pub trait FileParser: Send + Sync {
    /// 파일 → 헤더 + 원시 행 목록 (빈 행 제외)
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<ParsedSheet>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 구현자: OrderFieldMapper
pub trait FieldMapper: Send + Sync {
    /// 헤더 검사 (빠진 필수 열마다 위반 하나)
    fn check_headers(&self, headers: &[String], header_row: usize) -> Vec<FieldViolation>;

    /// 원시 행 → OrderRow (행 내 위반을 모두 반환)
    fn map_to_order(&self, row: &RawRow) -> Result<OrderRow, Vec<FieldViolation>>;

    /// 헤더 검사 후 전체 행 매핑, 위반이 하나라도 있으면 결과 없이 검증 오류 하나로 반환
    ///
    /// 필수 열이 빠진 헤더는 데이터 행이 없어도 오류이며, 이때 행 매핑은 하지 않는다.
    fn map_all(&self, sheet: &ParsedSheet) -> ImportResult<Vec<OrderRow>> {
        let header_violations = self.check_headers(&sheet.headers, sheet.header_row);
        if !header_violations.is_empty() {
            return Err(ImportError::Validation(header_violations));
        }

        let mut orders = Vec::with_capacity(sheet.rows.len());
        let mut violations = Vec::new();

        for row in &sheet.rows {
            match self.map_to_order(row) {
                Ok(order) => orders.push(order),
                Err(mut row_violations) => violations.append(&mut row_violations),
            }
        }

        if violations.is_empty() {
            Ok(orders)
        } else {
            Err(ImportError::Validation(violations))
        }
    }
}
