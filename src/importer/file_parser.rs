// ==========================================
// 인쇄 발주 집계 시스템 - 파일 파서 구현
// ==========================================
// 지원: Excel (.xlsx) / CSV (.csv)
// 첫 행은 헤더, 완전히 빈 행은 건너뜀
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::order_importer_trait::{FileParser, ParsedSheet, RawRow};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ImportError::FileNotFound(path.display().to_string()))
    }
}

/// 헤더 + 셀 값 → RawRow (모두 비어 있으면 None)
fn build_row<I>(headers: &[String], cells: I, row_number: usize) -> Option<RawRow>
where
    I: IntoIterator<Item = String>,
{
    let mut fields = HashMap::new();
    for (col_idx, value) in cells.into_iter().enumerate() {
        if let Some(header) = headers.get(col_idx) {
            if header.is_empty() {
                continue;
            }
            fields.insert(header.clone(), value.trim().to_string());
        }
    }

    if fields.values().all(|v| v.is_empty()) {
        return None;
    }

    Some(RawRow { row_number, fields })
}

// ==========================================
// CSV Parser
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<ParsedSheet> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext, "csv".to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 행 길이 불일치 허용
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let row_number = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(idx + 2);
            let cells = record.iter().map(str::to_string);
            if let Some(row) = build_row(&headers, cells, row_number) {
                rows.push(row);
            }
        }

        Ok(ParsedSheet {
            header_row: 1,
            headers,
            rows,
        })
    }
}

// ==========================================
// Excel Parser
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<ParsedSheet> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "xlsx" {
            return Err(ImportError::UnsupportedFormat(ext, "xlsx".to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)?;

        // 첫 번째 시트만 읽음
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("워크시트가 없습니다".to_string()))?;
        let range = workbook.worksheet_range(&sheet_name)?;

        // range 시작 행 보정 (시트 상단 빈 행)
        let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);

        let mut sheet_rows = range.rows();
        let headers: Vec<String> = match sheet_rows.next() {
            Some(row) => row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect(),
            // 헤더도 없는 빈 시트 → 필수 열 검사에서 걸림
            None => Vec::new(),
        };

        let mut rows = Vec::new();
        for (idx, data_row) in sheet_rows.enumerate() {
            let cells = data_row.iter().map(|cell| cell.to_string());
            if let Some(row) = build_row(&headers, cells, first_row + idx + 2) {
                rows.push(row);
            }
        }

        Ok(ParsedSheet {
            header_row: first_row + 1,
            headers,
            rows,
        })
    }
}

// ==========================================
// 범용 파서 (확장자로 자동 선택)
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<ParsedSheet> {
        match extension_of(file_path).as_str() {
            "csv" => CsvParser.parse_sheet(file_path),
            "xlsx" => ExcelParser.parse_sheet(file_path),
            other => Err(ImportError::UnsupportedFormat(
                other.to_string(),
                "xlsx, csv".to_string(),
            )),
        }
    }
}
