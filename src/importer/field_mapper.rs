// ==========================================
// 인쇄 발주 집계 시스템 - 필드 매퍼 구현
// ==========================================
// 책임: 원본 열 → OrderRow 필드 매핑 + 타입 변환
// 필수: 도서명, 발주량, 흑백페이지수, 컬러페이지수, 날개, 규격, 코팅, 공정구분
// 선택: 파일명(그룹명), 폴더 (없으면 "")
// ==========================================

use crate::domain::order::OrderRow;
use crate::domain::types::{CoatingType, WingFlag};
use crate::importer::error::{FieldViolation, ViolationKind};
use crate::importer::order_importer_trait::{FieldMapper as FieldMapperTrait, RawRow};

/// 원본 열 이름
pub mod columns {
    pub const TITLE: &str = "도서명";
    pub const GROUP_LABEL: &str = "파일명(그룹명)";
    pub const QUANTITY: &str = "발주량";
    pub const BW_PAGES: &str = "흑백페이지수";
    pub const COLOR_PAGES: &str = "컬러페이지수";
    pub const WING: &str = "날개";
    pub const SPEC: &str = "규격";
    pub const COATING: &str = "코팅";
    pub const PROCESS: &str = "공정구분";
    pub const FOLDER: &str = "폴더";

    /// 헤더에 반드시 있어야 하는 열
    pub const REQUIRED: &[&str] = &[
        TITLE,
        QUANTITY,
        BW_PAGES,
        COLOR_PAGES,
        WING,
        SPEC,
        COATING,
        PROCESS,
    ];

    /// 열 이름과 별칭
    pub fn aliases_of(key: &str) -> &'static [&'static str] {
        match key {
            COLOR_PAGES => &[COLOR_PAGES, "칼라페이지수"],
            GROUP_LABEL => &[GROUP_LABEL, "파일명", "그룹명"],
            _ => &[],
        }
    }
}

/// 발주량/페이지수 상한 (f64 로 정확히 표현되는 정수 범위, 2^53)
pub const MAX_COUNT: u64 = 1 << 53;

pub struct OrderFieldMapper;

impl FieldMapperTrait for OrderFieldMapper {
    fn check_headers(&self, headers: &[String], header_row: usize) -> Vec<FieldViolation> {
        columns::REQUIRED
            .iter()
            .filter(|key| {
                let aliases = columns::aliases_of(key);
                !headers.iter().any(|header| {
                    let header = header.trim();
                    header == **key || aliases.contains(&header)
                })
            })
            .map(|key| missing(header_row, key, "열이 없습니다"))
            .collect()
    }

    fn map_to_order(&self, row: &RawRow) -> Result<OrderRow, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let title = self.required_text(row, columns::TITLE, &mut violations);
        let quantity = self.required_count(row, columns::QUANTITY, &mut violations);
        let bw_pages = self.required_count(row, columns::BW_PAGES, &mut violations);
        let color_pages = self.required_count(row, columns::COLOR_PAGES, &mut violations);
        let wing = self.required_text(row, columns::WING, &mut violations);
        let spec = self.required_text(row, columns::SPEC, &mut violations);
        let coating = self.required_text(row, columns::COATING, &mut violations);
        let process = self.required_text(row, columns::PROCESS, &mut violations);

        if !violations.is_empty() {
            return Err(violations);
        }

        Ok(OrderRow {
            title: title.unwrap_or_default(),
            group_label: self.optional_text(row, columns::GROUP_LABEL),
            quantity: quantity.unwrap_or_default(),
            bw_pages: bw_pages.unwrap_or_default(),
            color_pages: color_pages.unwrap_or_default(),
            wing: WingFlag::from_cell(wing.as_deref().unwrap_or_default()),
            spec: spec.unwrap_or_default(),
            coating: CoatingType::from_cell(coating.as_deref().unwrap_or_default()),
            process: process.unwrap_or_default(),
            folder: self.optional_text(row, columns::FOLDER),
            row_number: row.row_number,
        })
    }
}

impl OrderFieldMapper {
    /// 셀 값 조회 (별칭 열 이름 포함), 열이 없으면 None
    fn get_cell<'a>(&self, row: &'a RawRow, key: &str) -> Option<&'a str> {
        let aliases = columns::aliases_of(key);
        row.fields
            .get(key)
            .or_else(|| aliases.iter().find_map(|alias| row.fields.get(*alias)))
            .map(|v| v.trim())
    }

    /// 필수 문자열 열 (열은 있어야 하고 빈 값은 허용)
    fn required_text(
        &self,
        row: &RawRow,
        key: &str,
        violations: &mut Vec<FieldViolation>,
    ) -> Option<String> {
        match self.get_cell(row, key) {
            Some(value) => Some(value.to_string()),
            None => {
                violations.push(missing(row.row_number, key, "열이 없습니다"));
                None
            }
        }
    }

    /// 필수 정수 열 (0 이상 정수, "100.0" 같은 정수형 실수 허용)
    fn required_count(
        &self,
        row: &RawRow,
        key: &str,
        violations: &mut Vec<FieldViolation>,
    ) -> Option<u64> {
        let value = match self.get_cell(row, key) {
            None => {
                violations.push(missing(row.row_number, key, "열이 없습니다"));
                return None;
            }
            Some("") => {
                violations.push(missing(row.row_number, key, "값이 비어 있습니다"));
                return None;
            }
            Some(value) => value,
        };

        match parse_count(value) {
            Some(count) => Some(count),
            None => {
                violations.push(FieldViolation {
                    row_number: row.row_number,
                    field: key.to_string(),
                    kind: ViolationKind::TypeConversion,
                    message: format!("0 이상 {} 이하의 정수가 아닙니다: {}", MAX_COUNT, value),
                });
                None
            }
        }
    }

    /// 선택 문자열 열 (없으면 "")
    fn optional_text(&self, row: &RawRow, key: &str) -> String {
        self.get_cell(row, key).unwrap_or_default().to_string()
    }
}

fn missing(row_number: usize, key: &str, message: &str) -> FieldViolation {
    FieldViolation {
        row_number,
        field: key.to_string(),
        kind: ViolationKind::MissingField,
        message: message.to_string(),
    }
}

/// "100" / "100.0" / "1,000" → 100 / 100 / 1000 (MAX_COUNT 초과는 None)
fn parse_count(value: &str) -> Option<u64> {
    let normalized = value.replace(',', "");
    if let Ok(count) = normalized.parse::<u64>() {
        return (count <= MAX_COUNT).then_some(count);
    }

    let float = normalized.parse::<f64>().ok()?;
    if float.is_finite() && float >= 0.0 && float.fract() == 0.0 && float <= MAX_COUNT as f64 {
        Some(float as u64)
    } else {
        None
    }
}
