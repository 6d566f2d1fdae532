// ==========================================
// 인쇄 발주 집계 시스템 - 가져오기 계층
// ==========================================
// 책임: 업로드된 발주 파일 → 검증된 OrderRow 목록
// 지원: Excel, CSV
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod order_importer_impl;
pub mod order_importer_trait;

// 핵심 타입 재노출
pub use error::{FieldViolation, ImportError, ImportResult, ViolationKind};
pub use field_mapper::{columns, OrderFieldMapper};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use order_importer_impl::OrderImporterImpl;

// Trait 인터페이스 재노출
pub use order_importer_trait::{FieldMapper, FileParser, OrderImporter, ParsedSheet, RawRow};
