// ==========================================
// 인쇄 발주 집계 시스템 - 가져오기 통합 테스트
// ==========================================
// 흐름: Excel/CSV 발주 파일 → OrderImporter → OrderAggregator
// ==========================================


use print_order_summary::importer::{ImportError, OrderImporter, OrderImporterImpl, ViolationKind};
use print_order_summary::{logging, CoatingType, IngestConfig, OrderAggregator, WingFlag};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;
use test_helpers::{write_csv, write_order_csv, ORDER_HEADER};

/// 헤더를 `header_row` (0부터) 에 쓴 워크북
fn order_workbook(header_row: u32, header: &str) -> Workbook {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, name) in header.split(',').enumerate() {
        worksheet.write_string(header_row, col as u16, name).unwrap();
    }
    workbook
}

fn csv_importer(upload_dir: &std::path::Path) -> OrderImporterImpl {
    OrderImporterImpl::new(IngestConfig::new(upload_dir).allow_extension("csv"))
}

#[tokio::test]
async fn test_import_and_aggregate_single_book() {
    logging::init_test();
    let source_dir = TempDir::new().unwrap();
    let upload_dir = TempDir::new().unwrap();

    let path = write_order_csv(
        source_dir.path(),
        "orders.csv",
        &["Book1,G1,100,22320,0,있음,B5 사이즈,유광,단면,F1"],
    )
    .unwrap();

    let imported = csv_importer(upload_dir.path()).import_file(&path).await.unwrap();

    assert_eq!(imported.rows.len(), 1);
    let row = &imported.rows[0];
    assert_eq!(row.title, "Book1");
    assert_eq!(row.group_label, "G1");
    assert_eq!(row.wing, WingFlag::Present);
    assert_eq!(row.coating, CoatingType::Glossy);
    assert_eq!(row.row_number, 2);

    let summary = OrderAggregator::default().aggregate(&imported.rows);
    assert_eq!(summary.item_count, 1);
    assert_eq!(summary.total_quantity, 100);
    assert_eq!(summary.bw_print_time, "1:00");
    assert_eq!(summary.glossy_coat_time, "0:12");
    assert_eq!(summary.over_hour_bw.len(), 1);
    assert_eq!(summary.inner_files_by_folder.get("F1"), Some(&1));
    assert_eq!(summary.grand_total, 2);
}

#[tokio::test]
async fn test_upload_is_stored_in_upload_dir() {
    let source_dir = TempDir::new().unwrap();
    let upload_dir = TempDir::new().unwrap();
    let nested_upload = upload_dir.path().join("uploads");

    let path = write_order_csv(
        source_dir.path(),
        "batch.csv",
        &["Book1,,1,10,0,없음,A5,무광,단면,A"],
    )
    .unwrap();

    let imported = csv_importer(&nested_upload).import_file(&path).await.unwrap();

    let stored = nested_upload.join("batch.csv");
    assert!(stored.exists());
    assert_eq!(imported.batch.stored_path, stored.display().to_string());
    assert_eq!(imported.batch.file_name.as_deref(), Some("batch.csv"));
    assert_eq!(imported.batch.total_rows, 1);
    assert!(!imported.batch.batch_id.is_empty());
}

#[tokio::test]
async fn test_import_file_already_in_upload_dir() {
    let upload_dir = TempDir::new().unwrap();
    let path = write_order_csv(
        upload_dir.path(),
        "inplace.csv",
        &["Book1,,1,10,0,없음,A5,무광,단면,A"],
    )
    .unwrap();

    let imported = csv_importer(upload_dir.path()).import_file(&path).await.unwrap();

    assert_eq!(imported.rows.len(), 1);
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[tokio::test]
async fn test_default_config_rejects_csv() {
    let source_dir = TempDir::new().unwrap();
    let upload_dir = TempDir::new().unwrap();
    let path = write_order_csv(source_dir.path(), "orders.csv", &[]).unwrap();

    let importer = OrderImporterImpl::new(IngestConfig::new(upload_dir.path()));
    let result = importer.import_file(&path).await;

    match result {
        Err(ImportError::UnsupportedFormat(ext, allowed)) => {
            assert_eq!(ext, "csv");
            assert_eq!(allowed, "xlsx");
        }
        other => panic!("expected UnsupportedFormat, got {:?}", other.map(|o| o.rows)),
    }
    // 거부된 파일은 저장하지 않음
    assert!(!upload_dir.path().join("orders.csv").exists());
}

#[tokio::test]
async fn test_missing_file() {
    let upload_dir = TempDir::new().unwrap();
    let result = csv_importer(upload_dir.path())
        .import_file(upload_dir.path().join("nope.csv"))
        .await;
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}

#[tokio::test]
async fn test_violations_across_rows_reported_together() {
    let source_dir = TempDir::new().unwrap();
    let upload_dir = TempDir::new().unwrap();

    let path = write_order_csv(
        source_dir.path(),
        "bad.csv",
        &[
            "Book1,,100,22320,0,있음,B5,유광,단면,A",
            "Book2,,,10,0,없음,A5,무광,단면,A",
            "Book3,,5,many,0,없음,A5,무광,단면,B",
        ],
    )
    .unwrap();

    let err = csv_importer(upload_dir.path())
        .import_file(&path)
        .await
        .unwrap_err();

    let violations = err.violations();
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].row_number, 3);
    assert_eq!(violations[0].field, "발주량");
    assert_eq!(violations[0].kind, ViolationKind::MissingField);
    assert_eq!(violations[1].row_number, 4);
    assert_eq!(violations[1].field, "흑백페이지수");
    assert_eq!(violations[1].kind, ViolationKind::TypeConversion);
    assert!(err.to_string().contains("2건"));
}

#[tokio::test]
async fn test_missing_required_column() {
    let source_dir = TempDir::new().unwrap();
    let upload_dir = TempDir::new().unwrap();

    // 코팅 열 없음
    let path = write_csv(
        source_dir.path(),
        "no_coating.csv",
        "도서명,발주량,흑백페이지수,컬러페이지수,날개,규격,공정구분",
        &["Book1,1,1,1,없음,A5,단면", "Book2,1,1,1,없음,A5,단면"],
    )
    .unwrap();

    let err = csv_importer(upload_dir.path())
        .import_file(&path)
        .await
        .unwrap_err();

    // 열 하나에 위반 하나 (행마다 반복하지 않음)
    let violations = err.violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "코팅");
    assert_eq!(violations[0].row_number, 1);
    assert_eq!(violations[0].kind, ViolationKind::MissingField);
}

#[tokio::test]
async fn test_header_only_file_missing_columns_is_error() {
    let source_dir = TempDir::new().unwrap();
    let upload_dir = TempDir::new().unwrap();
    let path = write_csv(source_dir.path(), "header_only.csv", "도서명,코팅,공정구분", &[]).unwrap();

    let err = csv_importer(upload_dir.path())
        .import_file(&path)
        .await
        .unwrap_err();

    let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["발주량", "흑백페이지수", "컬러페이지수", "날개", "규격"]
    );
}

#[tokio::test]
async fn test_oversized_count_reported_as_violation() {
    let source_dir = TempDir::new().unwrap();
    let upload_dir = TempDir::new().unwrap();
    let path = write_order_csv(
        source_dir.path(),
        "huge.csv",
        &["Book1,,18446744073709551615,1,0,없음,A5,무광,단면,A"],
    )
    .unwrap();

    let err = csv_importer(upload_dir.path())
        .import_file(&path)
        .await
        .unwrap_err();

    let violations = err.violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "발주량");
    assert_eq!(violations[0].kind, ViolationKind::TypeConversion);
}

#[tokio::test]
async fn test_empty_file_yields_zero_summary() {
    let source_dir = TempDir::new().unwrap();
    let upload_dir = TempDir::new().unwrap();
    let path = write_order_csv(source_dir.path(), "empty.csv", &[]).unwrap();

    let imported = csv_importer(upload_dir.path()).import_file(&path).await.unwrap();
    let summary = OrderAggregator::default().aggregate(&imported.rows);

    assert_eq!(summary.item_count, 0);
    assert_eq!(summary.grand_total, 0);
    assert_eq!(summary.bind_time, "0:00");
}

// ==========================================
// Excel (.xlsx)
// ==========================================

#[tokio::test]
async fn test_xlsx_import_and_aggregate() {
    let source_dir = TempDir::new().unwrap();
    let upload_dir = TempDir::new().unwrap();
    let path = source_dir.path().join("orders.xlsx");

    let mut workbook = order_workbook(0, ORDER_HEADER);
    let sheet = workbook.worksheet_from_index(0).unwrap();
    // 2행: 숫자 셀, 폴더도 숫자
    sheet.write_string(1, 0, "Book1").unwrap();
    sheet.write_string(1, 1, "G1").unwrap();
    sheet.write_number(1, 2, 100).unwrap();
    sheet.write_number(1, 3, 22320).unwrap();
    sheet.write_number(1, 4, 0).unwrap();
    sheet.write_string(1, 5, "있음").unwrap();
    sheet.write_string(1, 6, "B5 사이즈").unwrap();
    sheet.write_string(1, 7, "유광").unwrap();
    sheet.write_string(1, 8, "혼합").unwrap();
    sheet.write_number(1, 9, 3).unwrap();
    // 3행: 빈 행
    // 4행: 그룹명 비어 있음, 폴더는 문자열
    sheet.write_string(3, 0, "Book2").unwrap();
    sheet.write_number(3, 2, 50).unwrap();
    sheet.write_number(3, 3, 11160).unwrap();
    sheet.write_number(3, 4, 4020).unwrap();
    sheet.write_string(3, 5, "없음").unwrap();
    sheet.write_string(3, 6, "A5").unwrap();
    sheet.write_string(3, 7, "무광").unwrap();
    sheet.write_string(3, 8, "단면").unwrap();
    sheet.write_string(3, 9, "3").unwrap();
    workbook.save(&path).unwrap();

    // 기본 설정 (xlsx 만 허용)
    let importer = OrderImporterImpl::new(IngestConfig::new(upload_dir.path()));
    let imported = importer.import_file(&path).await.unwrap();

    assert!(upload_dir.path().join("orders.xlsx").exists());
    assert_eq!(imported.rows.len(), 2);
    let first = &imported.rows[0];
    assert_eq!(first.row_number, 2);
    assert_eq!(first.quantity, 100);
    assert_eq!(first.bw_pages, 22320);
    assert_eq!(first.wing, WingFlag::Present);
    assert_eq!(first.coating, CoatingType::Glossy);
    assert_eq!(first.folder, "3");
    let second = &imported.rows[1];
    assert_eq!(second.row_number, 4);
    assert_eq!(second.group_label, "");
    assert_eq!(second.coating, CoatingType::Matte);

    let summary = OrderAggregator::default().aggregate(&imported.rows);
    assert_eq!(summary.total_quantity, 150);
    // 33480 / 372 = 90분
    assert_eq!(summary.bw_print_time, "1:30");
    // 4020 / 134 = 30분
    assert_eq!(summary.color_print_time, "0:30");
    assert_eq!(summary.bind_time, "0:30");
    assert_eq!(summary.glossy_coat_time, "0:12");
    let over_bw: Vec<(&str, &str)> = summary
        .over_hour_bw
        .iter()
        .map(|i| (i.title.as_str(), i.duration.as_str()))
        .collect();
    assert_eq!(over_bw, vec![("Book1", "2:00"), ("Book2", "1:00")]);
    assert_eq!(summary.over_hour_color.len(), 1);
    assert_eq!(summary.inner_files_by_folder.get("3"), Some(&3));
    assert_eq!(summary.cover_count, 2);
    assert_eq!(summary.grand_total, 5);
}

#[tokio::test]
async fn test_xlsx_header_below_blank_top_row() {
    let source_dir = TempDir::new().unwrap();
    let upload_dir = TempDir::new().unwrap();
    let path = source_dir.path().join("offset.xlsx");

    let mut workbook = order_workbook(1, ORDER_HEADER);
    let sheet = workbook.worksheet_from_index(0).unwrap();
    sheet.write_string(2, 0, "Book1").unwrap();
    sheet.write_number(2, 2, 1).unwrap();
    sheet.write_number(2, 3, 10).unwrap();
    sheet.write_number(2, 4, 0).unwrap();
    sheet.write_string(2, 5, "없음").unwrap();
    sheet.write_string(2, 6, "A5").unwrap();
    sheet.write_string(2, 7, "코팅없음").unwrap();
    sheet.write_string(2, 8, "단면").unwrap();
    workbook.save(&path).unwrap();

    let importer = OrderImporterImpl::new(IngestConfig::new(upload_dir.path()));
    let imported = importer.import_file(&path).await.unwrap();

    assert_eq!(imported.rows.len(), 1);
    assert_eq!(imported.rows[0].row_number, 3);
    assert_eq!(imported.rows[0].coating, CoatingType::None);
    assert_eq!(imported.rows[0].folder, "");
}

#[tokio::test]
async fn test_xlsx_missing_columns_without_data_rows() {
    let source_dir = TempDir::new().unwrap();
    let upload_dir = TempDir::new().unwrap();
    let path = source_dir.path().join("partial.xlsx");

    let mut workbook = order_workbook(0, "도서명,발주량,흑백페이지수,컬러페이지수,날개,규격,공정구분");
    workbook.save(&path).unwrap();

    let importer = OrderImporterImpl::new(IngestConfig::new(upload_dir.path()));
    let err = importer.import_file(&path).await.unwrap_err();

    let violations = err.violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "코팅");
    assert_eq!(violations[0].row_number, 1);
}
