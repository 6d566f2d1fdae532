// ==========================================
// 인쇄 발주 집계 시스템 - 발주 가져오기 구현
// ==========================================
// 책임: 업로드 파일 → 검증된 OrderRow 목록
// 흐름: 확장자 확인 → 업로드 폴더 저장 → 파싱 → 매핑
// ==========================================

use crate::config::IngestConfig;
use crate::domain::order::{ImportBatch, ImportedOrders};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::OrderFieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::order_importer_trait::{FieldMapper, FileParser, OrderImporter};
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// OrderImporterImpl
// ==========================================
pub struct OrderImporterImpl {
    config: IngestConfig,
    file_parser: Arc<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
}

impl OrderImporterImpl {
    /// 기본 파서/매퍼로 생성
    pub fn new(config: IngestConfig) -> Self {
        Self::with_components(
            config,
            Arc::new(UniversalFileParser),
            Box::new(OrderFieldMapper),
        )
    }

    pub fn with_components(
        config: IngestConfig,
        file_parser: Arc<dyn FileParser>,
        field_mapper: Box<dyn FieldMapper>,
    ) -> Self {
        Self {
            config,
            file_parser,
            field_mapper,
        }
    }

    /// 확장자 확인 (허용 목록 기준)
    fn check_extension(&self, path: &Path) -> ImportResult<()> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        if self.config.is_allowed(&ext) {
            Ok(())
        } else {
            Err(ImportError::UnsupportedFormat(
                ext,
                self.config.allowed_extensions.join(", "),
            ))
        }
    }

    /// 업로드 폴더에 원본 저장, 저장 경로 반환
    async fn store_upload(&self, source: &Path) -> ImportResult<PathBuf> {
        let file_name = source
            .file_name()
            .ok_or_else(|| ImportError::FileReadError(source.display().to_string()))?;

        tokio::fs::create_dir_all(&self.config.upload_dir).await?;
        let dest = self.config.upload_dir.join(file_name);

        // 이미 업로드 폴더에 있는 파일이면 복사하지 않음 (자기 자신 덮어쓰기 방지)
        let source_canonical = tokio::fs::canonicalize(source).await?;
        let same_file = match tokio::fs::canonicalize(&dest).await {
            Ok(dest_canonical) => dest_canonical == source_canonical,
            Err(_) => false,
        };

        if !same_file {
            tokio::fs::copy(source, &dest).await?;
            debug!(dest = %dest.display(), "업로드 파일 저장");
        }

        Ok(dest)
    }
}

#[async_trait]
impl OrderImporter for OrderImporterImpl {
    #[instrument(skip_all)]
    async fn import_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportedOrders> {
        let source = file_path.as_ref();
        let mut perf = crate::perf::PerfGuard::new("import_file", 0);
        info!(file = %source.display(), "발주 파일 가져오기 시작");

        // === 1. 파일/확장자 확인 ===
        if !source.exists() {
            return Err(ImportError::FileNotFound(source.display().to_string()));
        }
        if let Err(e) = self.check_extension(source) {
            warn!(error = %e, "허용되지 않은 파일 형식");
            return Err(e);
        }

        // === 2. 업로드 폴더 저장 ===
        let stored_path = self.store_upload(source).await?;

        // === 3. 파싱 (블로킹 작업) ===
        let parser = Arc::clone(&self.file_parser);
        let parse_path = stored_path.clone();
        let sheet = tokio::task::spawn_blocking(move || parser.parse_sheet(&parse_path))
            .await
            .map_err(|e| ImportError::InternalError(format!("파싱 작업 실패: {}", e)))??;
        debug!(
            columns = sheet.headers.len(),
            raw_rows = sheet.rows.len(),
            "파일 파싱 완료"
        );

        // === 4. 헤더 검사 + 필드 매핑 ===
        let rows = match self.field_mapper.map_all(&sheet) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(violations = e.violations().len(), "발주 데이터 검증 실패");
                return Err(e);
            }
        };
        perf.set_rows(rows.len());

        let batch = ImportBatch {
            batch_id: Uuid::new_v4().to_string(),
            file_name: source
                .file_name()
                .map(|n| n.to_string_lossy().to_string()),
            stored_path: stored_path.display().to_string(),
            total_rows: rows.len(),
            imported_at: Utc::now(),
        };

        info!(
            batch_id = %batch.batch_id,
            rows = batch.total_rows,
            "발주 파일 가져오기 완료"
        );

        Ok(ImportedOrders { batch, rows })
    }
}
