// ==========================================
// 인쇄 발주 집계 시스템 - 가져오기 설정
// ==========================================
// 책임: 업로드 폴더, 허용 확장자
// ==========================================

use std::path::PathBuf;

/// 업로드 폴더 환경 변수
pub const UPLOAD_DIR_ENV: &str = "PRINT_ORDER_SUMMARY_UPLOAD_DIR";

#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub upload_dir: PathBuf,
    pub allowed_extensions: Vec<String>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            allowed_extensions: vec!["xlsx".to_string()],
        }
    }
}

impl IngestConfig {
    pub fn new<P: Into<PathBuf>>(upload_dir: P) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            ..Self::default()
        }
    }

    /// 허용 확장자 추가 (중복 무시, 소문자 비교)
    pub fn allow_extension(mut self, ext: &str) -> Self {
        let ext = ext.trim_start_matches('.').to_lowercase();
        if !self.allowed_extensions.contains(&ext) {
            self.allowed_extensions.push(ext);
        }
        self
    }

    pub fn is_allowed(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.allowed_extensions.iter().any(|e| *e == ext)
    }
}

/// 기본 업로드 폴더
///
/// 환경 변수 `PRINT_ORDER_SUMMARY_UPLOAD_DIR` 가 있으면 우선, 없으면 `./uploads`
pub fn default_upload_dir() -> PathBuf {
    if let Ok(path) = std::env::var(UPLOAD_DIR_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    PathBuf::from("uploads")
}
