// ==========================================
// 인쇄 발주 집계 시스템 - 생산 속도 설정
// ==========================================
// 책임: 인쇄/제본/코팅 속도, 1시간 기준, 코팅 길이표
// 저장: JSON 파일 (누락된 키는 기본값)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::WingFlag;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ==========================================
// CoatingLengthTable - 날개/판형별 코팅 길이 (mm/부)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoatingLengthTable {
    pub no_wing: f64, // 날개없음
    pub wing_b5: f64, // 날개있음 (B5)
    pub wing_a5: f64, // 날개있음 (A5, 46판)
}

impl Default for CoatingLengthTable {
    fn default() -> Self {
        Self {
            no_wing: 468.0,
            wing_b5: 630.0,
            wing_a5: 560.0,
        }
    }
}

impl CoatingLengthTable {
    /// 부당 코팅 길이 조회
    ///
    /// 날개 있음: 규격에 `b5_marker` 포함 시 B5, 아니면 A5/46판
    /// 날개 없음: no_wing
    pub fn length_for(&self, wing: WingFlag, spec: &str, b5_marker: &str) -> f64 {
        match wing {
            WingFlag::Present if spec.contains(b5_marker) => self.wing_b5,
            WingFlag::Present => self.wing_a5,
            WingFlag::Absent => self.no_wing,
        }
    }
}

// ==========================================
// ProductionRates - 집계 엔진에 주입되는 속도 상수
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionRates {
    // ===== 시간당 처리량 =====
    pub bw_print_per_hour: f64,    // 흑백 인쇄 (페이지/시간)
    pub color_print_per_hour: f64, // 칼라 인쇄 (페이지/시간)
    pub bind_per_hour: f64,        // 제본 (부/시간)

    // ===== 코팅 =====
    pub coating_mm_per_sec: f64, // 코팅 속도 (mm/초)
    pub coating_lengths: CoatingLengthTable,
    pub b5_marker: String,

    // ===== 1시간 이상 도서 판정 기준 (페이지/시간) =====
    pub bw_threshold_per_hour: f64,
    pub color_threshold_per_hour: f64,

    // 내지 파일 2개로 세는 공정구분 값
    pub mixed_process_marker: String,
}

impl Default for ProductionRates {
    fn default() -> Self {
        Self {
            bw_print_per_hour: 22320.0,
            color_print_per_hour: 8040.0,
            bind_per_hour: 300.0,
            coating_mm_per_sec: 84.0,
            coating_lengths: CoatingLengthTable::default(),
            b5_marker: "B5".to_string(),
            bw_threshold_per_hour: 11160.0,
            color_threshold_per_hour: 4020.0,
            mixed_process_marker: "혼합".to_string(),
        }
    }
}

impl ProductionRates {
    /// JSON 파일에서 로드 후 검증
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let rates: ProductionRates =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        rates.validate()?;
        tracing::debug!(path = %path.display(), "생산 속도 설정 로드 완료");
        Ok(rates)
    }

    /// 모든 속도/기준/길이 값이 양의 유한수인지 검증 (0 나누기 방지)
    pub fn validate(&self) -> ConfigResult<()> {
        let checks = [
            ("bw_print_per_hour", self.bw_print_per_hour),
            ("color_print_per_hour", self.color_print_per_hour),
            ("bind_per_hour", self.bind_per_hour),
            ("coating_mm_per_sec", self.coating_mm_per_sec),
            ("bw_threshold_per_hour", self.bw_threshold_per_hour),
            ("color_threshold_per_hour", self.color_threshold_per_hour),
        ];

        for (key, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                    message: "0보다 큰 값이어야 합니다".to_string(),
                });
            }
        }

        let lengths = [
            ("coating_lengths.no_wing", self.coating_lengths.no_wing),
            ("coating_lengths.wing_b5", self.coating_lengths.wing_b5),
            ("coating_lengths.wing_a5", self.coating_lengths.wing_a5),
        ];
        for (key, value) in lengths {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                    message: "음수가 아니어야 합니다".to_string(),
                });
            }
        }

        Ok(())
    }
}
