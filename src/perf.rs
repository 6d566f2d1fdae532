use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Instant;

/// 성능 로그 스위치 환경 변수
pub const PERF_ENV: &str = "PRINT_ORDER_SUMMARY_PERF";

// 0 = 미확인, 1 = 켜짐, 2 = 꺼짐
static PERF_STATE: AtomicU8 = AtomicU8::new(0);

fn is_false(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "n" | "off"
    )
}

fn perf_enabled() -> bool {
    match PERF_STATE.load(Ordering::Relaxed) {
        1 => true,
        2 => false,
        _ => {
            let enabled = match std::env::var(PERF_ENV) {
                Ok(v) => !is_false(&v),
                Err(_) => true,
            };
            PERF_STATE.store(if enabled { 1 } else { 2 }, Ordering::Relaxed);
            enabled
        }
    }
}

/// 성능 통계 Guard: elapsed_ms + 처리 행 수
///
/// 사용 방법:
/// ```ignore
/// let _perf = print_order_summary::perf::PerfGuard::new("aggregate", rows.len());
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    rows: usize,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str, rows: usize) -> Self {
        Self {
            op,
            rows,
            start: Instant::now(),
        }
    }

    /// 처리 행 수가 작업 도중 정해지는 경우 갱신
    pub fn set_rows(&mut self, rows: usize) {
        self.rows = rows;
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        if !perf_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            rows = self.rows,
            "done"
        );
    }
}
