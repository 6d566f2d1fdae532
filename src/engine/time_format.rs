// ==========================================
// 인쇄 발주 집계 시스템 - 작업 시간 표기
// ==========================================
// 형식: H:MM (시간은 0 채움 없음, 일/초 표시 없음)
// ==========================================

const MICROS_PER_MINUTE: f64 = 60_000_000.0;
const MICROS_PER_SECOND: i64 = 1_000_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// 분(실수) → "H:MM"
///
/// 마이크로초 단위로 반올림한 경과 시간에서 초 미만은 버리고,
/// 일 단위를 제외한 하루 안의 초만 사용한다 (24시간 이상은 일 단위가 잘림,
/// 음수는 전날 기준으로 정규화: -1분 → "23:59").
pub fn format_minutes(minutes: f64) -> String {
    let micros = (minutes * MICROS_PER_MINUTE).round() as i64;
    let total_seconds = micros.div_euclid(MICROS_PER_SECOND);
    let day_seconds = total_seconds.rem_euclid(SECONDS_PER_DAY);

    let hours = day_seconds / 3600;
    let mins = (day_seconds % 3600) / 60;
    format!("{}:{:02}", hours, mins)
}
