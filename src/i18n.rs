// ==========================================
// 국제화 (i18n) 모듈
// ==========================================
// rust-i18n 사용
// 한국어(기본), 영어 지원
// ==========================================
// 주의: rust_i18n::i18n! 매크로는 lib.rs 에서 초기화
// ==========================================

/// 지원 언어
pub const SUPPORTED_LOCALES: &[&str] = &["ko", "en"];

/// 현재 언어
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 언어 설정
///
/// # 매개변수
/// - locale: 언어 코드 ("ko" 또는 "en")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 번역 (인자 없음)
///
/// # 예시
/// ```no_run
/// use print_order_summary::i18n::t;
/// let label = t("report.item_count");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 번역 (인자 포함, `%{name}` 자리 표시자 치환)
///
/// 번역문을 한 번만 훑으며 치환하므로 인자 값 안의 `%{...}` 는 그대로 남는다.
/// 인자에 없는 자리 표시자도 그대로 둔다.
///
/// # 예시
/// ```no_run
/// use print_order_summary::i18n::t_with_args;
/// let msg = t_with_args("cli.import_failed", &[("error", "파일이 없습니다")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    substitute(&rust_i18n::t!(key), args)
}

fn substitute(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("%{") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            rest = &rest[start..];
            break;
        };

        let name = &after[..end];
        match args.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    result
}

// rust-i18n 의 locale 은 전역 상태이고 테스트는 병렬 실행되므로
// locale 을 바꾸는 테스트는 이 잠금으로 직렬화한다.
#[cfg(test)]
pub(crate) static LOCALE_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
