// ==========================================
// 인쇄 발주 집계 시스템 - 텍스트 보고서
// ==========================================
// 라벨: i18n (report.*)
// ==========================================

use crate::domain::summary::{OverThresholdItem, SummaryResult};
use crate::i18n::{t, t_with_args};

/// 집계 결과 → 텍스트 보고서 (None 이면 안내 문구)
pub fn render_text(summary: Option<&SummaryResult>) -> String {
    let summary = match summary {
        Some(summary) => summary,
        None => return format!("{}\n", t("report.placeholder")),
    };

    let mut lines = vec![format!("== {} ==", t("report.title"))];

    let totals = [
        ("report.item_count", summary.item_count.to_string()),
        ("report.total_quantity", summary.total_quantity.to_string()),
        ("report.total_bw_pages", summary.total_bw_pages.to_string()),
        ("report.total_color_pages", summary.total_color_pages.to_string()),
        ("report.bw_print_time", summary.bw_print_time.clone()),
        ("report.color_print_time", summary.color_print_time.clone()),
        ("report.bind_time", summary.bind_time.clone()),
        ("report.glossy_coat_time", summary.glossy_coat_time.clone()),
        ("report.matte_coat_time", summary.matte_coat_time.clone()),
    ];
    lines.extend(totals.iter().map(|(key, value)| format!("{}: {}", t(key), value)));

    push_items(&mut lines, "report.over_hour_bw", &summary.over_hour_bw);
    push_items(&mut lines, "report.over_hour_color", &summary.over_hour_color);

    lines.push(String::new());
    lines.push(format!("[{}]", t("report.by_folder")));
    if summary.inner_files_by_folder.is_empty() {
        lines.push(format!("- {}", t("report.none")));
    }
    lines.extend(
        summary
            .inner_files_by_folder
            .iter()
            .map(|(folder, count)| format!("- {}: {}", folder, count)),
    );

    lines.push(String::new());
    let files = [
        ("report.cover_count", summary.cover_count),
        ("report.inner_file_count", summary.inner_file_count),
        ("report.grand_total", summary.grand_total),
    ];
    lines.extend(files.iter().map(|(key, value)| format!("{}: {}", t(key), value)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_items(lines: &mut Vec<String>, heading_key: &str, items: &[OverThresholdItem]) {
    lines.push(String::new());
    lines.push(format!("[{}]", t(heading_key)));
    if items.is_empty() {
        lines.push(format!("- {}", t("report.none")));
        return;
    }
    for item in items {
        let pages = item.pages.to_string();
        let line = t_with_args(
            "report.over_hour_item",
            &[
                ("title", item.title.as_str()),
                ("group", item.group_label.as_str()),
                ("pages", pages.as_str()),
                ("duration", item.duration.as_str()),
            ],
        );
        lines.push(format!("- {}", line));
    }
}
