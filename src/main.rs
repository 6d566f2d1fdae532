// ==========================================
// 인쇄 발주 집계 시스템 - 명령행 진입점
// ==========================================
// 흐름: 설정 로드 → 발주 파일 가져오기 → 집계 → 보고서 출력
// ==========================================

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use print_order_summary::config::{default_upload_dir, IngestConfig, ProductionRates};
use print_order_summary::i18n::{set_locale, t_with_args, SUPPORTED_LOCALES};
use print_order_summary::importer::{OrderImporter, OrderImporterImpl};
use print_order_summary::report::{render_json, render_text};
use print_order_summary::{logging, OrderAggregator, SummaryResult};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "print-order-summary",
    version,
    about = "인쇄 발주 스프레드시트 집계 (작업 시간/1시간 이상 도서/파일 수)"
)]
struct Args {
    /// 발주 파일 (.xlsx), 생략하면 빈 보고서
    file: Option<PathBuf>,

    /// 생산 속도 설정 JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// 업로드 폴더 (기본: $PRINT_ORDER_SUMMARY_UPLOAD_DIR 또는 ./uploads)
    #[arg(long)]
    upload_dir: Option<PathBuf>,

    /// 출력 형식
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// 보고서 언어
    #[arg(
        long,
        default_value = "ko",
        value_parser = clap::builder::PossibleValuesParser::new(SUPPORTED_LOCALES.iter().copied())
    )]
    locale: String,

    /// CSV 파일도 허용
    #[arg(long)]
    allow_csv: bool,

    /// JSON 형식 로그
    #[arg(long)]
    json_log: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if args.json_log {
        logging::init_json();
    } else {
        logging::init();
    }
    set_locale(&args.locale);

    tracing::info!("{} v{}", print_order_summary::APP_NAME, print_order_summary::VERSION);

    match run(args).await {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let message = format!("{:#}", e);
            tracing::error!(error = %message, "실행 실패");
            eprintln!(
                "{}",
                t_with_args("cli.import_failed", &[("error", message.as_str())])
            );
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<String> {
    let rates = match &args.config {
        Some(path) => ProductionRates::from_json_file(path)
            .with_context(|| format!("설정 로드 실패: {}", path.display()))?,
        None => ProductionRates::default(),
    };

    let summary = match &args.file {
        Some(file) => Some(summarize(&args, file, rates).await?),
        None => {
            tracing::info!("발주 파일 없음, 빈 보고서 출력");
            None
        }
    };

    match args.format {
        OutputFormat::Text => Ok(render_text(summary.as_ref())),
        OutputFormat::Json => Ok(format!("{}\n", render_json(summary.as_ref())?)),
    }
}

async fn summarize(args: &Args, file: &Path, rates: ProductionRates) -> Result<SummaryResult> {
    let upload_dir = args.upload_dir.clone().unwrap_or_else(default_upload_dir);
    let mut ingest = IngestConfig::new(upload_dir);
    if args.allow_csv {
        ingest = ingest.allow_extension("csv");
    }

    let importer = OrderImporterImpl::new(ingest);
    let imported = importer.import_file(file).await?;

    Ok(OrderAggregator::new(rates).aggregate(&imported.rows))
}
