//! lineconv - LINE CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lineconv::{
    cli::Args, error::LineConvError, journal::TracingJournal, runner::run_jobs,
    settings::Settings, stats::Statistics,
};

fn main() {
    init_tracing();

    let args = Args::parse();

    // 실행 전체의 에러도 기록만 하고 정상 종료
    if let Err(e) = run(&args) {
        tracing::error!("{:#}", e);
    }
}

/// 로그 출력 초기화 (RUST_LOG, 기본값 info)
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    // 스레드 풀 설정
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| LineConvError::ThreadPoolError {
                reason: e.to_string(),
            })?;
    }

    let journal = TracingJournal;
    let settings = Settings::load(&args.config, &journal).context("설정을 불러오지 못했습니다")?;

    let files = args.get_files();
    let stats = Statistics::new(files.len());

    run_jobs(&files, &settings, &journal, &stats);

    if args.summary {
        stats.print_summary();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineconv::processor::output_path;
    use std::fs;
    use tempfile::TempDir;

    fn args(temp_dir: &TempDir, files: &[&str]) -> Args {
        let mut argv = vec![
            "lineconv".to_string(),
            "--config".to_string(),
            temp_dir.path().join("settings.xml").display().to_string(),
        ];
        argv.extend(
            files
                .iter()
                .map(|f| temp_dir.path().join(f).display().to_string()),
        );
        Args::parse_from(argv)
    }

    #[test]
    fn test_run_without_settings_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "2020-01-01\n").unwrap();

        run(&args(&temp_dir, &["a.txt", "absent.txt"])).unwrap();

        let written = fs::read_to_string(output_path(&temp_dir.path().join("a.txt"))).unwrap();
        assert_eq!(written, "10 01/01/2020\n1 1\n");
    }

    #[test]
    fn test_run_with_malformed_settings_converts_nothing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("settings.xml"), "<Settings><Verbose>").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "1 ab\n").unwrap();

        let result = run(&args(&temp_dir, &["a.txt"]));

        assert!(result.is_err());
        assert!(!output_path(&temp_dir.path().join("a.txt")).exists());
    }
}
