//! 통계 모듈
//!
//! 실행 중 파일별 결과를 집계하고 요약을 출력합니다.

use colored::Colorize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::processor::Stage;

/// 처리 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 총 파일 수
    pub total_files: usize,
    /// 변환 성공 수
    pub converted_count: AtomicUsize,
    /// 입력 파일 없음으로 건너뛴 수
    pub skipped_count: AtomicUsize,
    /// 작성된 총 출력 줄 수
    pub lines_written: AtomicU64,
    /// 실패한 파일과 실패 단계
    failures: Mutex<Vec<(PathBuf, Stage)>>,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 성공 카운트 증가
    pub fn increment_converted(&self) {
        self.converted_count.fetch_add(1, Ordering::Relaxed);
    }

    /// 건너뜀 카운트 증가
    pub fn increment_skipped(&self) {
        self.skipped_count.fetch_add(1, Ordering::Relaxed);
    }

    /// 출력 줄 수 추가
    pub fn add_lines_written(&self, lines: u64) {
        self.lines_written.fetch_add(lines, Ordering::Relaxed);
    }

    /// 실패 기록
    pub fn record_failure(&self, path: PathBuf, stage: Stage) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.push((path, stage));
        }
    }

    pub fn get_converted_count(&self) -> usize {
        self.converted_count.load(Ordering::Relaxed)
    }

    pub fn get_skipped_count(&self) -> usize {
        self.skipped_count.load(Ordering::Relaxed)
    }

    pub fn get_lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    /// 실패한 파일 목록 (경로 순 정렬)
    pub fn failures(&self) -> Vec<(PathBuf, Stage)> {
        let mut failures = self
            .failures
            .lock()
            .map(|f| f.clone())
            .unwrap_or_default();
        failures.sort_by(|a, b| a.0.cmp(&b.0));
        failures
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 처리 통계 요약 출력
    pub fn print_summary(&self) {
        let converted = self.get_converted_count();
        let skipped = self.get_skipped_count();
        let failures = self.failures();

        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 변환 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!("  {} 전체 파일:    {}", "📁".bright_cyan(), self.total_files);
        println!(
            "  {} 변환:         {}",
            "✅".bright_green(),
            converted.to_string().green()
        );

        if skipped > 0 {
            println!(
                "  {} 건너뜀:       {}",
                "⚠️".bright_yellow(),
                skipped.to_string().yellow()
            );
        }

        if failures.is_empty() {
            println!("  {} 실패:         {}", "✅".bright_green(), "0".green());
        } else {
            println!(
                "  {} 실패:         {}",
                "❌".bright_red(),
                failures.len().to_string().red()
            );
            for (path, stage) in &failures {
                println!("    {} {:?} ({})", "•".red(), path, stage.to_string().dimmed());
            }
        }

        println!(
            "  {} 출력 줄 수:   {}",
            "📤".bright_magenta(),
            self.get_lines_written()
        );
        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}분 {}초", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{:.2}초", duration.as_secs_f64())
    } else {
        format!("{}ms", duration.subsec_millis())
    }
}
