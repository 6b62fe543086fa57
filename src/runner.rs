//! 작업 실행 모듈
//!
//! 입력 파일마다 독립적인 변환 작업을 rayon 스레드 풀에서 병렬로 실행하고
//! 모든 작업이 끝날 때까지 기다립니다.

use rayon::prelude::*;
use std::path::PathBuf;

use crate::journal::Journal;
use crate::processor::{convert_file, FileStatus};
use crate::settings::Settings;
use crate::stats::Statistics;

/// 모든 파일을 병렬 변환
///
/// 결과는 로그와 `stats`로만 관찰되며, 한 파일의 실패는 다른 파일에 영향을 주지 않습니다.
pub fn run_jobs(files: &[PathBuf], settings: &Settings, journal: &dyn Journal, stats: &Statistics) {
    files.par_iter().for_each(|path| {
        let outcome = convert_file(path, settings, journal);
        match outcome.status {
            FileStatus::Converted => {
                stats.increment_converted();
                stats.add_lines_written(outcome.lines_written as u64);
            }
            FileStatus::Skipped => stats.increment_skipped(),
            FileStatus::Failed => stats.record_failure(outcome.path, outcome.stage),
        }
    });
}
