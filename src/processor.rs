//! 파일 변환 모듈
//!
//! 파일 하나의 변환 흐름(로케일 설정 → 줄 준비 → 줄 변환 → 출력 쓰기)을 담당합니다.
//! 모든 실패는 이 파일 안에서 로그로 기록되고, 다른 파일의 처리에는 영향을 주지 않습니다.

use std::fmt;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::convert::{convert_line, OutputLine};
use crate::error::{LineConvError, Result};
use crate::journal::Journal;
use crate::lines::PreparedLines;
use crate::locale::Locale;
use crate::settings::Settings;

/// 출력 파일 확장자 (입력 파일 이름 뒤에 덧붙임)
pub const OUTPUT_SUFFIX: &str = ".out";

/// 파일 변환 단계
///
/// 실패 시 마지막으로 도달한 단계를 기록합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    LocaleSet,
    LinesPrepared,
    LinesConverted,
    Written,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Idle => write!(f, "Idle"),
            Stage::LocaleSet => write!(f, "LocaleSet"),
            Stage::LinesPrepared => write!(f, "LinesPrepared"),
            Stage::LinesConverted => write!(f, "LinesConverted"),
            Stage::Written => write!(f, "Written"),
            Stage::Done => write!(f, "Done"),
        }
    }
}

/// 파일 처리 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// 출력 파일 작성 완료
    Converted,
    /// 입력 파일을 열 수 없어 건너뜀
    Skipped,
    /// 변환 또는 쓰기 중 실패
    Failed,
}

/// 파일 처리 결과
#[derive(Debug)]
pub struct FileOutcome {
    /// 입력 파일 경로
    pub path: PathBuf,
    /// 처리 상태
    pub status: FileStatus,
    /// 마지막으로 도달한 단계
    pub stage: Stage,
    /// 작성된 출력 파일 경로 (성공 시)
    pub output: Option<PathBuf>,
    /// 작성된 출력 줄 수 (트레일러 포함)
    pub lines_written: usize,
    /// 에러 메시지 (실패 시)
    pub error: Option<String>,
}

impl FileOutcome {
    /// 성공 결과 생성
    pub fn converted(path: PathBuf, output: PathBuf, lines_written: usize) -> Self {
        Self {
            path,
            status: FileStatus::Converted,
            stage: Stage::Done,
            output: Some(output),
            lines_written,
            error: None,
        }
    }

    /// 입력 파일 없음 결과 생성
    pub fn skipped(path: PathBuf, error: String) -> Self {
        Self {
            path,
            status: FileStatus::Skipped,
            stage: Stage::LocaleSet,
            output: None,
            lines_written: 0,
            error: Some(error),
        }
    }

    /// 실패 결과 생성
    pub fn failed(path: PathBuf, stage: Stage, error: String) -> Self {
        Self {
            path,
            status: FileStatus::Failed,
            stage,
            output: None,
            lines_written: 0,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == FileStatus::Converted
    }
}

/// 입력 경로에 대응하는 출력 경로 (`<입력>.out`)
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use lineconv::processor::output_path;
///
/// assert_eq!(output_path(Path::new("data/text.txt")), PathBuf::from("data/text.txt.out"));
/// ```
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// 단일 파일 변환
///
/// # Arguments
/// * `path` - 입력 파일 경로
/// * `settings` - 변환 설정 (로케일, 상세 출력)
/// * `journal` - 로그 싱크
///
/// # Returns
/// 처리 결과를 담은 `FileOutcome` (에러는 반환하지 않고 기록만 함)
pub fn convert_file(path: &Path, settings: &Settings, journal: &dyn Journal) -> FileOutcome {
    let fail = |stage: Stage, error: LineConvError| {
        journal.error(&format!("변환 실패 ({}): {}", path.display(), error));
        FileOutcome::failed(path.to_path_buf(), stage, error.to_string())
    };

    // 이 작업만의 로케일
    let locale = match settings.locale() {
        Ok(locale) => locale,
        Err(e) => return fail(Stage::Idle, e),
    };

    if settings.verbose {
        journal.info(&format!("파일 처리 중: {}", path.display()));
        journal.info(&format!("입력 로케일: {}", locale.display_name()));
    }

    let lines = match PreparedLines::open(path) {
        Ok(lines) => lines,
        Err(e) => {
            journal.error(&format!("파일을 찾을 수 없습니다: {}", path.display()));
            return FileOutcome::skipped(path.to_path_buf(), e.to_string());
        }
    };

    // 모든 줄을 변환한 뒤에만 쓰기 시작
    let converted = match convert_lines(lines, &locale) {
        Ok(converted) => converted,
        Err(e) => return fail(Stage::LinesPrepared, e),
    };

    let output = output_path(path);
    if let Err(e) = write_output(&output, &converted) {
        return fail(Stage::LinesConverted, e);
    }

    if settings.verbose {
        journal.info(&format!(
            "저장 완료: {} ({} 줄)",
            output.display(),
            converted.len()
        ));
    }

    FileOutcome::converted(path.to_path_buf(), output, converted.len())
}

/// 준비된 줄을 모두 출력 줄로 변환 (첫 에러에서 중단)
fn convert_lines<I>(lines: I, locale: &Locale) -> Result<Vec<OutputLine>>
where
    I: Iterator<Item = Result<String>>,
{
    lines
        .map(|line| convert_line(&line?, locale).map(OutputLine::from))
        .collect()
}

/// 출력 줄을 임시 파일에 쓴 뒤 대상 경로로 원자적으로 교체
fn write_output(path: &Path, lines: &[OutputLine]) -> Result<()> {
    let write_error = |e: io::Error| LineConvError::WriteError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        for line in lines {
            writeln!(writer, "{}", line).map_err(write_error)?;
        }
        writer.flush().map_err(write_error)?;
    }

    temp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
