//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::settings::DEFAULT_SETTINGS_PATH;

/// 파일 인자가 없을 때 사용하는 기본 입력 파일
pub const DEFAULT_INPUT: &str = "text.txt";

/// lineconv CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "lineconv",
    author = "YourName <your@email.com>",
    version,
    about = "LINE CONVERTER - 텍스트 파일의 각 줄을 날짜/숫자/문자 인덱스 규칙으로 변환하는 병렬 CLI 도구",
    long_about = r#"
LINE CONVERTER
==============

입력 파일마다 빈 줄을 건너뛰고 각 줄을 다음 규칙 중 처음 일치하는 것으로 변환합니다.
결과는 "<길이> <텍스트>" 형식으로 <입력 파일>.out 에 저장됩니다.

규칙:
  1. 날짜/시간  → MM/dd/yyyy [HH:mm:ss]
  2. 숫자       → 로케일 독립 숫자 형식
  3. "<인덱스> <텍스트>" → 텍스트의 해당 위치 문자

마지막 줄에는 처리한 (빈 줄 제외) 줄 수가 추가됩니다.
입력 로케일과 상세 로그 여부는 settings.xml 에서 읽습니다.

예제:
  lineconv
  lineconv a.txt b.txt
  lineconv --config conf/settings.xml -j 4 --summary data/*.txt
"#
)]
pub struct Args {
    /// 변환할 입력 파일 (기본값: text.txt)
    pub files: Vec<PathBuf>,

    /// 설정 파일 경로
    #[arg(short, long, default_value = DEFAULT_SETTINGS_PATH)]
    pub config: PathBuf,

    /// 병렬 처리 스레드 수 (기본값: CPU 코어 수)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// 실행 후 통계 요약 출력
    #[arg(short, long)]
    pub summary: bool,
}

impl Args {
    /// 처리할 입력 파일 목록 (인자가 없으면 기본 파일 하나)
    pub fn get_files(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            vec![PathBuf::from(DEFAULT_INPUT)]
        } else {
            self.files.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lineconv"]);
        assert_eq!(args.get_files(), vec![PathBuf::from("text.txt")]);
        assert_eq!(args.config, PathBuf::from("settings.xml"));
        assert!(args.threads.is_none());
        assert!(!args.summary);
    }

    #[test]
    fn test_files_and_flags() {
        let args = Args::parse_from(["lineconv", "-j", "2", "-s", "-c", "x.xml", "a.txt", "b.txt"]);
        assert_eq!(
            args.get_files(),
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
        assert_eq!(args.config, PathBuf::from("x.xml"));
        assert_eq!(args.threads, Some(2));
        assert!(args.summary);
    }
}
