//! lineconv - LINE CONVERTER
//!
//! 텍스트 파일의 각 줄을 날짜/숫자/문자 인덱스 규칙으로 변환하여
//! `<입력 파일>.out`에 저장하는 병렬 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🚀 **병렬 처리**: 입력 파일마다 독립 작업을 Rayon 스레드 풀에서 실행
//! - 🌐 **로케일 인식**: 설정된 로케일 규칙으로 날짜와 숫자를 해석
//! - 📝 **고정 출력 형식**: 결과는 로케일과 무관한 invariant 형식으로 기록
//! - 🛡️ **파일 단위 격리**: 한 파일의 실패가 다른 파일 처리에 영향 없음
//! - 📊 **통계 요약**: 성공/건너뜀/실패 파일 수와 출력 줄 수 표시
//!
//! # 예제
//!
//! ```bash
//! # 기본 입력(text.txt) 변환
//! lineconv
//!
//! # 여러 파일 변환 후 요약 출력
//! lineconv a.txt b.txt --summary
//! ```
//!
//! ```
//! use lineconv::{convert_line, Conversion, Locale};
//!
//! let ru = Locale::from_name("ru-RU").unwrap();
//! assert_eq!(convert_line("25.12.2019", &ru).unwrap(), Conversion::Text("12/25/2019".into()));
//! assert_eq!(convert_line("1,5", &ru).unwrap(), Conversion::Text("1.5".into()));
//! assert_eq!(convert_line("2 abc", &ru).unwrap(), Conversion::Text("c".into()));
//! ```

pub mod cli;
pub mod convert;
pub mod error;
pub mod journal;
pub mod lines;
pub mod locale;
pub mod processor;
pub mod runner;
pub mod settings;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use convert::{convert_line, Conversion, OutputLine};
pub use error::{LineConvError, Result};
pub use journal::{Journal, MemoryJournal, TracingJournal};
pub use lines::PreparedLines;
pub use locale::Locale;
pub use processor::{convert_file, output_path, FileOutcome, FileStatus};
pub use runner::run_jobs;
pub use settings::Settings;
pub use stats::Statistics;
