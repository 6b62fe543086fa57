//! 에러 타입 정의 모듈
//!
//! lineconv에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! 설정 관련 에러는 실행 전체를, 나머지는 해당 파일 하나만 중단시킵니다.

use std::path::PathBuf;
use thiserror::Error;

/// lineconv에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum LineConvError {
    /// 설정 파일을 읽을 수 없음 (파일 없음 제외)
    #[error("설정 파일을 읽을 수 없습니다 ({path}): {reason}")]
    SettingsRead { path: PathBuf, reason: String },

    /// 설정 파일 형식 오류
    #[error("설정 파일 파싱 실패 ({path}): {reason}")]
    SettingsParse { path: PathBuf, reason: String },

    /// 알 수 없는 로케일 이름
    #[error("알 수 없는 로케일입니다: {name:?}")]
    UnknownCulture { name: String },

    /// 입력 파일 열기 실패
    #[error("입력 파일을 열 수 없습니다 ({file}): {reason}")]
    FileNotFound { file: PathBuf, reason: String },

    /// 입력 파일 읽기 실패
    #[error("파일 읽기 실패 ({file}): {reason}")]
    ReadError { file: PathBuf, reason: String },

    /// 문자 인덱스 명령의 첫 토큰이 정수가 아님
    #[error("잘못된 문자 인덱스 {token:?}: {reason}")]
    InvalidCharIndex { token: String, reason: String },

    /// 출력 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({file}): {reason}")]
    WriteError { file: PathBuf, reason: String },

    /// 스레드 풀 초기화 실패
    #[error("스레드 풀 초기화 실패: {reason}")]
    ThreadPoolError { reason: String },
}

impl LineConvError {
    /// 실행 전체를 중단시키는 설정 단계의 에러인지 확인
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LineConvError::SettingsRead { .. }
                | LineConvError::SettingsParse { .. }
                | LineConvError::UnknownCulture { .. }
        )
    }
}

/// lineconv 결과 타입 별칭
pub type Result<T> = std::result::Result<T, LineConvError>;
