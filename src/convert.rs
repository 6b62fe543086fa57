//! 줄 변환 모듈
//!
//! 한 줄을 날짜 → 숫자 → 문자 인덱스 순서로 시도하여 하나의 결과로 변환하고,
//! `"<길이> <텍스트>"` 형식의 출력 줄을 만듭니다.

use std::fmt;

use crate::error::{LineConvError, Result};
use crate::locale::{format_invariant_number, Locale};

/// 한 줄의 변환 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// 변환된 텍스트
    Text(String),
    /// 어떤 규칙에도 해당하지 않음 (길이 0, 빈 텍스트로 출력)
    NoResult,
}

impl Conversion {
    /// 출력에 쓰일 텍스트 (`NoResult`는 빈 문자열)
    pub fn as_str(&self) -> &str {
        match self {
            Conversion::Text(text) => text,
            Conversion::NoResult => "",
        }
    }
}

/// `"<길이> <텍스트>"` 형식의 출력 줄
///
/// 길이는 유니코드 문자 수입니다.
///
/// # Examples
/// ```
/// use lineconv::convert::{Conversion, OutputLine};
///
/// assert_eq!(OutputLine::from(Conversion::Text("b".into())).to_string(), "1 b");
/// assert_eq!(OutputLine::from(Conversion::NoResult).to_string(), "0 ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub length: usize,
    pub text: String,
}

impl From<Conversion> for OutputLine {
    fn from(conversion: Conversion) -> Self {
        let text = match conversion {
            Conversion::Text(text) => text,
            Conversion::NoResult => String::new(),
        };
        Self {
            length: text.chars().count(),
            text,
        }
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.length, self.text)
    }
}

/// 한 줄 변환
///
/// 규칙은 다음 순서로 시도하며 처음 일치한 규칙이 결과가 됩니다.
/// 1. 날짜/시간 → `MM/dd/yyyy[ HH:mm:ss]`
/// 2. 숫자 → invariant 숫자 형식
/// 3. 문자 인덱스 명령 (`"<인덱스> <텍스트>"`)
///
/// # Errors
/// 토큰이 2개 이상인데 첫 토큰이 정수가 아니면 `InvalidCharIndex`
pub fn convert_line(text: &str, locale: &Locale) -> Result<Conversion> {
    if let Some(date) = locale.parse_date(text) {
        return Ok(Conversion::Text(date.to_invariant_string()));
    }
    if let Some(number) = locale.parse_number(text) {
        return Ok(Conversion::Text(format_invariant_number(number)));
    }
    convert_char_index(text)
}

/// 문자 인덱스 명령 변환
///
/// 공백 문자 하나하나를 구분자로 나누므로 연속 공백은 빈 토큰을 만듭니다.
fn convert_char_index(text: &str) -> Result<Conversion> {
    let mut parts = text.split(char::is_whitespace);
    let (Some(index), Some(target)) = (parts.next(), parts.next()) else {
        return Ok(Conversion::NoResult);
    };

    let index: i32 = index
        .parse()
        .map_err(|e: std::num::ParseIntError| LineConvError::InvalidCharIndex {
            token: index.to_string(),
            reason: e.to_string(),
        })?;

    let Ok(index) = usize::try_from(index) else {
        return Ok(Conversion::NoResult);
    };

    Ok(target
        .chars()
        .nth(index)
        .map(|c| Conversion::Text(c.to_string()))
        .unwrap_or(Conversion::NoResult))
}
