//! 로케일 모듈
//!
//! 로케일 이름을 해석하여 숫자/날짜 파싱 규칙을 제공하고,
//! 변환 결과를 로케일과 무관한 고정(invariant) 형식으로 출력합니다.
//!
//! 로케일은 작업마다 값으로 소유되며 전역 상태를 변경하지 않습니다.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use unic_langid::LanguageIdentifier;

use crate::error::{LineConvError, Result};

const NO_BREAK_SPACE: char = '\u{a0}';
const NARROW_NO_BREAK_SPACE: char = '\u{202f}';

/// 2자리 연도의 해석 상한 (00-29 → 2000년대, 30-99 → 1900년대)
const TWO_DIGIT_YEAR_MAX: i32 = 2029;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// 짧은 날짜의 필드 순서
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// 월/일/년 (en-US, invariant)
    MonthDayYear,
    /// 일/월/년 (대부분의 유럽 로케일)
    DayMonthYear,
    /// 년/월/일 (동아시아, sv, en-CA)
    YearMonthDay,
}

/// 로케일별 파싱 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conventions {
    /// 소수점 구분자
    pub decimal_separator: char,
    /// 천 단위 구분자
    pub group_separator: char,
    /// 짧은 날짜 필드 순서
    pub date_order: DateOrder,
    /// 영어 월 이름 허용 여부
    pub english_months: bool,
}

impl Conventions {
    const INVARIANT: Conventions = Conventions {
        decimal_separator: '.',
        group_separator: ',',
        date_order: DateOrder::MonthDayYear,
        english_months: true,
    };

    const fn european(decimal: char, group: char, order: DateOrder) -> Self {
        Self {
            decimal_separator: decimal,
            group_separator: group,
            date_order: order,
            english_months: false,
        }
    }

    /// 언어/지역 조합에 해당하는 규칙 반환 (표에 없는 언어는 invariant)
    fn lookup(language: &str, region: Option<&str>) -> Self {
        use DateOrder::*;

        match language {
            "en" => Self {
                date_order: match region {
                    Some("GB" | "AU" | "NZ" | "IE" | "IN" | "ZA") => DayMonthYear,
                    Some("CA") => YearMonthDay,
                    _ => MonthDayYear,
                },
                ..Self::INVARIANT
            },
            "ru" | "uk" | "be" | "kk" | "pl" | "cs" | "fi" | "nb" => {
                Self::european(',', NO_BREAK_SPACE, DayMonthYear)
            }
            "sv" => Self::european(',', NO_BREAK_SPACE, YearMonthDay),
            "fr" => Self::european(',', NARROW_NO_BREAK_SPACE, DayMonthYear),
            "de" | "es" | "it" | "pt" | "nl" | "da" | "tr" => {
                Self::european(',', '.', DayMonthYear)
            }
            "ja" | "zh" | "ko" => Self {
                date_order: YearMonthDay,
                english_months: false,
                ..Self::INVARIANT
            },
            _ => Self::INVARIANT,
        }
    }

    /// 천 단위 구분자로 인정되는 문자인지 확인
    ///
    /// 공백류 구분자를 쓰는 로케일에서는 일반 공백도 허용합니다.
    fn is_group_separator(&self, c: char) -> bool {
        c == self.group_separator
            || (c == ' '
                && matches!(self.group_separator, NO_BREAK_SPACE | NARROW_NO_BREAK_SPACE))
    }
}

/// 해석된 로케일
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    name: String,
    conventions: Conventions,
}

impl Default for Locale {
    fn default() -> Self {
        Self::invariant()
    }
}

impl Locale {
    /// 로케일 독립(invariant) 로케일
    pub fn invariant() -> Self {
        Self {
            name: String::new(),
            conventions: Conventions::INVARIANT,
        }
    }

    /// 로케일 이름(BCP 47, 예: "ru-RU", "en_GB")으로 로케일 생성
    ///
    /// 빈 문자열, "iv", "invariant", "und"는 invariant 로케일로 해석합니다.
    ///
    /// # Examples
    /// ```
    /// use lineconv::locale::Locale;
    ///
    /// let locale = Locale::from_name("de_DE").unwrap();
    /// assert_eq!(locale.name(), "de-DE");
    /// assert!(Locale::from_name("not a locale!").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("iv")
            || trimmed.eq_ignore_ascii_case("invariant")
        {
            return Ok(Self::invariant());
        }

        let langid: LanguageIdentifier =
            trimmed
                .replace('_', "-")
                .parse()
                .map_err(|_| LineConvError::UnknownCulture {
                    name: name.to_string(),
                })?;

        let language = langid.language.as_str();
        if language == "und" {
            return Ok(Self::invariant());
        }

        let region = langid.region.as_ref().map(|r| r.as_str());
        Ok(Self {
            conventions: Conventions::lookup(language, region),
            name: langid.to_string(),
        })
    }

    /// 정규화된 로케일 이름 (invariant는 빈 문자열)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 로그 출력용 이름
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "invariant"
        } else {
            &self.name
        }
    }

    pub fn conventions(&self) -> Conventions {
        self.conventions
    }

    /// 로케일 규칙으로 날짜/시간 파싱
    ///
    /// 지원 형식:
    /// - 숫자 날짜: 세 필드를 같은 구분자(`/`, `.`, `-`)로 연결.
    ///   첫 필드가 4자리면 년-월-일, 아니면 로케일의 필드 순서를 따름
    /// - 영어 월 이름 (영어/invariant 로케일만): `January 5, 2020`, `5 Jan 2020`
    /// - 선택적 시간: 공백 또는 `T` 뒤의 `H:mm[:ss]` 와 `AM`/`PM`
    pub fn parse_date(&self, text: &str) -> Option<ParsedDate> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let (date_part, time_part) = split_date_time(text);
        let date = parse_numeric_date(date_part, self.conventions.date_order).or_else(|| {
            self.conventions
                .english_months
                .then(|| parse_named_date(date_part))
                .flatten()
        })?;

        match time_part {
            Some(time_text) => {
                let time = parse_time(time_text)?;
                Some(ParsedDate {
                    value: date.and_time(time),
                    has_time: true,
                })
            }
            None => Some(ParsedDate {
                value: date.and_hms_opt(0, 0, 0)?,
                has_time: false,
            }),
        }
    }

    /// 로케일 규칙으로 부동소수점 숫자 파싱
    ///
    /// 선행 부호, 정수부의 천 단위 구분자, 로케일 소수점, 지수(`e`/`E`)를 허용합니다.
    pub fn parse_number(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        match text {
            "NaN" => return Some(f64::NAN),
            "Infinity" | "+Infinity" | "∞" | "+∞" => return Some(f64::INFINITY),
            "-Infinity" | "-∞" => return Some(f64::NEG_INFINITY),
            _ => {}
        }

        #[derive(Clone, Copy, PartialEq)]
        enum Part {
            Integer,
            Fraction,
            Exponent,
        }

        let mut negative = false;
        let mut integer = String::new();
        let mut fraction = String::new();
        let mut exponent = String::new();
        let mut part = Part::Integer;

        let mut chars = text.chars().peekable();
        if let Some(&sign @ ('+' | '-')) = chars.peek() {
            negative = sign == '-';
            chars.next();
        }

        while let Some(c) = chars.next() {
            match part {
                Part::Integer if c.is_ascii_digit() => integer.push(c),
                Part::Integer if c == self.conventions.decimal_separator => {
                    part = Part::Fraction
                }
                Part::Integer
                    if self.conventions.is_group_separator(c)
                        && !integer.is_empty()
                        && chars.peek().is_some_and(|n| n.is_ascii_digit()) => {}
                Part::Fraction if c.is_ascii_digit() => fraction.push(c),
                Part::Integer | Part::Fraction if c == 'e' || c == 'E' => {
                    if integer.is_empty() && fraction.is_empty() {
                        return None;
                    }
                    part = Part::Exponent;
                    if let Some(&sign @ ('+' | '-')) = chars.peek() {
                        exponent.push(sign);
                        chars.next();
                    }
                }
                Part::Exponent if c.is_ascii_digit() => exponent.push(c),
                _ => return None,
            }
        }

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        if part == Part::Exponent && !exponent.ends_with(|c: char| c.is_ascii_digit()) {
            return None;
        }

        let normalized = format!(
            "{}{}.{}e{}",
            if negative { "-" } else { "" },
            if integer.is_empty() { "0" } else { &integer },
            if fraction.is_empty() { "0" } else { &fraction },
            if exponent.is_empty() { "0" } else { &exponent },
        );
        normalized.parse().ok()
    }
}

/// 파싱된 날짜/시간
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub value: NaiveDateTime,
    /// 입력에 시간이 포함되어 있었는지 여부
    pub has_time: bool,
}

impl ParsedDate {
    /// invariant 형식: `MM/dd/yyyy` 또는 `MM/dd/yyyy HH:mm:ss`
    pub fn to_invariant_string(&self) -> String {
        if self.has_time {
            self.value.format("%m/%d/%Y %H:%M:%S").to_string()
        } else {
            self.value.format("%m/%d/%Y").to_string()
        }
    }
}

/// 숫자를 invariant 형식으로 변환
///
/// 왕복 가능한 최단 자릿수를 사용하며, 10진 지수가 -5 이하이거나
/// 15 이상이면 `1E+15`, `1E-05` 같은 지수 표기를 사용합니다.
///
/// # Examples
/// ```
/// use lineconv::locale::format_invariant_number;
///
/// assert_eq!(format_invariant_number(1234.5), "1234.5");
/// assert_eq!(format_invariant_number(1e20), "1E+20");
/// assert_eq!(format_invariant_number(0.00001), "1E-05");
/// ```
pub fn format_invariant_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if exponent <= -5 || exponent >= 15 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}E{}{:02}", mantissa, sign, exponent.abs())
    } else {
        value.to_string()
    }
}

/// 날짜 부분과 시간 부분 분리
fn split_date_time(text: &str) -> (&str, Option<&str>) {
    // ISO 8601 형식 (2020-01-01T10:30)
    if let Some((date, time)) = text.split_once('T') {
        if !date.is_empty()
            && date.chars().all(|c| c.is_ascii_digit() || c == '-')
            && time.starts_with(|c: char| c.is_ascii_digit())
        {
            return (date, Some(time));
        }
    }

    // ':'를 포함한 첫 토큰부터 시간
    let mut offset = 0;
    for token in text.split_whitespace() {
        let start = offset + text[offset..].find(token).unwrap_or(0);
        if token.contains(':') {
            return (text[..start].trim_end(), Some(&text[start..]));
        }
        offset = start + token.len();
    }

    (text, None)
}

/// 세 필드 숫자 날짜 파싱
fn parse_numeric_date(text: &str, order: DateOrder) -> Option<NaiveDate> {
    let separator = text.chars().find(|c| matches!(c, '/' | '.' | '-'))?;
    let fields: Vec<&str> = text.split(separator).collect();
    if fields.len() != 3
        || fields
            .iter()
            .any(|f| f.is_empty() || f.len() > 4 || !f.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let (year, month, day) = if fields[0].len() == 4 {
        (fields[0], fields[1], fields[2])
    } else {
        match order {
            DateOrder::MonthDayYear => (fields[2], fields[0], fields[1]),
            DateOrder::DayMonthYear => (fields[2], fields[1], fields[0]),
            DateOrder::YearMonthDay => (fields[0], fields[1], fields[2]),
        }
    };

    if month.len() > 2 || day.len() > 2 {
        return None;
    }

    NaiveDate::from_ymd_opt(parse_year(year)?, month.parse().ok()?, day.parse().ok()?)
}

/// 영어 월 이름 날짜 파싱 (`January 5, 2020`, `5 Jan 2020`)
fn parse_named_date(text: &str) -> Option<NaiveDate> {
    let cleaned = text.replace(',', " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.len() != 3 {
        return None;
    }

    let (month, day) = match (month_from_name(tokens[0]), month_from_name(tokens[1])) {
        (Some(month), None) => (month, tokens[1]),
        (None, Some(month)) => (month, tokens[0]),
        _ => return None,
    };

    let year = tokens[2];
    if year.len() != 4 || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month, day.parse().ok()?)
}

fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.trim_end_matches('.').to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|full| *full == lower || (lower.len() == 3 && full.starts_with(&lower)))
        .map(|i| i as u32 + 1)
}

fn parse_year(text: &str) -> Option<i32> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i32 = text.parse().ok()?;
    match text.len() {
        4 => Some(value),
        1 | 2 => {
            let century = TWO_DIGIT_YEAR_MAX / 100 * 100;
            if century + value > TWO_DIGIT_YEAR_MAX {
                Some(century - 100 + value)
            } else {
                Some(century + value)
            }
        }
        _ => None,
    }
}

/// `H:mm[:ss]` 와 선택적 `AM`/`PM` 파싱
fn parse_time(text: &str) -> Option<NaiveTime> {
    let upper = text.trim().to_ascii_uppercase();
    let (clock, pm) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end(), Some(true))
    } else {
        (upper.as_str(), None)
    };

    let fields: Vec<&str> = clock.split(':').collect();
    if !(2..=3).contains(&fields.len())
        || fields[0].is_empty()
        || fields[0].len() > 2
        || fields[1..].iter().any(|f| f.len() != 2)
        || fields.iter().any(|f| !f.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let mut hour: u32 = fields[0].parse().ok()?;
    let minute: u32 = fields[1].parse().ok()?;
    let second: u32 = match fields.get(2) {
        Some(s) => s.parse().ok()?,
        None => 0,
    };

    if let Some(pm) = pm {
        if hour == 0 || hour > 12 {
            return None;
        }
        hour = hour % 12 + if pm { 12 } else { 0 };
    }

    NaiveTime::from_hms_opt(hour, minute, second)
}
