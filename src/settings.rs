//! 설정 모듈
//!
//! `settings.xml`을 읽어 변환 설정을 만듭니다. 파일이 없으면 기본 설정을 사용하고,
//! 파일이 있지만 읽거나 해석할 수 없으면 실행 전체를 중단합니다.
//!
//! ```xml
//! <?xml version="1.0"?>
//! <Settings>
//!   <SourceCultureName>ru-RU</SourceCultureName>
//!   <Verbose>true</Verbose>
//! </Settings>
//! ```

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{LineConvError, Result};
use crate::journal::Journal;
use crate::locale::Locale;

/// 기본 설정 파일 경로
pub const DEFAULT_SETTINGS_PATH: &str = "settings.xml";

/// 기본 입력 로케일
pub const DEFAULT_CULTURE: &str = "en-US";

/// 변환 설정 (로드 후 읽기 전용)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename = "Settings", rename_all = "PascalCase")]
pub struct Settings {
    /// 입력 파일을 해석할 로케일 이름
    #[serde(default = "default_culture")]
    pub source_culture_name: String,
    /// 상세 로그 출력 여부
    #[serde(default)]
    pub verbose: bool,
}

fn default_culture() -> String {
    DEFAULT_CULTURE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_culture_name: default_culture(),
            verbose: false,
        }
    }
}

impl Settings {
    /// 설정 파일 로드
    ///
    /// # Arguments
    /// * `path` - 설정 파일 경로
    /// * `journal` - 파일이 없을 때 경고를 기록할 로그 싱크
    ///
    /// # Returns
    /// 로드된 설정, 파일이 없으면 기본 설정
    pub fn load(path: &Path, journal: &dyn Journal) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                journal.warn(&format!(
                    "설정 파일 {} 이(가) 없습니다. 기본 설정을 사용합니다.",
                    path.display()
                ));
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(LineConvError::SettingsRead {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        };

        let settings = Self::from_xml(&content).map_err(|reason| LineConvError::SettingsParse {
            path: path.to_path_buf(),
            reason,
        })?;

        // 로케일 이름은 변환 시작 전에 검증
        settings.locale()?;
        Ok(settings)
    }

    /// XML 문자열에서 설정 역직렬화
    pub fn from_xml(xml: &str) -> std::result::Result<Self, String> {
        quick_xml::de::from_str(xml).map_err(|e| e.to_string())
    }

    /// 설정된 로케일 해석
    pub fn locale(&self) -> Result<Locale> {
        Locale::from_name(&self.source_culture_name)
    }
}
