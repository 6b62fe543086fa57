//! 로그 기록 모듈
//!
//! 변환기는 전역 로거 대신 [`Journal`]을 주입받아 정보/경고/에러 항목을 기록합니다.
//! 실제 실행에서는 [`TracingJournal`]이 `tracing` 이벤트로 내보내고,
//! 테스트에서는 [`MemoryJournal`]이 항목을 모아 검증에 사용합니다.

use std::sync::Mutex;

/// 로그 항목 수준
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// 기록된 로그 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub level: Level,
    pub message: String,
}

/// 로그 싱크 인터페이스
///
/// 여러 변환 작업이 동시에 기록하므로 `Send + Sync`가 필요합니다.
pub trait Journal: Send + Sync {
    /// 항목 하나 기록
    fn record(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}

/// `tracing` 이벤트로 기록하는 기본 싱크
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingJournal;

impl Journal for TracingJournal {
    fn record(&self, level: Level, message: &str) {
        match level {
            Level::Info => tracing::info!("{}", message),
            Level::Warn => tracing::warn!("{}", message),
            Level::Error => tracing::error!("{}", message),
        }
    }
}

/// 메모리에 항목을 모아두는 싱크 (테스트용)
#[derive(Debug, Default)]
pub struct MemoryJournal {
    entries: Mutex<Vec<Entry>>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// 지금까지 기록된 항목의 복사본
    pub fn entries(&self) -> Vec<Entry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// 특정 수준의 메시지만 반환
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .map(|e| e.message)
            .collect()
    }

    /// 주어진 문자열을 포함하는 항목이 있는지 확인
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages(level).iter().any(|m| m.contains(needle))
    }
}

impl Journal for MemoryJournal {
    fn record(&self, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(Entry {
                level,
                message: message.to_string(),
            });
        }
    }
}
