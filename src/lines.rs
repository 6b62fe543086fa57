//! 입력 줄 준비 모듈
//!
//! 파일의 줄을 지연(lazy) 방식으로 읽어 빈 줄을 건너뛰고 앞뒤 공백을 제거한 뒤,
//! 마지막에 처리한 줄 수를 담은 트레일러 줄을 하나 덧붙입니다.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use crate::error::{LineConvError, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// 준비된 줄 시퀀스
///
/// 한 번만 순회할 수 있으며, 트레일러를 내보낸 뒤(또는 읽기 에러 뒤)에는
/// 항상 `None`을 반환합니다.
pub struct PreparedLines<R = BufReader<File>> {
    path: PathBuf,
    reader: R,
    buf: Vec<u8>,
    count: usize,
    first_line: bool,
    finished: bool,
}

impl PreparedLines {
    /// 파일을 열어 줄 시퀀스 생성
    ///
    /// 파일을 열 수 없으면 아무 줄도 내보내기 전에 `FileNotFound`로 실패합니다.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| LineConvError::FileNotFound {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self::from_reader(path, BufReader::new(file)))
    }
}

impl<R: BufRead> PreparedLines<R> {
    /// 임의의 리더로부터 줄 시퀀스 생성 (`path`는 에러 메시지용)
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            path: path.into(),
            reader,
            buf: Vec::new(),
            count: 0,
            first_line: true,
            finished: false,
        }
    }

    /// 지금까지 내보낸 비어있지 않은 줄 수
    pub fn lines_seen(&self) -> usize {
        self.count
    }

    /// 물리적 줄 하나 읽기 (`\n`, `\r\n`, `\r` 종결자 제거)
    fn read_physical_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        let mut read_any = false;

        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                break;
            }
            read_any = true;

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    let terminator = available[i];
                    self.buf.extend_from_slice(&available[..i]);
                    self.reader.consume(i + 1);
                    if terminator == b'\r' && self.reader.fill_buf()?.first() == Some(&b'\n') {
                        self.reader.consume(1);
                    }
                    return Ok(Some(self.decode()));
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }

        Ok(read_any.then(|| self.decode()))
    }

    /// 잘못된 UTF-8은 U+FFFD로 대체, 첫 줄의 BOM 제거
    fn decode(&mut self) -> String {
        let line = String::from_utf8_lossy(&self.buf);
        if std::mem::take(&mut self.first_line) {
            line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&line).to_string()
        } else {
            line.into_owned()
        }
    }
}

impl<R: BufRead> Iterator for PreparedLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            match self.read_physical_line() {
                // 공백만 있는 줄은 빈 줄이 아님 (트림 후 "" 으로 내보냄)
                Ok(Some(line)) if line.is_empty() => continue,
                Ok(Some(line)) => {
                    self.count += 1;
                    return Some(Ok(line.trim().to_string()));
                }
                Ok(None) => {
                    self.finished = true;
                    return Some(Ok(self.count.to_string()));
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(LineConvError::ReadError {
                        file: self.path.clone(),
                        reason: e.to_string(),
                    }));
                }
            }
        }
        None
    }
}

impl<R: BufRead> FusedIterator for PreparedLines<R> {}
