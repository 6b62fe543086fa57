//! 통합 테스트 모듈
//!
//! lineconv의 전체 기능을 테스트합니다.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 테스트용 입력 파일 생성 헬퍼
fn create_input_file(dir: &std::path::Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// 출력 파일 줄 목록 읽기
fn read_output(input: &std::path::Path) -> Vec<String> {
    fs::read_to_string(lineconv::output_path(input))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn settings(culture: &str) -> lineconv::Settings {
    lineconv::Settings {
        source_culture_name: culture.to_string(),
        verbose: false,
    }
}

mod scenario_tests {
    use super::*;
    use lineconv::{convert_file, FileStatus, MemoryJournal};

    #[test]
    fn test_char_index_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_input_file(temp_dir.path(), "text.txt", "1 abc\n");

        convert_file(&path, &settings("en-US"), &MemoryJournal::new());

        assert_eq!(read_output(&path), vec!["1 b", "1 1"]);
    }

    #[test]
    fn test_date_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_input_file(temp_dir.path(), "text.txt", "2020-01-01");

        convert_file(&path, &settings("en-US"), &MemoryJournal::new());

        assert_eq!(read_output(&path), vec!["10 01/01/2020", "1 1"]);
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_input_file(temp_dir.path(), "empty.txt", "");

        let outcome = convert_file(&path, &settings("en-US"), &MemoryJournal::new());

        assert_eq!(outcome.status, FileStatus::Converted);
        assert_eq!(read_output(&path), vec!["1 0"]);
    }

    #[test]
    fn test_missing_file_produces_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.txt");

        let outcome = convert_file(&path, &settings("en-US"), &MemoryJournal::new());

        assert_eq!(outcome.status, FileStatus::Skipped);
        assert!(!lineconv::output_path(&path).exists());
    }

    #[test]
    fn test_out_of_range_index() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_input_file(temp_dir.path(), "text.txt", "5 ab\n");

        convert_file(&path, &settings("en-US"), &MemoryJournal::new());

        assert_eq!(read_output(&path), vec!["0 ", "1 1"]);
    }

    #[test]
    fn test_mixed_file_with_culture() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_input_file(
            temp_dir.path(),
            "ru.txt",
            "  31.12.2020  \n\n3,25\n1,5e3\n0 слово\nодно\n\n",
        );

        convert_file(&path, &settings("ru-RU"), &MemoryJournal::new());

        assert_eq!(
            read_output(&path),
            vec!["10 12/31/2020", "4 3.25", "4 1500", "1 с", "0 ", "1 5"]
        );
    }
}

mod property_tests {
    use super::*;
    use lineconv::{convert_file, convert_line, Conversion, Locale, MemoryJournal};

    #[test]
    fn test_line_count_matches_non_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let contents = ["a", "a\nb", "\n\na\n\n", "x\n \n\ny\nz", "\n"];

        for (i, content) in contents.iter().enumerate() {
            let path = create_input_file(temp_dir.path(), &format!("f{}.txt", i), content);
            convert_file(&path, &settings("en-US"), &MemoryJournal::new());

            let non_blank = content.split('\n').filter(|l| !l.is_empty()).count();
            let output = read_output(&path);
            assert_eq!(output.len(), non_blank + 1, "{content:?}");

            let trailer = non_blank.to_string();
            assert_eq!(
                output.last().unwrap(),
                &format!("{} {}", trailer.len(), trailer)
            );
        }
    }

    #[test]
    fn test_number_round_trip() {
        let invariant = Locale::invariant();
        for text in ["0.5", "-12.125", "3e-7", "123456.789", "7E+18"] {
            let Conversion::Text(converted) = convert_line(text, &invariant).unwrap() else {
                panic!("{text} not converted");
            };
            assert_eq!(
                invariant.parse_number(&converted),
                invariant.parse_number(text),
                "{text} -> {converted}"
            );
        }
    }

    #[test]
    fn test_date_priority_over_char_index() {
        let locale = Locale::from_name("en-US").unwrap();
        for text in ["2020-01-01 10:30", "12/25/2021 8:00", "1/2/2003 7:05 PM"] {
            let converted = convert_line(text, &locale).unwrap();
            assert!(
                matches!(&converted, Conversion::Text(t) if t.contains('/') && t.len() == 19),
                "{text} -> {converted:?}"
            );
        }
    }

    #[test]
    fn test_char_index_boundaries() {
        let locale = Locale::invariant();
        let word = "hello";
        for index in -2..=7_i32 {
            let converted = convert_line(&format!("{} {}", index, word), &locale).unwrap();
            let expected = usize::try_from(index)
                .ok()
                .and_then(|i| word.chars().nth(i))
                .map(|c| Conversion::Text(c.to_string()))
                .unwrap_or(Conversion::NoResult);
            assert_eq!(converted, expected, "index {index}");
        }
    }
}

mod runner_tests {
    use super::*;
    use lineconv::journal::Level;
    use lineconv::{run_jobs, MemoryJournal, Statistics};

    #[test]
    fn test_many_files_in_parallel() {
        let temp_dir = TempDir::new().unwrap();
        let files: Vec<PathBuf> = (0..16)
            .map(|i| {
                create_input_file(
                    temp_dir.path(),
                    &format!("in{}.txt", i),
                    &format!("{} abcdefghijklmnop\n", i),
                )
            })
            .collect();

        let stats = Statistics::new(files.len());
        run_jobs(&files, &settings("en-US"), &MemoryJournal::new(), &stats);

        assert_eq!(stats.get_converted_count(), 16);
        for (i, path) in files.iter().enumerate() {
            let expected = ('a' as u8 + i as u8) as char;
            assert_eq!(read_output(path), vec![format!("1 {}", expected), "1 1".to_string()]);
        }
    }

    #[test]
    fn test_failure_does_not_affect_siblings() {
        let temp_dir = TempDir::new().unwrap();
        let broken = create_input_file(temp_dir.path(), "broken.txt", "1 ok\nbad token\n");
        let fine = create_input_file(temp_dir.path(), "fine.txt", "3.0\n");
        let missing = temp_dir.path().join("missing.txt");

        let journal = MemoryJournal::new();
        let stats = Statistics::new(3);
        run_jobs(
            &[broken.clone(), missing.clone(), fine.clone()],
            &settings("en-US"),
            &journal,
            &stats,
        );

        assert_eq!(read_output(&fine), vec!["1 3", "1 1"]);
        assert!(!lineconv::output_path(&broken).exists());
        assert!(journal.contains(Level::Error, "broken.txt"));
        assert!(journal.contains(Level::Error, "missing.txt"));
        assert_eq!(stats.failures().len(), 1);
    }

    #[test]
    fn test_verbose_reports_each_file() {
        let temp_dir = TempDir::new().unwrap();
        let a = create_input_file(temp_dir.path(), "a.txt", "1\n");
        let b = create_input_file(temp_dir.path(), "b.txt", "2\n");

        let journal = MemoryJournal::new();
        let settings = lineconv::Settings {
            source_culture_name: "fr-FR".to_string(),
            verbose: true,
        };
        run_jobs(&[a, b], &settings, &journal, &Statistics::new(2));

        assert!(journal.contains(Level::Info, "a.txt"));
        assert!(journal.contains(Level::Info, "b.txt"));
        assert_eq!(
            journal
                .messages(Level::Info)
                .iter()
                .filter(|m| m.contains("fr-FR"))
                .count(),
            2
        );
    }
}

mod settings_tests {
    use super::*;
    use lineconv::journal::Level;
    use lineconv::{LineConvError, MemoryJournal, Settings};

    #[test]
    fn test_load_serializer_style_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_input_file(
            temp_dir.path(),
            "settings.xml",
            r#"<?xml version="1.0" encoding="utf-8"?>
<Settings xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <SourceCultureName>de-DE</SourceCultureName>
  <Verbose>false</Verbose>
</Settings>
"#,
        );

        let journal = MemoryJournal::new();
        let settings = Settings::load(&path, &journal).unwrap();

        assert_eq!(settings.source_culture_name, "de-DE");
        assert!(!settings.verbose);
        assert!(journal.entries().is_empty());
    }

    #[test]
    fn test_missing_settings_warns() {
        let temp_dir = TempDir::new().unwrap();
        let journal = MemoryJournal::new();

        let settings = Settings::load(&temp_dir.path().join("settings.xml"), &journal).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(journal.messages(Level::Warn).len(), 1);
    }

    #[test]
    fn test_malformed_settings_fail() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_input_file(temp_dir.path(), "settings.xml", "<Settings><Verbose>perhaps</Verbose></Settings>");

        let err = Settings::load(&path, &MemoryJournal::new()).unwrap_err();
        assert!(matches!(err, LineConvError::SettingsParse { .. }));
    }
}

mod error_tests {
    use lineconv::error::LineConvError;
    use std::path::PathBuf;

    #[test]
    fn test_write_error_display() {
        let error = LineConvError::WriteError {
            file: PathBuf::from("out/text.txt.out"),
            reason: "permission denied".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("파일 쓰기 실패"));
        assert!(msg.contains("text.txt.out"));
    }

    #[test]
    fn test_invalid_char_index_display() {
        let error = LineConvError::InvalidCharIndex {
            token: "x".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert!(error.to_string().contains("\"x\""));
    }
}
