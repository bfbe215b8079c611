//! Text recovery from legacy binary `.doc` files
//!
//! Neither method understands the file format. Method 1 keeps printable
//! ASCII from a lossy UTF-8 decode; method 2 decodes with several encodings
//! and pulls out sentence-shaped runs.

use super::encoding::{decode_utf8_ignoring, normalize_newlines, TextEncoding};
use super::{ExtractError, ExtractOptions};
use regex::Regex;
use std::path::Path;

/// Method 2 result when no encoding yields a sentence
pub const NO_SENTENCES_FOUND: &str = "Could not extract readable text with alternative methods";

const SENTENCE_PATTERN: &str = r"[A-Z][^.!?]*[.!?]";

fn is_printable(c: char) -> bool {
    matches!(c, '\x20'..='\x7E' | '\n' | '\r' | '\t')
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Method 1: printable-byte filtering.
///
/// Without `preserve_line_breaks` every whitespace run (newlines included)
/// folds to one space, so the result is at most a single line.
pub fn extract_printable(bytes: &[u8], options: &ExtractOptions) -> String {
    let printable: String = decode_utf8_ignoring(bytes)
        .chars()
        .map(|c| if is_printable(c) { c } else { ' ' })
        .collect();

    let lines: Vec<String> = if options.preserve_line_breaks {
        normalize_newlines(&printable)
            .split('\n')
            .map(collapse_whitespace)
            .collect()
    } else {
        vec![collapse_whitespace(&printable)]
    };

    lines
        .into_iter()
        .filter(|line| line.len() > options.min_line_len && line.bytes().any(|b| b.is_ascii_alphabetic()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Method 2: multi-encoding sentence extraction.
///
/// Encodings are tried in [`TextEncoding::ALL`] order; the first one that
/// yields any sentence wins.
pub fn extract_sentences(bytes: &[u8], options: &ExtractOptions) -> Result<String, ExtractError> {
    let sentence_re = Regex::new(SENTENCE_PATTERN)?;

    for encoding in TextEncoding::ALL {
        let content = normalize_newlines(&encoding.decode(bytes));
        let sentences: Vec<&str> = sentence_re
            .find_iter(&content)
            .take(options.max_sentences)
            .map(|m| m.as_str())
            .collect();

        if !sentences.is_empty() {
            return Ok(format!(
                "Method with {} encoding found:\n{}",
                encoding.label(),
                sentences.join("\n")
            ));
        }
    }

    Ok(NO_SENTENCES_FOUND.to_string())
}

/// Read `path` and run method 1
pub fn extract_printable_from_file(path: &Path, options: &ExtractOptions) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractError::FileRead(path.to_path_buf(), e))?;
    Ok(extract_printable(&bytes, options))
}

/// Read `path` and run method 2
pub fn extract_sentences_from_file(path: &Path, options: &ExtractOptions) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractError::FileRead(path.to_path_buf(), e))?;
    extract_sentences(&bytes, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> Vec<u8> {
        let mut bytes = vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0x00, 0x00];
        bytes.extend_from_slice(b"The patient is awake.\r\n\x01\x02Check vital signs!");
        bytes.extend_from_slice(&[0x00, 0xFF, 0x13]);
        bytes.extend_from_slice(b"ok\n12345");
        bytes
    }

    #[test]
    fn test_printable_folds_to_one_line() {
        let text = extract_printable(&sample_doc(), &ExtractOptions::default());
        assert_eq!(text, "The patient is awake. Check vital signs! ok 12345");
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_printable_output_is_ascii() {
        let text = extract_printable(&sample_doc(), &ExtractOptions::default());
        assert!(text.chars().all(|c| matches!(c, '\x20'..='\x7E' | '\n' | '\t')));
    }

    #[test]
    fn test_printable_drops_short_and_non_alpha_lines() {
        let options = ExtractOptions {
            preserve_line_breaks: true,
            ..ExtractOptions::default()
        };
        let text = extract_printable(&sample_doc(), &options);
        assert_eq!(text, "The patient is awake.\nCheck vital signs! ok");
    }

    #[test]
    fn test_printable_min_len_is_strict() {
        let options = ExtractOptions::default();
        assert_eq!(extract_printable(b"abcdefghij", &options), "");
        assert_eq!(extract_printable(b"abcdefghijk", &options), "abcdefghijk");
        assert_eq!(extract_printable(b"1234567890123", &options), "");
    }

    #[test]
    fn test_sentences_first_encoding_wins() {
        let text = extract_sentences(&sample_doc(), &ExtractOptions::default()).unwrap();
        assert_eq!(
            text,
            "Method with utf-8 encoding found:\nThe patient is awake.\nCheck vital signs!"
        );
    }

    #[test]
    fn test_sentences_limit() {
        let bytes = b"A. B. C. D.";
        let options = ExtractOptions {
            max_sentences: 2,
            ..ExtractOptions::default()
        };
        let text = extract_sentences(bytes, &options).unwrap();
        assert_eq!(text, "Method with utf-8 encoding found:\nA.\nB.");
    }

    #[test]
    fn test_sentences_none_found() {
        let text = extract_sentences(b"lowercase only. no capitals!", &ExtractOptions::default()).unwrap();
        assert_eq!(text, NO_SENTENCES_FOUND);
    }

    #[test]
    fn test_sentence_spans_newlines() {
        let text = extract_sentences(b"Wash\r\nhands?", &ExtractOptions::default()).unwrap();
        assert!(text.ends_with("Wash\nhands?"));
    }

    #[test]
    fn test_missing_file() {
        let err = extract_printable_from_file(Path::new("/nonexistent/file.doc"), &ExtractOptions::default())
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to read file"));
    }
}
