use crate::error::{CheckError, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

use super::ordered_properties::OrderedProperties;

/// Parser for `.properties` translation files
///
/// Follows the classic property-file grammar: `#`/`!` comments, `=`, `:` or
/// whitespace separators, backslash line continuation and `\uXXXX` escapes.
pub struct PropertiesParser;

/// A logical line with the natural line number it started on (1-indexed)
struct LogicalLine {
    line: usize,
    chars: Vec<char>,
}

impl PropertiesParser {
    pub fn parse_file(path: &Path) -> Result<OrderedProperties> {
        let bytes = fs::read(path).map_err(|e| CheckError::read(path, e))?;
        Self::parse_str(&decode(bytes), path)
    }

    /// Parse property text. `origin` is only used for diagnostics.
    pub fn parse_str(text: &str, origin: &Path) -> Result<OrderedProperties> {
        let mut props = OrderedProperties::new();

        for logical in logical_lines(text) {
            let (raw_key, raw_value) = split_key_value(&logical.chars);
            let key = unescape(raw_key)
                .map_err(|reason| CheckError::malformed(origin, logical.line, reason))?;
            let value = unescape(raw_value)
                .map_err(|reason| CheckError::malformed(origin, logical.line, reason))?;

            if props.insert(key.clone(), value).is_some() {
                warn!(
                    file = %origin.display(),
                    line = logical.line,
                    key = %key,
                    "duplicate key, last value wins"
                );
            }
        }

        Ok(props)
    }
}

/// UTF-8 when valid, ISO-8859-1 otherwise
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Split on `\n`, `\r` and `\r\n`
fn natural_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Join natural lines into logical lines, dropping blanks and comments
fn logical_lines(text: &str) -> Vec<LogicalLine> {
    let mut result = Vec::new();
    let mut pending: Option<LogicalLine> = None;

    for (idx, natural) in natural_lines(text).into_iter().enumerate() {
        let stripped: Vec<char> = natural.trim_start_matches(is_blank).chars().collect();

        let mut current = match pending.take() {
            Some(continued) => continued,
            None => {
                if stripped.is_empty() || matches!(stripped[0], '#' | '!') {
                    continue;
                }
                LogicalLine {
                    line: idx + 1,
                    chars: Vec::with_capacity(stripped.len()),
                }
            }
        };

        let trailing = stripped.iter().rev().take_while(|&&c| c == '\\').count();
        if trailing % 2 == 1 {
            current.chars.extend_from_slice(&stripped[..stripped.len() - 1]);
            pending = Some(current);
        } else {
            current.chars.extend_from_slice(&stripped);
            result.push(current);
        }
    }

    if let Some(unfinished) = pending {
        result.push(unfinished);
    }

    result
}

/// Locate the raw (still escaped) key and value of a logical line
fn split_key_value(line: &[char]) -> (&[char], &[char]) {
    let limit = line.len();
    let mut key_len = 0;
    let mut value_start = limit;
    let mut has_separator = false;
    let mut preceding_backslash = false;

    while key_len < limit {
        let c = line[key_len];
        if !preceding_backslash {
            if c == '=' || c == ':' {
                value_start = key_len + 1;
                has_separator = true;
                break;
            }
            if is_blank(c) {
                value_start = key_len + 1;
                break;
            }
        }
        preceding_backslash = c == '\\' && !preceding_backslash;
        key_len += 1;
    }

    while value_start < limit {
        let c = line[value_start];
        if !is_blank(c) {
            if !has_separator && (c == '=' || c == ':') {
                has_separator = true;
            } else {
                break;
            }
        }
        value_start += 1;
    }

    (&line[..key_len], &line[value_start..])
}

/// Resolve backslash escapes. Works on UTF-16 code units so that escaped
/// surrogate pairs combine into one character.
fn unescape(raw: &[char]) -> std::result::Result<String, String> {
    let mut units: Vec<u16> = Vec::with_capacity(raw.len());
    let mut buf = [0u16; 2];
    let mut i = 0;

    while i < raw.len() {
        let mut c = raw[i];
        i += 1;
        if c == '\\' {
            let Some(&next) = raw.get(i) else {
                break;
            };
            i += 1;
            c = match next {
                'u' => {
                    let digits = raw.get(i..i + 4).ok_or("Malformed \\uxxxx encoding.")?;
                    let mut unit: u16 = 0;
                    for d in digits {
                        let v = d.to_digit(16).ok_or("Malformed \\uxxxx encoding.")?;
                        unit = (unit << 4) | v as u16;
                    }
                    i += 4;
                    units.push(unit);
                    continue;
                }
                't' => '\t',
                'r' => '\r',
                'n' => '\n',
                'f' => '\x0c',
                other => other,
            };
        }
        units.extend_from_slice(c.encode_utf16(&mut buf));
    }

    String::from_utf16(&units).map_err(|_| "Unpaired surrogate in \\uxxxx encoding.".to_string())
}
