use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use thiserror::Error;

/// 参数名到参数值列表的映射，遍历顺序不固定
pub type QueryParameters = HashMap<String, Vec<String>>;

/// 查询字符串解码错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("invalid escape sequence {0:?}")]
    InvalidEscape(String),
    #[error("invalid semicolon separator in query")]
    Semicolon,
}

/// 按 `application/x-www-form-urlencoded` 规则解码查询字符串
///
/// 同名参数的值按出现顺序保存，遇到的第一个错误会被返回。
pub fn decode(raw: &str) -> Result<QueryParameters, QueryError> {
    let mut params = QueryParameters::new();

    for pair in raw.split('&') {
        if pair.contains(';') {
            return Err(QueryError::Semicolon);
        }
        if pair.is_empty() {
            continue;
        }
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        let name = unescape(name)?;
        let value = unescape(value)?;
        params.entry(name).or_default().push(value);
    }

    Ok(params)
}

fn unescape(component: &str) -> Result<String, QueryError> {
    check_escapes(component)?;
    let spaced = component.replace('+', " ");
    Ok(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
}

// every '%' must be followed by two hex digits
fn check_escapes(component: &str) -> Result<(), QueryError> {
    let bytes = component.as_bytes();
    for (i, byte) in bytes.iter().enumerate() {
        if *byte != b'%' {
            continue;
        }
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            let sequence: String = component[i..].chars().take(3).collect();
            return Err(QueryError::InvalidEscape(sequence));
        }
    }
    Ok(())
}
