//! Keyword specification strings
//!
//! Hosts take keywords as one formatted prompt, for example
//! `"Select mode [All/Layer/Clear] <All>: "`, together with a space separated
//! list of global keyword names (`"All Layer Clear"`). The list based keyword
//! prompt is formatted into this shape and then parsed like any other spec, so
//! both prompt flavours reach the host through the same path.

use super::interface::{Keyword, KeywordSet};
use crate::error::{Error, Result};
use regex::Regex;

const SPEC_PATTERN: &str = r"(?s)^(?P<message>.*?)\s*\[(?P<locals>[^\]]*)\]\s*(?:<(?P<default>[^>]*)>)?\s*:?\s*$";

const RESERVED_CHARS: &[char] = &['/', '[', ']', '<', '>'];

/// Formats a keyword list into `(message_and_keywords, global_keywords)`.
pub fn format_keyword_spec(
    message: &str,
    keywords: &[String],
    default_index: usize,
) -> Result<(String, String)> {
    validate_keyword_list(keywords, default_index)?;

    let message_and_keywords = format!(
        "{} [{}] <{}>: ",
        message.trim_end(),
        keywords.join("/"),
        keywords[default_index]
    );
    Ok((message_and_keywords, keywords.join(" ")))
}

/// Parses a keyword spec into the bare message and its keyword set.
pub fn parse_keyword_spec(
    message_and_keywords: &str,
    global_keywords: &str,
) -> Result<(String, KeywordSet)> {
    let re = Regex::new(SPEC_PATTERN)
        .map_err(|e| Error::InvalidRequest(format!("keyword pattern: {e}")))?;
    let globals: Vec<&str> = global_keywords.split_whitespace().collect();

    let (message, locals, default) = match re.captures(message_and_keywords) {
        Some(caps) => {
            let locals: Vec<&str> = caps
                .name("locals")
                .map(|m| m.as_str().split('/').map(str::trim).collect())
                .unwrap_or_default();
            let message = caps.name("message").map_or("", |m| m.as_str()).to_string();
            let default = caps.name("default").map(|m| m.as_str().trim().to_string());
            (message, locals, default)
        }
        None => (message_and_keywords.trim_end().to_string(), globals.clone(), None),
    };

    if locals.iter().all(|l| l.is_empty()) {
        return Err(Error::InvalidRequest("keyword spec lists no keywords".into()));
    }
    if locals.iter().any(|l| l.is_empty()) {
        return Err(Error::InvalidRequest(format!(
            "empty keyword in '{message_and_keywords}'"
        )));
    }

    let globals = if globals.is_empty() { locals.clone() } else { globals };
    if globals.len() != locals.len() {
        return Err(Error::InvalidRequest(format!(
            "{} display keywords but {} global keywords",
            locals.len(),
            globals.len()
        )));
    }

    for names in [&locals, &globals] {
        if let Some(duplicate) = first_duplicate(names) {
            return Err(Error::InvalidRequest(format!("duplicate keyword '{duplicate}'")));
        }
    }

    let keywords: Vec<Keyword> = globals
        .iter()
        .zip(&locals)
        .map(|(global, local)| Keyword { global: global.to_string(), local: local.to_string() })
        .collect();

    let default_index = match default {
        Some(default) if !default.is_empty() => Some(
            keywords
                .iter()
                .position(|k| k.local == default || k.global == default)
                .ok_or_else(|| {
                    Error::InvalidRequest(format!("default keyword '{default}' is not listed"))
                })?,
        ),
        _ => None,
    };

    Ok((message, KeywordSet { keywords, default_index }))
}

fn first_duplicate<'a>(names: &[&'a str]) -> Option<&'a str> {
    names
        .iter()
        .enumerate()
        .find(|(i, name)| names[..*i].iter().any(|k| k.eq_ignore_ascii_case(name)))
        .map(|(_, name)| *name)
}

fn validate_keyword_list(keywords: &[String], default_index: usize) -> Result<()> {
    if keywords.is_empty() {
        return Err(Error::InvalidRequest("keyword list is empty".into()));
    }
    if default_index >= keywords.len() {
        return Err(Error::InvalidRequest(format!(
            "default index {default_index} out of range for {} keywords",
            keywords.len()
        )));
    }
    for (i, keyword) in keywords.iter().enumerate() {
        if keyword.is_empty()
            || keyword.chars().any(char::is_whitespace)
            || keyword.contains(RESERVED_CHARS)
        {
            return Err(Error::InvalidRequest(format!("invalid keyword '{keyword}'")));
        }
        if keywords[..i].iter().any(|k| k.eq_ignore_ascii_case(keyword)) {
            return Err(Error::InvalidRequest(format!("duplicate keyword '{keyword}'")));
        }
    }
    Ok(())
}
