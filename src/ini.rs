//! Reader for the INI dialect used by CARLA settings files.

use crate::{
    config::Sections,
    error::{Error, Result},
};

pub(crate) fn parse(text: &str) -> Result<Sections> {
    let mut sections = Sections::default();
    let mut current: Option<String> = None;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim_start_matches('\u{feff}').trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or_else(|| syntax(line_no, "unterminated section header"))?
                .trim();
            if name.is_empty() {
                return Err(syntax(line_no, "empty section name"));
            }
            sections.ensure(name);
            current = Some(name.to_string());
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| syntax(line_no, format!("expected 'Key=Value', found '{line}'")))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(syntax(line_no, "empty key"));
        }
        let section = current.as_deref().ok_or_else(|| {
            syntax(line_no, format!("key '{key}' appears before any section header"))
        })?;

        sections.insert(section, key, unquote(value.trim()));
    }

    Ok(sections)
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|value| value.strip_suffix('"'))
        .unwrap_or(value)
}

fn syntax(line: usize, message: impl Into<String>) -> Error {
    Error::Syntax {
        line,
        message: message.into(),
    }
}
