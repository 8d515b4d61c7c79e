//! vCard 3.0 writer and reader for the contact-card download.
//!
//! Lines end in CRLF. Long lines (in practice only the base64 PHOTO) are
//! folded to 75 octets, continuation lines starting with a single space.

use super::constants::VCARD_LINE_MAX;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use thiserror::Error;

pub const VCARD_MIME: &str = "text/vcard";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub given_name: String,
    pub family_name: String,
    pub org: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
            .trim()
            .to_owned()
    }

    /// Download name, `<Full Name>.vcf`, with path separators removed.
    pub fn file_name(&self) -> String {
        let name: String = self
            .full_name()
            .chars()
            .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
            .collect();
        let name = if name.is_empty() { "contact".to_owned() } else { name };
        format!("{name}.vcf")
    }
}

/// A parsed card. Fields missing from the text are empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedVCard {
    pub version: String,
    pub full_name: String,
    pub given_name: String,
    pub family_name: String,
    pub org: String,
    pub email: String,
    pub phone: String,
    pub photo: Option<Vec<u8>>,
}

#[derive(Debug, Error)]
pub enum VCardError {
    #[error("missing BEGIN:VCARD")]
    MissingBegin,
    #[error("missing END:VCARD")]
    MissingEnd,
    #[error("missing {0} property")]
    MissingProperty(&'static str),
    #[error("line {0} has no ':' separator")]
    MalformedLine(usize),
    #[error("PHOTO is not valid base64: {0}")]
    Photo(#[from] base64::DecodeError),
}

/// Renders `contact` with an optional JPEG portrait.
pub fn render(contact: &Contact, photo_jpeg: Option<&[u8]>) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_owned(),
        "VERSION:3.0".to_owned(),
        format!("FN:{}", escape(&contact.full_name())),
        format!(
            "N:{};{};;;",
            escape(&contact.family_name),
            escape(&contact.given_name)
        ),
        format!("ORG:{}", escape(&contact.org)),
        format!("EMAIL;TYPE=INTERNET;TYPE=WORK:{}", escape(&contact.email)),
        format!("TEL;TYPE=CELL:{}", escape(&contact.phone)),
    ];
    if let Some(bytes) = photo_jpeg {
        lines.push(format!("PHOTO;ENCODING=b;TYPE=JPEG:{}", BASE64.encode(bytes)));
    }
    lines.push("END:VCARD".to_owned());

    let mut out = String::new();
    for line in &lines {
        out.push_str(&fold(line));
        out.push_str("\r\n");
    }
    out
}

/// Splits `line` into physical lines of at most 75 octets joined by CRLF.
/// Continuations carry one leading space, which counts toward the limit.
pub fn fold(line: &str) -> String {
    if line.len() <= VCARD_LINE_MAX {
        return line.to_owned();
    }
    let mut out = String::with_capacity(line.len() + line.len() / VCARD_LINE_MAX * 3);
    let mut budget = VCARD_LINE_MAX;
    let mut used = 0;
    for ch in line.chars() {
        let w = ch.len_utf8();
        if used + w > budget {
            out.push_str("\r\n ");
            budget = VCARD_LINE_MAX - 1;
            used = 0;
        }
        out.push(ch);
        used += w;
    }
    out
}

/// Joins continuation lines (leading space or tab) onto their predecessor.
pub fn unfold(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in text.split('\n') {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if let Some(rest) = raw.strip_prefix(|c: char| c == ' ' || c == '\t') {
            if let Some(last) = lines.last_mut() {
                last.push_str(rest);
                continue;
            }
        }
        if !raw.is_empty() {
            lines.push(raw.to_owned());
        }
    }
    lines
}

pub fn parse(text: &str) -> Result<ParsedVCard, VCardError> {
    let lines = unfold(text);
    let first = lines.first().map(String::as_str);
    if !first.is_some_and(|l| l.eq_ignore_ascii_case("BEGIN:VCARD")) {
        return Err(VCardError::MissingBegin);
    }
    if !lines
        .last()
        .is_some_and(|l| l.eq_ignore_ascii_case("END:VCARD"))
    {
        return Err(VCardError::MissingEnd);
    }

    let mut card = ParsedVCard::default();
    let mut has_fn = false;
    for (n, line) in lines.iter().enumerate().skip(1).take(lines.len() - 2) {
        let (head, value) = line
            .split_once(':')
            .ok_or(VCardError::MalformedLine(n + 1))?;
        let name = head.split(';').next().unwrap_or(head).to_ascii_uppercase();
        match name.as_str() {
            "VERSION" => card.version = value.to_owned(),
            "FN" => {
                card.full_name = unescape(value);
                has_fn = true;
            }
            "N" => {
                let mut parts = split_unescaped(value, ';').into_iter();
                card.family_name = parts.next().unwrap_or_default();
                card.given_name = parts.next().unwrap_or_default();
            }
            "ORG" => card.org = unescape(value),
            "EMAIL" => card.email = unescape(value),
            "TEL" => card.phone = unescape(value),
            "PHOTO" => card.photo = Some(BASE64.decode(value.trim())?),
            _ => {}
        }
    }
    if !has_fn {
        return Err(VCardError::MissingProperty("FN"));
    }
    Ok(card)
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Splits on unescaped `sep` and unescapes each component.
fn split_unescaped(value: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            current.push(ch);
            if let Some(next) = chars.next() {
                current.push(next);
            }
        } else if ch == sep {
            parts.push(unescape(&current));
            current.clear();
        } else {
            current.push(ch);
        }
    }
    parts.push(unescape(&current));
    parts
}

/// Source rectangle of the largest centered square in a `width`×`height`
/// image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareCrop {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

pub fn center_square(width: u32, height: u32) -> SquareCrop {
    let size = width.min(height);
    SquareCrop {
        x: (width - size) / 2,
        y: (height - size) / 2,
        size,
    }
}
