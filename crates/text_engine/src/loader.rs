//! Template parsing and localization intake
//!
//! Turns raw template source into component streams: literal runs are
//! interned, `$name$` placeholders resolve through the variable catalog,
//! `§` markers become color directives, and both the escaped `\n` form
//! and raw newlines become line breaks. Localization files arrive as
//! semicolon-separated rows of Windows-1250 bytes, one text column per
//! language.

use crate::context::TextContext;
use crate::sequence::{TextColor, TextComponent, TextSequence, TextSequenceId};
use crate::variables::{variable_type_from_name, VariableType};

/// Result type for localization intake.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur consuming localization data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Byte with no Windows-1250 assignment
    #[error("undefined Windows-1250 byte 0x{byte:02X} at offset {offset}")]
    Encoding {
        /// Offset of the offending byte in the input.
        offset: usize,
        /// The byte value.
        byte: u8,
    },
}

impl TextContext {
    /// Parse one template body into a new sequence.
    ///
    /// Unrecognized `$name$` placeholders parse to the sentinel variable
    /// code rather than failing; an unterminated `$` run is kept as
    /// literal text.
    pub fn make_text_sequence(&mut self, source: &str) -> TextSequenceId {
        let starting_component =
            u32::try_from(self.components.len()).expect("component stream exceeds u32 indices");
        parse_body(self, source);
        let component_count =
            u32::try_from(self.components.len()).expect("component stream exceeds u32 indices")
                - starting_component;
        self.sequences.insert(TextSequence {
            starting_component,
            component_count,
        })
    }

    /// Parse a template body and register it under a name. Re-registering
    /// a name points it at the new sequence; the store only grows.
    pub fn register_text_sequence(&mut self, name: &str, source: &str) -> TextSequenceId {
        let id = self.make_text_sequence(source);
        let name_key = self.arena.intern(name);
        if self.by_name.insert(name_key, id).is_some() {
            log::debug!("template {name:?} redefined");
        }
        id
    }

    /// Consume a localization file: Windows-1250 bytes, one row per
    /// template, fields separated by `;`. The first field is the template
    /// name, the remaining fields are one text column per language; rows
    /// missing the requested column fall back to column zero. Blank rows
    /// and rows starting with `#` are skipped, as are rows with no text
    /// columns at all. Returns the number of templates registered.
    pub fn consume_csv_file(&mut self, bytes: &[u8], language: u32) -> LoadResult<usize> {
        let content = decode_win1250(bytes)?;
        let mut rows = 0usize;

        for line in content.lines() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split(';');
            let name = fields.next().unwrap_or_default();
            let columns: Vec<&str> = fields.collect();
            if name.is_empty() || columns.is_empty() {
                log::warn!("skipping malformed localization row {line:?}");
                continue;
            }

            let body = columns.get(language as usize).copied().unwrap_or(columns[0]);
            self.register_text_sequence(name, body);
            rows += 1;
        }

        log::info!("Consumed {rows} localization rows for language {language}");
        Ok(rows)
    }
}

/// Tokenize a template body, appending components to the shared list.
fn parse_body(ctx: &mut TextContext, source: &str) {
    let mut literal = String::new();
    let mut rest = source;

    while let Some(ch) = rest.chars().next() {
        match ch {
            '$' => {
                if let Some(end) = rest[1..].find('$') {
                    let name = &rest[1..=end];
                    flush_literal(ctx, &mut literal);
                    let vtype = variable_type_from_name(name);
                    if vtype == VariableType::ErrorNoMatchingValue {
                        log::debug!("unrecognized template variable ${name}$");
                    }
                    ctx.components.push(TextComponent::Variable(vtype));
                    rest = &rest[end + 2..];
                } else {
                    // Unterminated marker: keep the rest as literal text.
                    literal.push_str(rest);
                    rest = "";
                }
            }
            '§' => {
                let mut marker = rest.chars();
                marker.next();
                if let Some(code) = marker.next() {
                    if let Some(color) = TextColor::from_marker(code) {
                        flush_literal(ctx, &mut literal);
                        ctx.components.push(TextComponent::Color(color));
                    } else {
                        log::debug!("unknown color code {code:?} in template");
                    }
                    rest = &rest[ch.len_utf8() + code.len_utf8()..];
                } else {
                    rest = "";
                }
            }
            '\\' if rest[1..].starts_with('n') => {
                flush_literal(ctx, &mut literal);
                ctx.components.push(TextComponent::LineBreak);
                rest = &rest[2..];
            }
            '\n' => {
                flush_literal(ctx, &mut literal);
                ctx.components.push(TextComponent::LineBreak);
                rest = &rest[1..];
            }
            '\r' => {
                rest = &rest[1..];
            }
            _ => {
                literal.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    flush_literal(ctx, &mut literal);
}

fn flush_literal(ctx: &mut TextContext, literal: &mut String) {
    if !literal.is_empty() {
        let key = ctx.arena.intern(literal);
        ctx.components.push(TextComponent::Text(key));
        literal.clear();
    }
}

/// Decode one Windows-1250 byte. `None` for the five unassigned bytes.
pub fn win1250_to_char(byte: u8) -> Option<char> {
    if byte < 0x80 {
        return Some(char::from(byte));
    }
    match WIN1250_HIGH[usize::from(byte - 0x80)] {
        '\0' => None,
        ch => Some(ch),
    }
}

fn decode_win1250(bytes: &[u8]) -> LoadResult<String> {
    let mut out = String::with_capacity(bytes.len());
    for (offset, &byte) in bytes.iter().enumerate() {
        match win1250_to_char(byte) {
            Some(ch) => out.push(ch),
            None => return Err(LoadError::Encoding { offset, byte }),
        }
    }
    Ok(out)
}

/// Windows-1250 code points 0x80..=0xFF; NUL marks unassigned bytes.
static WIN1250_HIGH: [char; 128] = [
    '€', '\0', '‚', '\0', '„', '…', '†', '‡',
    '\0', '‰', 'Š', '‹', 'Ś', 'Ť', 'Ž', 'Ź',
    '\0', '‘', '’', '“', '”', '•', '–', '—',
    '\0', '™', 'š', '›', 'ś', 'ť', 'ž', 'ź',
    '\u{A0}', 'ˇ', '˘', 'Ł', '¤', 'Ą', '¦', '§',
    '¨', '©', 'Ş', '«', '¬', '\u{AD}', '®', 'Ż',
    '°', '±', '˛', 'ł', '´', 'µ', '¶', '·',
    '¸', 'ą', 'ş', '»', 'Ľ', '˝', 'ľ', 'ż',
    'Ŕ', 'Á', 'Â', 'Ă', 'Ä', 'Ĺ', 'Ć', 'Ç',
    'Č', 'É', 'Ę', 'Ë', 'Ě', 'Í', 'Î', 'Ď',
    'Đ', 'Ń', 'Ň', 'Ó', 'Ô', 'Ő', 'Ö', '×',
    'Ř', 'Ů', 'Ú', 'Ű', 'Ü', 'Ý', 'Ţ', 'ß',
    'ŕ', 'á', 'â', 'ă', 'ä', 'ĺ', 'ć', 'ç',
    'č', 'é', 'ę', 'ë', 'ě', 'í', 'î', 'ď',
    'đ', 'ń', 'ň', 'ó', 'ô', 'ő', 'ö', '÷',
    'ř', 'ů', 'ú', 'ű', 'ü', 'ý', 'ţ', '˙',
];
