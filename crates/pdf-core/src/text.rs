//! Text encoding and text operator utilities

use crate::StandardFont;
use lopdf::{Object, StringFormat};

/// Context for rendering text
pub struct TextRenderContext {
    /// Font to select with `Tf`
    pub font: StandardFont,
    /// Font size in points
    pub font_size: f32,
}

/// Generate PDF operators for text insertion
///
/// Creates the PDF text operators (BT, Tf, Td, Tj, ET) to render a line of
/// text with its baseline starting at `(x, y)`.
///
/// # Arguments
/// * `text` - Text to show, encoded into a WinAnsi literal string
/// * `x` - X coordinate in points (PDF coordinates, from left)
/// * `y` - Y coordinate in points (PDF coordinates, from bottom)
/// * `ctx` - Text rendering context
pub fn generate_text_operators(text: &str, x: f64, y: f64, ctx: &TextRenderContext) -> Vec<u8> {
    let mut ops = Vec::new();

    ops.extend_from_slice(b"BT\n");
    ops.extend_from_slice(
        format!("/{} {} Tf\n", ctx.font.resource_name(), ctx.font_size).as_bytes(),
    );
    ops.extend_from_slice(format!("{x} {y} Td\n").as_bytes());
    ops.extend_from_slice(&encode_literal(text));
    ops.extend_from_slice(b" Tj\nET\n");

    ops
}

/// Encode text as a `(...)` literal in WinAnsi
///
/// Characters outside WinAnsi are replaced with `?`.
fn encode_literal(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 2);
    out.push(b'(');
    for ch in text.chars() {
        match to_win_ansi(ch) {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(to_win_ansi(ch));
            }
            b @ 0x20..=0x7e => out.push(b),
            b => out.extend_from_slice(format!("\\{b:03o}").as_bytes()),
        }
    }
    out.push(b')');
    out
}

fn to_win_ansi(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '€' => 0x80,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        _ => b'?',
    }
}

/// Encode a value as a PDF text string object
///
/// ASCII goes out as a literal string; anything else as UTF-16BE with a
/// byte-order mark, which is what form viewers expect for `/V`.
pub fn encode_text_string(value: &str) -> Object {
    if value.is_ascii() {
        return Object::String(value.as_bytes().to_vec(), StringFormat::Literal);
    }

    let mut bytes = vec![0xFE, 0xFF];
    for unit in value.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Render a string object back to the token it was written as
///
/// Hex strings become `<FEFF0066...>` (uppercase digits) and literal strings
/// become `(...)`. Non-string objects have no token.
pub fn string_token(obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, StringFormat::Hexadecimal) => {
            let mut token = String::with_capacity(bytes.len() * 2 + 2);
            token.push('<');
            for b in bytes {
                token.push_str(&format!("{b:02X}"));
            }
            token.push('>');
            Some(token)
        }
        Object::String(bytes, StringFormat::Literal) => {
            let mut token = String::with_capacity(bytes.len() + 2);
            token.push('(');
            for &b in bytes {
                match b {
                    b'(' | b')' | b'\\' => {
                        token.push('\\');
                        token.push(b as char);
                    }
                    0x20..=0x7e => token.push(b as char),
                    _ => token.push_str(&format!("\\{b:03o}")),
                }
            }
            token.push(')');
            Some(token)
        }
        _ => None,
    }
}
