//! Position-dependent character shift
//!
//! A reversible obfuscation over 7-bit text. Each character at position
//! `i` is rotated by `(i*i + 3) mod 128`. The section separator `-` is
//! never rotated so the document structure survives the transform, but it
//! still consumes a position.
//!
//! This is not encryption. It keeps casual readers out of a save file and
//! nothing more.

use crate::error::{SessionError, SessionResult};

/// Character reserved as the document section separator
pub const SEPARATOR: char = '-';

const ALPHABET: u32 = 128;
const SEP: u32 = SEPARATOR as u32;

/// Rotation applied at position `i`
///
/// Never 0 mod 128 (`i*i + 3` is never a multiple of 8).
fn rotation(i: usize) -> u32 {
    let i = (i % ALPHABET as usize) as u32;
    (i * i + 3) % ALPHABET
}

fn code_point(c: char, i: usize) -> SessionResult<u32> {
    let code = c as u32;
    if code >= ALPHABET {
        return Err(SessionError::Cipher(format!(
            "character {:?} at position {} is outside the 7-bit range",
            c, i
        )));
    }
    Ok(code)
}

fn to_char(code: u32) -> char {
    // code < 128 by construction
    char::from(code as u8)
}

/// Check that every character of `text` can be shifted
pub fn check_shiftable(text: &str) -> SessionResult<()> {
    for (i, c) in text.chars().enumerate() {
        code_point(c, i)?;
    }
    Ok(())
}

/// Obfuscate `text`
///
/// The one input that would land on the separator is sent to the code
/// point the separator itself would have produced, keeping the transform
/// a bijection at every position.
pub fn shift(text: &str) -> SessionResult<String> {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        if c == SEPARATOR {
            out.push(c);
            continue;
        }
        let code = code_point(c, i)?;
        let s = rotation(i);
        let mut shifted = (code + s) % ALPHABET;
        if shifted == SEP {
            shifted = (SEP + s) % ALPHABET;
        }
        out.push(to_char(shifted));
    }
    Ok(out)
}

/// Reverse [`shift`]
pub fn unshift(text: &str) -> SessionResult<String> {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        if c == SEPARATOR {
            out.push(c);
            continue;
        }
        let code = code_point(c, i)?;
        let s = rotation(i);
        let plain = if code == (SEP + s) % ALPHABET {
            (SEP + ALPHABET - s) % ALPHABET
        } else {
            (code + ALPHABET - s) % ALPHABET
        };
        out.push(to_char(plain));
    }
    Ok(out)
}
