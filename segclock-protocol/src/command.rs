//! Command grammar for the serial protocol
//!
//! Keywords match case-insensitively at any abbreviation depth. The depth is
//! fixed by the body length, so `S 12.30.45`, `SE 12.30.45` and
//! `SET 12.30.45` are all the same command while `SE 12.30.4` is not.

/// `SET` keyword
const KEYWORD_SET: &[u8] = b"SET";

/// `GET` keyword
const KEYWORD_GET: &[u8] = b"GET";

/// `EDIT` keyword
const KEYWORD_EDIT: &[u8] = b"EDIT";

/// Length of the `SET` field block: `" hh.mm.ss"`
const SET_FIELDS_LEN: usize = 9;

/// A command parsed from a frame body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Set the clock; values are raw two-digit fields, not yet range-checked
    SetTime { hour: u8, minute: u8, second: u8 },
    /// Reply with the currently displayed digits
    GetTime,
    /// Enter interactive edit mode
    EnterEdit,
    /// No grammar matched
    Invalid,
}

impl Command {
    /// Parse a frame body (terminator already stripped)
    pub fn parse(body: &[u8]) -> Self {
        if let Some(depth) = keyword_depth(body, KEYWORD_SET, SET_FIELDS_LEN) {
            return parse_set_fields(&body[depth..]).unwrap_or(Command::Invalid);
        }
        if keyword_depth(body, KEYWORD_GET, 0).is_some() {
            return Command::GetTime;
        }
        if keyword_depth(body, KEYWORD_EDIT, 0).is_some() {
            return Command::EnterEdit;
        }
        Command::Invalid
    }
}

/// Abbreviation depth of `keyword` at the start of `body`
///
/// `fields_len` is the number of bytes that must follow the keyword.
fn keyword_depth(body: &[u8], keyword: &[u8], fields_len: usize) -> Option<usize> {
    let depth = body.len().checked_sub(fields_len)?;
    if depth == 0 || depth > keyword.len() {
        return None;
    }
    body[..depth]
        .eq_ignore_ascii_case(&keyword[..depth])
        .then_some(depth)
}

/// Parse `" hh.mm.ss"`
fn parse_set_fields(fields: &[u8]) -> Option<Command> {
    match *fields {
        [b' ', h1, h0, b'.', m1, m0, b'.', s1, s0] => Some(Command::SetTime {
            hour: two_digits(h1, h0)?,
            minute: two_digits(m1, m0)?,
            second: two_digits(s1, s0)?,
        }),
        _ => None,
    }
}

fn two_digits(tens: u8, ones: u8) -> Option<u8> {
    if tens.is_ascii_digit() && ones.is_ascii_digit() {
        Some((tens - b'0') * 10 + (ones - b'0'))
    } else {
        None
    }
}
