//! Typed value slots with "already assigned" tracking.
//!
//! Each configuration field is a [`Value<T>`]. Sources only write a slot
//! that is not yet assigned, so the first source to assign a field wins.

use std::fmt;

use crate::constants::MAX_TEXT_LEN;

/// A typed cell that remembers whether any source has assigned it.
///
/// `value` is only meaningful once `is_assigned()` is true. Nothing resets
/// the flag during a resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Value<T> {
    assigned: bool,
    value: T,
}

impl<T> Value<T> {
    /// Stores `value` and marks the slot assigned, unconditionally.
    pub fn assign(&mut self, value: T) {
        self.value = value;
        self.assigned = true;
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned
    }

    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T: Copy> Value<T> {
    /// Copies the value out. Handy for the numeric and boolean slots.
    pub fn copied(&self) -> T {
        self.value
    }
}

/// How raw source text becomes a slot value.
///
/// Coercion never fails loudly. Returning `None` means "write nothing
/// meaningful", which leaves a fresh slot at its zero value.
pub trait SlotValue: Default + Sized {
    /// Whether a present-but-empty variable counts as absent for optional
    /// environment reads, so the default applies.
    const EMPTY_IS_ABSENT: bool = true;

    fn coerce(raw: &str) -> Option<Self>;
}

impl SlotValue for Text {
    const EMPTY_IS_ABSENT: bool = false;

    fn coerce(raw: &str) -> Option<Self> {
        Some(Text::new(raw))
    }
}

impl SlotValue for bool {
    fn coerce(raw: &str) -> Option<Self> {
        Some(parse_bool(raw))
    }
}

impl SlotValue for u64 {
    fn coerce(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl SlotValue for u32 {
    fn coerce(raw: &str) -> Option<Self> {
        // Parsed as 64-bit then narrowed; wider values wrap.
        raw.parse::<u64>().ok().map(|v| v as u32)
    }
}

/// `"on"` and `"true"` (any case) are true. Everything else is false.
pub fn parse_bool(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("on") || raw.eq_ignore_ascii_case("true")
}

/// Bounded text: at most `MAX_TEXT_LEN - 1` bytes.
///
/// Longer input is truncated on the last UTF-8 character boundary that
/// fits. Truncation is silent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text(String);

impl Text {
    pub fn new(raw: &str) -> Self {
        let max = MAX_TEXT_LEN - 1;
        if raw.len() <= max {
            return Self(raw.to_string());
        }
        let mut end = max;
        while !raw.is_char_boundary(end) {
            end -= 1;
        }
        Self(raw[..end].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
