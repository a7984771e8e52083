use serde::{Serialize, Serializer};

/// Value held by a numeric form field.
///
/// `NotANumber` is what a failed parse produces. It is forwarded to the
/// backend untouched (as JSON `null`), never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberInput {
    Unset,
    Value(i64),
    NotANumber,
}

impl NumberInput {
    /// Parses the leading integer of `raw`.
    ///
    /// Leading whitespace and one sign are accepted, then the longest run of
    /// ASCII digits. Anything after the digits is ignored, so `"12abc"` is 12
    /// and `"3.7"` is 3. No digits at all gives `NotANumber`.
    ///
    /// A digit run too large for `i64` is also `NotANumber`, where
    /// JavaScript's `parseInt` would still return a lossy large number.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim_start();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return NumberInput::NotANumber;
        }

        let digits = &rest[..digits_len];
        let parsed = if negative {
            format!("-{digits}").parse::<i64>()
        } else {
            digits.parse::<i64>()
        };

        match parsed {
            Ok(n) => NumberInput::Value(n),
            Err(_) => NumberInput::NotANumber,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, NumberInput::Unset)
    }

    /// Text shown in the input box after the field is set programmatically.
    pub fn display_text(&self) -> String {
        match self {
            NumberInput::Value(n) => n.to_string(),
            NumberInput::Unset | NumberInput::NotANumber => String::new(),
        }
    }
}

impl Serialize for NumberInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NumberInput::Value(n) => serializer.serialize_i64(*n),
            NumberInput::Unset | NumberInput::NotANumber => serializer.serialize_none(),
        }
    }
}
