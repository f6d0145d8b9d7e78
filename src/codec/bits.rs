use bitflags::bitflags;

use super::{CodecError, CodecResult};
use crate::router::PathOptions;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OptionBits: u8 {
        const APPLY = 0b100;
        const STRICT = 0b010;
        const SENSITIVE = 0b001;
    }
}

impl OptionBits {
    pub fn from_options(apply_options: bool, options: &PathOptions) -> Self {
        let mut bits = Self::empty();
        bits.set(Self::APPLY, apply_options);
        bits.set(Self::STRICT, options.strict);
        bits.set(Self::SENSITIVE, options.sensitive);
        bits
    }

    /// `(apply_options, options)`, with the default delimiter.
    pub fn to_options(self) -> (bool, PathOptions) {
        let options = PathOptions {
            strict: self.contains(Self::STRICT),
            sensitive: self.contains(Self::SENSITIVE),
            ..PathOptions::default()
        };
        (self.contains(Self::APPLY), options)
    }

    pub fn to_digit(self) -> char {
        // bits() is at most 7
        char::from_digit(u32::from(self.bits()), 16).unwrap_or('0')
    }

    pub fn from_digit(digit: &str) -> CodecResult<Self> {
        let invalid = || CodecError::InvalidOptionDigit {
            digit: digit.to_string(),
        };
        let mut chars = digit.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(invalid());
        };
        ch.to_digit(16)
            .and_then(|value| u8::try_from(value).ok())
            .and_then(Self::from_bits)
            .ok_or_else(invalid)
    }
}
