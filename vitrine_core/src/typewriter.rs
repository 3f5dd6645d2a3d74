// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typewriter effect for the hero title.
//!
//! The element's text is trimmed, cleared, and typed back one `char` at a
//! time. Only plain text is typed; markup inside the element is lost.

use alloc::string::String;
use alloc::vec::Vec;

use crate::time::Millis;

/// Configuration for the typewriter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Selector of the element to type into.
    pub target: &'static str,
    /// Delay before the first character.
    pub start_delay: Millis,
    /// Delay between characters.
    pub char_delay: Millis,
}

impl TypewriterConfig {
    /// Library defaults: 800ms lead-in, 50ms per character.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            target: ".hero-title",
            start_delay: Millis(800),
            char_delay: Millis(50),
        }
    }

    /// The slightly brisker timing the showcase page boots with.
    #[must_use]
    pub const fn hero() -> Self {
        Self {
            start_delay: Millis(700),
            char_delay: Millis(40),
            ..Self::standard()
        }
    }
}

/// Progress through the text being typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
    start_delay: Millis,
    char_delay: Millis,
}

impl Typewriter {
    /// Prepares to type the trimmed `text`.
    #[must_use]
    pub fn new(text: &str, config: &TypewriterConfig) -> Self {
        Self {
            chars: text.trim().chars().collect(),
            typed: 0,
            start_delay: config.start_delay,
            char_delay: config.char_delay,
        }
    }

    /// Delay before the next character is due.
    #[must_use]
    pub fn next_delay(&self) -> Millis {
        if self.typed == 0 {
            self.start_delay
        } else {
            self.char_delay
        }
    }

    /// Emits the next character, or `None` when done.
    pub fn advance(&mut self) -> Option<char> {
        let c = *self.chars.get(self.typed)?;
        self.typed += 1;
        Some(c)
    }

    /// Returns `true` once every character has been emitted.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }

    /// Text emitted so far.
    #[must_use]
    pub fn typed_text(&self) -> String {
        self.chars[..self.typed].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_trimmed_text_in_order() {
        let mut tw = Typewriter::new("  Hi!\n", &TypewriterConfig::standard());
        let mut out = String::new();
        while let Some(c) = tw.advance() {
            out.push(c);
        }
        assert_eq!(out, "Hi!");
        assert!(tw.is_done());
        assert_eq!(tw.typed_text(), "Hi!");
    }

    #[test]
    fn first_char_waits_for_start_delay() {
        let mut tw = Typewriter::new("ab", &TypewriterConfig::hero());
        let mut at = Millis::ZERO;
        let mut times = Vec::new();
        while !tw.is_done() {
            at = at + tw.next_delay();
            times.push((tw.advance(), at));
        }
        assert_eq!(
            times,
            [(Some('a'), Millis(700)), (Some('b'), Millis(740))]
        );
    }

    #[test]
    fn multibyte_text_types_per_char() {
        let mut tw = Typewriter::new("Vaša", &TypewriterConfig::standard());
        tw.advance();
        tw.advance();
        tw.advance();
        assert_eq!(tw.typed_text(), "Vaš");
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut tw = Typewriter::new("   ", &TypewriterConfig::standard());
        assert!(tw.is_done());
        assert_eq!(tw.advance(), None);
    }
}
