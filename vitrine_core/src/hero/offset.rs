// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header-overlap compensation for the hero.

use crate::hero::ViewportClass;

/// Configuration for header-overlap compensation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroOffsetConfig {
    /// Space kept between the bottom of the fixed header and the hero
    /// content, in pixels.
    pub gap: f64,
}

impl HeroOffsetConfig {
    /// 20px below the header.
    #[must_use]
    pub const fn standard() -> Self {
        Self { gap: 20.0 }
    }
}

/// What to do with the hero's inline `padding-top`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaddingAction {
    /// Write this many pixels.
    Force(f64),
    /// Remove the inline value and let the stylesheet decide.
    Clear,
    /// Leave it alone.
    Keep,
}

/// Computes the padding the hero needs to clear the fixed header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroOffset {
    gap: f64,
}

impl HeroOffset {
    /// Creates the calculator.
    #[must_use]
    pub fn new(config: &HeroOffsetConfig) -> Self {
        Self { gap: config.gap }
    }

    /// Padding needed below a header of `header_height` pixels.
    #[must_use]
    pub fn required(&self, header_height: f64) -> f64 {
        header_height + self.gap
    }

    /// Decides the padding change for one recompute.
    ///
    /// Narrow layouts only ever grow the padding; a larger author-specified
    /// value is kept. Wide layouts drop any inline value.
    #[must_use]
    pub fn plan(
        &self,
        class: ViewportClass,
        header_height: f64,
        computed_padding: f64,
        has_inline_padding: bool,
    ) -> PaddingAction {
        match class {
            ViewportClass::Narrow => {
                let required = self.required(header_height);
                if computed_padding < required {
                    PaddingAction::Force(required)
                } else {
                    PaddingAction::Keep
                }
            }
            ViewportClass::Wide if has_inline_padding => PaddingAction::Clear,
            ViewportClass::Wide => PaddingAction::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset() -> HeroOffset {
        HeroOffset::new(&HeroOffsetConfig::standard())
    }

    #[test]
    fn narrow_forces_header_plus_gap() {
        assert_eq!(
            offset().plan(ViewportClass::Narrow, 70.0, 0.0, false),
            PaddingAction::Force(90.0)
        );
    }

    #[test]
    fn narrow_never_shrinks_larger_padding() {
        assert_eq!(
            offset().plan(ViewportClass::Narrow, 70.0, 120.0, false),
            PaddingAction::Keep
        );
        assert_eq!(
            offset().plan(ViewportClass::Narrow, 70.0, 90.0, true),
            PaddingAction::Keep
        );
    }

    #[test]
    fn missing_header_still_keeps_gap() {
        assert_eq!(
            offset().plan(ViewportClass::Narrow, 0.0, 0.0, false),
            PaddingAction::Force(20.0)
        );
    }

    #[test]
    fn wide_clears_only_inline_padding() {
        assert_eq!(
            offset().plan(ViewportClass::Wide, 70.0, 90.0, true),
            PaddingAction::Clear
        );
        assert_eq!(
            offset().plan(ViewportClass::Wide, 70.0, 32.0, false),
            PaddingAction::Keep
        );
    }
}
