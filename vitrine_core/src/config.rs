// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-wide configuration.
//!
//! [`PageConfig`] bundles the per-behavior configs. Each behavior owns its
//! own config type next to its logic; this module only adds the pieces
//! several behaviors share (element selectors, the hero breakpoint, the toast
//! texts) and the [`standard`](PageConfig::standard) preset the showcase
//! page boots with.

use crate::contact::ContactConfig;
use crate::effects::EffectsConfig;
use crate::hero::{HeroOffsetConfig, ParallaxConfig};
use crate::nav::NavConfig;
use crate::notify::NotificationConfig;
use crate::reveal::RevealConfig;
use crate::scroll::ScrollConfig;
use crate::stagger::StaggerConfig;
use crate::typewriter::TypewriterConfig;

/// Toast texts shown by the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Messages {
    /// A required field is blank.
    pub missing_fields: &'static str,
    /// The email address is malformed.
    pub invalid_email: &'static str,
    /// The message was accepted.
    pub sent: &'static str,
}

impl Messages {
    /// The page's Serbian copy.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            missing_fields: "Molim vas popunite sva polja!",
            invalid_email: "Molim vas unesite validnu email adresu!",
            sent: "Hvala vam! Vaša poruka je uspešno poslata.",
        }
    }
}

/// Selectors of elements several behaviors read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landmarks {
    /// Fixed header, tried in order.
    pub header: [&'static str; 2],
    /// Hero section.
    pub hero: &'static str,
}

impl Landmarks {
    /// `.header` (or `.navbar`) and `.hero`.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            header: [".header", ".navbar"],
            hero: ".hero",
        }
    }
}

/// Configuration for every behavior on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    /// Shared selectors.
    pub landmarks: Landmarks,
    /// Viewport width (CSS pixels) at or below which the layout is narrow:
    /// parallax off, hero padding forced.
    pub breakpoint: f64,
    /// Scroll reveals.
    pub reveal: RevealConfig,
    /// Skills stagger.
    pub stagger: StaggerConfig,
    /// Hero parallax.
    pub parallax: ParallaxConfig,
    /// Header-overlap compensation.
    pub hero_offset: HeroOffsetConfig,
    /// Anchor scrolling.
    pub scroll: ScrollConfig,
    /// Navigation toggle.
    pub nav: NavConfig,
    /// Contact form.
    pub contact: ContactConfig,
    /// Toasts.
    pub notification: NotificationConfig,
    /// Hero typewriter.
    pub typewriter: TypewriterConfig,
    /// Header shade, hover lift, section fade-in.
    pub effects: EffectsConfig,
    /// Toast texts.
    pub messages: Messages,
}

impl PageConfig {
    /// The configuration the showcase page boots with.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            landmarks: Landmarks::standard(),
            breakpoint: 768.0,
            reveal: RevealConfig::standard(),
            stagger: StaggerConfig::standard(),
            parallax: ParallaxConfig::standard(),
            hero_offset: HeroOffsetConfig::standard(),
            scroll: ScrollConfig::standard(),
            nav: NavConfig::standard(),
            contact: ContactConfig::standard(),
            notification: NotificationConfig::standard(),
            typewriter: TypewriterConfig::hero(),
            effects: EffectsConfig::standard(),
            messages: Messages::standard(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::standard()
    }
}
