// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-page anchor scrolling with fixed-header compensation.
//!
//! Anchor clicks and deep links both land the target just below the fixed
//! header: `max(target_top - header_height - gap, 0)`.

use crate::time::Millis;

/// Configuration for anchor scrolling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Selector of the anchors that are intercepted.
    pub anchors: &'static str,
    /// Extra space left above the target, in pixels.
    pub gap: f64,
    /// Delay after `load` before correcting a deep-linked position, so the
    /// browser's own jump happens first.
    pub deep_link_delay: Millis,
}

impl ScrollConfig {
    /// 10px gap, 50ms deep-link correction.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            anchors: "a[href^=\"#\"]",
            gap: 10.0,
            deep_link_delay: Millis(50),
        }
    }
}

/// How the browser should move to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollMotion {
    /// Animated scroll (anchor clicks).
    Smooth,
    /// The browser default, which follows the stylesheet's `scroll-behavior`
    /// (deep-link correction).
    Auto,
}

impl ScrollMotion {
    /// The `ScrollToOptions.behavior` keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Auto => "auto",
        }
    }
}

/// A resolved scroll destination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    /// Document offset to scroll to, never negative.
    pub top: f64,
    /// Scroll motion.
    pub motion: ScrollMotion,
}

/// Returns the target selector of an in-page anchor `href`.
///
/// `None` for anything that should keep its native behavior: empty hrefs,
/// bare `#`, the `#!` placeholder, and hrefs that are not fragments.
#[must_use]
pub fn anchor_fragment(href: &str) -> Option<&str> {
    match href {
        "" | "#" | "#!" => None,
        h if h.starts_with('#') => Some(h),
        _ => None,
    }
}

/// Offset that places an element at `target_top` just below the header.
#[must_use]
pub fn scroll_top(target_top: f64, header_height: f64, gap: f64) -> f64 {
    (target_top - header_height - gap).max(0.0)
}

/// Plans anchor clicks and deep-link corrections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPlanner {
    gap: f64,
}

impl ScrollPlanner {
    /// Creates a planner.
    #[must_use]
    pub fn new(config: &ScrollConfig) -> Self {
        Self { gap: config.gap }
    }

    /// Plans a click on an anchor with `href`.
    ///
    /// `resolve` maps a fragment selector to the target's `offsetTop`, or
    /// `None` if no element matches. Returns `None` when the click should be
    /// left to the browser.
    pub fn plan_click(
        &self,
        href: &str,
        header_height: f64,
        resolve: impl FnOnce(&str) -> Option<f64>,
    ) -> Option<ScrollRequest> {
        let fragment = anchor_fragment(href)?;
        let target_top = resolve(fragment)?;
        Some(ScrollRequest {
            top: scroll_top(target_top, header_height, self.gap),
            motion: ScrollMotion::Smooth,
        })
    }

    /// Plans the correction for a page opened at `hash` (`location.hash`).
    pub fn plan_deep_link(
        &self,
        hash: &str,
        header_height: f64,
        resolve: impl FnOnce(&str) -> Option<f64>,
    ) -> Option<ScrollRequest> {
        if hash.is_empty() {
            return None;
        }
        let target_top = resolve(hash)?;
        Some(ScrollRequest {
            top: scroll_top(target_top, header_height, self.gap),
            motion: ScrollMotion::Auto,
        })
    }
}
