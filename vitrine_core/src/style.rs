// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element capabilities shared by every behavior.
//!
//! Behaviors never talk to the DOM directly. They mutate elements through
//! two small traits that the web backend implements for live elements and
//! tests implement with in-memory doubles:
//!
//! - [`StyleTarget`]: inline style declarations.
//! - [`ClassTarget`]: the element's class list.
//!
//! On top of those, [`Revealable`] and [`Toggleable`] are blanket-implemented
//! capabilities that express the two recurring patterns on the page: moving
//! an element between a hidden and a shown [`VisualState`], and flipping the
//! `active` class.

use alloc::string::String;

/// The class toggled on the nav menu and its toggle button.
pub const ACTIVE_CLASS: &str = "active";

/// Read/write access to an element's inline style.
///
/// Property names are CSS names (`padding-top`, not `paddingTop`).
pub trait StyleTarget {
    /// Sets an inline style property.
    fn set_style(&self, property: &str, value: &str);

    /// Removes an inline style property, restoring stylesheet-driven styling.
    fn remove_style(&self, property: &str);

    /// Returns the inline value of `property`, or `None` when it is unset or
    /// empty.
    fn inline_style(&self, property: &str) -> Option<String>;
}

/// Access to an element's class list.
pub trait ClassTarget {
    /// Adds `class` if it is not already present.
    fn add_class(&self, class: &str);

    /// Removes `class` if present.
    fn remove_class(&self, class: &str);

    /// Returns `true` if `class` is present.
    fn has_class(&self, class: &str) -> bool;
}

/// Opacity and transform of an element at rest in one visual state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisualState {
    /// CSS `opacity` value.
    pub opacity: &'static str,
    /// CSS `transform` value.
    pub transform: &'static str,
}

/// A hidden/shown pair of [`VisualState`]s plus the transition between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealStyle {
    /// State applied before the element is revealed.
    pub hidden: VisualState,
    /// State applied when the element is revealed.
    pub shown: VisualState,
    /// CSS `transition` value applied together with the hidden state.
    pub transition: &'static str,
}

/// Moves an element between the states of a [`RevealStyle`].
///
/// Implemented for every [`StyleTarget`].
pub trait Revealable: StyleTarget {
    /// Applies the hidden state and the transition.
    fn conceal(&self, style: &RevealStyle) {
        apply_state(self, &style.hidden);
        self.set_style("transition", style.transition);
    }

    /// Applies the shown state. The transition set by
    /// [`conceal`](Self::conceal) animates the change.
    fn reveal(&self, style: &RevealStyle) {
        apply_state(self, &style.shown);
    }
}

impl<T: StyleTarget + ?Sized> Revealable for T {}

fn apply_state<T: StyleTarget + ?Sized>(target: &T, state: &VisualState) {
    target.set_style("opacity", state.opacity);
    target.set_style("transform", state.transform);
}

/// Flips the [`ACTIVE_CLASS`] on an element.
///
/// Implemented for every [`ClassTarget`].
pub trait Toggleable: ClassTarget {
    /// Sets or clears the active flag.
    fn set_active(&self, active: bool) {
        if active {
            self.add_class(ACTIVE_CLASS);
        } else {
            self.remove_class(ACTIVE_CLASS);
        }
    }

    /// Returns `true` if the element carries the active flag.
    fn is_active(&self) -> bool {
        self.has_class(ACTIVE_CLASS)
    }
}

impl<T: ClassTarget + ?Sized> Toggleable for T {}

/// Parses the leading number of a CSS length such as `"80px"` or `"1.5em"`.
///
/// Mirrors the lenient browser number parse applied to computed styles: the
/// longest numeric prefix wins, leading whitespace is skipped, and anything
/// unparsable yields `0.0`.
#[must_use]
pub fn parse_css_px(value: &str) -> f64 {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return 0.0;
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}

/// Formats a pixel length the way inline styles are written (`"80px"`).
#[must_use]
pub fn px(value: f64) -> String {
    // Normalize negative zero so `-0 * rate` never prints as "-0px".
    let v = if value == 0.0 { 0.0 } else { value };
    alloc::format!("{v}px")
}
