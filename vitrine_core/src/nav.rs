// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile navigation toggle.
//!
//! The menu and its toggle button carry the `active` class in lockstep.
//! Closing is idempotent and works with whichever of the two elements is
//! present, so the page-wide Escape handler can always call
//! [`NavController::close`].

use crate::style::Toggleable;

/// Selectors for the navigation elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavConfig {
    /// The toggle button.
    pub toggle: &'static str,
    /// The menu.
    pub menu: &'static str,
    /// Links inside the menu that close it on click.
    pub links: &'static str,
    /// Key that closes the menu anywhere on the page.
    pub close_key: &'static str,
}

impl NavConfig {
    /// `.nav-toggle` / `.nav-menu`, closed by links and Escape.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            toggle: ".nav-toggle",
            menu: ".nav-menu",
            links: ".nav-link, a",
            close_key: "Escape",
        }
    }
}

/// What the controller last did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// The toggle button flipped the menu.
    Toggle,
    /// A link click or the close key closed the menu.
    Close,
}

/// Owns the menu and toggle elements.
#[derive(Debug)]
pub struct NavController<M, T> {
    menu: Option<M>,
    toggle: Option<T>,
}

impl<M: Toggleable, T: Toggleable> NavController<M, T> {
    /// Creates a controller over the elements that exist.
    #[must_use]
    pub fn new(menu: Option<M>, toggle: Option<T>) -> Self {
        Self { menu, toggle }
    }

    /// Returns `true` when both elements exist, i.e. the toggle button can
    /// open the menu.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.menu.is_some() && self.toggle.is_some()
    }

    /// Returns `true` while the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.menu.as_ref().is_some_and(Toggleable::is_active)
    }

    /// Flips the menu, keeping both elements in lockstep.
    ///
    /// Does nothing unless both elements exist. Returns the new open state.
    pub fn toggle(&self) -> bool {
        if !self.is_interactive() {
            return false;
        }
        let open = !self.is_open();
        self.set_open(open);
        open
    }

    /// Closes the menu regardless of its state.
    pub fn close(&self) {
        self.set_open(false);
    }

    fn set_open(&self, open: bool) {
        if let Some(menu) = &self.menu {
            menu.set_active(open);
        }
        if let Some(toggle) = &self.toggle {
            toggle.set_active(open);
        }
    }
}
