// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decision logic for the behaviors of a single showcase page.
//!
//! `vitrine_core` decides *what* to write to the page; backend crates decide
//! *how*. The crate itself is `#![no_std]` with `alloc`, though the `regex`
//! dependency links `std`, so targets must provide it. It touches no browser
//! API and is fully testable on the host.
//!
//! # Architecture
//!
//! Data flows one way, from DOM and viewport state through small owned state
//! objects to style mutations:
//!
//! ```text
//!   Browser event (scroll, resize, intersection, click, submit, timer)
//!       │
//!       ▼
//!   state object (RevealSet, StaggerGroup, HeroCoordinator, NavController,
//!                 ScrollPlanner, ContactValidator, Typewriter)
//!       │
//!       ▼
//!   StyleTarget / ClassTarget writes ──► Tracer events
//! ```
//!
//! **[`style`]**: The element capabilities behaviors write through:
//! [`StyleTarget`](style::StyleTarget), [`ClassTarget`](style::ClassTarget),
//! and the blanket [`Revealable`](style::Revealable) /
//! [`Toggleable`](style::Toggleable) patterns.
//!
//! **[`reveal`]**: One-shot, irreversible scroll reveals.
//!
//! **[`stagger`]**: Groups whose members reveal `index × delay` apart.
//!
//! **[`hero`]**: Parallax and header-overlap compensation, coordinated on
//! one viewport classification so they never both apply.
//!
//! **[`scroll`]**: Anchor and deep-link scroll targets below the fixed
//! header.
//!
//! **[`nav`]**: Menu/toggle `active` class in lockstep.
//!
//! **[`contact`]**: Contact form validation reported through a
//! [`Notifier`](notify::Notifier).
//!
//! **[`notify`]**: Toast styling and lifecycle.
//!
//! **[`typewriter`]**, **[`effects`]**: Hero typing, header shade, hover
//! lift, section fade-in.
//!
//! **[`config`]**: [`PageConfig`](config::PageConfig) and its presets.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! **[`ready`]**: Boot ordering against `document.readyState`.
//!
//! **[`time`]**: Timer delays.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod contact;
pub mod effects;
pub mod hero;
pub mod nav;
pub mod notify;
pub mod ready;
pub mod reveal;
pub mod scroll;
pub mod stagger;
pub mod style;
pub mod time;
pub mod trace;
pub mod typewriter;

#[cfg(test)]
mod testing;
