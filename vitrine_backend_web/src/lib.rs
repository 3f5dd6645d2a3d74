// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for vitrine.
//!
//! This crate wires the decisions of `vitrine_core` to browser APIs:
//!
//! - [`PageContext`]: window, document, configuration and tracer
//! - [`boot`] / [`start`] / [`on_load`]: page bootstrap
//! - [`DomElement`]: live elements as core style and class targets
//! - [`DomNotifier`]: toast elements
//! - [`ConsoleSink`]: trace events on the browser console
//!
//! Every listener, observer and timer lives as long as the page. Behaviors
//! whose elements are missing install nothing.

#![no_std]

extern crate alloc;

mod console;
mod contact;
mod dom;
mod effects;
mod hero;
mod listener;
mod nav;
mod notify;
mod page;
mod reveal;
mod scroll;
mod skills;
mod timer;
mod typewriter;

pub use console::ConsoleSink;
pub use dom::DomElement;
pub use notify::DomNotifier;
pub use page::{PageContext, SharedTracer, boot, on_load, start};
