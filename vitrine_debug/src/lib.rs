// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capture, pretty-printing, and JSON export for vitrine diagnostics.
//!
//! This crate provides [`TraceSink`](vitrine_core::trace::TraceSink)
//! implementations for development and host-side checks of page behaviors:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`capture::CaptureSink`]: keeps every event in memory, readable while
//!   a [`Tracer`](vitrine_core::trace::Tracer) owns the sink.
//! - [`json::export`]: writes captured events as a JSON array.

pub mod capture;
pub mod json;
pub mod pretty;
