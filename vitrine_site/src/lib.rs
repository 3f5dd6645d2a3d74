// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry point of the showcase page.
//!
//! Build with `wasm-pack build vitrine_site --target web` and load the
//! generated module from the page. Enable the `trace` feature to log every
//! behavior to the browser console.

use vitrine_backend_web::PageContext;
use vitrine_core::config::PageConfig;
use vitrine_core::trace::Tracer;
use wasm_bindgen::prelude::*;

fn tracer() -> Tracer {
    #[cfg(feature = "trace")]
    {
        Tracer::new(Box::new(vitrine_backend_web::ConsoleSink))
    }
    #[cfg(not(feature = "trace"))]
    {
        Tracer::none()
    }
}

/// Boots every behavior with the standard configuration.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let ctx = PageContext::new(PageConfig::standard(), tracer())?;
    vitrine_backend_web::boot(ctx)
}
