// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hero title typing.

use vitrine_core::typewriter::Typewriter;
use web_sys::HtmlElement;

use crate::dom;
use crate::page::PageContext;
use crate::timer;

/// Clears the hero title and types it back one character at a time.
pub(crate) fn install(ctx: &PageContext) {
    let config = ctx.config.typewriter;
    let Some(title) = dom::query(&ctx.document, config.target) else {
        return;
    };
    let writer = Typewriter::new(&title.text_content().unwrap_or_default(), &config);
    title.set_text_content(Some(""));
    type_next(title, writer);
}

fn type_next(title: HtmlElement, mut writer: Typewriter) {
    if writer.is_done() {
        return;
    }
    timer::after(writer.next_delay(), move || {
        if let Some(c) = writer.advance() {
            let mut text = title.text_content().unwrap_or_default();
            text.push(c);
            title.set_text_content(Some(&text));
        }
        type_next(title, writer);
    });
}
