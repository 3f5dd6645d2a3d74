// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element access.
//!
//! [`DomElement`] adapts a live `HtmlElement` to the core style and class
//! capabilities. The query helpers treat a missing element, a non-HTML
//! element, and an invalid selector alike: as absence.

use alloc::string::String;
use alloc::vec::Vec;

use vitrine_core::style::{ClassTarget, StyleTarget};
use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, HtmlElement, NodeList};

/// A live element behaviors write to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomElement {
    element: HtmlElement,
}

impl DomElement {
    /// Wraps `element`.
    #[must_use]
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// Returns the wrapped element.
    #[must_use]
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// Returns `true` if this wraps the same node as `other`.
    #[must_use]
    pub fn is(&self, other: &Element) -> bool {
        let own: &Element = &self.element;
        own == other
    }
}

impl StyleTarget for DomElement {
    fn set_style(&self, property: &str, value: &str) {
        let _ = self.element.style().set_property(property, value);
    }

    fn remove_style(&self, property: &str) {
        let _ = self.element.style().remove_property(property);
    }

    fn inline_style(&self, property: &str) -> Option<String> {
        self.element
            .style()
            .get_property_value(property)
            .ok()
            .filter(|v| !v.is_empty())
    }
}

impl ClassTarget for DomElement {
    fn add_class(&self, class: &str) {
        let _ = self.element.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.element.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }
}

/// First element matching `selector`.
pub(crate) fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into()
        .ok()
}

/// First element matching any of `selectors`, tried in order.
pub(crate) fn query_first(document: &Document, selectors: &[&str]) -> Option<HtmlElement> {
    selectors.iter().find_map(|s| query(document, s))
}

/// Every element matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    document
        .query_selector_all(selector)
        .map(|list| html_elements(&list))
        .unwrap_or_default()
}

/// Every descendant of `parent` matching `selector`, in document order.
pub(crate) fn query_all_within(parent: &Element, selector: &str) -> Vec<HtmlElement> {
    parent
        .query_selector_all(selector)
        .map(|list| html_elements(&list))
        .unwrap_or_default()
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// `offsetHeight` of the header, or `0.0` without one.
pub(crate) fn height_of(element: Option<&HtmlElement>) -> f64 {
    element.map_or(0.0, |el| f64::from(el.offset_height()))
}
