// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory doubles for the element and notifier capabilities.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::notify::{Notifier, Severity};
use crate::style::{ClassTarget, StyleTarget};

/// Records inline styles and classes, counting every style write.
#[derive(Debug, Default)]
pub(crate) struct FakeElement {
    styles: RefCell<BTreeMap<String, String>>,
    classes: RefCell<BTreeSet<String>>,
    writes: Cell<usize>,
}

impl FakeElement {
    pub(crate) fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl StyleTarget for FakeElement {
    fn set_style(&self, property: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }

    fn remove_style(&self, property: &str) {
        self.writes.set(self.writes.get() + 1);
        self.styles.borrow_mut().remove(property);
    }

    fn inline_style(&self, property: &str) -> Option<String> {
        self.style(property).filter(|v| !v.is_empty())
    }
}

impl ClassTarget for FakeElement {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

/// Collects every notification shown.
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) shown: RefCell<Vec<(String, Severity)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.shown.borrow_mut().push((message.to_string(), severity));
    }
}
