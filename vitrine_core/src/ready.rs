// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Start-up ordering against `document.readyState`.
//!
//! Behaviors start once the document is parsed; the deep-link correction
//! runs once it has fully loaded. [`ReadyState::boot_steps`] lists what a
//! backend does at boot for each state. Every listener is registered before
//! the behaviors start, so a failing start never drops the load hook.

/// `document.readyState` at boot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadyState {
    /// Still parsing.
    Loading,
    /// Parsed; subresources still loading.
    Interactive,
    /// Fully loaded.
    Complete,
}

impl ReadyState {
    /// Parses a `readyState` value.
    ///
    /// Anything other than `"loading"` or `"complete"` counts as
    /// [`Interactive`](Self::Interactive): the document is usable and the
    /// `load` event is still ahead.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "loading" => Self::Loading,
            "complete" => Self::Complete,
            _ => Self::Interactive,
        }
    }

    /// What to do at boot, in order.
    #[must_use]
    pub const fn boot_steps(self) -> &'static [BootStep] {
        match self {
            Self::Loading => &[BootStep::AwaitLoad, BootStep::AwaitParsed],
            Self::Interactive => &[BootStep::AwaitLoad, BootStep::Start],
            Self::Complete => &[BootStep::Start, BootStep::Load],
        }
    }
}

/// One boot action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BootStep {
    /// Run the load-time work from a `load` listener.
    AwaitLoad,
    /// Start the behaviors from a `DOMContentLoaded` listener.
    AwaitParsed,
    /// Start the behaviors now.
    Start,
    /// Run the load-time work now.
    Load,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ReadyState; 3] = [
        ReadyState::Loading,
        ReadyState::Interactive,
        ReadyState::Complete,
    ];

    #[test]
    fn parses_ready_states() {
        assert_eq!(ReadyState::parse("loading"), ReadyState::Loading);
        assert_eq!(ReadyState::parse("interactive"), ReadyState::Interactive);
        assert_eq!(ReadyState::parse("complete"), ReadyState::Complete);
        assert_eq!(ReadyState::parse(""), ReadyState::Interactive);
    }

    #[test]
    fn start_and_load_each_happen_once() {
        for state in ALL {
            let steps = state.boot_steps();
            let starts = steps
                .iter()
                .filter(|s| matches!(s, BootStep::Start | BootStep::AwaitParsed))
                .count();
            let loads = steps
                .iter()
                .filter(|s| matches!(s, BootStep::Load | BootStep::AwaitLoad))
                .count();
            assert_eq!((starts, loads), (1, 1), "{state:?}");
        }
    }

    #[test]
    fn load_listener_precedes_immediate_start() {
        let steps = ReadyState::Interactive.boot_steps();
        let listen = steps.iter().position(|s| *s == BootStep::AwaitLoad);
        let start = steps.iter().position(|s| *s == BootStep::Start);
        assert!(listen < start, "start-up errors must not skip the load hook");

        // Already loaded: nothing to listen for, load work follows start.
        assert_eq!(
            ReadyState::Complete.boot_steps(),
            [BootStep::Start, BootStep::Load]
        );
    }
}
