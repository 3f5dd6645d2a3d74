// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timer delays in whole milliseconds.
//!
//! Every continuation on the page (toast lifecycle, typewriter characters,
//! stagger steps, the deep-link correction) is a fixed-delay timer. [`Millis`]
//! is the unit those delays are expressed in, matching what `setTimeout`
//! accepts.

use core::fmt;
use core::ops::{Add, Mul};

/// A timer delay in whole milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Millis(pub u32);

impl Millis {
    /// No delay.
    pub const ZERO: Self = Self(0);

    /// Returns the raw millisecond count.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the delay as the `i32` timeout argument browsers take,
    /// clamped to `i32::MAX`.
    #[inline]
    #[must_use]
    pub const fn as_timeout(self) -> i32 {
        if self.0 > i32::MAX as u32 {
            i32::MAX
        } else {
            self.0 as i32
        }
    }

    /// Multiplies the delay by a step index, saturating at `u32::MAX`.
    ///
    /// Used for stagger offsets (`step × index`).
    #[inline]
    #[must_use]
    pub const fn saturating_mul(self, n: u32) -> Self {
        Self(self.0.saturating_mul(n))
    }

    /// Adds two delays, saturating at `u32::MAX`.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Add for Millis {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl Mul<u32> for Millis {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: u32) -> Self {
        self.saturating_mul(rhs)
    }
}

impl fmt::Debug for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Millis({})", self.0)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
