// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-point status bitmask and its bit primitives.

bitflags::bitflags! {
    /// UI status flags carried by every point.
    ///
    /// Several flags may be set at once; the renderer resolves conflicts by
    /// precedence, not the storage. Bits outside the named constants are retained,
    /// so callers may define their own flags with [`StatusFlags::from_bits_retain`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StatusFlags: u32 {
        /// The point under the cursor or most recently clicked.
        const ACTIVE       = 0b0000_0001;
        /// The point is highlighted as a neighbour of the active point.
        const NEIGHBOUR    = 0b0000_0010;
        /// The point is excluded by the current filter.
        const FILTERED_OUT = 0b0000_0100;
    }
}

impl StatusFlags {
    /// Returns `true` if every bit of `flag` is set in `self`.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: Self) -> bool {
        test(self, flag)
    }

    /// Returns `self` with every bit of `flag` set.
    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        set(self, flag)
    }

    /// Returns `self` with every bit of `flag` cleared.
    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        clear(self, flag)
    }

    /// Iterates the individual set bits of `self`, including unnamed ones.
    pub(crate) fn single_bits(self) -> impl Iterator<Item = Self> {
        let mut rest = self.bits();
        core::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let low = rest & rest.wrapping_neg();
            rest &= !low;
            Some(Self::from_bits_retain(low))
        })
    }
}

/// Returns `true` iff all bits of `flag` are set in `value`.
///
/// An empty `flag` is trivially contained.
#[inline]
#[must_use]
pub const fn test(value: StatusFlags, flag: StatusFlags) -> bool {
    value.bits() & flag.bits() == flag.bits()
}

/// Bitwise OR of `value` and `flag`.
#[inline]
#[must_use]
pub const fn set(value: StatusFlags, flag: StatusFlags) -> StatusFlags {
    StatusFlags::from_bits_retain(value.bits() | flag.bits())
}

/// Bitwise AND of `value` with the complement of `flag`.
#[inline]
#[must_use]
pub const fn clear(value: StatusFlags, flag: StatusFlags) -> StatusFlags {
    StatusFlags::from_bits_retain(value.bits() & !flag.bits())
}
