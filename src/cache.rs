//! The generic-polynomial table slot.
//!
//! The two named variants use compile-time tables ([`crate::tables`]); only
//! the arbitrary-polynomial path has mutable state. [`HackerSlot`] holds at
//! most one table, keyed by the polynomial that built it, and rebuilds on
//! mismatch. Correctness never depends on the slot; it amortizes the
//! 256-entry build across repeated calls with the same polynomial.

use crate::tables::{generate_crc32_table, CrcTable};

/// Single-entry table cache for arbitrary polynomials.
///
/// `poly` records which polynomial the stored table belongs to. `None` is
/// the uninitialized marker, so polynomial `0` is an ordinary cacheable
/// value like any other.
#[derive(Clone, Debug)]
pub struct HackerSlot {
  poly: Option<u32>,
  table: CrcTable,
}

impl HackerSlot {
  /// Create an empty slot.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      poly: None,
      table: [0; 256],
    }
  }

  /// Polynomial the slot currently holds a table for, if any.
  #[must_use]
  pub const fn cached_poly(&self) -> Option<u32> {
    self.poly
  }

  /// Return the table for `poly`, rebuilding the slot on mismatch.
  ///
  /// A matching request returns the stored table untouched; any other
  /// request (including the first) discards the old table and builds the
  /// new one before updating the key.
  pub fn get_or_build(&mut self, poly: u32) -> &CrcTable {
    if self.poly != Some(poly) {
      self.table = generate_crc32_table(poly);
      self.poly = Some(poly);
    }
    &self.table
  }
}

impl Default for HackerSlot {
  fn default() -> Self {
    Self::new()
  }
}

/// Process-wide slot shared by the free-function entry points.
#[cfg(feature = "std")]
pub(crate) mod shared {
  use std::sync::{Mutex, PoisonError};

  use super::HackerSlot;

  static SHARED_SLOT: Mutex<HackerSlot> = Mutex::new(HackerSlot::new());

  /// Run `f` with the shared slot locked.
  ///
  /// The table builder is panic-free, so a poisoned lock cannot hide a torn
  /// slot; recover the guard instead of propagating the poison.
  pub(crate) fn with_slot<R>(f: impl FnOnce(&mut HackerSlot) -> R) -> R {
    let mut guard = SHARED_SLOT.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
  }
}
