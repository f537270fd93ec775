//! The callable CRC32 surface: named presets plus the generic entry point.
//!
//! Every operation funnels through one parameterized path so the fixed
//! variants cannot drift from the generic semantics. The free functions use
//! the process-wide slot when `std` is available; [`Hacker32`] owns an
//! independent slot for callers who want isolated caches.

use crate::cache::HackerSlot;
use crate::engine::fold;
use crate::params::Crc32Params;
use crate::tables::{CrcTable, CRC32_POLY, CRC32_TABLE, MPEG2_POLY, MPEG2_TABLE};

/// Default initial accumulator for all named variants.
pub const DEFAULT_INIT: u32 = 0xFFFF_FFFF;

/// The single parameterized checksum path.
#[inline]
fn checksum_with(table: &CrcTable, params: Crc32Params, data: &[u8]) -> u32 {
  fold(table, params.convention(), params.init, data) ^ params.xorout
}

// ─────────────────────────────────────────────────────────────────────────────
// Named variants
// ─────────────────────────────────────────────────────────────────────────────

/// CRC32/MPEG-2 checksum.
///
/// Poly=0x04C11DB7, Init=0xFFFFFFFF, Xorout=0x00000000, Refin=false,
/// Refout=false. Check value: `mpeg2(b"123456789") == 0x0376E6E7`.
#[inline]
#[must_use]
pub fn mpeg2(data: &[u8]) -> u32 {
  mpeg2_with_initial(data, DEFAULT_INIT)
}

/// CRC32/MPEG-2 resumed from a caller-supplied accumulator.
#[must_use]
pub fn mpeg2_with_initial(data: &[u8], init: u32) -> u32 {
  checksum_with(&MPEG2_TABLE, Crc32Params { init, ..Crc32Params::MPEG2 }, data)
}

/// Ethernet frame check sequence.
///
/// Identical algorithm to [`mpeg2`]; the distinct name exists for domain
/// clarity.
#[inline]
#[must_use]
pub fn fsc(data: &[u8]) -> u32 {
  mpeg2(data)
}

/// Ethernet FCS resumed from a caller-supplied accumulator.
#[inline]
#[must_use]
pub fn fsc_with_initial(data: &[u8], init: u32) -> u32 {
  mpeg2_with_initial(data, init)
}

/// Legacy CRC32 checksum (zip, WinRAR, file checksums).
///
/// Poly=0xEDB88320, Init=0xFFFFFFFF, Xorout=0xFFFFFFFF, Refin=true,
/// Refout=true. Check value: `crc32(b"123456789") == 0xCBF43926`.
#[inline]
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
  crc32_with_initial(data, DEFAULT_INIT)
}

/// Legacy CRC32 resumed from a caller-supplied raw accumulator.
///
/// `init` is the pre-xorout register state; to resume from a previous
/// [`crc32`] result, pass `previous ^ 0xFFFF_FFFF`.
#[must_use]
pub fn crc32_with_initial(data: &[u8], init: u32) -> u32 {
  checksum_with(&CRC32_TABLE, Crc32Params { init, ..Crc32Params::FILE }, data)
}

// ─────────────────────────────────────────────────────────────────────────────
// Generic entry points
// ─────────────────────────────────────────────────────────────────────────────

/// Generic CRC32 with caller-controlled polynomial, init, and xorout.
///
/// The bit convention is derived from the polynomial's top bit. Defaults via
/// [`Crc32Params::default`]: Poly=0xEDB88320, Init=0xFFFFFFFF,
/// Xorout=0x00000000.
///
/// # Example
///
/// ```
/// use scrc32::{crc32, hacker32, Crc32Params};
///
/// let params = Crc32Params { xorout: 0xFFFF_FFFF, ..Crc32Params::default() };
/// assert_eq!(hacker32(b"123456789", params), crc32(b"123456789"));
/// ```
#[must_use]
pub fn hacker32(data: &[u8], params: Crc32Params) -> u32 {
  #[cfg(feature = "std")]
  {
    crate::cache::shared::with_slot(|slot| checksum_with(slot.get_or_build(params.poly), params, data))
  }
  #[cfg(not(feature = "std"))]
  {
    let table = crate::tables::generate_crc32_table(params.poly);
    checksum_with(&table, params, data)
  }
}

/// The 256-entry lookup table for `poly`, for inspection.
///
/// The named polynomials return their compile-time tables; any other value
/// goes through the same generic slot [`hacker32`] uses.
#[must_use]
pub fn table32(poly: u32) -> CrcTable {
  match poly {
    MPEG2_POLY => MPEG2_TABLE,
    CRC32_POLY => CRC32_TABLE,
    _ => hacker_table(poly),
  }
}

#[cfg(feature = "std")]
fn hacker_table(poly: u32) -> CrcTable {
  crate::cache::shared::with_slot(|slot| *slot.get_or_build(poly))
}

#[cfg(not(feature = "std"))]
fn hacker_table(poly: u32) -> CrcTable {
  crate::tables::generate_crc32_table(poly)
}

// ─────────────────────────────────────────────────────────────────────────────
// Façade with an owned cache
// ─────────────────────────────────────────────────────────────────────────────

/// Generic CRC32 engine owning its own table slot.
///
/// The free functions share one process-wide slot; this type gives each
/// instance an independent cache, so tests and multiple configurations never
/// interfere through shared state.
#[derive(Clone, Debug, Default)]
pub struct Hacker32 {
  slot: HackerSlot,
}

impl Hacker32 {
  /// Create an engine with an empty slot.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      slot: HackerSlot::new(),
    }
  }

  /// Checksum `data` under `params`, reusing the slot when the polynomial
  /// matches the previous call.
  #[must_use]
  pub fn checksum(&mut self, data: &[u8], params: Crc32Params) -> u32 {
    checksum_with(self.slot.get_or_build(params.poly), params, data)
  }

  /// Lookup table for `poly`.
  ///
  /// Named polynomials return the compile-time tables without touching the
  /// slot.
  #[must_use]
  pub fn table(&mut self, poly: u32) -> &CrcTable {
    match poly {
      MPEG2_POLY => &MPEG2_TABLE,
      CRC32_POLY => &CRC32_TABLE,
      _ => self.slot.get_or_build(poly),
    }
  }
}
