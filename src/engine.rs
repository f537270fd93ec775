//! Byte-at-a-time table-driven CRC32 folding.
//!
//! The accumulator flows linearly through the input; each byte's update
//! depends on the previous accumulator, so folding is a strictly sequential
//! reduction. No slicing-by-N or SIMD variants: results stay bit-exact with
//! the canonical byte-serial method for any polynomial/init/xorout triple.

use crate::params::Convention;
use crate::tables::CrcTable;

/// One update step under the reflected (LSB-first) convention.
#[inline]
#[must_use]
#[allow(clippy::indexing_slicing)] // index is 0..=255 by mask, table is [u32; 256]
pub const fn update_reflected(table: &CrcTable, crc: u32, byte: u8) -> u32 {
  let index = ((crc ^ byte as u32) & 0xFF) as usize;
  (crc >> 8) ^ table[index]
}

/// One update step under the normal (MSB-first) convention.
#[inline]
#[must_use]
#[allow(clippy::indexing_slicing)] // index is 0..=255 by mask, table is [u32; 256]
pub const fn update_normal(table: &CrcTable, crc: u32, byte: u8) -> u32 {
  let index = (((crc >> 24) ^ byte as u32) & 0xFF) as usize;
  (crc << 8) ^ table[index]
}

/// Fold `data` through `table` starting from `init`.
///
/// Applies the convention's update once per byte in input order; byte order
/// is significant. Empty input returns `init` unchanged. The convention
/// branch is hoisted outside the byte loop.
#[must_use]
pub fn fold(table: &CrcTable, convention: Convention, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  match convention {
    Convention::Reflected => {
      for &byte in data {
        crc = update_reflected(table, crc, byte);
      }
    }
    Convention::Normal => {
      for &byte in data {
        crc = update_normal(table, crc, byte);
      }
    }
  }
  crc
}
