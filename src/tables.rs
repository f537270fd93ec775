//! Const-fn CRC32 lookup table generation for both bit conventions.
//!
//! The table for byte value `i` is the CRC of that single byte folded through
//! the polynomial eight bit-steps, under the convention the polynomial's top
//! bit implies. The two named polynomials get `static` tables computed at
//! compile time; arbitrary polynomials are generated on demand through
//! [`crate::HackerSlot`].

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically
// guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::params::Convention;

/// A 256-entry CRC32 lookup table, indexed by byte value.
pub type CrcTable = [u32; 256];

/// CRC32/MPEG-2 and Ethernet FCS generator polynomial (normal form).
pub const MPEG2_POLY: u32 = 0x04C1_1DB7;

/// Legacy CRC32 generator polynomial (reflected form).
/// Used for file checksums: zip, WinRAR, gzip, PNG.
pub const CRC32_POLY: u32 = 0xEDB8_8320;

/// Generate a single table entry under the reflected (LSB-first) convention.
const fn reflected_table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut bit = 0;
  while bit < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    bit += 1;
  }
  crc
}

/// Generate a single table entry under the normal (MSB-first) convention.
const fn normal_table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = 0u32;
  let mut c = (index as u32) << 24;
  let mut bit = 0;
  while bit < 8 {
    if (crc ^ c) & 0x8000_0000 != 0 {
      crc = (crc << 1) ^ poly;
    } else {
      crc <<= 1;
    }
    c <<= 1;
    bit += 1;
  }
  crc
}

/// Generate the 256-entry lookup table for `poly`.
///
/// The polynomial's top bit selects the generation branch: reflected when
/// set, normal when clear. Pure function of the polynomial; every 32-bit
/// value is a valid input and there is no failure mode.
#[must_use]
pub const fn generate_crc32_table(poly: u32) -> CrcTable {
  let mut table = [0u32; 256];
  let mut i = 0usize;
  match Convention::classify(poly) {
    Convention::Reflected => {
      while i < 256 {
        table[i] = reflected_table_entry(poly, i as u8);
        i += 1;
      }
    }
    Convention::Normal => {
      while i < 256 {
        table[i] = normal_table_entry(poly, i as u8);
        i += 1;
      }
    }
  }
  table
}

/// Compile-time table for the MPEG2/FSC polynomial.
pub static MPEG2_TABLE: CrcTable = generate_crc32_table(MPEG2_POLY);

/// Compile-time table for the legacy CRC32 polynomial.
pub static CRC32_TABLE: CrcTable = generate_crc32_table(CRC32_POLY);
