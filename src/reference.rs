//! Bitwise reference implementations for both conventions.
//!
//! These process one bit at a time with no lookup tables, directly mirroring
//! the polynomial-division definition of CRC. They are the oracle the
//! table-driven engine is verified against, and `const fn` so check values
//! are asserted at compile time.
//!
//! Intentionally slow (~8 operations per bit); use the table-driven entry
//! points for real workloads.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically
// guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::tables::{CRC32_POLY, MPEG2_POLY};

/// Bitwise CRC32 under the reflected (LSB-first) convention.
///
/// Returns the raw register state; the caller applies any final XOR.
#[must_use]
pub const fn crc32_bitwise_reflected(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bitwise CRC32 under the normal (MSB-first) convention.
///
/// Returns the raw register state; the caller applies any final XOR.
#[must_use]
pub const fn crc32_bitwise_normal(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i = 0;
  while i < data.len() {
    crc ^= (data[i] as u32) << 24;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 0x8000_0000 != 0 {
        (crc << 1) ^ poly
      } else {
        crc << 1
      };
      bit += 1;
    }
    i += 1;
  }
  crc
}

// Compile-time check values. If these fail, the build fails.

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

// Legacy CRC32: init=0xFFFFFFFF, xorout=0xFFFFFFFF, check 0xCBF43926.
const _: () = {
  let raw = crc32_bitwise_reflected(CRC32_POLY, !0u32, CHECK_INPUT);
  let check = raw ^ !0u32;
  assert!(check == 0xCBF4_3926);
};

// CRC32/MPEG-2: init=0xFFFFFFFF, xorout=0x00000000, check 0x0376E6E7.
const _: () = {
  let check = crc32_bitwise_normal(MPEG2_POLY, !0u32, CHECK_INPUT);
  assert!(check == 0x0376_E6E7);
};
