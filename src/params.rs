//! CRC32 parameter records and the bit-convention policy.
//!
//! Parameter naming follows the conventions from the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/): a variant is
//! pinned by its polynomial, initial register value, and final XOR mask.
//! Refin/refout are not free parameters here; they are implied by the
//! polynomial's form (see [`Convention`]).

use crate::tables::{CRC32_POLY, MPEG2_POLY};

/// Bit-processing convention for a CRC32 polynomial.
///
/// If the polynomial's most significant bit is set, the polynomial is in
/// reflected (LSB-first) form; otherwise it is in normal (MSB-first) form.
/// The convention selects both the table-generation branch and the per-byte
/// update rule. It is derived once at the boundary and never contradicted
/// downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Convention {
  /// MSB-first processing; the polynomial's implicit x^32 term sits above
  /// bit 31.
  Normal,
  /// LSB-first processing; the polynomial is bit-reversed.
  Reflected,
}

impl Convention {
  /// Classify a polynomial by its top bit.
  #[inline]
  #[must_use]
  pub const fn classify(poly: u32) -> Self {
    if poly & 0x8000_0000 != 0 {
      Self::Reflected
    } else {
      Self::Normal
    }
  }
}

/// Parameters for a CRC32 computation.
///
/// The generic entry point ([`crate::hacker32`]) accepts any value of this
/// record; the named variants are fixed preset constants so they cannot drift
/// from the generic path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc32Params {
  /// Generator polynomial. Its top bit determines the convention.
  pub poly: u32,
  /// Initial accumulator value.
  pub init: u32,
  /// XOR mask applied to the folded accumulator.
  pub xorout: u32,
}

impl Crc32Params {
  /// CRC32/MPEG-2, also the Ethernet frame check sequence form.
  ///
  /// Poly=0x04C11DB7, Init=0xFFFFFFFF, Xorout=0x00000000, Refin=false,
  /// Refout=false.
  pub const MPEG2: Self = Self {
    poly: MPEG2_POLY,
    init: 0xFFFF_FFFF,
    xorout: 0x0000_0000,
  };

  /// Legacy CRC32 used for file checksums (zip, WinRAR, gzip).
  ///
  /// Poly=0xEDB88320 (reflected), Init=0xFFFFFFFF, Xorout=0xFFFFFFFF,
  /// Refin=true, Refout=true.
  pub const FILE: Self = Self {
    poly: CRC32_POLY,
    init: 0xFFFF_FFFF,
    xorout: 0xFFFF_FFFF,
  };

  /// Convention implied by this record's polynomial.
  #[inline]
  #[must_use]
  pub const fn convention(&self) -> Convention {
    Convention::classify(self.poly)
  }
}

impl Default for Crc32Params {
  /// The generic entry point's documented defaults:
  /// Poly=0xEDB88320, Init=0xFFFFFFFF, Xorout=0x00000000.
  fn default() -> Self {
    Self {
      poly: CRC32_POLY,
      init: 0xFFFF_FFFF,
      xorout: 0x0000_0000,
    }
  }
}
