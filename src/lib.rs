//! CRC32 checksums under named parameterizations plus an arbitrary-polynomial
//! "hacker" mode.
//!
//! # Supported Variants
//!
//! | Entry point | Polynomial | Init | Xorout | Convention |
//! |-------------|------------|------|--------|------------|
//! | [`mpeg2`] / [`fsc`] | 0x04C11DB7 | 0xFFFFFFFF | 0x00000000 | normal (MSB-first) |
//! | [`crc32`] | 0xEDB88320 | 0xFFFFFFFF | 0xFFFFFFFF | reflected (LSB-first) |
//! | [`hacker32`] | caller-supplied | caller-supplied | caller-supplied | derived |
//!
//! # Convention Policy
//!
//! A polynomial's most significant bit selects the bit-processing convention:
//! bit 31 set means the polynomial is in reflected (LSB-first) form, bit 31
//! clear means normal (MSB-first) form. The rule is structural, not a caller
//! choice; it is encoded once as [`Convention::classify`] and drives both
//! table generation and the per-byte update step.
//!
//! # Example
//!
//! ```rust
//! use scrc32::{crc32, hacker32, mpeg2, Crc32Params};
//!
//! assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
//! assert_eq!(mpeg2(b"123456789"), 0x0376_E6E7);
//!
//! // The generic entry point reproduces any preset.
//! let params = Crc32Params { xorout: 0xFFFF_FFFF, ..Crc32Params::default() };
//! assert_eq!(hacker32(b"123456789", params), crc32(b"123456789"));
//! ```
//!
//! # no_std Support
//!
//! The crate is `no_std` compatible. The default `std` feature only gates the
//! process-wide table slot shared by the free-function entry points; without
//! it, [`hacker32`] and [`table32`] rebuild their table per call, which is
//! always correct (the slot is purely an optimization).

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod cache;
mod engine;
mod params;
pub mod reference;
mod tables;
mod variants;

pub use cache::HackerSlot;
pub use engine::{fold, update_normal, update_reflected};
pub use params::{Convention, Crc32Params};
pub use tables::{generate_crc32_table, CrcTable, CRC32_POLY, CRC32_TABLE, MPEG2_POLY, MPEG2_TABLE};
pub use variants::{
  crc32, crc32_with_initial, fsc, fsc_with_initial, hacker32, mpeg2, mpeg2_with_initial, table32,
  Hacker32, DEFAULT_INIT,
};
