use scrc32::reference::{crc32_bitwise_normal, crc32_bitwise_reflected};
use scrc32::{
  crc32, crc32_with_initial, fsc, hacker32, mpeg2, mpeg2_with_initial, table32, Crc32Params,
  Hacker32, CRC32_POLY, MPEG2_POLY,
};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

const LENGTHS: [usize; 17] = [0, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 64, 255, 256, 1024, 2048];
const SEEDS: [u64; 4] = [1, 2, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

#[test]
fn crc32_invariants() {
  for &len in &LENGTHS {
    for &seed in &SEEDS {
      let data = gen_bytes(len, seed ^ len as u64);

      let oneshot = crc32(&data);
      let reference = crc32_bitwise_reflected(CRC32_POLY, !0u32, &data) ^ !0u32;
      assert_eq!(oneshot, reference, "crc32 reference mismatch at len={len}");

      for &split in &[0usize, 1, len / 2, len.saturating_sub(1), len] {
        if split > len {
          continue;
        }
        let (a, b) = data.split_at(split);

        // Resume from the raw register state of the first half.
        let partial = crc32(a);
        let resumed = crc32_with_initial(b, partial ^ 0xFFFF_FFFF);
        assert_eq!(resumed, oneshot, "crc32 resume mismatch at len={len} split={split}");
      }
    }
  }
}

#[test]
fn mpeg2_invariants() {
  for &len in &LENGTHS {
    for &seed in &SEEDS {
      let data = gen_bytes(len, seed ^ len as u64);

      let oneshot = mpeg2(&data);
      let reference = crc32_bitwise_normal(MPEG2_POLY, !0u32, &data);
      assert_eq!(oneshot, reference, "mpeg2 reference mismatch at len={len}");
      assert_eq!(fsc(&data), oneshot, "fsc diverged from mpeg2 at len={len}");

      for &split in &[0usize, 1, len / 2, len.saturating_sub(1), len] {
        if split > len {
          continue;
        }
        let (a, b) = data.split_at(split);

        // MPEG2 has no xorout, so its result resumes directly.
        let resumed = mpeg2_with_initial(b, mpeg2(a));
        assert_eq!(resumed, oneshot, "mpeg2 resume mismatch at len={len} split={split}");
      }
    }
  }
}

#[test]
fn hacker32_matches_named_variants() {
  let file_params = Crc32Params {
    xorout: 0xFFFF_FFFF,
    ..Crc32Params::default()
  };

  for &len in &LENGTHS {
    let data = gen_bytes(len, 0x5d58_39a7 ^ len as u64);
    assert_eq!(hacker32(&data, file_params), crc32(&data), "len={len}");
    assert_eq!(hacker32(&data, Crc32Params::MPEG2), mpeg2(&data), "len={len}");
  }
}

#[test]
fn hacker32_matches_crc32_on_large_buffers() {
  // The convention-selection equivalence must hold well past table-cache
  // and chunking boundaries.
  let file_params = Crc32Params {
    xorout: 0xFFFF_FFFF,
    ..Crc32Params::default()
  };

  for &len in &[1usize << 20, (1 << 21) + 3] {
    let data = gen_bytes(len, 0x9e37_79b9_7f4a_7c15 ^ len as u64);
    assert_eq!(hacker32(&data, file_params), crc32(&data), "len={len}");
  }
}

#[test]
fn known_answers() {
  assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
  assert_eq!(mpeg2(b"123456789"), 0x0376_E6E7);
  assert_eq!(fsc(b"123456789"), 0x0376_E6E7);

  assert_eq!(crc32(b""), 0x0000_0000);
  assert_eq!(mpeg2(b""), 0xFFFF_FFFF);
}

#[test]
fn table32_entry_zero_and_stability() {
  assert_eq!(table32(MPEG2_POLY)[0], 0x0000_0000);
  assert_eq!(table32(CRC32_POLY)[0], 0x0000_0000);

  // Repeated calls return identical tables.
  assert_eq!(table32(MPEG2_POLY), table32(MPEG2_POLY));
  assert_eq!(table32(CRC32_POLY), table32(CRC32_POLY));
}

#[test]
fn table32_generic_slot_invalidation() {
  let poly_a = 0x0000_AF00;
  let poly_b = 0x8141_41AB;

  let first_a = table32(poly_a);
  let b = table32(poly_b);
  let second_a = table32(poly_a);

  // Requesting A, then B, then A again must return A's table both times
  // with no stale leakage from B.
  assert_eq!(first_a, second_a);
  assert_ne!(first_a, b);
}

#[test]
fn order_sensitivity() {
  let data = b"order matters";
  let mut reversed = data.to_vec();
  reversed.reverse();

  assert_ne!(crc32(data), crc32(&reversed));
  assert_ne!(mpeg2(data), mpeg2(&reversed));
}

#[test]
fn independent_facades_do_not_interfere() {
  let mut a = Hacker32::new();
  let mut b = Hacker32::new();

  let data = gen_bytes(512, 7);
  let expect_file = crc32(&data);
  let expect_mpeg2 = mpeg2(&data);

  // Interleave different polynomials across two engines; each owns its own
  // slot, so thrashing one cannot corrupt the other.
  for _ in 0..4 {
    assert_eq!(a.checksum(&data, Crc32Params::FILE), expect_file);
    assert_eq!(b.checksum(&data, Crc32Params::MPEG2), expect_mpeg2);
  }
}
