#![no_main]

use effsd_core::{Ver3Record, Ver4Extension, VER3_RECORD_BYTES, pack, unpack};
use libfuzzer_sys::arbitrary::{self, Arbitrary};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    raw: [u8; VER3_RECORD_BYTES],
    faceline_color: u8,
    hair_color: u8,
    eye_color: u8,
    eyebrow_color: u8,
    mouth_color: u8,
    beard_color: u8,
    glass_color: u8,
    glass_type: u8,
}

fuzz_target!(|input: Input| {
    // Every pack/unpack round-trip must be exact regardless of starting
    // record contents, and unpacking an arbitrary (possibly corrupt)
    // record must never panic.
    let ver4 = Ver4Extension {
        faceline_color: input.faceline_color % 10,
        hair_color: input.hair_color % 100,
        eye_color: input.eye_color % 100,
        eyebrow_color: input.eyebrow_color % 100,
        mouth_color: input.mouth_color % 100,
        beard_color: input.beard_color % 100,
        glass_color: input.glass_color % 100,
        glass_type: input.glass_type % 20,
    };

    let mut ver3 = Ver3Record::new(input.raw);
    pack(&ver4, &mut ver3);
    let recovered = unpack(&ver3);
    assert_eq!(recovered, ver4);

    // Unpacking the untouched, possibly-garbage input must not panic.
    let _ = unpack(&Ver3Record::new(input.raw));
});
