//! End-to-end properties spanning tables, the extra-block codec, the Ver3
//! field shuttle, and the Pack/Unpack API together.

use effsd_core::{VER3_RECORD_BYTES, Ver3Record, Ver4Extension, pack, unpack};

fn all_zero_ver4() -> Ver4Extension {
    Ver4Extension::default()
}

#[test]
fn round_trip_holds_for_every_starting_record_content() {
    // The extra-block payload must round-trip regardless of what garbage
    // was already sitting in the record's non-spare bits before packing.
    for seed in [0x00u8, 0xFF, 0xAA, 0x55] {
        let mut ver3 = Ver3Record::new([seed; VER3_RECORD_BYTES]);
        let ver4 = Ver4Extension {
            faceline_color: 7,
            hair_color: 88,
            eye_color: 33,
            eyebrow_color: 12,
            mouth_color: 50,
            beard_color: 3,
            glass_color: 77,
            glass_type: 9,
        };
        pack(&ver4, &mut ver3);
        assert_eq!(unpack(&ver3), ver4);
    }
}

#[test]
fn packing_all_zero_ver4_onto_all_zero_record_round_trips() {
    let mut ver3 = Ver3Record::new([0u8; VER3_RECORD_BYTES]);
    let ver4 = all_zero_ver4();
    pack(&ver4, &mut ver3);
    assert_eq!(unpack(&ver3), ver4);
}

#[test]
fn corrupt_group_indices_clamp_instead_of_panicking() {
    // A valid pack followed by maximally corrupted spare/padding bits (all
    // ones, i.e. every group index saturated) must still unpack to
    // in-range Ver4 values rather than panicking.
    let ver4 = Ver4Extension {
        faceline_color: 3,
        hair_color: 40,
        eye_color: 20,
        eyebrow_color: 40,
        mouth_color: 30,
        beard_color: 40,
        glass_color: 10,
        glass_type: 6,
    };
    let mut ver3 = Ver3Record::new([0u8; VER3_RECORD_BYTES]);
    pack(&ver4, &mut ver3);

    let extra = effsd_core::encode_group_indices(&effsd_core::GroupIndices {
        faceline: 0xFF,
        hair: 0xFF,
        eye: 0xFF,
        eyebrow: 0xFF,
        mouth: 0xFF,
        beard: 0xFF,
        glass_color: 0xFF,
        glass_type: 0xFF,
    });
    effsd_core::ver3::scatter_extra(&mut ver3, &extra);

    let recovered = unpack(&ver3);
    assert!(recovered.faceline_color < 10);
    assert!(recovered.hair_color < 100);
    assert!(recovered.eye_color < 100);
    assert!(recovered.eyebrow_color < 100);
    assert!(recovered.mouth_color < 100);
    assert!(recovered.beard_color < 100);
    assert!(recovered.glass_color < 100);
    assert!(recovered.glass_type < 20);
}

#[test]
fn repacking_a_value_twice_is_idempotent() {
    let ver4 = Ver4Extension {
        faceline_color: 2,
        hair_color: 15,
        eye_color: 90,
        eyebrow_color: 4,
        mouth_color: 61,
        beard_color: 70,
        glass_color: 8,
        glass_type: 11,
    };
    let mut ver3 = Ver3Record::new([0x3Cu8; VER3_RECORD_BYTES]);
    pack(&ver4, &mut ver3);
    let once = ver3;
    pack(&ver4, &mut ver3);
    assert_eq!(ver3, once);
}
