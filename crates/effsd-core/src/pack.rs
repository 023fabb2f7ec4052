//! Pack/Unpack API (component E): the lossless Ver4-extension ↔ Ver3-record
//! codec built from the tables, extra-block codec, and Ver3 field shuttle.

use crate::extra::{GroupIndices, decode_group_indices, encode_group_indices};
use crate::tables::{
    REV_EYE, REV_FACELINE, REV_GLASS_COLOR, REV_GLASS_TYPE, REV_HAIR, REV_MOUTH,
    TO_VER3_EYE_COLOR, TO_VER3_FACELINE_COLOR, TO_VER3_GLASS_COLOR, TO_VER3_GLASS_TYPE,
    TO_VER3_HAIR_COLOR,
};
use crate::ver3::{
    Ver3Record, Ver3VisibleFields, gather_extra, read_visible_fields, scatter_extra,
    write_visible_fields,
};

/// The eight color/type indices of a Ver4 Mii's extension fields. Valid
/// ranges mirror `NxExtensionFields` in the original: faceline 0-9,
/// hair/eye/eyebrow/mouth/beard/glass color 0-99, glass type 0-19.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ver4Extension {
    pub faceline_color: u8,
    pub hair_color: u8,
    pub eye_color: u8,
    pub eyebrow_color: u8,
    pub mouth_color: u8,
    pub beard_color: u8,
    pub glass_color: u8,
    pub glass_type: u8,
}

/// Writes a Ver4 extension into a Ver3 record: forward-maps each field to
/// its visible Ver3 bucket, computes the group index recording which Ver4
/// value within that bucket was the source, and scatters the encoded group
/// indices into the record's spare/padding fields so `unpack` can undo the
/// lossy forward map.
pub fn pack(ver4: &Ver4Extension, ver3: &mut Ver3Record) {
    let _span = tracing::debug_span!("pack", ?ver4).entered();

    let visible = Ver3VisibleFields {
        faceline_color: TO_VER3_FACELINE_COLOR[ver4.faceline_color as usize],
        hair_color: TO_VER3_HAIR_COLOR[ver4.hair_color as usize],
        eye_color: TO_VER3_EYE_COLOR[ver4.eye_color as usize],
        eyebrow_color: TO_VER3_HAIR_COLOR[ver4.eyebrow_color as usize],
        mouth_color: crate::tables::TO_VER3_MOUTH_COLOR[ver4.mouth_color as usize],
        beard_color: TO_VER3_HAIR_COLOR[ver4.beard_color as usize],
        glass_color: TO_VER3_GLASS_COLOR[ver4.glass_color as usize],
        glass_type: TO_VER3_GLASS_TYPE[ver4.glass_type as usize],
    };
    write_visible_fields(ver3, &visible);

    let gi = GroupIndices {
        faceline: REV_FACELINE.position_of(ver4.faceline_color),
        hair: REV_HAIR.position_of(ver4.hair_color),
        eye: REV_EYE.position_of(ver4.eye_color),
        eyebrow: REV_HAIR.position_of(ver4.eyebrow_color),
        mouth: REV_MOUTH.position_of(ver4.mouth_color),
        beard: REV_HAIR.position_of(ver4.beard_color),
        glass_color: REV_GLASS_COLOR.position_of(ver4.glass_color),
        glass_type: REV_GLASS_TYPE.position_of(ver4.glass_type),
    };
    let block = encode_group_indices(&gi);
    scatter_extra(ver3, &block);
    tracing::trace!(?gi, "wrote group indices into extra block");
}

/// Reconstructs a Ver4 extension from a Ver3 record, using the visible
/// bucket values together with the group indices piggybacked in the
/// record's spare/padding fields. Never fails: if the group index found in
/// a corrupt record is out of range for its bucket, it is clamped to the
/// bucket's last entry rather than rejected.
pub fn unpack(ver3: &Ver3Record) -> Ver4Extension {
    let _span = tracing::debug_span!("unpack").entered();

    let visible = read_visible_fields(ver3);
    let block = gather_extra(ver3);
    let gi = decode_group_indices(&block);
    tracing::trace!(?gi, "read group indices from extra block");

    let ver4 = Ver4Extension {
        faceline_color: REV_FACELINE.ver4_from_group(visible.faceline_color, gi.faceline),
        hair_color: REV_HAIR.ver4_from_group(visible.hair_color, gi.hair),
        eye_color: REV_EYE.ver4_from_group(visible.eye_color, gi.eye),
        eyebrow_color: REV_HAIR.ver4_from_group(visible.eyebrow_color, gi.eyebrow),
        mouth_color: REV_MOUTH.ver4_from_group(visible.mouth_color, gi.mouth),
        beard_color: REV_HAIR.ver4_from_group(visible.beard_color, gi.beard),
        glass_color: REV_GLASS_COLOR.ver4_from_group(visible.glass_color, gi.glass_color),
        glass_type: REV_GLASS_TYPE.ver4_from_group(visible.glass_type, gi.glass_type),
    };
    tracing::debug!(?ver4, "unpacked");
    ver4
}
