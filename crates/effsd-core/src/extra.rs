//! Extra-block codec (component C): serializes the eight group indices
//! into the 51-bit contiguous "extra block" and back.

use crate::bits::{get_bits, put_bits};
use crate::tables::{
    BEARD_GI_BITS, EYEBROW_GI_BITS, EYE_GI_BITS, FACELINE_GI_BITS, GLASS_COLOR_GI_BITS,
    GLASS_TYPE_GI_BITS, HAIR_GI_BITS, MOUTH_GI_BITS,
};

/// Number of useful bits in the extra block (§3, §4.C).
pub const EXTRA_BITS_TOTAL: usize = 51;
/// Byte size of the extra block; the high `EXTRA_BITS_TOTAL % 8` bits of the
/// last byte, plus all 15 bits above `EXTRA_BITS_TOTAL`, are reserved and
/// always zero.
pub const EXTRA_BYTES_TOTAL: usize = EXTRA_BITS_TOTAL.div_ceil(8);

/// The 7-byte piggyback payload reconstructed from the Ver3 record's
/// reserved/padding bit-fields.
pub type ExtraBlock = [u8; EXTRA_BYTES_TOTAL];

/// The eight group indices packed into (or unpacked from) an [`ExtraBlock`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupIndices {
    pub faceline: u8,
    pub hair: u8,
    pub eye: u8,
    pub eyebrow: u8,
    pub mouth: u8,
    pub beard: u8,
    pub glass_color: u8,
    pub glass_type: u8,
}

/// Encodes the eight group indices into the low 36 bits of a fresh,
/// zeroed [`ExtraBlock`] in the fixed schema order from §4.C. The high 15
/// bits stay zero, reserved for future use.
pub fn encode_group_indices(gi: &GroupIndices) -> ExtraBlock {
    let mut block: ExtraBlock = [0u8; EXTRA_BYTES_TOTAL];
    let mut bit = 0usize;

    put_bits(&mut block, bit, FACELINE_GI_BITS, gi.faceline as u64);
    bit += FACELINE_GI_BITS as usize;
    put_bits(&mut block, bit, HAIR_GI_BITS, gi.hair as u64);
    bit += HAIR_GI_BITS as usize;
    put_bits(&mut block, bit, EYE_GI_BITS, gi.eye as u64);
    bit += EYE_GI_BITS as usize;
    put_bits(&mut block, bit, EYEBROW_GI_BITS, gi.eyebrow as u64);
    bit += EYEBROW_GI_BITS as usize;
    put_bits(&mut block, bit, MOUTH_GI_BITS, gi.mouth as u64);
    bit += MOUTH_GI_BITS as usize;
    put_bits(&mut block, bit, BEARD_GI_BITS, gi.beard as u64);
    bit += BEARD_GI_BITS as usize;
    put_bits(&mut block, bit, GLASS_COLOR_GI_BITS, gi.glass_color as u64);
    bit += GLASS_COLOR_GI_BITS as usize;
    put_bits(&mut block, bit, GLASS_TYPE_GI_BITS, gi.glass_type as u64);
    bit += GLASS_TYPE_GI_BITS as usize;
    debug_assert_eq!(bit, 36);

    block
}

/// Inverse of [`encode_group_indices`].
pub fn decode_group_indices(block: &ExtraBlock) -> GroupIndices {
    let mut bit = 0usize;

    let faceline = get_bits(block, bit, FACELINE_GI_BITS) as u8;
    bit += FACELINE_GI_BITS as usize;
    let hair = get_bits(block, bit, HAIR_GI_BITS) as u8;
    bit += HAIR_GI_BITS as usize;
    let eye = get_bits(block, bit, EYE_GI_BITS) as u8;
    bit += EYE_GI_BITS as usize;
    let eyebrow = get_bits(block, bit, EYEBROW_GI_BITS) as u8;
    bit += EYEBROW_GI_BITS as usize;
    let mouth = get_bits(block, bit, MOUTH_GI_BITS) as u8;
    bit += MOUTH_GI_BITS as usize;
    let beard = get_bits(block, bit, BEARD_GI_BITS) as u8;
    bit += BEARD_GI_BITS as usize;
    let glass_color = get_bits(block, bit, GLASS_COLOR_GI_BITS) as u8;
    bit += GLASS_COLOR_GI_BITS as usize;
    let glass_type = get_bits(block, bit, GLASS_TYPE_GI_BITS) as u8;
    bit += GLASS_TYPE_GI_BITS as usize;
    debug_assert_eq!(bit, 36);

    GroupIndices {
        faceline,
        hair,
        eye,
        eyebrow,
        mouth,
        beard,
        glass_color,
        glass_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_arbitrary_group_indices() {
        let gi = GroupIndices {
            faceline: 3,
            hair: 29,
            eye: 17,
            eyebrow: 5,
            mouth: 40,
            beard: 1,
            glass_color: 22,
            glass_type: 6,
        };
        let block = encode_group_indices(&gi);
        assert_eq!(decode_group_indices(&block), gi);
    }

    #[test]
    fn high_bits_stay_reserved_and_zero() {
        let gi = GroupIndices {
            faceline: 3,
            hair: 31,
            eye: 31,
            eyebrow: 31,
            mouth: 63,
            beard: 31,
            glass_color: 31,
            glass_type: 7,
        };
        let block = encode_group_indices(&gi);
        // Bits 36..51 are reserved; bits 51..56 are outside the declared
        // payload and must also be untouched by a fresh encode.
        for bit in 36..(EXTRA_BYTES_TOTAL * 8) {
            assert_eq!(get_bits(&block, bit, 1), 0, "bit {bit} should be zero");
        }
    }
}
