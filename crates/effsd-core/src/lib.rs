//! Lossless Ver3/Ver4 Mii color-index packing codec.
//!
//! A Ver3 Mii data core stores each color/type field as a small index into
//! a short, fixed enumeration. Ver4 widened most of those fields into
//! larger enumerations, so converting Ver4 data down to Ver3 is a
//! many-to-few forward map and throws away information. This crate makes
//! that conversion lossless by piggybacking the extra "which exact Ver4
//! value within its Ver3 bucket" information into spare and padding bits
//! of the Ver3 record that have no effect on how Ver3 software renders it.
//!
//! The codec is allocation-free, synchronous and reentrant: every function
//! here operates on caller-owned buffers and holds no state across calls.

#![forbid(unsafe_code)]

pub mod bits;
pub mod extra;
pub mod pack;
pub mod tables;
pub mod ver3;

pub use extra::{ExtraBlock, GroupIndices, decode_group_indices, encode_group_indices};
pub use pack::{Ver4Extension, pack, unpack};
pub use ver3::{Ver3Record, Ver3VisibleFields, VER3_RECORD_BYTES};
