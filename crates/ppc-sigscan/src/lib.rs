//! PowerPC `.text` masked-word signature scanner with branch-target and
//! function-prologue hit resolution.
//!
//! Signatures are scanned as fixed sequences of masked 32-bit big-endian
//! words. A raw hit can be reported as-is, resolved through a `bl`
//! instruction's decoded branch target, or resolved by walking backward to
//! the enclosing function's recognized prologue shape.

#![forbid(unsafe_code)]

pub mod decode;
pub mod scanner;
pub mod signature;

pub use decode::{decode_bl_target, load_be_u32, walk_back_to_prologue};
pub use scanner::{EffectiveToPhysical, SIGSCAN_MAX_MATCHES, scan_module};
pub use signature::{Match, ResolveMode, Signature, SignatureWord};
