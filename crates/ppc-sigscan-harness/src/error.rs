//! Error type for ELF ingest, in the teacher's manual-`Display` style
//! (`frankenlibc-core::elf::ElfError`) rather than a derive macro, since
//! this crate has no other use for `thiserror`'s derive machinery beyond
//! what a hand-written impl already covers just as clearly.

/// Errors from reading an ELF32 big-endian section out of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    Io(String),
    BufferTooSmall { needed: usize, available: usize },
    InvalidMagic,
    UnsupportedClass(u8),
    UnsupportedEncoding(u8),
    SectionNotFound(String),
}

impl core::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::BufferTooSmall { needed, available } => {
                write!(f, "buffer too small: need {needed}, have {available}")
            }
            Self::InvalidMagic => write!(f, "invalid ELF magic"),
            Self::UnsupportedClass(c) => write!(f, "unsupported ELF class: {c}"),
            Self::UnsupportedEncoding(e) => write!(f, "unsupported data encoding: {e}"),
            Self::SectionNotFound(name) => write!(f, "section not found: {name}"),
        }
    }
}

impl std::error::Error for HarnessError {}

impl From<std::io::Error> for HarnessError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

pub type HarnessResult<T> = Result<T, HarnessError>;
