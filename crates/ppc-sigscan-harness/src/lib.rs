//! Thin ELF32 big-endian `.text`-section ingest for feeding real PowerPC
//! object files to `ppc_sigscan::scan_module` in tests and the CLI below.

pub mod elf32;
pub mod error;

use std::fs;
use std::path::Path;

pub use error::{HarnessError, HarnessResult};

/// Reads `path` and returns the bytes and effective address of its
/// `section_name` section (e.g. `.text`).
pub fn load_section(path: &Path, section_name: &str) -> HarnessResult<(Vec<u8>, u64)> {
    let data = fs::read(path)?;
    elf32::find_section(&data, section_name)
}

/// Runs `signatures` over a loaded section, treating effective and physical
/// addresses as identical — appropriate for a flat ELF fixture that was
/// never actually loaded into a running console's address space.
pub fn scan_loaded_section(
    text: &[u8],
    text_base: u64,
    signatures: &[ppc_sigscan::Signature],
) -> Vec<ppc_sigscan::Match> {
    ppc_sigscan::scan_module(text, text_base, signatures, &(|addr: u64| addr))
}
