//! Minimal ELF32 big-endian header and section-table parsing — just enough
//! to pull a named section's bytes and load address out of a PowerPC
//! object file. Generalizes `frankenlibc-core::elf::header::Elf64Header`'s
//! parsing style (validate magic/class/encoding, then read fixed-offset
//! fields) to the 32-bit big-endian case this harness needs.

use crate::error::{HarnessError, HarnessResult};

const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];
const EI_CLASS: usize = 4;
const EI_DATA: usize = 5;
const ELFCLASS32: u8 = 1;
const ELFDATA2MSB: u8 = 2;

const EHDR_SIZE: usize = 52;
const SHDR_SIZE: usize = 40;

struct Elf32Header {
    e_shoff: u32,
    e_shentsize: u16,
    e_shnum: u16,
    e_shstrndx: u16,
}

impl Elf32Header {
    fn parse(data: &[u8]) -> HarnessResult<Self> {
        if data.len() < EHDR_SIZE {
            return Err(HarnessError::BufferTooSmall {
                needed: EHDR_SIZE,
                available: data.len(),
            });
        }
        if data[0..4] != ELF_MAGIC {
            return Err(HarnessError::InvalidMagic);
        }
        if data[EI_CLASS] != ELFCLASS32 {
            return Err(HarnessError::UnsupportedClass(data[EI_CLASS]));
        }
        if data[EI_DATA] != ELFDATA2MSB {
            return Err(HarnessError::UnsupportedEncoding(data[EI_DATA]));
        }

        Ok(Self {
            e_shoff: be_u32(data, 32),
            e_shentsize: be_u16(data, 46),
            e_shnum: be_u16(data, 48),
            e_shstrndx: be_u16(data, 50),
        })
    }
}

struct Elf32SectionHeader {
    sh_name: u32,
    sh_addr: u32,
    sh_offset: u32,
    sh_size: u32,
}

impl Elf32SectionHeader {
    fn parse(data: &[u8]) -> HarnessResult<Self> {
        if data.len() < SHDR_SIZE {
            return Err(HarnessError::BufferTooSmall {
                needed: SHDR_SIZE,
                available: data.len(),
            });
        }
        Ok(Self {
            sh_name: be_u32(data, 0),
            sh_addr: be_u32(data, 12),
            sh_offset: be_u32(data, 16),
            sh_size: be_u32(data, 20),
        })
    }
}

fn be_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}

fn be_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn section_header_at(data: &[u8], header: &Elf32Header, index: u16) -> HarnessResult<Elf32SectionHeader> {
    let offset = header.e_shoff as usize + index as usize * header.e_shentsize as usize;
    let end = offset + SHDR_SIZE;
    let slice = data.get(offset..end).ok_or(HarnessError::BufferTooSmall {
        needed: end,
        available: data.len(),
    })?;
    Elf32SectionHeader::parse(slice)
}

fn section_name<'a>(data: &'a [u8], strtab: &Elf32SectionHeader, sh_name: u32) -> &'a str {
    let start = strtab.sh_offset as usize + sh_name as usize;
    let rest = &data[start..];
    let len = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
    std::str::from_utf8(&rest[..len]).unwrap_or("")
}

/// Finds `section_name` in the ELF32 big-endian file `data` and returns its
/// raw bytes together with its load (effective) address from `sh_addr`.
pub fn find_section(data: &[u8], section_name_wanted: &str) -> HarnessResult<(Vec<u8>, u64)> {
    let header = Elf32Header::parse(data)?;
    let strtab = section_header_at(data, &header, header.e_shstrndx)?;

    for index in 0..header.e_shnum {
        let sh = section_header_at(data, &header, index)?;
        let name = section_name(data, &strtab, sh.sh_name);
        if name == section_name_wanted {
            let start = sh.sh_offset as usize;
            let end = start + sh.sh_size as usize;
            let bytes = data
                .get(start..end)
                .ok_or(HarnessError::BufferTooSmall {
                    needed: end,
                    available: data.len(),
                })?
                .to_vec();
            return Ok((bytes, sh.sh_addr as u64));
        }
    }

    Err(HarnessError::SectionNotFound(section_name_wanted.to_string()))
}
