//! Ingests a tiny synthetic ELF32 big-endian fixture's `.text` section and
//! confirms a signature scan against it finds exactly one hit, end to end.

use ppc_sigscan::{ResolveMode, Signature, SignatureWord};
use ppc_sigscan_harness::scan_loaded_section;

const EHDR_SIZE: usize = 52;
const SHDR_SIZE: usize = 40;
const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];

fn build_minimal_elf(text: &[u8], sh_addr: u32) -> Vec<u8> {
    let mut buf = vec![0u8; EHDR_SIZE];
    buf[0..4].copy_from_slice(&ELF_MAGIC);
    buf[4] = 1; // ELFCLASS32
    buf[5] = 2; // ELFDATA2MSB

    let text_offset = buf.len();
    buf.extend_from_slice(text);

    let strtab_offset = buf.len();
    let mut strtab = vec![0u8];
    let name_off = strtab.len() as u32;
    strtab.extend_from_slice(b".text\0");
    buf.extend_from_slice(&strtab);

    let shoff = buf.len() as u32;
    buf.extend_from_slice(&[0u8; SHDR_SIZE]);
    let mut shdr1 = vec![0u8; SHDR_SIZE];
    shdr1[0..4].copy_from_slice(&name_off.to_be_bytes());
    shdr1[12..16].copy_from_slice(&sh_addr.to_be_bytes());
    shdr1[16..20].copy_from_slice(&(text_offset as u32).to_be_bytes());
    shdr1[20..24].copy_from_slice(&(text.len() as u32).to_be_bytes());
    buf.extend_from_slice(&shdr1);
    let mut shdr2 = vec![0u8; SHDR_SIZE];
    shdr2[16..20].copy_from_slice(&(strtab_offset as u32).to_be_bytes());
    shdr2[20..24].copy_from_slice(&(strtab.len() as u32).to_be_bytes());
    buf.extend_from_slice(&shdr2);

    buf[32..36].copy_from_slice(&shoff.to_be_bytes());
    buf[46..48].copy_from_slice(&(SHDR_SIZE as u16).to_be_bytes());
    buf[48..50].copy_from_slice(&3u16.to_be_bytes());
    buf[50..52].copy_from_slice(&2u16.to_be_bytes());

    buf
}

#[test]
fn finds_unique_signature_hit_in_ingested_section() {
    let mut text = vec![0u8; 32];
    text[8..12].copy_from_slice(&0x7FE0_0008u32.to_be_bytes()); // arbitrary marker word
    let elf = build_minimal_elf(&text, 0x8000_1000);

    let tmp = std::env::temp_dir().join("ppc_sigscan_harness_test.elf");
    std::fs::write(&tmp, &elf).unwrap();

    let (bytes, addr) = ppc_sigscan_harness::load_section(&tmp, ".text").unwrap();
    assert_eq!(addr, 0x8000_1000);

    let sig = Signature {
        name: "marker",
        hook_info: None,
        words: vec![SignatureWord::exact(0x7FE0_0008)],
        resolve_mode: ResolveMode::Direct,
    };
    let hits = scan_loaded_section(&bytes, addr, &[sig]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].effective_address, addr + 8);

    let _ = std::fs::remove_file(&tmp);
}
