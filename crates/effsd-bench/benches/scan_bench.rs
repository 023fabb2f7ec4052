use criterion::{Criterion, criterion_group, criterion_main};
use ppc_sigscan::{ResolveMode, Signature, SignatureWord, scan_module};
use std::hint::black_box;

fn text_fixture() -> Vec<u8> {
    let mut text = vec![0u8; 64 * 1024];
    for chunk in text.chunks_mut(4) {
        chunk.copy_from_slice(&0x6000_0000u32.to_be_bytes());
    }
    let needle = 0x7FE0_0008u32.to_be_bytes();
    text[32_000..32_004].copy_from_slice(&needle);
    text
}

fn bench_scan_module(c: &mut Criterion) {
    let text = text_fixture();
    let sig = Signature {
        name: "needle",
        hook_info: None,
        words: vec![SignatureWord::exact(0x7FE0_0008)],
        resolve_mode: ResolveMode::Direct,
    };
    let signatures = vec![sig];

    c.bench_function("scan_module_64kb", |b| {
        b.iter(|| {
            let hits = scan_module(
                black_box(&text),
                black_box(0x8000_0000),
                black_box(&signatures),
                &(|addr: u64| addr),
            );
            black_box(hits);
        });
    });
}

criterion_group!(benches, bench_scan_module);
criterion_main!(benches);
