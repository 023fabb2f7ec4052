#![no_main]

use libfuzzer_sys::fuzz_target;
use ppc_sigscan::{ResolveMode, Signature, SignatureWord, scan_module};

fuzz_target!(|data: &[u8]| {
    // The scanner must never panic or read out of bounds for any buffer
    // length or content, including lengths not a multiple of 4.
    let signatures = vec![
        Signature {
            name: "fuzz_direct",
            hook_info: None,
            words: vec![SignatureWord::masked(0x6000_0000, 0xFF00_0000)],
            resolve_mode: ResolveMode::Direct,
        },
        Signature {
            name: "fuzz_branch",
            hook_info: None,
            words: vec![
                SignatureWord::exact(0xAAAA_AAAA),
                SignatureWord::masked(0x4800_0001, 0xFC00_0001),
            ],
            resolve_mode: ResolveMode::BranchTarget { branch_word_index: 1 },
        },
        Signature {
            name: "fuzz_prologue",
            hook_info: None,
            words: vec![SignatureWord::exact(0xDEAD_BEEF)],
            resolve_mode: ResolveMode::FunctionStart,
        },
    ];

    let _ = scan_module(data, 0x8000_0000, &signatures, &(|addr: u64| addr));
});
