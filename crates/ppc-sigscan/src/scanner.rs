//! Masked-word signature scanning over a PowerPC `.text` section
//! (components F/G).

use crate::decode::{decode_bl_target, load_be_u32, walk_back_to_prologue};
use crate::signature::{Match, ResolveMode, Signature};

/// Caps the number of matches returned by a single [`scan_module`] call,
/// mirroring the original scanner's fixed output buffer.
pub const SIGSCAN_MAX_MATCHES: usize = 32;

/// Converts an effective address to a physical one. Scanners running
/// against a live image supply the platform's translation; scanners
/// running against a flat file fixture can pass the identity function.
/// Returning `0` marks a match as unresolvable; `scan_module` then skips it.
pub trait EffectiveToPhysical {
    fn translate(&self, effective_address: u64) -> u64;
}

impl<F: Fn(u64) -> u64> EffectiveToPhysical for F {
    fn translate(&self, effective_address: u64) -> u64 {
        self(effective_address)
    }
}

/// Scans `text` (bytes of a `.text` section based at effective address
/// `text_base`) for every signature in `signatures`, in a single 4-byte
/// stride sweep. For each candidate position, the last pattern word is
/// checked first as a cheap anchor before the full masked compare runs.
/// Matches are resolved per `signature.resolve_mode` and translated to a
/// physical address via `eff_to_phys`; matches that translate to physical
/// address `0` are dropped. Stops early once [`SIGSCAN_MAX_MATCHES`]
/// matches have been found.
pub fn scan_module(
    text: &[u8],
    text_base: u64,
    signatures: &[Signature],
    eff_to_phys: &impl EffectiveToPhysical,
) -> Vec<Match> {
    let span = tracing::debug_span!("scan_module", text_len = text.len(), signatures = signatures.len());
    let _enter = span.enter();

    let mut matches = Vec::new();
    if text.len() < 4 || signatures.is_empty() {
        return matches;
    }

    let text_end = text_base + text.len() as u64;
    let mut window = Vec::new();

    let mut cur = text_base;
    'sweep: while cur + 4 <= text_end {
        for (sig_index, sig) in signatures.iter().enumerate() {
            let pattern_len = sig.words.len() as u64;
            if pattern_len == 0 {
                continue;
            }
            if cur + pattern_len * 4 > text_end {
                continue;
            }

            let Some(last_word) =
                load_be_u32(text, text_base, cur + (pattern_len - 1) * 4)
            else {
                continue;
            };
            if !sig.anchor_matches(last_word) {
                continue;
            }

            window.clear();
            let mut ok = true;
            for w in 0..pattern_len {
                match load_be_u32(text, text_base, cur + w * 4) {
                    Some(word) => window.push(word),
                    None => {
                        ok = false;
                        break;
                    }
                }
            }
            if !ok || !sig.matches(&window) {
                continue;
            }

            let Some(resolved_eff) = resolve_hit(text, text_base, cur, sig) else {
                continue;
            };
            let physical = eff_to_phys.translate(resolved_eff);
            if physical == 0 {
                continue;
            }

            tracing::trace!(signature = sig.name, address = physical, "signature hit");
            matches.push(Match {
                signature_index: sig_index,
                effective_address: resolved_eff,
                physical_address: physical,
            });
            if matches.len() >= SIGSCAN_MAX_MATCHES {
                break 'sweep;
            }
        }
        cur += 4;
    }

    tracing::debug!(found = matches.len(), "scan_module complete");
    matches
}

/// Resolves a raw hit at `hit_addr` according to `sig.resolve_mode`.
/// `FunctionStart` falls back to the raw hit address rather than failing
/// when no prologue shape is found nearby.
fn resolve_hit(text: &[u8], text_base: u64, hit_addr: u64, sig: &Signature) -> Option<u64> {
    match sig.resolve_mode {
        ResolveMode::Direct => Some(hit_addr),
        ResolveMode::BranchTarget { branch_word_index } => {
            let instr_addr = hit_addr + (branch_word_index as u64) * 4;
            let word = load_be_u32(text, text_base, instr_addr)?;
            decode_bl_target(instr_addr, word)
        }
        ResolveMode::FunctionStart => {
            Some(walk_back_to_prologue(text, text_base, hit_addr).unwrap_or(hit_addr))
        }
    }
}
