#![no_main]

use libfuzzer_sys::fuzz_target;

use ember_consensus::{block_subsidy, money_range, ConsensusParams};

// Fuzz block_subsidy: emission schedule calculation.
// Verifies no-panic, determinism, and the money-range invariant for
// arbitrary parameter records.
fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }

    let height = u64::from_le_bytes(data[..8].try_into().unwrap());
    let params = ConsensusParams {
        subsidy_halving_interval: u64::from_le_bytes(data[8..16].try_into().unwrap()),
        fork_height: u64::from_le_bytes(data[16..24].try_into().unwrap()),
        bootstrap_blocks: u64::from_le_bytes(data[24..32].try_into().unwrap()),
    };

    let s1 = block_subsidy(height, &params);
    let s2 = block_subsidy(height, &params);

    if s1 != s2 {
        panic!("block_subsidy non-deterministic: {s1} != {s2}");
    }
    if !money_range(s1) {
        panic!("block_subsidy out of money range: {s1}");
    }
});
