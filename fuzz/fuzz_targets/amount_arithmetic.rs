#![no_main]

use libfuzzer_sys::fuzz_target;

use ember_consensus::{add_amount, money_range, sub_amount, Amount, ErrorCode};

// Fuzz amount arithmetic: checked add/sub against the primitive wrapping
// operations, plus the add/sub round-trip for non-negative operands.
fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }

    let a = Amount::from_le_bytes(data[..8].try_into().unwrap());
    let b = Amount::from_le_bytes(data[8..16].try_into().unwrap());

    match add_amount(a, b) {
        Ok(sum) => {
            if sum != a.wrapping_add(b) {
                panic!("add_amount disagrees with wrapping add: {sum}");
            }
            if a >= 0 && b >= 0 && sub_amount(sum, b) != Ok(a) {
                panic!("add/sub round-trip broken for {a} + {b}");
            }
        }
        Err(e) => {
            if e.code != ErrorCode::AmountErrOverflow {
                panic!("unexpected error code: {e}");
            }
        }
    }

    let _ = money_range(a);
});
