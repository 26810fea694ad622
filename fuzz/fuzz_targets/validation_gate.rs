#![no_main]

use libfuzzer_sys::fuzz_target;

use ember_consensus::{CheckerId, ValidationGate};

// Drive the gate with an arbitrary op sequence and mirror it in a plain
// Vec model; the verdicts must agree after every step.
fuzz_target!(|data: &[u8]| {
    let gate = ValidationGate::new();
    let mut model: Vec<(CheckerId, bool)> = Vec::new();

    for chunk in data.chunks(2) {
        let arg = chunk.get(1).copied().unwrap_or(0);
        match chunk[0] % 3 {
            0 => {
                let verdict = arg % 2 == 0;
                let id = gate.register(move || verdict);
                model.push((id, verdict));
            }
            1 => {
                if !model.is_empty() {
                    let (id, _) = model.remove(arg as usize % model.len());
                    if !gate.unregister(id) {
                        panic!("live handle failed to unregister");
                    }
                }
            }
            _ => {
                let want = model.iter().all(|(_, verdict)| *verdict);
                if gate.evaluate() != want {
                    panic!("gate verdict diverged from model");
                }
            }
        }
        if gate.len() != model.len() {
            panic!("gate size diverged from model");
        }
    }
});
