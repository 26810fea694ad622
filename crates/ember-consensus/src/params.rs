use crate::error::{ConsensusError, ErrorCode};

/// Economic schedule for one network.
///
/// Constructed once at network selection and shared read-only afterwards;
/// every field is plain data, so a record is freely `Clone` and safe to
/// share across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusParams {
    /// Blocks between successive reward halvings. Always positive in
    /// records built by the constructors below.
    pub subsidy_halving_interval: u64,
    /// Last block mined under the legacy chain rules. The bootstrap
    /// issuance window opens at the next height.
    pub fork_height: u64,
    /// Length of the bootstrap window in blocks. Zero disables it.
    pub bootstrap_blocks: u64,
}

impl ConsensusParams {
    pub fn main() -> Self {
        Self {
            subsidy_halving_interval: 840_000,
            fork_height: 1_371_111,
            bootstrap_blocks: 2_000,
        }
    }

    pub fn testnet() -> Self {
        Self {
            subsidy_halving_interval: 840_000,
            fork_height: 2_016,
            bootstrap_blocks: 2_000,
        }
    }

    /// Regtest keeps the halving machinery observable in short runs and
    /// carries no bootstrap window.
    pub fn regtest() -> Self {
        Self {
            subsidy_halving_interval: 150,
            fork_height: 0,
            bootstrap_blocks: 0,
        }
    }

    pub fn from_network(network: &str) -> Result<Self, ConsensusError> {
        match network {
            "main" => Ok(Self::main()),
            "testnet" => Ok(Self::testnet()),
            "regtest" => Ok(Self::regtest()),
            _ => Err(ConsensusError::new(
                ErrorCode::ParamsErrUnknownNetwork,
                "expected main, testnet or regtest",
            )),
        }
    }
}
