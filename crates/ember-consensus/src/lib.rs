pub mod amount;
pub mod constants;
pub mod error;
pub mod gate;
pub mod params;
pub mod subsidy;
pub mod supply;

pub use amount::{add_amount, money_range, sub_amount, Amount};
pub use error::{ConsensusError, ErrorCode};
pub use gate::{CheckerId, ValidationGate};
pub use params::ConsensusParams;
pub use subsidy::block_subsidy;
pub use supply::cumulative_subsidy;
