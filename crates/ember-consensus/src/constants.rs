use crate::amount::Amount;

/// Base units per coin.
pub const COIN: Amount = 10_000_000;

/// Claim ratio against the legacy chain: one legacy coin redeems ten coins here.
pub const COIN_SCALE: Amount = 10;

/// Hard supply ceiling in base units.
pub const MAX_MONEY: Amount = 840_000_000 * COIN;

/// Steady-state block reward before any halving, in legacy-coin terms.
pub const INITIAL_BLOCK_SUBSIDY: Amount = 50 * COIN * COIN_SCALE;

/// One-shot claim-fund mint paid by the first bootstrap-window block.
pub const BOOTSTRAP_FUND_SUBSIDY: Amount = 550_000 * COIN * COIN_SCALE;

/// First height with a zero reward. The block before this one brings
/// cumulative issuance to within one truncated payout of MAX_MONEY.
pub const SUBSIDY_END_HEIGHT: u64 = 6_215_968;

/// Epoch count at which the schedule is treated as fully exhausted.
pub const MAX_HALVINGS: u64 = 64;
