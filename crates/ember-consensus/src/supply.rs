use crate::amount::{add_amount, money_range, Amount};
use crate::error::{ConsensusError, ErrorCode};
use crate::params::ConsensusParams;
use crate::subsidy::block_subsidy;

/// Total issuance over heights `0..=end_height`.
///
/// Every partial sum is checked against the money range, so a schedule
/// that ever escaped `[0, MAX_MONEY]` is reported instead of summed past
/// the cap. On the shipped networks the full schedule stays in range; the
/// error paths exist for audits of hand-built parameter records.
pub fn cumulative_subsidy(
    end_height: u64,
    params: &ConsensusParams,
) -> Result<Amount, ConsensusError> {
    let mut total: Amount = 0;
    for height in 0..=end_height {
        total = add_amount(total, block_subsidy(height, params))?;
        if !money_range(total) {
            return Err(ConsensusError::new(
                ErrorCode::SupplyErrOutOfRange,
                "cumulative issuance escaped the money range",
            ));
        }
    }
    Ok(total)
}
