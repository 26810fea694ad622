use crate::constants::MAX_MONEY;
use crate::error::{ConsensusError, ErrorCode};

/// Monetary quantity in base units. Signed so that caller-side fee and
/// balance arithmetic can represent deficits; validity is re-checked with
/// `money_range` wherever an amount crosses a consensus boundary.
pub type Amount = i64;

/// Whether a single amount is inside the valid consensus range.
///
/// # Examples
///
/// ```
/// use ember_consensus::constants::MAX_MONEY;
/// use ember_consensus::money_range;
///
/// assert!(money_range(0));
/// assert!(money_range(MAX_MONEY));
/// assert!(!money_range(-1));
/// assert!(!money_range(MAX_MONEY + 1));
/// ```
pub fn money_range(value: Amount) -> bool {
    value >= 0 && value <= MAX_MONEY
}

/// Add two amounts with overflow detection.
///
/// Returns `Ok(sum)` if addition does not overflow, `AMOUNT_ERR_OVERFLOW`
/// otherwise.
pub fn add_amount(a: Amount, b: Amount) -> Result<Amount, ConsensusError> {
    match a.checked_add(b) {
        Some(v) => Ok(v),
        None => Err(ConsensusError::new(
            ErrorCode::AmountErrOverflow,
            "amount addition overflows",
        )),
    }
}

/// Subtract `b` from `a`, rejecting results that would go negative.
///
/// Returns `Ok(a - b)` if `b <= a`, `AMOUNT_ERR_UNDERFLOW` otherwise. Used
/// where the difference is a spendable quantity (fees, change) and a
/// deficit means a conservation violation upstream.
pub fn sub_amount(a: Amount, b: Amount) -> Result<Amount, ConsensusError> {
    if b > a {
        return Err(ConsensusError::new(
            ErrorCode::AmountErrUnderflow,
            "amount subtraction underflows",
        ));
    }
    Ok(a - b)
}
