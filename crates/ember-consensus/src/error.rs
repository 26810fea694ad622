use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    AmountErrOverflow,
    AmountErrUnderflow,
    SupplyErrOutOfRange,
    ParamsErrUnknownNetwork,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::AmountErrOverflow => "AMOUNT_ERR_OVERFLOW",
            ErrorCode::AmountErrUnderflow => "AMOUNT_ERR_UNDERFLOW",
            ErrorCode::SupplyErrOutOfRange => "SUPPLY_ERR_OUT_OF_RANGE",
            ErrorCode::ParamsErrUnknownNetwork => "PARAMS_ERR_UNKNOWN_NETWORK",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusError {
    pub code: ErrorCode,
    pub msg: &'static str,
}

impl ConsensusError {
    pub fn new(code: ErrorCode, msg: &'static str) -> Self {
        Self { code, msg }
    }
}

impl fmt::Display for ConsensusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.msg.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code.as_str(), self.msg)
        }
    }
}

impl std::error::Error for ConsensusError {}
