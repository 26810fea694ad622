use ember_consensus::{ConsensusError, ErrorCode};

#[test]
fn error_code_as_str_covers_all_variants() {
    // Intentionally list every variant: this keeps ErrorCode::as_str() coverage high and
    // guards against accidental renames/typos.
    let cases: &[(ErrorCode, &str)] = &[
        (ErrorCode::AmountErrOverflow, "AMOUNT_ERR_OVERFLOW"),
        (ErrorCode::AmountErrUnderflow, "AMOUNT_ERR_UNDERFLOW"),
        (ErrorCode::SupplyErrOutOfRange, "SUPPLY_ERR_OUT_OF_RANGE"),
        (
            ErrorCode::ParamsErrUnknownNetwork,
            "PARAMS_ERR_UNKNOWN_NETWORK",
        ),
    ];

    for (code, want) in cases {
        assert_eq!(code.as_str(), *want);
    }
}

#[test]
fn consensus_error_display() {
    let e = ConsensusError::new(ErrorCode::AmountErrOverflow, "");
    assert_eq!(e.to_string(), "AMOUNT_ERR_OVERFLOW");
    let e2 = ConsensusError::new(ErrorCode::AmountErrOverflow, "bad");
    assert_eq!(e2.to_string(), "AMOUNT_ERR_OVERFLOW: bad");
}
