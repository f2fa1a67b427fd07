#![cfg(test)]
use rig::{
    ensure::{
        check_address, check_bounds, check_bytes_head,
        dispatch::{self, Call, ExecutionError},
        AddressError, BoundsError, EnsureError, HeadMismatchError, U256,
    },
    log::info,
    ruint::aliases::U256 as RuintU256,
    utils::{address, bytes, construct_calldata, pow2, uint},
};

fn max() -> U256 {
    U256::MAX
}

fn assert_not_within_bounds(low: U256, high: U256, value: U256) {
    assert_eq!(
        check_bounds(low, high, value),
        Err(BoundsError { low, high, value })
    );
}

fn assert_not_specific_address(expected: &str, actual: &str) {
    let err = check_address(&address(expected), &address(actual)).unwrap_err();
    assert_eq!(err.expected.as_str(), expected);
    assert_eq!(err.actual.as_str(), actual);
}

fn assert_head_bytes_mismatch(head: &str, data: &str, actual_head: &str) {
    assert_eq!(
        check_bytes_head(&bytes(head), &bytes(data)),
        Err(HeadMismatchError {
            expected_head: bytes(head),
            actual_head: bytes(actual_head),
        })
    );
}

#[test]
fn check_bounds_failure() {
    rig::init_logger();

    assert_not_within_bounds(uint("1"), uint("2"), uint("3"));
    assert_not_within_bounds(uint("1"), uint("2"), uint("0"));
    assert_not_within_bounds(uint("17"), uint("20"), uint("3333333333"));
    assert_not_within_bounds(max(), max(), uint("0"));
    assert_not_within_bounds(pow2(253), pow2(255), pow2(252));
    assert_not_within_bounds(uint("10"), uint("5"), uint("7"));
    assert_not_within_bounds(pow2(254), pow2(25), pow2(255));
    info!("bounds failures reported with unmodified inputs");
}

#[test]
fn check_bounds_success() {
    rig::init_logger();

    assert_eq!(check_bounds(uint("15"), uint("40"), uint("25")), Ok(()));
    assert_eq!(check_bounds(uint("15"), uint("40"), uint("15")), Ok(()));
    assert_eq!(check_bounds(uint("15"), uint("40"), uint("40")), Ok(()));
    assert_eq!(check_bounds(max(), max(), max()), Ok(()));
    assert_eq!(check_bounds(pow2(253), pow2(255), pow2(254)), Ok(()));
}

#[test]
fn bounds_accept_values_built_with_ruint() {
    rig::init_logger();

    let low = U256::from(RuintU256::from(1u64) << 253usize);
    let high = U256::from(RuintU256::MAX);
    let value = U256::from(RuintU256::from(1u64) << 254usize);
    assert_eq!(low, pow2(253));
    assert_eq!(check_bounds(low, high, value), Ok(()));

    let err = check_bounds(high, high, U256::ZERO).unwrap_err();
    assert_eq!(<RuintU256 as From<U256>>::from(err.low), RuintU256::MAX);
    assert_eq!(<RuintU256 as From<U256>>::from(err.value), RuintU256::ZERO);
    info!("{}", err);
}

#[test]
fn check_address_failure() {
    rig::init_logger();

    assert_not_specific_address(
        "0x0000000000000000000000000000000000000000",
        "0x0000000000000000000000000000000000000001",
    );
    assert_not_specific_address(
        "0x1000000000000000000000000000000000000000",
        "0x0000000000000000000000000000000000000000",
    );
    assert_not_specific_address(
        "0x1234567890abcDEfFedCBA0987654321faBBAEda",
        "0x1234567890abcDeFFe0Cba0987654321Fabbaeda",
    );
}

#[test]
fn check_address_success() {
    rig::init_logger();

    for literal in [
        "0x0000000000000000000000000000000000000000",
        "0x1000000000000000000000000000000000000001",
        "0x1234567890abcDEfFedCBA0987654321faBBAEda",
    ] {
        assert_eq!(check_address(&address(literal), &address(literal)), Ok(()));
    }

    assert_eq!(
        check_address(
            &address("0x1234567890abcDEfFedCBA0987654321faBBAEda"),
            &address("0x1234567890abcdeffedcba0987654321fabbaeda"),
        ),
        Ok(())
    );
}

#[test]
fn check_bytes_head_failure() {
    rig::init_logger();

    assert_head_bytes_mismatch(
        "0x00000001",
        "0x0000000200000000000000000000000000000000000000000000000000000000",
        "0x00000002",
    );
    assert_head_bytes_mismatch(
        "0x10000000",
        "0x2000000000000000000000000000000000000000000000000000000000000000",
        "0x20000000",
    );
    assert_head_bytes_mismatch(
        "0x12345678",
        "0x7774421312345678123456781234567812345678123456781234567812345678",
        "0x77744213",
    );
}

#[test]
fn check_bytes_head_success() {
    rig::init_logger();

    assert_eq!(
        check_bytes_head(
            &bytes("0x12345678"),
            &bytes("0x1234567800000000000000000000000000000000000000000000000000000000"),
        ),
        Ok(())
    );
    assert_eq!(
        check_bytes_head(
            &bytes("0x33377722"),
            &bytes("0x333777222111444555aaa666eee888fff111222fffbbbccc999ddd000fff4440"),
        ),
        Ok(())
    );
}

#[test]
fn checks_compose_with_question_mark() {
    rig::init_logger();

    fn run(value: &str) -> Result<(), EnsureError> {
        check_bounds(uint("15"), uint("40"), uint(value))?;
        check_bytes_head(&bytes("0x12"), &bytes("0x1234"))?;

        Ok(())
    }

    assert_eq!(run("20"), Ok(()));
    assert!(matches!(run("41"), Err(EnsureError::Bounds(_))));
}

#[test]
fn dispatch_matches_direct_calls() {
    rig::init_logger();

    let calldata = construct_calldata("0xa0302a3e", &["1", "2", "3"]);
    let err = dispatch::execute(&calldata).unwrap_err();
    let ExecutionError::Revert(revert) = &err else {
        panic!("expected revert, got {:?}", err);
    };
    assert_eq!(
        *revert,
        EnsureError::from(check_bounds(uint("1"), uint("2"), uint("3")).unwrap_err())
    );

    let revert_data = err.revert_data().unwrap();
    assert_eq!(EnsureError::abi_decode(&revert_data).as_ref(), Ok(revert));

    let head = bytes("0x33377722");
    let data = bytes("0x333777222111444555aaa666eee888fff111222fffbbbccc999ddd000fff4440");
    let calldata = Call::CheckBytesHead {
        head: &head,
        data: &data,
    }
    .encode();
    assert_eq!(dispatch::execute(&calldata), Ok(()));

    let calldata = construct_calldata("0xa0302a3e", &["1", "2"]);
    assert!(matches!(
        dispatch::execute(&calldata),
        Err(ExecutionError::InvalidCalldata(_))
    ));
}

#[test]
fn errors_serialize_with_original_text() {
    rig::init_logger();

    let err: EnsureError = AddressError {
        expected: address("0x1234567890abcDEfFedCBA0987654321faBBAEda"),
        actual: address("0x1234567890abcdeffe0cba0987654321fabbaeda"),
    }
    .into();
    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("0x1234567890abcDEfFedCBA0987654321faBBAEda"));

    let back: EnsureError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
    let EnsureError::Address(back) = back else {
        panic!("wrong kind");
    };
    assert_eq!(back.actual.as_str(), "0x1234567890abcdeffe0cba0987654321fabbaeda");
}
