extern crate yule_calc;

use yule_calc::yule::{self, ParameterKind, YuleParameters};

/// Test that deriving the parameter set from any one parameter yields the same set
#[test]
fn derivations_agree() {
    let from_rate = YuleParameters::from_known(ParameterKind::Rate, 1.0, 10).unwrap();
    assert_eq!(from_rate.rate, 1.0);
    assert_eq!(from_rate.length, 9.0);
    assert!((from_rate.height - 1.9289682539682538).abs() < 1e-12);

    let from_height =
        YuleParameters::from_known(ParameterKind::Height, from_rate.height, 10).unwrap();
    assert!((from_height.rate - from_rate.rate).abs() < 1e-9);
    assert!((from_height.length - from_rate.length).abs() < 1e-9);

    let from_length =
        YuleParameters::from_known(ParameterKind::Length, from_rate.length, 10).unwrap();
    assert!((from_length.rate - from_rate.rate).abs() < 1e-14);
    assert!((from_length.height - from_rate.height).abs() < 1e-12);
}

/// Test that each parameter kind round-trips through the parameter set it defines
#[test]
fn known_parameter_is_preserved() {
    for &(kind, value) in &[
        (ParameterKind::Rate, 2.5),
        (ParameterKind::Height, 0.8),
        (ParameterKind::Length, 12.0),
    ] {
        let params = YuleParameters::from_known(kind, value, 25).unwrap();
        let preserved = match kind {
            ParameterKind::Rate   => params.rate,
            ParameterKind::Height => params.height,
            ParameterKind::Length => params.length,
        };
        assert_eq!(preserved, value);
    }
}

/// Test that the standalone conversions and the dispatch agree with each other
#[test]
fn dispatch_matches_conversions() {
    let params = YuleParameters::from_known(ParameterKind::Rate, 0.5, 7).unwrap();
    assert_eq!(params.height, yule::expected_tree_height(7, 0.5).unwrap());
    assert_eq!(params.length, yule::expected_tree_length(7, 0.5).unwrap());
}

/// Test that a kind that does not name a parameter is rejected before any derivation
#[test]
fn invalid_kind_is_rejected() {
    assert_eq!("foo".parse::<ParameterKind>(),
               Err(yule::Error::InvalidParameterKind(String::from("foo"))));
}
