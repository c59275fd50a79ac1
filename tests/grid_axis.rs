//! Axis construction, validation, and key/index conversion.

use approx::assert_relative_eq;
use histogram_bayes_filter_rs::{GridAxis, GridError};

#[test]
fn test_valid_initialization() {
    let axis = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
    assert_eq!(axis.name(), "X");
    assert_eq!(axis.min(), 0.0);
    assert_eq!(axis.max(), 1.0);
    assert_eq!(axis.size(), 0.1);
}

#[test]
fn test_empty_name() {
    let err = GridAxis::new("", 0.0, 1.0, 0.1).unwrap_err();
    assert_eq!(err, GridError::EmptyAxisName);
}

#[test]
fn test_min_greater_than_max() {
    let err = GridAxis::new("Y", 1.0, 0.0, 0.1).unwrap_err();
    assert!(matches!(err, GridError::InvalidBounds { .. }));
}

#[test]
fn test_non_positive_size() {
    let err = GridAxis::new("Z", 0.0, 1.0, 0.0).unwrap_err();
    assert!(matches!(err, GridError::InvalidBinSize { .. }));
}

#[test]
fn test_non_positive_epsilon() {
    let err = GridAxis::with_epsilon("X", 0.0, 1.0, 0.1, 0.0).unwrap_err();
    assert!(matches!(err, GridError::InvalidEpsilon { .. }));
}

#[test]
fn test_n_bins() {
    let axis = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
    assert_eq!(axis.n_bins(), 10);
}

#[test]
fn test_valid_key() {
    let axis = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
    assert!(axis.is_valid_key(0.5));
    assert!(axis.is_valid_key(0.0));
    assert!(axis.is_valid_key(1.0));
}

#[test]
fn test_invalid_key() {
    let axis = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
    assert!(!axis.is_valid_key(-0.1));
    assert!(!axis.is_valid_key(1.1));
    assert!(!axis.is_valid_key(2.0));
}

#[test]
fn test_valid_index() {
    let axis = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
    assert!(axis.is_valid_index(0));
    assert!(axis.is_valid_index(9));
}

#[test]
fn test_invalid_index() {
    let axis = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
    assert!(!axis.is_valid_index(10));
    assert!(!axis.is_valid_index(100));
}

#[test]
fn test_copy() {
    let axis = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
    let copied = axis.copy();
    assert_eq!(axis, copied);
}

#[test]
fn test_get_index() {
    let axis = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
    assert_eq!(axis.get_index(0.35).unwrap(), 3);
    assert_eq!(axis.get_index(0.0).unwrap(), 0);
    assert_eq!(axis.get_index(1.0).unwrap(), 9);
}

#[test]
fn test_get_index_out_of_bounds_message() {
    let axis = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
    let err = axis.get_index(1.2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "X-axis key (1.2) is out-of-bounds. Range: [0, 1]."
    );
}

#[test]
fn test_get_key() {
    let axis = GridAxis::new("X", -1.0, 0.0, 0.1).unwrap();
    assert_relative_eq!(axis.get_key(3).unwrap(), -0.65, epsilon = 1e-9);
    assert_relative_eq!(axis.get_key(0).unwrap(), -0.95, epsilon = 1e-9);
    assert_relative_eq!(axis.get_key(9).unwrap(), -0.05, epsilon = 1e-9);
}

#[test]
fn test_get_key_out_of_bounds_message() {
    let axis = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
    let err = axis.get_key(10).unwrap_err();
    assert_eq!(
        err.to_string(),
        "X-axis index (10) is out-of-bounds. Range: [0, 10)."
    );
}

#[test]
fn test_index_key_round_trip_over_all_bins() {
    let axis = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
    for i in 0..axis.n_bins() {
        assert_eq!(axis.get_index(axis.get_key(i).unwrap()).unwrap(), i);
    }
}

#[test]
fn test_eq() {
    let axis1 = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
    let axis2 = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
    let axis3 = GridAxis::new("Y", 0.0, 1.0, 0.1).unwrap();
    assert_eq!(axis1, axis2);
    assert_ne!(axis1, axis3);
}

#[test]
fn test_display() {
    let axis = GridAxis::new("X", 0.0, 1.0, 0.1).unwrap();
    assert_eq!(axis.to_string(), "GridAxis(X, 0, 1, 0.1)");
}
