use approx::assert_abs_diff_eq;

use tableau_simplex::algorithm::simplex::{DegenerateError, optimize, optimize_with};
use tableau_simplex::data::tableau::Tableau;
use tableau_simplex::io::error::{ImportError, ParseError};
use tableau_simplex::io::import;

use super::get_test_file_path;

fn to_tableau(file_name: &str) -> Tableau<f64> {
    let path = get_test_file_path(file_name);

    import(&path).unwrap()
}

#[test]
fn classic() {
    let mut nr_pivots = 0;
    let optimal = optimize_with(to_tableau("classic"), |_, _| nr_pivots += 1).unwrap();

    assert!(nr_pivots <= 5);
    assert!(optimal.objective_row().iter().all(|&cost| cost >= 0f64));
    assert_abs_diff_eq!(optimal.objective_value(), 9f64, epsilon = 1e-9);
    let solution = optimal.solution(1e-9);
    assert_abs_diff_eq!(solution[0], 1f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution[1], 3f64, epsilon = 1e-9);
}

#[test]
fn furniture() {
    let mut nr_pivots = 0;
    let optimal = optimize_with(to_tableau("furniture"), |pivot, tableau| {
        nr_pivots += 1;
        assert_abs_diff_eq!(tableau.get(pivot.row, pivot.column), 1f64, epsilon = 1e-9);
    }).unwrap();

    assert_eq!(nr_pivots, 2);
    assert_abs_diff_eq!(optimal.objective_value(), 16f64, epsilon = 1e-9);
    let solution = optimal.solution(1e-9);
    assert_abs_diff_eq!(solution[0], 2f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution[1], 4f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution[4], 0f64, epsilon = 1e-9);
}

#[test]
fn already_optimal() {
    let tableau = to_tableau("optimal");

    let optimal = optimize(tableau.clone()).unwrap();
    assert_eq!(optimal, tableau);
    assert_eq!(optimal.objective_value(), 12f64);
}

#[test]
fn unbounded() {
    let tableau = to_tableau("unbounded");

    match optimize(tableau.clone()) {
        Err(error @ DegenerateError::NonPositivePivot { row: 0, column: 1, .. }) => {
            assert_eq!(error.into_tableau(), tableau);
        },
        other => panic!("expected a degenerate pivot, got {:?}", other),
    }
}

#[test]
fn missing_file() {
    let path = get_test_file_path("does_not_exist");

    match import::<f64>(&path) {
        Err(ImportError::InputUnavailable { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected the input to be unavailable, got {:?}", other),
    }
}

#[test]
fn truncated_file() {
    let path = get_test_file_path("truncated");

    match import::<f64>(&path) {
        Err(ImportError::Parse { source, .. }) => {
            assert_eq!(source, ParseError::MissingValues { expected: 12, found: 7 });
        },
        other => panic!("expected a parse error, got {:?}", other),
    }
}
