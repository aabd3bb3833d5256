use std::fs;

use multimodes::ingestion::delimited::read_delimited_from_str;
use multimodes::ingestion::{load_light_curve, LoadOptions};
use multimodes::types::{LightCurvePoint, Notice, Value};
use multimodes::LoadError;

fn write_curve(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn headered_csv_drops_nan_rows_with_notice() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_curve(&dir, "curve.csv", "time,flux\n1,10\n2,NaN\n3,30\n");

    let outcome = load_light_curve(&path, &LoadOptions::default()).unwrap();
    assert_eq!(
        outcome.curve.points,
        vec![
            LightCurvePoint { time: 1.0, flux: 10.0 },
            LightCurvePoint { time: 3.0, flux: 30.0 },
        ]
    );
    assert_eq!(outcome.notices, vec![Notice::RowsDropped { dropped: 1 }]);
}

#[test]
fn headerless_two_column_file_uses_configured_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_curve(&dir, "curve.dat", "1,10\n2,20\n");

    let outcome = load_light_curve(&path, &LoadOptions::default()).unwrap();
    assert_eq!(
        outcome.curve.points,
        vec![
            LightCurvePoint { time: 1.0, flux: 10.0 },
            LightCurvePoint { time: 2.0, flux: 20.0 },
        ]
    );
    assert!(outcome.notices.is_empty());
}

#[test]
fn headerless_file_with_three_columns_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_curve(&dir, "curve.txt", "1,10,0\n2,20,0\n");

    let err = load_light_curve(&path, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::HeaderlessColumnCount { found: 3 }));
    assert!(err.to_string().contains("exactly two columns"));
}

#[test]
fn header_match_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_curve(&dir, "curve.csv", "TIME,Flux\n1,10\n");

    let outcome = load_light_curve(&path, &LoadOptions::default()).unwrap();
    assert_eq!(outcome.curve.len(), 1);
    assert_eq!(outcome.curve.points[0], LightCurvePoint { time: 1.0, flux: 10.0 });
}

#[test]
fn configured_column_names_select_and_rename() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_curve(
        &dir,
        "tess.csv",
        "BJD,SAP_FLUX,quality\n2.0,200,ok\n1.0,100,ok\n",
    );

    let options = LoadOptions::with_columns("BJD", "SAP_FLUX");
    let outcome = load_light_curve(&path, &options).unwrap();
    // Output is always the canonical time/flux pair, sorted by time.
    assert_eq!(
        outcome.curve.points,
        vec![
            LightCurvePoint { time: 1.0, flux: 100.0 },
            LightCurvePoint { time: 2.0, flux: 200.0 },
        ]
    );
}

#[test]
fn missing_flux_column_names_the_missing_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_curve(&dir, "curve.csv", "time,brightness\n1,10\n");

    let err = load_light_curve(&path, &LoadOptions::default()).unwrap_err();
    match err {
        LoadError::MissingColumn { ref name, ref available } => {
            assert_eq!(name, "flux");
            assert_eq!(available, &vec!["time".to_string(), "brightness".to_string()]);
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn text_in_selected_column_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_curve(&dir, "curve.csv", "time,flux\n1,10\n2,bad\n");

    let err = load_light_curve(&path, &LoadOptions::default()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value"));
    assert!(msg.contains("column 'flux'"));
    assert!(msg.contains("raw='bad'"));
}

#[test]
fn rows_are_sorted_ascending_and_duplicate_times_keep_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_curve(&dir, "curve.csv", "time,flux\n3,30\n1,10\n2,5\n2,7\n");

    let outcome = load_light_curve(&path, &LoadOptions::default()).unwrap();
    let times: Vec<f64> = outcome.curve.times().collect();
    assert_eq!(times, vec![1.0, 2.0, 2.0, 3.0]);
    // Stable sort keeps the 5-then-7 order for the duplicated time.
    assert_eq!(outcome.curve.points[1].flux, 5.0);
    assert_eq!(outcome.curve.points[2].flux, 7.0);
}

#[test]
fn empty_and_header_only_files_yield_empty_curves() {
    let dir = tempfile::tempdir().unwrap();

    let empty = write_curve(&dir, "empty.csv", "");
    let outcome = load_light_curve(&empty, &LoadOptions::default()).unwrap();
    assert!(outcome.curve.is_empty());
    assert!(outcome.notices.is_empty());

    let header_only = write_curve(&dir, "header_only.csv", "time,flux\n");
    let outcome = load_light_curve(&header_only, &LoadOptions::default()).unwrap();
    assert!(outcome.curve.is_empty());
}

#[test]
fn loading_twice_is_row_for_row_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_curve(&dir, "curve.csv", "time,flux\n2,20\n1,10\n2,NaN\n");

    let first = load_light_curve(&path, &LoadOptions::default()).unwrap();
    let second = load_light_curve(&path, &LoadOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn str_reader_probes_headers_and_keeps_raw_cells() {
    let table = read_delimited_from_str("time,flux,note\n1,,fine\n", "time", "flux").unwrap();
    assert_eq!(table.columns, vec!["time", "flux", "note"]);
    assert_eq!(
        table.rows,
        vec![vec![
            Value::Float64(1.0),
            Value::Null,
            Value::Utf8("fine".to_string()),
        ]]
    );

    let headerless = read_delimited_from_str("1,10\n", "BJD", "SAP_FLUX").unwrap();
    assert_eq!(headerless.columns, vec!["bjd", "sap_flux"]);
    assert_eq!(headerless.row_count(), 1);
}

#[test]
fn empty_cells_in_selected_columns_drop_the_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_curve(&dir, "curve.csv", "time,flux\n1,10\n,20\n3,\n4,40\n");

    let outcome = load_light_curve(&path, &LoadOptions::default()).unwrap();
    let times: Vec<f64> = outcome.curve.times().collect();
    assert_eq!(times, vec![1.0, 4.0]);
    assert_eq!(outcome.notices, vec![Notice::RowsDropped { dropped: 2 }]);
}
