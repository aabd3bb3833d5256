use std::path::Path;

use fitsio::tables::{ColumnDataType, ColumnDescription};
use fitsio::FitsFile;

use multimodes::ingestion::{load_light_curve, LoadOptions};
use multimodes::types::Notice;
use multimodes::LoadError;

fn write_fits_curve(path: &Path, columns: &[(&str, &[f64])]) {
    let mut fits = FitsFile::create(path).open().unwrap();
    let descriptions: Vec<_> = columns
        .iter()
        .map(|(name, _)| {
            ColumnDescription::new(*name)
                .with_type(ColumnDataType::Double)
                .create()
                .unwrap()
        })
        .collect();
    let hdu = fits.create_table("LIGHTCURVE", &descriptions).unwrap();
    for (name, values) in columns {
        hdu.write_col(&mut fits, *name, *values).unwrap();
    }
}

#[test]
fn fits_table_round_trips_with_nan_cleaning_and_sort() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("target.fits");
    // Uppercase names, unsorted times, one NaN flux.
    write_fits_curve(
        &path,
        &[
            ("TIME", &[3.0, 1.0, 2.0][..]),
            ("FLUX", &[30.0, 10.0, f64::NAN][..]),
        ],
    );

    let outcome = load_light_curve(&path, &LoadOptions::default()).unwrap();
    let times: Vec<f64> = outcome.curve.times().collect();
    let fluxes: Vec<f64> = outcome.curve.fluxes().collect();
    assert_eq!(times, vec![1.0, 3.0]);
    assert_eq!(fluxes, vec![10.0, 30.0]);
    assert_eq!(outcome.notices, vec![Notice::RowsDropped { dropped: 1 }]);
}

#[test]
fn fits_missing_flux_column_is_a_schema_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_flux.fits");
    write_fits_curve(
        &path,
        &[
            ("TIME", &[1.0, 2.0][..]),
            ("SAP_FLUX", &[10.0, 20.0][..]),
        ],
    );

    let err = load_light_curve(&path, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn { ref name, .. } if name == "flux"));
}

#[test]
fn fits_configured_columns_select_the_right_pair() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdcsap.fits");
    write_fits_curve(
        &path,
        &[
            ("TIME", &[1.0, 2.0][..]),
            ("PDCSAP_FLUX", &[10.0, 20.0][..]),
            ("SAP_FLUX", &[11.0, 21.0][..]),
        ],
    );

    let options = LoadOptions::with_columns("TIME", "PDCSAP_FLUX");
    let outcome = load_light_curve(&path, &options).unwrap();
    let fluxes: Vec<f64> = outcome.curve.fluxes().collect();
    assert_eq!(fluxes, vec![10.0, 20.0]);
}

#[test]
fn corrupt_fits_file_reports_the_format_cause() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.fits");
    std::fs::write(&path, b"not a fits file at all").unwrap();

    let err = load_light_curve(&path, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Fits(_)));
}
