//! `dataviz-cleaner` -- batch filter for critical sensor readings.
//!
//! Loads the raw readings dataset, keeps the rows whose temperature exceeds
//! the critical threshold, and writes them to a CSV file. The whole filter
//! pass runs before the output file is created, so a bad input never leaves
//! a partial output behind.

use std::path::Path;

use dataviz_core::dataset::load_readings;
use dataviz_core::filter::{filter_critical, CRITICAL_TEMP_THRESHOLD};
use dataviz_core::{CoreError, Reading};

/// Errors produced by the cleaner pipeline.
#[derive(Debug, thiserror::Error)]
pub enum CleanerError {
    /// A dataset error from `dataviz-core` (missing file, bad JSON, I/O).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A CSV serialization or write error.
    #[error("Failed to write CSV output: {0}")]
    Csv(#[from] csv::Error),
}

/// Load `input`, keep readings above [`CRITICAL_TEMP_THRESHOLD`], and write
/// them to `output` as CSV.
///
/// Returns the number of critical readings written. If loading fails, no
/// output file is created.
pub fn run(input: &Path, output: &Path) -> Result<usize, CleanerError> {
    tracing::info!(input = %input.display(), "Loading data");
    let readings = load_readings(input)?;

    let critical = filter_critical(&readings, CRITICAL_TEMP_THRESHOLD);
    tracing::info!(
        count = critical.len(),
        threshold = CRITICAL_TEMP_THRESHOLD,
        "Found critical temperature readings"
    );

    write_csv(output, &critical)?;
    tracing::info!(output = %output.display(), "Critical data saved");

    Ok(critical.len())
}

/// Write readings as CSV: a header row with the record's field names in
/// input order, then one row per reading. No index column; absent numeric
/// fields serialize as empty cells.
fn write_csv(path: &Path, readings: &[Reading]) -> Result<(), csv::Error> {
    // Header is written explicitly so it appears even when zero rows match.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(["sensor_id", "temp_c", "pressure_psi"])?;

    for reading in readings {
        writer.serialize(reading)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_input(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("data.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn writes_only_critical_rows_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(
            &dir,
            r#"[
                {"sensor_id":"A","temp_c":60,"pressure_psi":10},
                {"sensor_id":"A","temp_c":40,"pressure_psi":20},
                {"sensor_id":"B","temp_c":55,"pressure_psi":30}
            ]"#,
        );
        let output = dir.path().join("filtered_data.csv");

        let count = run(&input, &output).unwrap();
        assert_eq!(count, 2);

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "sensor_id,temp_c,pressure_psi");
        assert_eq!(lines[1], "A,60.0,10.0");
        assert_eq!(lines[2], "B,55.0,30.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn returned_count_matches_written_rows() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(
            &dir,
            r#"[
                {"sensor_id":"A","temp_c":51,"pressure_psi":1},
                {"sensor_id":"B","temp_c":52,"pressure_psi":2},
                {"sensor_id":"C","temp_c":49,"pressure_psi":3}
            ]"#,
        );
        let output = dir.path().join("out.csv");

        let count = run(&input, &output).unwrap();
        let data_rows = fs::read_to_string(&output).unwrap().lines().count() - 1;
        assert_eq!(count, data_rows);
    }

    #[test]
    fn threshold_value_itself_is_excluded() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, r#"[{"sensor_id":"A","temp_c":50,"pressure_psi":1}]"#);
        let output = dir.path().join("out.csv");

        assert_eq!(run(&input, &output).unwrap(), 0);
    }

    #[test]
    fn no_matches_still_writes_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, r#"[{"sensor_id":"A","temp_c":10,"pressure_psi":1}]"#);
        let output = dir.path().join("out.csv");

        run(&input, &output).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.trim_end(), "sensor_id,temp_c,pressure_psi");
    }

    #[test]
    fn missing_input_writes_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.json");
        let output = dir.path().join("out.csv");

        let result = run(&input, &output);
        assert!(matches!(
            result,
            Err(CleanerError::Core(CoreError::NotFound { .. }))
        ));
        assert!(!output.exists(), "no output file on missing input");
    }

    #[test]
    fn malformed_input_writes_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "not json at all");
        let output = dir.path().join("out.csv");

        let result = run(&input, &output);
        assert!(matches!(
            result,
            Err(CleanerError::Core(CoreError::Parse { .. }))
        ));
        assert!(!output.exists(), "no output file on malformed input");
    }

    #[test]
    fn absent_fields_serialize_as_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, r#"[{"sensor_id":"A","temp_c":60}]"#);
        let output = dir.path().join("out.csv");

        run(&input, &output).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[1], "A,60.0,");
    }
}
