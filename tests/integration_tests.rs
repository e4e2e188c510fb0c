use anyhow::Result;
use rating_report::{run_report, OutputFormat, ReportError, ReportOutcome, ReportSettings};
use std::fs;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> Result<String> {
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok(path.to_str().unwrap().to_string())
}

fn settings(files: Vec<String>, format: OutputFormat) -> ReportSettings {
    let mut settings = ReportSettings::new(files, "average-rating");
    settings.format = format;
    settings
}

#[test]
fn test_end_to_end_average_rating() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let phones = write_csv(
        &temp_dir,
        "phones.csv",
        "name,brand,price,rating\niphone 15,apple,999,4.7\ngalaxy s23,samsung,899,4.5\niphone 14,apple,799,4.9\n",
    )?;
    let more = write_csv(
        &temp_dir,
        "more.CSV",
        "name,brand,price,rating\nredmi 12,xiaomi,199,4.6\npoco x5,xiaomi,249,4.4\n",
    )?;

    let outcome = run_report(settings(vec![phones, more], OutputFormat::Csv))?;

    assert_eq!(
        outcome,
        ReportOutcome::Rendered(
            "brand,average_rating\napple,4.8\nsamsung,4.5\nxiaomi,4.5".to_string()
        )
    );
    Ok(())
}

#[test]
fn test_bad_files_do_not_abort_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let no_brand = write_csv(&temp_dir, "no_brand.csv", "name,price,rating\nphone,1000,4.7\n")?;
    let header_only = write_csv(&temp_dir, "header_only.csv", "name,brand,price,rating\n")?;
    let noisy = write_csv(
        &temp_dir,
        "noisy.csv",
        "name,brand,price,rating\na,apple,1,6.0\nb,sony,2,-1.0\nc,samsung,3,5.0\nd,lg,4,great\n",
    )?;

    let outcome = run_report(settings(vec![no_brand, header_only, noisy], OutputFormat::Json))?;

    let ReportOutcome::Rendered(json) = outcome else {
        panic!("expected a rendered report");
    };
    let rows: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(rows.as_array().map(Vec::len), Some(1));
    assert_eq!(rows[0]["brand"], "samsung");
    assert_eq!(rows[0]["average_rating"], 5.0);
    Ok(())
}

#[test]
fn test_zero_records_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let header_only = write_csv(&temp_dir, "header_only.csv", "brand,rating\n")?;
    let invalid = write_csv(&temp_dir, "invalid.csv", "brand,rating\napple,invalid\n,4.0\n")?;

    let err = run_report(settings(vec![header_only, invalid], OutputFormat::Table)).unwrap_err();

    assert!(matches!(err, ReportError::NoRecords));
    Ok(())
}

#[test]
fn test_validation_runs_before_ingestion() -> Result<()> {
    let temp_dir = TempDir::new()?;
    // Undecodable, but never parsed: validation fails on the second path first.
    let binary = temp_dir.path().join("binary.csv");
    fs::write(&binary, [0xff, 0xfe, 0xff, 0xfe])?;
    let txt = write_csv(&temp_dir, "data.txt", "brand,rating\napple,4.5\n")?;

    let err = run_report(settings(
        vec![binary.to_str().unwrap().to_string(), txt],
        OutputFormat::Table,
    ))
    .unwrap_err();

    assert!(matches!(err, ReportError::WrongExtension { .. }));
    Ok(())
}

#[test]
fn test_undecodable_file_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let good = write_csv(&temp_dir, "good.csv", "brand,rating\napple,4.5\n")?;
    let binary = temp_dir.path().join("binary.csv");
    fs::write(&binary, [0xff, 0xfe, 0xff, 0xfe])?;

    let err = run_report(settings(
        vec![good, binary.to_str().unwrap().to_string()],
        OutputFormat::Table,
    ))
    .unwrap_err();

    assert!(matches!(err, ReportError::Decode { .. }));
    assert!(err.to_string().contains("binary.csv"));
    Ok(())
}
