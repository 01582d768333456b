//! Integration tests for the report pipeline against an on-disk report directory
//!
//! Each test lays out a small set of `<yyyy><mm><dd>events.txt` files in a
//! temporary directory and drives the public API end to end.

use noaa_events::app::adapters::filesystem::ReportDirectory;
use noaa_events::app::services::frame_writer::{records_to_dataframe, write_frame};
use noaa_events::config::OutputFormat;
use noaa_events::{ActiveRegion, EventReport, ReportDate, ReportError, TimeWindow};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const REPORT_0408: &str = "\
:Product: 20020408events.txt
:Created: 2002 Apr 09 0302 UT
:Date: 2002 04 08
# Prepared by the U.S. Dept. of Commerce, NOAA, Space Environment Center.
#
#Event    Begin    Max       End  Obs  Q  Type  Loc/Frq   Particulars       Reg#
#-------------------------------------------------------------------------------

3800       0120   0125      0131  G10  5   XRA  1-8A      B8.1    8.6E-05   9893
3810 +     1520   1523      1525  SVI  C   RSP  025-180   III/1
3820       2010   2020      2031  G10  5   XRA  1-8A      C1.2    1.8E-03   9899
";

const REPORT_0409: &str = "\
:Product: 20020409events.txt
:Created: 2002 Apr 10 0302 UT
:Date: 2002 04 09
# Prepared by the U.S. Dept. of Commerce, NOAA, Space Environment Center.
#
#Event    Begin    Max       End  Obs  Q  Type  Loc/Frq   Particulars       Reg#
#-------------------------------------------------------------------------------

4000       0418   0426      0434  G10  5   XRA  1-8A      C1.1    1.1E-03   9901
4010 +     0630   0645      0700  LEA  C   RSP  025-180   III/1
4020       1250   1255      1300  SVI  C   RSP  025-180   II/2              9905
4030       1310   1312      1315  G10  5   XRA  1-8A      B9.0    9.0E-04   0000
4040       1520   1530      1545  GOES 5   XRA  1-8A      C3.0    3.0E-03   9906
4050       1600   1610      1620  G10  5   XRA  1-8A      C2.0    2.0E-03   9990
";

fn write_reports(dir: &Path) {
    fs::write(dir.join("20020408events.txt"), REPORT_0408).unwrap();
    fs::write(dir.join("20020409events.txt"), REPORT_0409).unwrap();
}

fn region_strings(report: &EventReport) -> Vec<Option<String>> {
    report
        .records()
        .iter()
        .map(|r| r.region.as_ref().map(ToString::to_string))
        .collect()
}

#[test]
fn test_report_resolves_regions_against_previous_day() {
    let temp_dir = TempDir::new().unwrap();
    write_reports(temp_dir.path());

    let report = EventReport::from_directory(temp_dir.path(), 2002, 4, 9).unwrap();

    // Seed is the previous day's accepted regions
    let seed: Vec<&str> = report.seed().iter().map(ActiveRegion::as_str).collect();
    assert_eq!(seed, vec!["9893", "9899"]);

    // GOES row dropped; 0000 never accepted; 9990 breaks continuity
    let events: Vec<&str> = report.records().iter().map(|r| r.event.as_str()).collect();
    assert_eq!(events, vec!["4000", "4010 +", "4020", "4030", "4050"]);
    assert_eq!(
        region_strings(&report),
        vec![
            Some("9901".to_string()),
            None,
            Some("9905".to_string()),
            None,
            None
        ]
    );

    let first = &report.records()[0];
    assert_eq!(first.observatory, "G10");
    assert_eq!(first.quality.as_deref(), Some("5"));
    assert_eq!(first.kind.as_deref(), Some("XRA"));
    assert_eq!(first.location.as_deref(), Some("1-8A"));
    assert_eq!(first.particulars.as_deref(), Some("C1.1 1.1E-03"));

    // Continuation marker folded into the event field
    let continued = &report.records()[1];
    assert_eq!(continued.begin, "0630");
    assert_eq!(continued.quality.as_deref(), Some("C"));
    assert_eq!(continued.particulars.as_deref(), Some("III/1"));
}

#[test]
fn test_time_window_selects_events_and_regions() {
    let temp_dir = TempDir::new().unwrap();
    write_reports(temp_dir.path());

    let report = EventReport::from_directory(temp_dir.path(), 2002, 4, 9).unwrap();
    let window = TimeWindow::from_timestamps(
        "2002-04-09 12:44:43.999440+00:00",
        "2002-04-09 13:20:58.001280+00:00",
    )
    .unwrap();

    let events: Vec<&str> = report
        .events_between(&window)
        .iter()
        .map(|r| r.event.as_str())
        .collect();
    assert_eq!(events, vec!["4020", "4030"]);

    let regions: Vec<String> = report
        .active_regions(&window)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(regions, vec!["9905"]);
}

#[test]
fn test_missing_previous_day_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    write_reports(temp_dir.path());

    let err = EventReport::from_directory(temp_dir.path(), 2002, 4, 8).unwrap_err();

    match err {
        ReportError::ReportNotFound { path } => {
            assert!(path.ends_with("20020407events.txt"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_discover_lists_reports_in_date_order() {
    let temp_dir = TempDir::new().unwrap();
    write_reports(temp_dir.path());
    fs::write(temp_dir.path().join("20020230events.txt"), "").unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "").unwrap();
    fs::write(temp_dir.path().join("latest_events.txt"), "").unwrap();

    let reports = ReportDirectory::new(temp_dir.path()).discover().unwrap();

    let dates: Vec<ReportDate> = reports.iter().map(|(date, _)| *date).collect();
    assert_eq!(
        dates,
        vec![
            ReportDate::new(2002, 4, 8).unwrap(),
            ReportDate::new(2002, 4, 9).unwrap()
        ]
    );
}

#[test]
fn test_records_written_as_csv() {
    let temp_dir = TempDir::new().unwrap();
    write_reports(temp_dir.path());

    let report = EventReport::from_directory(temp_dir.path(), 2002, 4, 9).unwrap();
    let mut df = records_to_dataframe(report.records()).unwrap();
    let output = temp_dir.path().join("out").join("20020409.csv");

    write_frame(&mut df, &output, OutputFormat::Csv).unwrap();

    let csv = fs::read_to_string(&output).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("event,begin,max,end,obs,Q,type,loc/freq,particulars,reg")
    );
    assert_eq!(lines.count(), report.records().len());
}
