//! End-to-end runs of both pipelines over files on disk.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use activity_core::settings::{ImportSettings, SourcePrecedence, StreakSettings};
use activity_core::time_utils::SourceClock;
use chrono::NaiveDate;
use fitbit_tools::commands::{load_csv_sources, load_json_exports, run_import, run_streak};
use tempfile::TempDir;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn samples(entries: &[(&str, u32)]) -> String {
    let items: Vec<String> = entries
        .iter()
        .map(|(ts, v)| format!(r#"{{"dateTime":"{}","value":"{}"}}"#, ts, v))
        .collect();
    format!("[{}]", items.join(","))
}

#[test]
fn imported_csv_feeds_the_streak_tool() {
    let dir = TempDir::new().unwrap();
    let json = write(
        dir.path(),
        "steps.json",
        &samples(&[
            ("1/12/24 12:00:00", 4_000),
            ("1/13/24 09:00:00", 6_000),
            ("1/13/24 18:30:00", 6_000),
            ("1/14/24 07:00:00", 10_000),
            ("1/14/24 23:59:59", 1),
            ("1/15/24 00:00:00", 300),
        ]),
    );
    let csv_path = dir.path().join("activities.csv");

    let import_args: [OsString; 4] = [
        "fitbit-import".into(),
        "--timezone".into(),
        "America/Los_Angeles".into(),
        json.into_os_string(),
    ];
    let import = ImportSettings::load_from(import_args);
    let file = std::fs::File::create(&csv_path).unwrap();
    assert_eq!(run_import(&import, file).unwrap(), 4);

    let streak_args: [OsString; 2] = ["fitbit-stepstreak".into(), csv_path.into_os_string()];
    let streak = StreakSettings::load_from(streak_args);
    let report = run_streak(&streak).unwrap();

    // 1/15 is today, 1/14 and 1/13 meet the goal, 1/12 does not.
    assert_eq!(report.latest_date, day(2024, 1, 15));
    assert_eq!(report.days, 2);
}

#[test]
fn json_and_csv_views_of_the_same_day_agree() {
    let dir = TempDir::new().unwrap();
    let a = write(
        dir.path(),
        "a.json",
        &samples(&[("1/15/24 08:00:00", 500), ("1/15/24 20:00:00", 300)]),
    );
    let b = write(dir.path(), "b.json", &samples(&[("1/15/24 21:00:00", 1_200)]));

    let clock = SourceClock::new("America/Los_Angeles").unwrap();
    let store = load_json_exports(&[a, b], &clock).unwrap();
    assert_eq!(store.get(day(2024, 1, 15)).unwrap().steps, 2_000);

    let csv = dir.path().join("out.csv");
    activity_data::report::write_activity_csv(&store, std::fs::File::create(&csv).unwrap())
        .unwrap();

    let reread = load_csv_sources(&[csv], "MyFitbitData", SourcePrecedence::Supplementary).unwrap();
    assert_eq!(reread.get(day(2024, 1, 15)), store.get(day(2024, 1, 15)));
}

#[test]
fn directory_arguments_skip_hidden_and_foreign_files() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "jan.csv",
        "Activities\n2024-01-14,0,10000,0,0,0,0,0,0,0\n2024-01-15,0,5,0,0,0,0,0,0,0\n",
    );
    write(
        dir.path(),
        ".jan.csv",
        "Activities\n2024-01-16,0,99999,0,0,0,0,0,0,0\n",
    );
    write(dir.path(), "notes.txt", "not a csv");

    let store = load_csv_sources(
        &[dir.path().to_path_buf()],
        "MyFitbitData",
        SourcePrecedence::Supplementary,
    )
    .unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.latest_date(), Some(day(2024, 1, 15)));
}
