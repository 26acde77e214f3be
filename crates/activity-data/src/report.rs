//! Daily activity CSV report.
//!
//! Output is readable by [`crate::csv_reader`]: an `Activities` marker row,
//! then one row per stored date in ascending order.

use std::io::Write;

use activity_core::error::{ActivityError, Result};
use activity_core::ActivityStore;

use crate::schema::{self, SECTION_MARKER};

/// Write `store` as CSV to `out`, returning the number of data rows.
///
/// The writer is flushed before returning; an I/O failure at any point is
/// returned as [`ActivityError::Write`].
pub fn write_activity_csv<W: Write>(store: &ActivityStore, out: W) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(out);

    writer.write_record([SECTION_MARKER]).map_err(into_write_error)?;

    let mut rows = 0;
    for activity in store.iter_sorted() {
        writer
            .write_record(schema::format_row(activity))
            .map_err(into_write_error)?;
        rows += 1;
    }

    writer.flush().map_err(ActivityError::Write)?;
    Ok(rows)
}

fn into_write_error(err: csv::Error) -> ActivityError {
    if err.is_io_error() {
        ActivityError::Write(err.into())
    } else {
        ActivityError::Csv(err)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv_reader::{ingest_activity_rows, parse_activity_csv};
    use activity_core::Activity;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn render(store: &ActivityStore) -> String {
        let mut buf = Vec::new();
        write_activity_csv(store, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_store_writes_marker_only() {
        assert_eq!(render(&ActivityStore::new()), "Activities\n");
    }

    #[test]
    fn test_rows_sorted_ascending() {
        let mut store = ActivityStore::new();
        store.upsert(day(2024, 1, 16), |a| a.add_steps(20));
        store.upsert(day(2024, 1, 15), |a| a.add_steps(800));

        assert_eq!(
            render(&store),
            "Activities\n\
             2024-01-15,0,800,0.00,0,0,0,0,0,0\n\
             2024-01-16,0,20,0.00,0,0,0,0,0,0\n"
        );
    }

    #[test]
    fn test_distance_two_decimals() {
        let mut store = ActivityStore::new();
        store.upsert(day(2024, 1, 15), |a| a.distance = 3.14159);
        assert!(render(&store).contains("2024-01-15,0,0,3.14,"));
    }

    #[test]
    fn test_returns_row_count() {
        let mut store = ActivityStore::new();
        for d in 1..=3 {
            store.upsert(day(2024, 1, d), |a| a.add_steps(d));
        }
        let rows = write_activity_csv(&store, std::io::sink()).unwrap();
        assert_eq!(rows, 3);
    }

    #[test]
    fn test_round_trip_through_reader() {
        let mut store = ActivityStore::new();
        let mut a = Activity::empty(day(2024, 1, 15));
        a.calories_burned = 2_345;
        a.steps = 12_001;
        a.distance = 8.564;
        a.floors = 10;
        a.minutes_sedentary = 1_020;
        a.minutes_lightly_active = 200;
        a.minutes_fairly_active = 30;
        a.minutes_very_active = 25;
        a.activity_calories = 1_100;
        store.replace(a);
        store.upsert(day(2024, 1, 16), |a| a.add_steps(700));

        let csv = render(&store);
        let mut reread = ActivityStore::new();
        ingest_activity_rows(&mut reread, parse_activity_csv(csv.as_bytes()).unwrap().rows);

        assert_eq!(reread.all_dates(), store.all_dates());
        for date in store.sorted_dates() {
            let original = store.get(date).unwrap();
            let copy = reread.get(date).unwrap();
            assert!((original.distance - copy.distance).abs() <= 0.005);
            assert_eq!(
                Activity {
                    distance: 0.0,
                    ..original.clone()
                },
                Activity {
                    distance: 0.0,
                    ..copy.clone()
                }
            );
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_write_failure_is_surfaced() {
        let mut store = ActivityStore::new();
        store.upsert(day(2024, 1, 15), |a| a.add_steps(1));
        let err = write_activity_csv(&store, FailingWriter).unwrap_err();
        assert!(matches!(err, ActivityError::Write(_)));
    }
}
