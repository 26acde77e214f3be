mod import;
mod streak;

pub use import::{import_store, load_json_exports, run_import, write_report};
pub use streak::{load_csv_sources, run_streak, streak_sentence};
