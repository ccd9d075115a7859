//! Command implementations.

pub mod analyze;
pub mod classify;
pub mod heuristics;
pub mod import;
pub mod review;
pub mod run;
pub mod scrape;
pub mod score;
pub mod stats;

pub use self::analyze::execute_analyze;
pub use self::classify::execute_classify;
pub use self::heuristics::execute_heuristics;
pub use self::import::execute_import;
pub use self::review::{execute_review, execute_reviews};
pub use self::run::execute_run;
pub use self::scrape::execute_scrape;
pub use self::score::execute_score;
pub use self::stats::execute_stats;
