//! CLI command handlers. URL commands and local path commands live apart.

mod backup;
mod head;
mod hide;
mod probe;
mod query;
mod same;
mod stat;

pub use backup::run_backup;
pub use head::run_head;
pub use hide::run_hide;
pub use probe::{run_resume, run_size};
pub use query::run_query;
pub use same::run_same;
pub use stat::run_stat;
