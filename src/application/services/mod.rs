pub mod stats;

pub use stats::{compute_user_stats, compute_user_stats_at};
