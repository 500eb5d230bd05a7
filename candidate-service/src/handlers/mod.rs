pub mod candidates;
pub mod health;

pub use candidates::{get_candidate, list_candidates, upsert_candidate};
pub use health::good_to_go;
