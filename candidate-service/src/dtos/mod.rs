pub mod candidates;

pub use candidates::{CandidateRecord, UpsertCandidateResponse};
