pub mod database;
pub mod store;

pub use database::MongoDb;
pub use store::{CandidateStore, InMemoryCandidateStore, MongoCandidateStore};
