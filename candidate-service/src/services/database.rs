use crate::error::AppError;
use crate::models::Candidate;
use mongodb::{Client as MongoClient, Collection, Database};

#[derive(Clone)]
pub struct MongoDb {
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { db })
    }

    pub fn candidates(&self, collection: &str) -> Collection<Candidate> {
        self.db.collection(collection)
    }
}
