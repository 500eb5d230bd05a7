use crate::error::AppError;
use crate::models::Candidate;
use crate::services::MongoDb;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{FindOptions, ReplaceOptions};
use mongodb::Collection;
use serde::Deserialize;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// The store operations the candidate handlers need: exact-match lookup by
/// name, insert-or-replace keyed on the id, and a full scan projected to the
/// name field. Zero matches is a regular `Ok` result, not an error; `Err` is
/// reserved for genuine store failures.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Vec<Candidate>, AppError>;
    async fn upsert(&self, candidate: &Candidate) -> Result<(), AppError>;
    async fn list_names(&self) -> Result<Vec<String>, AppError>;
}

pub struct MongoCandidateStore {
    collection: Collection<Candidate>,
}

impl MongoCandidateStore {
    pub fn new(db: &MongoDb, collection: &str) -> Self {
        Self {
            collection: db.candidates(collection),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NameProjection {
    #[serde(rename = "CandidateName")]
    name: String,
}

#[async_trait]
impl CandidateStore for MongoCandidateStore {
    async fn find_by_name(&self, name: &str) -> Result<Vec<Candidate>, AppError> {
        let mut cursor = self
            .collection
            .find(doc! { "CandidateName": name }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query candidate {}: {}", name, e);
                AppError::from(e)
            })?;

        let mut matches = Vec::new();
        while let Some(candidate) = cursor.try_next().await.map_err(AppError::from)? {
            matches.push(candidate);
        }

        Ok(matches)
    }

    async fn upsert(&self, candidate: &Candidate) -> Result<(), AppError> {
        let options = ReplaceOptions::builder().upsert(true).build();
        self.collection
            .replace_one(doc! { "_id": &candidate.id }, candidate, options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to upsert candidate {}: {}", candidate.name, e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn list_names(&self) -> Result<Vec<String>, AppError> {
        let options = FindOptions::builder()
            .projection(doc! { "CandidateName": 1, "_id": 0 })
            .build();

        let mut cursor = self
            .collection
            .clone_with_type::<NameProjection>()
            .find(doc! {}, options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to scan candidates collection: {}", e);
                AppError::from(e)
            })?;

        let mut names = Vec::new();
        while let Some(projected) = cursor.try_next().await.map_err(AppError::from)? {
            names.push(projected.name);
        }

        Ok(names)
    }
}

/// In-memory store, the substitutable stand-in used by the integration tests.
#[derive(Default)]
pub struct InMemoryCandidateStore {
    records: RwLock<BTreeMap<String, Candidate>>,
}

#[async_trait]
impl CandidateStore for InMemoryCandidateStore {
    async fn find_by_name(&self, name: &str) -> Result<Vec<Candidate>, AppError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|candidate| candidate.name == name)
            .cloned()
            .collect())
    }

    async fn upsert(&self, candidate: &Candidate) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        records.insert(candidate.id.clone(), candidate.clone());
        Ok(())
    }

    async fn list_names(&self) -> Result<Vec<String>, AppError> {
        let records = self.records.read().await;
        Ok(records.values().map(|c| c.name.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn find_by_name_returns_empty_for_unknown_name() {
        let store = InMemoryCandidateStore::default();
        let matches = store.find_by_name("Bob").await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn upsert_then_find_returns_single_record() {
        let store = InMemoryCandidateStore::default();
        store.upsert(&Candidate::new("Alice")).await.unwrap();

        let matches = store.find_by_name("Alice").await.unwrap();
        assert_eq!(matches, vec![Candidate::new("Alice")]);
    }

    #[tokio::test]
    async fn upsert_is_idempotent() {
        let store = InMemoryCandidateStore::default();
        store.upsert(&Candidate::new("Alice")).await.unwrap();
        store.upsert(&Candidate::new("Alice")).await.unwrap();

        let matches = store.find_by_name("Alice").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(store.list_names().await.unwrap(), vec!["Alice"]);
    }

    #[tokio::test]
    async fn list_names_projects_every_record() {
        let store = InMemoryCandidateStore::default();
        store.upsert(&Candidate::new("Bob")).await.unwrap();
        store.upsert(&Candidate::new("Alice")).await.unwrap();

        let mut names = store.list_names().await.unwrap();
        names.sort();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }
}
