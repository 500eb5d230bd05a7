use crate::models::Candidate;
use serde::{Deserialize, Serialize};

/// A lookup result projected to the name field, as stored.
#[derive(Debug, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(rename = "CandidateName")]
    pub name: String,
}

impl From<Candidate> for CandidateRecord {
    fn from(candidate: Candidate) -> Self {
        Self {
            name: candidate.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpsertCandidateResponse {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_record_uses_stored_field_name() {
        let record = CandidateRecord::from(Candidate::new("Alice"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "CandidateName": "Alice" }));
    }

    #[test]
    fn upsert_response_exposes_plain_name_field() {
        let response = UpsertCandidateResponse {
            name: "Alice".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Alice" }));
    }
}
