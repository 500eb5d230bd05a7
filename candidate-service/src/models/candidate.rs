use serde::{Deserialize, Serialize};

/// A stored candidate record. The document key always equals the name, so an
/// upsert keyed on the id is an upsert keyed on the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "CandidateName")]
    pub name: String,
}

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_id_equal_to_name() {
        let candidate = Candidate::new("Alice");
        assert_eq!(candidate.id, "Alice");
        assert_eq!(candidate.name, "Alice");
    }

    #[test]
    fn serializes_with_store_field_names() {
        let candidate = Candidate::new("Alice");
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "_id": "Alice", "CandidateName": "Alice" })
        );
    }

    #[test]
    fn round_trips_through_store_representation() {
        let candidate = Candidate::new("Mary Jane");
        let json = serde_json::to_string(&candidate).unwrap();
        let parsed: Candidate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, candidate);
    }
}
