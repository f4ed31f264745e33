//! Registration service response.
//!
//! Consumed for display only; no validation is performed on it.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Registered,
    Confirmed,
    Cancelled,
    Waiting,
}

/// Member id as assigned by the registration service (numeric or textual).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberId::Number(id) => write!(f, "{id}"),
            MemberId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredMember {
    pub id: MemberId,
    pub name: String,
    pub status: MemberStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub members: Vec<RegisteredMember>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_accepts_numeric_and_text_ids() {
        let body = r#"{"members":[
            {"id": 17, "name": "Asha", "status": "registered"},
            {"id": "m-18", "name": "Ravi", "status": "waiting"}
        ]}"#;

        let response: RegistrationResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.members[0].id, MemberId::Number(17));
        assert_eq!(response.members[1].id.to_string(), "m-18");
        assert_eq!(response.members[1].status, MemberStatus::Waiting);
    }
}
