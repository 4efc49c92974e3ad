use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type MemberId = Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Member {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn with_id(id: MemberId, name: impl Into<String>) -> Self {
        Member {
            id,
            name: name.into(),
        }
    }
}
