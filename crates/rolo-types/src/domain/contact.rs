use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact identifier (origin-agnostic).
///
/// Remote contacts carry the generator's `login.uuid`; locally created
/// contacts get a fresh UUID v4. Delete routing never inspects the id itself,
/// it consults [`Origin`], so an id collision across origins cannot misroute
/// a deletion.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate an identifier for a locally created contact.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a contact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Fetched from the external generator endpoint.
    Remote,
    /// Created locally through the add form; never sent anywhere.
    Local,
}

/// Avatar image references.
///
/// For remote contacts these are thumbnail/large URLs from the generator; for
/// local contacts both fields hold the same embedded `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub thumbnail: String,
    pub large: String,
}

impl Avatar {
    /// Avatar backed by a single embedded image (local attachment).
    pub fn embedded(data_url: impl Into<String>) -> Self {
        let data_url = data_url.into();
        Self {
            thumbnail: data_url.clone(),
            large: data_url,
        }
    }
}

/// A single contact record, normalized from either origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Avatar>,
    pub origin: Origin,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_local(&self) -> bool {
        self.origin == Origin::Local
    }
}
