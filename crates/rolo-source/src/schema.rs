//! Wire schema for the randomuser.me generator.
//!
//! Every nested field is optional with a default so that upstream shape
//! drift surfaces in the mapper (one clear schema error) instead of failing
//! the whole batch at deserialization time.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct RandomUserResponse {
    #[serde(default)]
    pub results: Vec<RawUser>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct RawUser {
    #[serde(default)]
    pub login: Option<RawLogin>,
    #[serde(default)]
    pub name: Option<RawName>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cell: Option<String>,
    #[serde(default)]
    pub picture: Option<RawPicture>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct RawLogin {
    #[serde(default)]
    pub uuid: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct RawName {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct RawPicture {
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_generator_record() {
        let body = r#"{
            "results": [{
                "name": {"title": "Ms", "first": "Ananya", "last": "Saxena"},
                "email": "ananya.saxena@example.com",
                "login": {"uuid": "0ac4cd1c-1969-4b16-be6c-ba2a2e9b4f2e"},
                "phone": "9185550142",
                "cell": "8095550177",
                "picture": {
                    "large": "https://randomuser.me/api/portraits/women/52.jpg",
                    "medium": "https://randomuser.me/api/portraits/med/women/52.jpg",
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/women/52.jpg"
                },
                "nat": "IN"
            }]
        }"#;
        let parsed: RandomUserResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.results.len(), 1);
        let user = &parsed.results[0];
        assert_eq!(user.name.as_ref().unwrap().first.as_deref(), Some("Ananya"));
        assert!(user.picture.as_ref().unwrap().thumbnail.is_some());
    }

    #[test]
    fn tolerates_missing_nested_fields_at_parse_time() {
        let body = r#"{"results": [{"email": "x@example.com"}]}"#;
        let parsed: RandomUserResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.results[0].login.is_none());
        assert!(parsed.results[0].name.is_none());
    }

    #[test]
    fn empty_results_is_a_valid_response() {
        let parsed: RandomUserResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(parsed.results.is_empty());
    }
}
