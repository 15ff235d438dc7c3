use reqwest::blocking::Client;
use url::Url;

use rolo_types::Contact;

use crate::error::{Error, Result};
use crate::mapper::map_batch;
use crate::schema::RandomUserResponse;

pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";
pub const DEFAULT_BATCH_SIZE: u32 = 100;
pub const DEFAULT_NATIONALITY: &str = "in";

/// Client for the external contact generator.
///
/// One fetch per application run; no retry, no pagination, no caching. The
/// transport's own defaults govern timeouts. Cloning shares the underlying
/// connection pool.
#[derive(Clone, Debug)]
pub struct RemoteSource {
    client: Client,
    endpoint: Url,
    batch_size: u32,
    nationality: Option<String>,
}

impl RemoteSource {
    pub fn new(endpoint: &str, batch_size: u32, nationality: Option<String>) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            endpoint: Url::parse(endpoint)?,
            batch_size,
            nationality,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch one batch of generated contacts.
    ///
    /// Non-2xx statuses become `Error::Status`, transport failures
    /// `Error::Http`, body problems `Error::Json` or `Error::Schema`.
    pub fn fetch(&self) -> Result<Vec<Contact>> {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("results", &self.batch_size.to_string());
            if let Some(nat) = &self.nationality {
                query.append_pair("nat", nat);
            }
        }

        let rsp = self.client.get(url).send()?;
        let status = rsp.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = rsp.text()?;
        let parsed: RandomUserResponse = serde_json::from_str(&body)?;
        map_batch(&parsed.results)
    }
}

impl Default for RemoteSource {
    fn default() -> Self {
        // DEFAULT_ENDPOINT is a known-good literal.
        Self::new(
            DEFAULT_ENDPOINT,
            DEFAULT_BATCH_SIZE,
            Some(DEFAULT_NATIONALITY.to_string()),
        )
        .expect("default endpoint must parse")
    }
}
