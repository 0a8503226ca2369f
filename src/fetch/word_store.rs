//! Word store API client
//!
//! Prefix search plus add/delete of single words against the dictionary
//! server.

use serde::Serialize;

use super::{FetchError, check_status};

const SEARCH_PATH: &str = "/api/search";
const ADD_WORD_PATH: &str = "/api/add-word";
const DELETE_WORD_PATH: &str = "/api/delete-word";

/// Body of add and delete requests
#[derive(Debug, Serialize)]
struct WordBody<'a> {
    text: &'a str,
}

/// Word store API client
#[derive(Debug, Clone)]
pub struct WordStoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl WordStoreClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Words starting with `prefix`, in the order the server returns them
    pub async fn search(&self, prefix: &str) -> Result<Vec<String>, FetchError> {
        let response = self
            .http
            .get(self.endpoint(SEARCH_PATH))
            .query(&[("q", prefix)])
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        check_status(response)
            .await?
            .json::<Vec<String>>()
            .await
            .map_err(FetchError::from_reqwest)
    }

    pub async fn add_word(&self, word: &str) -> Result<(), FetchError> {
        let response = self
            .http
            .post(self.endpoint(ADD_WORD_PATH))
            .json(&WordBody { text: word })
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        check_status(response).await.map(|_| ())
    }

    pub async fn delete_word(&self, word: &str) -> Result<(), FetchError> {
        let response = self
            .http
            .delete(self.endpoint(DELETE_WORD_PATH))
            .json(&WordBody { text: word })
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        check_status(response).await.map(|_| ())
    }
}

#[cfg(test)]
#[path = "word_store_tests.rs"]
mod word_store_tests;
