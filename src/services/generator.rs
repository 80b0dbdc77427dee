use crate::services::constraints::Difficulty;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::io;
use std::time::Duration;

/// A word/definition pair proposed by the generative backend
/// Untrusted until normalized and validated by the caller
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedWord {
    pub word: String,
    pub definition: String,
}

/// The external generative text backend that proposes candidate words
///
/// Contract per the backend's nature: it may time out, ignore the requested
/// theme, break the length band, or repeat excluded words. The generation
/// loop owns all of that.
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        difficulty: Difficulty,
        theme: Option<&str>,
        exclude_words: &[String],
    ) -> io::Result<GeneratedWord>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    difficulty: Difficulty,
    theme: Option<&'a str>,
    exclude_words: &'a [String],
}

/// HTTP/JSON client for a generator endpoint (POST {host}/generate)
pub struct HttpTextGenerator {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpTextGenerator {
    pub fn new(host: &str, timeout: Duration) -> io::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        info!("Text generator endpoint: {} (timeout {:?})", host, timeout);
        Ok(HttpTextGenerator {
            endpoint: format!("{}/generate", host.trim_end_matches('/')),
            client,
        })
    }
}

impl TextGenerator for HttpTextGenerator {
    fn generate(
        &self,
        difficulty: Difficulty,
        theme: Option<&str>,
        exclude_words: &[String],
    ) -> io::Result<GeneratedWord> {
        let request = GenerateRequest {
            difficulty,
            theme,
            exclude_words,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|e| {
                warn!("Generator request failed: {}", e);
                io::Error::new(io::ErrorKind::Other, e)
            })?;

        if !response.status().is_success() {
            warn!("Generator returned status {}", response.status());
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("generator status {}", response.status()),
            ));
        }

        response
            .json::<GeneratedWord>()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
