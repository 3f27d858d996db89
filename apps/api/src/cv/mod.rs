//! CV parser client: the single entry point to the external CV-parsing
//! service. The service receives a PDF and answers with a structured CV.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::AppError;

pub mod handlers;
pub mod merge;
pub mod model;

use model::ParsedCv;

const PARSE_PATH: &str = "/parse-cv";
/// Retries after the first attempt, for transport errors and 5xx answers.
const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum CvParserError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Parser error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parser unavailable after {retries} retries")]
    Exhausted { retries: u32 },
}

impl From<CvParserError> for AppError {
    fn from(e: CvParserError) -> Self {
        AppError::CvParser(e.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ParserErrorBody {
    detail: String,
}

#[derive(Clone)]
pub struct CvParserClient {
    client: Client,
    endpoint: String,
}

impl CvParserClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(120)).build()?,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), PARSE_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Uploads a PDF as multipart field `file` and decodes the parsed CV.
    /// Retries on transport errors and 5xx with exponential backoff.
    pub async fn parse(&self, file_name: &str, pdf: Vec<u8>) -> Result<ParsedCv, CvParserError> {
        let mut last_error: Option<CvParserError> = None;

        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                // 500ms, 1s, 2s
                let delay = Duration::from_millis(BASE_BACKOFF_MS * (1 << (attempt - 1)));
                warn!(
                    "CV parser attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let part = Part::bytes(pdf.clone())
                .file_name(file_name.to_string())
                .mime_str("application/pdf")?;
            let form = Form::new().part("file", part);

            let response = match self.client.post(&self.endpoint).multipart(form).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(CvParserError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("CV parser returned {}: {}", status, body);
                last_error = Some(CvParserError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ParserErrorBody>(&body)
                    .map(|e| e.detail)
                    .unwrap_or(body);
                return Err(CvParserError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: ParsedCv = response.json().await?;
            debug!(
                "CV parsed: {} technical skills, {} experiences",
                parsed.skills.technical.len(),
                parsed.experience.len()
            );
            return Ok(parsed);
        }

        Err(last_error.unwrap_or(CvParserError::Exhausted {
            retries: MAX_RETRIES,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = CvParserClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/parse-cv");
    }

    #[test]
    fn test_parser_errors_map_to_bad_gateway() {
        use axum::response::IntoResponse;
        let error: AppError = CvParserError::Exhausted { retries: 3 }.into();
        assert_eq!(
            error.into_response().status(),
            axum::http::StatusCode::BAD_GATEWAY
        );
    }
}
