//! Client for a local Ollama server

use super::TextAnalysisService;
use crate::domain::ToneLabel;
use crate::error::Result;
use crate::infrastructure::config::OllamaConfig;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const SENTIMENT_PROMPT: &str = "Analyze the emotional tone of the following journal entry. \
Reply with only one word: positive, neutral, or negative.\n\n";

const INSIGHT_PROMPT: &str = "These are my journal entries from the past week.\n\n\
Please analyze them and describe the emotional or psychological themes that show up. \
Write your response in first person, as if I am reflecting on myself. \
Use language like 'I noticed...', 'I felt...', or 'I seem to be...'. \
Speak gently and with emotional intelligence.\n\n";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Text analysis through Ollama's `/api/generate` endpoint
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: Client,
    config: OllamaConfig,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        OllamaClient {
            http: Client::new(),
            config,
        }
    }

    fn generate(
        &self,
        model: &str,
        prompt: String,
        temperature: f64,
        timeout_secs: u64,
    ) -> Result<String> {
        let url = format!("{}/api/generate", self.config.url.trim_end_matches('/'));
        debug!("POST {} (model {})", url, model);

        let request = GenerateRequest {
            model,
            prompt,
            stream: false,
            options: GenerateOptions { temperature },
        };

        let response: GenerateResponse = self
            .http
            .post(&url)
            .timeout(Duration::from_secs(timeout_secs))
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(response.response)
    }
}

impl TextAnalysisService for OllamaClient {
    fn sentiment(&self, text: &str) -> Result<ToneLabel> {
        let answer = self.generate(
            &self.config.sentiment_model,
            format!("{}{}", SENTIMENT_PROMPT, text),
            self.config.sentiment_temperature,
            self.config.sentiment_timeout_secs,
        )?;
        Ok(ToneLabel::from_label(&answer))
    }

    fn weekly_insight(&self, text: &str) -> Result<String> {
        let answer = self.generate(
            &self.config.insight_model,
            format!("{}{}", INSIGHT_PROMPT, text),
            self.config.insight_temperature,
            self.config.insight_timeout_secs,
        )?;
        Ok(answer.trim().to_string())
    }
}
