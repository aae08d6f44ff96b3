//! Google Gemini backend for the church assistant.

use std::time::Duration;

use async_trait::async_trait;
use domojca_core::config::ChatConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::MessagingError;
use crate::messaging::MessagingClient;
use crate::types::{MessagingRequest, Role};

/// Fixed preamble describing the church and how the assistant should behave.
pub const SYSTEM_INSTRUCTION: &str = r#"
Jesteś wirtualnym asystentem kościoła "Dom Ojca" we Wrocławiu. 
Twój ton jest ciepły, gościnny, pełen szacunku i biblijnie osadzony, ale nowoczesny.
Odpowiadasz na pytania w języku polskim.

Kluczowe informacje o kościele:
- Nazwa: Kościół Dom Ojca
- Lokalizacja: Wrocław, Polska (ul. Sołtysowicka 62A, jeśli ktoś pyta o adres).
- Nabożeństwa: Niedziela o 11:00.
- Adres: ul. Sołtysowicka 62A, 51-168 Wrocław
- Modlitwa: Środa o 19:00.
- Misja: Budowanie społeczności opartej na relacji z Bogiem Ojcem.
- Styl: Charyzmatyczny, uwielbieniowy, rodzinny.

Twoje zadania:
1. Udzielanie informacji o godzinach nabożeństw.
2. Odpowiadanie na proste pytania teologiczne w oparciu o chrześcijańskie wartości.
3. Modlitwa (jeśli użytkownik o to poprosi, napisz krótką, zachęcającą modlitwę).
4. Zachęcanie do odwiedzenia kościoła osobiście.

Nie wymyślaj fałszywych wydarzeń, jeśli nie wiesz, powiedz, że warto sprawdzić stronę w sekcji "Wydarzenia".
"#;

/// Client for the `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Instruction<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Instruction<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiClient {
    /// Build a client from the chat configuration.
    ///
    /// A missing API key is not an error here: every call then fails with
    /// [`MessagingError::MissingApiKey`].
    pub fn new(config: &ChatConfig) -> Result<Self, MessagingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.usable_api_key().map(str::to_string),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    fn build_body<'a>(&self, request: &'a MessagingRequest) -> GenerateRequest<'a> {
        // The API expects the conversation to open with a user turn, so a
        // leading greeting from the assistant is not sent.
        let mut contents: Vec<Content<'a>> = request
            .history
            .iter()
            .skip_while(|turn| turn.role == Role::Assistant)
            .map(|turn| Content {
                role: gemini_role(turn.role),
                parts: vec![Part { text: &turn.text }],
            })
            .collect();

        contents.push(Content {
            role: "user",
            parts: vec![Part {
                text: &request.message,
            }],
        });

        GenerateRequest {
            system_instruction: Instruction {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents,
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        }
    }
}

fn gemini_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_reply(body: &str) -> Result<String, MessagingError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| MessagingError::InvalidResponse(e.to_string()))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(MessagingError::EmptyReply);
    }
    Ok(text)
}

#[async_trait]
impl MessagingClient for GeminiClient {
    async fn send(&self, request: &MessagingRequest) -> Result<String, MessagingError> {
        let api_key = self.api_key.as_deref().ok_or(MessagingError::MissingApiKey)?;

        let body = self.build_body(request);
        debug!(
            model = %self.model,
            turns = body.contents.len(),
            "Sending request to Gemini"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!(status = status.as_u16(), "Gemini API error");
            return Err(MessagingError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        extract_reply(&text)
    }
}
