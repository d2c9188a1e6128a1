use std::env;
use std::time::Instant;

use async_trait::async_trait;
use log::{error, info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use course_core::model::{Course, CourseRequest, Source};

use super::{CourseGenerator, build_prompt, course_schema};
use crate::error::GenerationError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    /// Reads `COURSE_AI_API_KEY` (or `GEMINI_API_KEY`), `COURSE_AI_BASE_URL`
    /// and `COURSE_AI_MODEL`. Returns `None` when no usable key is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("COURSE_AI_API_KEY")
            .or_else(|_| env::var("GEMINI_API_KEY"))
            .ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("COURSE_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = env::var("COURSE_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Generates courses with the Gemini `generateContent` API, grounded with
/// Google Search.
#[derive(Clone)]
pub struct GeminiCourseGenerator {
    client: Client,
    config: Option<GeminiConfig>,
}

impl GeminiCourseGenerator {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<GeminiConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.config.as_ref().map(|config| config.model.as_str())
    }

    async fn request_course(
        &self,
        config: &GeminiConfig,
        request: &CourseRequest,
    ) -> Result<Course, GenerationError> {
        let payload = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart {
                    text: build_prompt(request),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: course_schema(),
            },
            tools: vec![Tool {
                google_search: EmptyObject {},
            }],
        };

        let response = self
            .client
            .post(config.endpoint())
            .header("x-goog-api-key", &config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let body: GenerateResponse = response.json().await?;
        decode_response(body)
    }
}

#[async_trait]
impl CourseGenerator for GeminiCourseGenerator {
    async fn generate(&self, request: &CourseRequest) -> Result<Course, GenerationError> {
        let Some(config) = self.config.as_ref() else {
            warn!("course generation requested but no API key is configured");
            return Err(GenerationError::Disabled);
        };

        info!(
            "generating course: topic={:?} level={:?} language={} model={}",
            request.topic,
            request.level,
            request.language.code(),
            config.model
        );
        let started = Instant::now();

        match self.request_course(config, request).await {
            Ok(course) => {
                info!(
                    "course generated in {}ms: units={} lessons={} sources={}",
                    started.elapsed().as_millis(),
                    course.units.len(),
                    course.total_lessons(),
                    course.sources.len()
                );
                Ok(course)
            }
            Err(err) => {
                error!("course generation failed: {err}");
                Err(err)
            }
        }
    }

    fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

/// Turns a raw `generateContent` response into a validated course with
/// grounding citations appended to its sources.
pub(crate) fn decode_response(body: GenerateResponse) -> Result<Course, GenerationError> {
    let candidate = body
        .candidates
        .into_iter()
        .next()
        .ok_or(GenerationError::EmptyResponse)?;

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let mut course: Course = serde_json::from_str(text.trim())?;
    course.validate()?;

    let grounding = candidate
        .grounding_metadata
        .map(|metadata| metadata.grounding_chunks)
        .unwrap_or_default();
    course.append_sources(grounding.into_iter().filter_map(grounding_source));

    Ok(course)
}

fn grounding_source(chunk: GroundingChunk) -> Option<Source> {
    let web = chunk.web?;
    let url = web.uri.filter(|uri| !uri.trim().is_empty())?;
    let title = web
        .title
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| url.clone());
    Some(Source::web(title, url))
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: EmptyObject,
}

#[derive(Debug, Serialize)]
struct EmptyObject {}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    uri: Option<String>,
    title: Option<String>,
}
