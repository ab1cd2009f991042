//! Test utilities: mock generation backends.
//!
//! These mocks validate pipeline behavior without real API calls. The text
//! mock parses its canned payload the way the real client does, so a
//! non-JSON payload exercises the malformed-response path, and both mocks
//! count calls so tests can assert that no request was issued.

#![allow(dead_code)]

use async_trait::async_trait;
use contentcraft_core::GenerateRequest;
use contentcraft_error::{ContentCraftResult, GeminiError, GeminiErrorKind};
use contentcraft_interface::{ImageGenerator, RenderedImage, TextGenerator};
use std::sync::Mutex;

/// Behavior configuration for the text mock.
#[derive(Debug, Clone)]
pub enum MockTextBehavior {
    /// Always return the given text
    Success(String),
    /// Always fail with the given error
    Error(GeminiErrorKind),
}

/// Mock text generation backend.
pub struct MockTextGenerator {
    behavior: MockTextBehavior,
    call_count: Mutex<usize>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockTextGenerator {
    /// Create a mock that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self {
            behavior: MockTextBehavior::Success(text.into()),
            call_count: Mutex::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that always fails with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self {
            behavior: MockTextBehavior::Error(error),
            call_count: Mutex::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of generate calls made (plain and structured combined).
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The requests received, in call order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_text(&self, req: &GenerateRequest) -> ContentCraftResult<String> {
        *self.call_count.lock().unwrap() += 1;
        self.requests.lock().unwrap().push(req.clone());

        match &self.behavior {
            MockTextBehavior::Success(text) => Ok(text.clone()),
            MockTextBehavior::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, req: &GenerateRequest) -> ContentCraftResult<String> {
        self.next_text(req)
    }

    async fn generate_structured(
        &self,
        req: &GenerateRequest,
        _schema: &serde_json::Value,
    ) -> ContentCraftResult<serde_json::Value> {
        let text = self.next_text(req)?;
        serde_json::from_str(&text).map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Response was not valid JSON: {e}"
            )))
            .into()
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Mock image generation backend.
///
/// Outcomes are selected by prompt content so tests stay deterministic no
/// matter how the fan-out is polled.
pub struct MockImageGenerator {
    fail_containing: Option<String>,
    empty_containing: Option<String>,
    call_count: Mutex<usize>,
}

impl MockImageGenerator {
    /// Create a mock that renders an image for every prompt.
    pub fn new_success() -> Self {
        Self {
            fail_containing: None,
            empty_containing: None,
            call_count: Mutex::new(0),
        }
    }

    /// Fail (with a provider error) any prompt containing the needle.
    pub fn fail_when(mut self, needle: impl Into<String>) -> Self {
        self.fail_containing = Some(needle.into());
        self
    }

    /// Return an empty result for any prompt containing the needle.
    pub fn empty_when(mut self, needle: impl Into<String>) -> Self {
        self.empty_containing = Some(needle.into());
        self
    }

    /// Number of render calls made.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn render(&self, prompt: &str) -> ContentCraftResult<Option<RenderedImage>> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(needle) = &self.fail_containing {
            if prompt.contains(needle.as_str()) {
                return Err(GeminiError::new(GeminiErrorKind::ApiRequest(
                    "mock image failure".to_string(),
                ))
                .into());
            }
        }
        if let Some(needle) = &self.empty_containing {
            if prompt.contains(needle.as_str()) {
                return Ok(None);
            }
        }

        Ok(Some(RenderedImage {
            mime_type: "image/png".to_string(),
            data: "aW1n".to_string(),
        }))
    }
}
