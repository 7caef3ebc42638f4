//! Wire types for the Gemini generateContent endpoint
//!
//! Field names follow the provider's JSON exactly (camelCase on the wire).
//! Response types keep every level optional so partial bodies still parse.

use serde::{Deserialize, Serialize};

/// Sampling controls sent verbatim with every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
        }
    }
}

/// One text fragment of a content block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// A content block holding one or more parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// Outbound payload:
/// `{contents:[{parts:[{text}]}], generationConfig:{...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateRequest {
    /// Build a request carrying the question as a single text part.
    ///
    /// The question goes in verbatim. Length limits are the session
    /// loop's job and are enforced before this runs.
    pub fn new(question: impl Into<String>, generation: GenerationConfig) -> Self {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: question.into(),
                }],
            }],
            generation_config: generation,
        }
    }
}

/// Response payload. The answer lives at
/// `candidates[0].content.parts[0].text` when present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl GenerateResponse {
    /// Text of the first candidate's first part, if the response carries one.
    pub fn answer_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()
            .map(|part| part.text.as_str())
    }
}

/// Error body shape: `{"error":{"message":"..."}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}
