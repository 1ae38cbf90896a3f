use serde::{Deserialize, Serialize};

use crate::constants::build_quiz_prompt;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GenerationParameters {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

impl SafetySetting {
    /// Blocks only high-severity dangerous content.
    pub fn dangerous_content_block_only_high() -> Self {
        Self {
            category: "HARM_CATEGORY_DANGEROUS_CONTENT".to_string(),
            threshold: "BLOCK_ONLY_HIGH".to_string(),
        }
    }
}

/// One generation call: the built prompt plus fixed sampling and safety parameters.
/// Built fresh for each call and dropped afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub parameters: GenerationParameters,
    pub safety_settings: Vec<SafetySetting>,
}

impl GenerationRequest {
    pub fn for_article(article: &str) -> Self {
        Self {
            prompt: build_quiz_prompt(article),
            parameters: GenerationParameters::default(),
            safety_settings: vec![SafetySetting::dangerous_content_block_only_high()],
        }
    }
}
