//! Gemini-backed round generation.
//!
//! Talks to the Gemini `generateContent` REST endpoint with a structured
//! JSON response schema. The prompt carries the selected category, the
//! hint-style directive for the difficulty band, the burned-word list, and
//! a rotating stylistic nudge so one category keeps producing varied words.

use rand::Rng;
use serde::Deserialize;

use imposter_types::{Category, DifficultyBand};

use crate::{GeneratedRound, RoundRequest, RoundSource, SourceError};

/// Public endpoint of the Gemini API.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used for round generation.
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Stylistic directives rotated per request, so back-to-back rounds in the
/// same category still land on different corners of it.
const STYLES: [&str; 6] = [
    "a very popular and iconic example",
    "a classic or traditional example",
    "a modern or trending example",
    "a specific but recognizable example",
    "a broad concept or type within the category",
    "an example that is distinct from typical choices",
];

/// A [`RoundSource`] backed by the Gemini API.
pub struct GeminiRoundSource {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiRoundSource {
    /// Creates a source against the public Gemini endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Overrides the endpoint base URL. Tests point this at a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

impl RoundSource for GeminiRoundSource {
    type Error = SourceError;

    async fn generate(&self, request: &RoundRequest) -> Result<GeneratedRound, SourceError> {
        let style = STYLES[rand::rng().random_range(0..STYLES.len())];
        let instruction = system_instruction(request, style);

        let body = serde_json::json!({
            "system_instruction": { "parts": [{ "text": instruction }] },
            "contents": [{ "parts": [{ "text": "Generate a new game round." }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "secretWord": { "type": "STRING" },
                        "category": { "type": "STRING" },
                        "hint": { "type": "STRING" }
                    },
                    "required": ["secretWord", "category", "hint"]
                }
            }
        });

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: GenerateContentResponse = response.json().await?;
        let text = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or(SourceError::EmptyResponse)?;

        tracing::debug!(category = %request.category, "gemini answered");
        let round: GeneratedRound = serde_json::from_str(&text)?;
        Ok(round)
    }
}

/// Builds the game-master prompt for one request.
fn system_instruction(request: &RoundRequest, style: &str) -> String {
    let category = request.category;

    let hint_instruction = match request.band {
        DifficultyBand::Easy => "Create a hint that is vague but definitely connected. \
             It should be easier to understand than a purely abstract concept, \
             but still not an immediate giveaway."
            .to_string(),
        DifficultyBand::Hard => {
            "Create a hint that is EXTREMELY vague, abstract, and difficult.".to_string()
        }
        DifficultyBand::Medium => format!(
            "Create a hint with a difficulty of {}/10 (where 1 is helpful/easy \
             and 10 is extremely abstract). It should be moderately vague.",
            request.difficulty
        ),
    };

    let category_note = match category {
        Category::HistoricalEvents => {
            "You may occasionally choose edgy or internet-culture relevant events \
             (e.g., Fyre Festival, Area 51 Raid, specific historical assassinations, \
             or major viral moments) in addition to standard history."
        }
        Category::People => {
            "Choose very common celebrities or famous people. Examples include: \
             Nixon, P Diddy, Drake, Bad Bunny, Timothée Chalamet, Max Verstappen, \
             Tom Cruise, Elon Musk, Donald Trump, etc."
        }
        _ => "",
    };

    let excluded = serde_json::to_string(&request.recent_words).unwrap_or_default();

    format!(
        "You are a game master for the party game 'Imposter' (similar to Spyfall).\n\
         Your goal is to generate a secret word, its category, and a hint based on the selected category.\n\
         \n\
         Target Category: {category}\n\
         Target Style: {style}\n\
         \n\
         Rules:\n\
         1. Generate a secret word/concept specifically for the category: \"{category}\".\n\
         2. {hint_instruction}\n\
         3. The hint MUST be exactly 1 or 2 words long. Do not use more than 2 words.\n\
         4. {category_note}\n\
         5. CRITICAL: Ensure the secret word is NOT in this list of previously used words for this category: {excluded}.\n\
         6. Return ONLY the JSON object."
    )
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(band: DifficultyBand, difficulty: u8) -> RoundRequest {
        RoundRequest {
            category: Category::Sports,
            recent_words: vec!["Basketball".into(), "Cricket".into()],
            band,
            difficulty,
        }
    }

    #[test]
    fn test_prompt_carries_category_and_exclusions() {
        let prompt = system_instruction(&request(DifficultyBand::Easy, 1), STYLES[0]);
        assert!(prompt.contains("Target Category: Sports"));
        assert!(prompt.contains("[\"Basketball\",\"Cricket\"]"));
        assert!(prompt.contains("1 or 2 words"));
    }

    #[test]
    fn test_medium_band_interpolates_the_level() {
        let prompt = system_instruction(&request(DifficultyBand::Medium, 6), STYLES[1]);
        assert!(prompt.contains("difficulty of 6/10"));
    }

    #[test]
    fn test_hard_band_asks_for_abstract_hints() {
        let prompt = system_instruction(&request(DifficultyBand::Hard, 9), STYLES[2]);
        assert!(prompt.contains("EXTREMELY vague"));
    }

    #[test]
    fn test_people_note_only_applies_to_people() {
        let mut req = request(DifficultyBand::Easy, 1);
        req.category = Category::People;
        let prompt = system_instruction(&req, STYLES[0]);
        assert!(prompt.contains("famous people"));

        let sports = system_instruction(&request(DifficultyBand::Easy, 1), STYLES[0]);
        assert!(!sports.contains("famous people"));
    }
}
