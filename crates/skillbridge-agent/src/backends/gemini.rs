use super::LlmBackend;
use crate::config::ModelConfig;
use crate::llm::LlmResponse;
use async_trait::async_trait;
use skillbridge_core::{BridgeError, BridgeResult, Part, Role, ToolCallRequest, Turn};
use skillbridge_skills::FunctionDeclaration;
use std::time::Duration;

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Finish reasons for which Gemini withholds the candidate's content.
const BLOCKING_FINISH_REASONS: [&str; 5] =
    ["SAFETY", "RECITATION", "BLOCKLIST", "PROHIBITED_CONTENT", "SPII"];

/// Google Gemini `generateContent` backend.
pub struct GeminiBackend {
    config: ModelConfig,
    http: reqwest::Client,
}

impl GeminiBackend {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn build_request(
        &self,
        system_instruction: Option<&str>,
        turns: &[Turn],
        tools: &[FunctionDeclaration],
    ) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": build_contents(turns),
            "safetySettings": build_safety_settings(&self.config.safety_threshold),
            "generationConfig": {
                "temperature": self.config.temperature,
                "maxOutputTokens": self.config.max_tokens,
            },
        });

        if let Some(sys) = system_instruction {
            body["systemInstruction"] = serde_json::json!({"parts": [{"text": sys}]});
        }

        // Gemini rejects an empty functionDeclarations list.
        if !tools.is_empty() {
            body["tools"] = serde_json::json!([{ "functionDeclarations": tools }]);
        }

        body
    }
}

#[async_trait]
impl LlmBackend for GeminiBackend {
    async fn chat(
        &self,
        system_instruction: Option<&str>,
        turns: &[Turn],
        tools: &[FunctionDeclaration],
    ) -> BridgeResult<LlmResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url(),
            self.config.model_id
        );
        let body = self.build_request(system_instruction, turns, tools);

        let resp = self
            .http
            .post(&url)
            .timeout(Duration::from_secs(self.config.request_timeout_secs))
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| BridgeError::Http(describe_request_error(&e)))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| BridgeError::Http(describe_request_error(&e)))?;

        if !status.is_success() {
            return Err(BridgeError::Http(format!(
                "Gemini API error {status}: {}",
                error_detail(&text)
            )));
        }

        let resp_body: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| BridgeError::Http(format!("invalid Gemini response: {e}")))?;

        parse_gemini_response(&resp_body)
    }
}

fn describe_request_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("Gemini request timed out: {err}")
    } else {
        err.to_string()
    }
}

/// `error.message` of a JSON error body, else the raw body.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Map conversation turns onto Gemini `contents`.
pub fn build_contents(turns: &[Turn]) -> Vec<serde_json::Value> {
    turns
        .iter()
        .map(|turn| {
            let role = match turn.role {
                Role::User => "user",
                Role::Model => "model",
                Role::Function => "function",
            };
            let parts: Vec<serde_json::Value> = turn.parts.iter().map(build_part).collect();
            serde_json::json!({"role": role, "parts": parts})
        })
        .collect()
}

fn build_part(part: &Part) -> serde_json::Value {
    match part {
        Part::Text { text } => serde_json::json!({"text": text}),
        Part::FunctionCall(call) => serde_json::json!({
            "functionCall": {"name": call.name, "args": call.arguments}
        }),
        Part::FunctionResponse { name, outcome } => serde_json::json!({
            "functionResponse": {"name": name, "response": outcome.to_response()}
        }),
    }
}

fn build_safety_settings(threshold: &str) -> Vec<serde_json::Value> {
    HARM_CATEGORIES
        .iter()
        .map(|category| serde_json::json!({"category": category, "threshold": threshold}))
        .collect()
}

pub fn parse_gemini_response(body: &serde_json::Value) -> BridgeResult<LlmResponse> {
    if let Some(reason) = body["promptFeedback"]["blockReason"].as_str() {
        return Err(BridgeError::ModelTurn(format!(
            "Prompt was blocked due to {reason}"
        )));
    }

    let candidate = body["candidates"]
        .as_array()
        .and_then(|c| c.first())
        .ok_or_else(|| BridgeError::ModelTurn("Gemini returned no candidates".into()))?;

    if let Some(reason) = candidate["finishReason"].as_str() {
        if BLOCKING_FINISH_REASONS.contains(&reason) {
            return Err(BridgeError::ModelTurn(format!(
                "Response was blocked due to {reason}"
            )));
        }
    }

    let mut text = String::new();
    let mut tool_calls = Vec::new();

    if let Some(parts) = candidate["content"]["parts"].as_array() {
        for part in parts {
            if let Some(t) = part["text"].as_str() {
                text.push_str(t);
            }
            if let Some(name) = part["functionCall"]["name"].as_str() {
                let args = part["functionCall"]
                    .get("args")
                    .cloned()
                    .unwrap_or_else(|| serde_json::json!({}));
                tool_calls.push(ToolCallRequest::new(name, args));
            }
        }
    }

    if tool_calls.is_empty() {
        Ok(LlmResponse::Text(text))
    } else {
        Ok(LlmResponse::ToolUse {
            content: if text.is_empty() { None } else { Some(text) },
            tool_calls,
        })
    }
}
