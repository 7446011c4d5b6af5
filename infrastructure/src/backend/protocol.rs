//! Backend wire format.
//!
//! All three endpoints take and return a flat JSON object. The artifact
//! type travels as the lowercase `type` field.

use genie_domain::{ChatTurn, DispatchRequest, RawResponse};
use serde::{Deserialize, Serialize};

/// `POST /generate`
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub prompt: &'a str,
    #[serde(rename = "type")]
    pub artifact_type: &'a str,
    pub mode: &'static str,
}

/// `POST /chat`
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub messages: &'a [ChatTurn],
    #[serde(rename = "type")]
    pub artifact_type: &'a str,
}

/// `POST /check-error`
#[derive(Debug, Serialize)]
pub struct CheckErrorRequest<'a> {
    pub code: &'a str,
    #[serde(rename = "type")]
    pub artifact_type: &'a str,
}

/// The `code` field is either one string or a list of lines.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CodeField {
    Text(String),
    Lines(Vec<String>),
}

impl CodeField {
    pub fn into_text(self) -> String {
        match self {
            CodeField::Text(text) => text,
            CodeField::Lines(lines) => lines.join("\n"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub code: Option<CodeField>,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckErrorResponse {
    #[serde(default)]
    pub corrected: Option<String>,
}

/// JSON body for a request.
pub fn encode(request: &DispatchRequest) -> Result<serde_json::Value, serde_json::Error> {
    match request {
        DispatchRequest::Command { prompt, artifact } => serde_json::to_value(GenerateRequest {
            prompt,
            artifact_type: artifact.as_str(),
            mode: "command",
        }),
        DispatchRequest::Chat { messages, artifact } => serde_json::to_value(ChatRequest {
            messages,
            artifact_type: artifact.as_str(),
        }),
        DispatchRequest::CheckErrors { code, artifact } => {
            serde_json::to_value(CheckErrorRequest {
                code,
                artifact_type: artifact.as_str(),
            })
        }
    }
}

/// Decode the body returned for `request`.
///
/// A missing `code` or `corrected` field decodes as empty text; the session
/// turns that into its advisory messages.
pub fn decode(request: &DispatchRequest, body: &str) -> Result<RawResponse, serde_json::Error> {
    match request {
        DispatchRequest::Command { .. } => {
            let response: GenerateResponse = serde_json::from_str(body)?;
            Ok(RawResponse::Command {
                code: response.code.map(CodeField::into_text).unwrap_or_default(),
                explanation: response.explanation,
            })
        }
        DispatchRequest::Chat { .. } => {
            let response: ChatResponse = serde_json::from_str(body)?;
            Ok(RawResponse::Chat {
                response: response.response,
            })
        }
        DispatchRequest::CheckErrors { .. } => {
            let response: CheckErrorResponse = serde_json::from_str(body)?;
            Ok(RawResponse::Corrected {
                corrected: response.corrected.unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genie_domain::{ArtifactType, ChatHistory, Prompt};
    use serde_json::json;

    fn command() -> DispatchRequest {
        DispatchRequest::command(&Prompt::try_new("nginx").unwrap(), ArtifactType::Kubernetes)
    }

    #[test]
    fn test_encode_generate() {
        assert_eq!(
            encode(&command()).unwrap(),
            json!({"prompt": "nginx", "type": "kubernetes", "mode": "command"})
        );
    }

    #[test]
    fn test_encode_chat_carries_roles() {
        let mut history = ChatHistory::new();
        history.append_exchange(ChatTurn::user("a"), ChatTurn::assistant("b"));
        let request = DispatchRequest::chat(
            &history,
            &Prompt::try_new("c").unwrap(),
            ArtifactType::Other("helm".to_string()),
        );
        assert_eq!(
            encode(&request).unwrap(),
            json!({
                "messages": [
                    {"role": "user", "content": "a"},
                    {"role": "assistant", "content": "b"},
                    {"role": "user", "content": "c"}
                ],
                "type": "helm"
            })
        );
    }

    #[test]
    fn test_encode_check_error() {
        let request = DispatchRequest::check_errors("FROM x", ArtifactType::Dockerfile);
        assert_eq!(
            encode(&request).unwrap(),
            json!({"code": "FROM x", "type": "dockerfile"})
        );
    }

    #[test]
    fn test_decode_code_as_lines() {
        let body = r#"{"code": ["apiVersion: v1", "kind: Pod"], "explanation": "A pod."}"#;
        assert_eq!(
            decode(&command(), body).unwrap(),
            RawResponse::Command {
                code: "apiVersion: v1\nkind: Pod".to_string(),
                explanation: Some("A pod.".to_string()),
            }
        );
    }

    #[test]
    fn test_decode_missing_fields() {
        assert_eq!(
            decode(&command(), "{}").unwrap(),
            RawResponse::Command {
                code: String::new(),
                explanation: None,
            }
        );
        let check = DispatchRequest::check_errors("x", ArtifactType::Terraform);
        assert_eq!(
            decode(&check, "{}").unwrap(),
            RawResponse::Corrected {
                corrected: String::new()
            }
        );
    }

    #[test]
    fn test_decode_malformed() {
        assert!(decode(&command(), "<html>").is_err());
        assert!(decode(&command(), r#"{"code": 42}"#).is_err());
        let chat = DispatchRequest::Chat {
            messages: vec![],
            artifact: ArtifactType::Kubernetes,
        };
        assert!(decode(&chat, r#"{"reply": "hi"}"#).is_err());
    }
}
