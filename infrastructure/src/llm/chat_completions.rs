//! OpenAI-compatible chat completions gateway.

use super::routing::{Endpoint, resolve_endpoint};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use testcrew_application::{GatewayError, LlmGateway};
use testcrew_domain::{Message, ModelHandle};
use tracing::debug;

/// Request body for `POST /chat/completions`
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// LLM gateway speaking the chat completions protocol over HTTP
pub struct ChatCompletionsGateway {
    client: reqwest::Client,
    base_url: String,
}

impl ChatCompletionsGateway {
    /// Create a gateway; `base_url` serves models without a provider prefix
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, llm: &ModelHandle) -> Result<Endpoint, GatewayError> {
        resolve_endpoint(&llm.model, &self.base_url)
    }

    async fn send(
        &self,
        endpoint: &Endpoint,
        llm: &ModelHandle,
        messages: &[Message],
    ) -> Result<String, GatewayError> {
        let url = endpoint.chat_completions_url();
        debug!("POST {} (model {})", url, endpoint.model);

        let body = ChatRequest {
            model: &endpoint.model,
            messages,
            temperature: llm.temperature,
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(credential) = &llm.credential {
            request = request.bearer_auth(credential.expose());
        }

        let response = request.send().await.map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::ProviderStatus {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(map_transport_error)?;
        parse_completion(&text, llm.model.as_str())
    }
}

#[async_trait]
impl LlmGateway for ChatCompletionsGateway {
    async fn complete(
        &self,
        llm: &ModelHandle,
        messages: &[Message],
    ) -> Result<String, GatewayError> {
        let endpoint = self.endpoint(llm)?;
        self.send(&endpoint, llm, messages).await
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

/// Extract the first choice's text from a response body
fn parse_completion(body: &str, model: &str) -> Result<String, GatewayError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::RequestFailed(format!("invalid response body: {}", e)))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| GatewayError::EmptyResponse(model.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use mockito::Server;
    use serde_json::json;
    use testcrew_domain::{Credential, ModelId};

    const COMPLETION: &str =
        r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"Feature: Login"}}]}"#;

    fn gateway_for(server: &Server) -> ChatCompletionsGateway {
        ChatCompletionsGateway::new(format!("{}/v1", server.url()), Duration::from_secs(5))
            .unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let messages = vec![Message::system("persona"), Message::user("task")];
        let body = ChatRequest {
            model: "llama-3.3-70b-versatile",
            messages: &messages,
            temperature: 0.6,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama-3.3-70b-versatile");
        assert_eq!(json["temperature"], 0.6);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "task");
    }

    #[test]
    fn test_parse_completion() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"Feature: Login"}}]}"#;
        assert_eq!(parse_completion(body, "m").unwrap(), "Feature: Login");
    }

    #[test]
    fn test_parse_completion_without_choices() {
        assert!(matches!(
            parse_completion(r#"{"choices":[]}"#, "m"),
            Err(GatewayError::EmptyResponse(ref m)) if m == "m"
        ));
        assert!(matches!(
            parse_completion(r#"{"choices":[{"message":{"content":null}}]}"#, "m"),
            Err(GatewayError::EmptyResponse(_))
        ));
    }

    #[test]
    fn test_parse_completion_garbage() {
        assert!(matches!(
            parse_completion("<html>", "m"),
            Err(GatewayError::RequestFailed(_))
        ));
    }

    #[test]
    fn test_endpoint_uses_handle_model() {
        let gateway =
            ChatCompletionsGateway::new("http://localhost:4000/v1", Duration::from_secs(5))
                .unwrap();
        let handle = ModelHandle::new(
            ModelId::new("ollama/llama3"),
            0.0,
            Some(Credential::new("k")),
        );
        let endpoint = gateway.endpoint(&handle).unwrap();
        assert_eq!(endpoint.base_url, "http://localhost:11434/v1");
        assert_eq!(endpoint.model, "llama3");
    }

    #[tokio::test]
    async fn test_unknown_provider_fails_without_request() {
        let gateway =
            ChatCompletionsGateway::new("http://localhost:4000/v1", Duration::from_secs(5))
                .unwrap();
        let handle = ModelHandle::new(ModelId::new("vertex/gemini"), 0.0, None);
        let err = gateway
            .complete(&handle, &[Message::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::ModelNotAvailable(_)));
    }

    #[tokio::test]
    async fn test_complete_posts_to_base_url_with_bearer() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer gsk_test")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4o-mini",
                "temperature": 0.6,
                "messages": [
                    {"role": "system", "content": "persona"},
                    {"role": "user", "content": "task"}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(COMPLETION)
            .create_async()
            .await;

        let handle = ModelHandle::new(
            ModelId::new("gpt-4o-mini"),
            0.6,
            Some(Credential::new("gsk_test")),
        );
        let text = gateway_for(&server)
            .complete(&handle, &[Message::system("persona"), Message::user("task")])
            .await
            .unwrap();

        assert_eq!(text, "Feature: Login");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_without_credential_sends_no_auth() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(COMPLETION)
            .create_async()
            .await;

        let handle = ModelHandle::new(ModelId::new("llama3"), 0.0, None);
        gateway_for(&server)
            .complete(&handle, &[Message::user("task")])
            .await
            .unwrap();

        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_prefixed_model_is_stripped_on_the_wire() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/openai/v1/chat/completions")
            .match_body(Matcher::PartialJson(json!({
                "model": "llama-3.3-70b-versatile"
            })))
            .with_status(200)
            .with_body(COMPLETION)
            .create_async()
            .await;

        let gateway = gateway_for(&server);
        let handle = ModelHandle::new(ModelId::new("groq/llama-3.3-70b-versatile"), 0.0, None);
        let mut endpoint = gateway.endpoint(&handle).unwrap();
        assert_eq!(endpoint.base_url, "https://api.groq.com/openai/v1");
        endpoint.base_url = format!("{}/openai/v1", server.url());

        gateway
            .send(&endpoint, &handle, &[Message::user("task")])
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_rate_limited_response_is_provider_status() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_body("rate limit reached")
            .create_async()
            .await;

        let handle = ModelHandle::new(ModelId::new("gpt-4o-mini"), 0.0, None);
        let err = gateway_for(&server)
            .complete(&handle, &[Message::user("task")])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GatewayError::ProviderStatus { status: 429, ref body } if body == "rate limit reached"
        ));
    }

    #[tokio::test]
    async fn test_empty_choice_is_empty_response() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let handle = ModelHandle::new(ModelId::new("gpt-4o-mini"), 0.0, None);
        let err = gateway_for(&server)
            .complete(&handle, &[Message::user("task")])
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::EmptyResponse(ref m) if m == "gpt-4o-mini"));
    }
}
