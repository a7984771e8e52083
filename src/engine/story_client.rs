use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

use crate::engine::error::ClientError;
use crate::model::request::GenerateStoryRequest;
use crate::model::story::Story;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_GENERATE_PATH: &str = "/api/generateStory";
pub const DEFAULT_RUN_GAME_PATH: &str = "/api/runGame";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub generate_path: String,
    pub run_game_path: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
            generate_path: DEFAULT_GENERATE_PATH.into(),
            run_game_path: DEFAULT_RUN_GAME_PATH.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn generate_url(&self) -> String {
        join_url(&self.base_url, &self.generate_path)
    }

    pub fn run_game_url(&self) -> String {
        join_url(&self.base_url, &self.run_game_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// The two calls the form makes. The worker only sees this trait.
#[cfg_attr(test, mockall::automock)]
pub trait StoryBackend: Send {
    fn generate_story(&self, request: &GenerateStoryRequest) -> Result<Story, ClientError>;

    fn run_game(&self) -> Result<Value, ClientError>;

    fn configure(&mut self, config: ApiConfig);
}

pub struct HttpStoryClient {
    client: Client,
    config: ApiConfig,
}

impl HttpStoryClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: build_client(config.timeout_secs),
            config,
        }
    }

    fn post_json<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<String, ClientError> {
        let resp = self.client.post(url).json(body).send()?;

        let status = resp.status();
        let text = resp.text()?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

fn build_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default HTTP client");
            Client::new()
        })
}

impl StoryBackend for HttpStoryClient {
    fn generate_story(&self, request: &GenerateStoryRequest) -> Result<Story, ClientError> {
        let body = self.post_json(&self.config.generate_url(), request)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn run_game(&self) -> Result<Value, ClientError> {
        let body = self.post_json(&self.config.run_game_url(), &serde_json::json!({}))?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    fn configure(&mut self, config: ApiConfig) {
        if config.timeout_secs != self.config.timeout_secs {
            self.client = build_client(config.timeout_secs);
        }
        self.config = config;
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    use super::*;
    use crate::model::form_state::{Difficulty, FormState};

    struct Captured {
        request_line: String,
        body: String,
    }

    /// Answers exactly one HTTP request with `status` and `body`, and hands
    /// back what the client sent.
    fn serve_once(status: &'static str, body: &'static str) -> (ApiConfig, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut content_length = 0;
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                let header = header.trim_end();
                if header.is_empty() {
                    break;
                }
                if let Some((name, value)) = header.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
            }

            let mut request_body = vec![0; content_length];
            reader.read_exact(&mut request_body).unwrap();

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();

            Captured {
                request_line: request_line.trim_end().to_string(),
                body: String::from_utf8(request_body).unwrap(),
            }
        });

        let config = ApiConfig {
            base_url: format!("http://{addr}"),
            timeout_secs: 5,
            ..ApiConfig::default()
        };
        (config, handle)
    }

    const STORY_JSON: &str = r#"{"intro":"i","stages":[{"description":"d","success_message":"s","failure_message":"f"}],"good_ending":"g","bad_ending":"b"}"#;

    #[test]
    fn generate_posts_form_body_and_decodes_story() {
        let (config, server) = serve_once("200 OK", STORY_JSON);
        let client = HttpStoryClient::new(config);

        let mut form = FormState::default();
        form.set_theme("Submarine");
        form.set_difficulty(Difficulty::Hard);
        form.edit_stage_at(0, "desc");
        form.set_num_players("3");
        form.set_time_limit("25");

        let story = client.generate_story(&form.to_request()).unwrap();
        let sent = server.join().unwrap();

        assert_eq!(sent.request_line, "POST /api/generateStory HTTP/1.1");
        assert_eq!(
            serde_json::from_str::<Value>(&sent.body).unwrap(),
            serde_json::json!({
                "theme": "Submarine",
                "difficulty": "Hard",
                "stage_physical_descriptions": ["desc"],
                "num_players": 3,
                "time_limit_min": 25
            })
        );
        assert_eq!(story.intro, "i");
        assert_eq!(story.stages[0].failure_message, "f");
    }

    #[test]
    fn server_error_is_a_status_error() {
        let (config, server) = serve_once("500 Internal Server Error", "boom");
        let client = HttpStoryClient::new(config);

        let err = client.generate_story(&FormState::default().to_request()).unwrap_err();
        server.join().unwrap();

        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_story_is_a_decode_error() {
        let (config, server) = serve_once("200 OK", r#"{"intro": "only"}"#);
        let client = HttpStoryClient::new(config);

        let err = client.generate_story(&FormState::default().to_request()).unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn run_game_posts_empty_object() {
        let (config, server) = serve_once("200 OK", "");
        let client = HttpStoryClient::new(config);

        let body = client.run_game().unwrap();
        let sent = server.join().unwrap();

        assert_eq!(body, Value::Null);
        assert_eq!(sent.request_line, "POST /api/runGame HTTP/1.1");
        assert_eq!(sent.body, "{}");
    }

    #[test]
    fn default_urls_point_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.generate_url(), "http://localhost:3000/api/generateStory");
        assert_eq!(config.run_game_url(), "http://localhost:3000/api/runGame");
    }

    #[test]
    fn join_handles_slashes() {
        assert_eq!(join_url("http://host/", "/api/x"), "http://host/api/x");
        assert_eq!(join_url("http://host", "api/x"), "http://host/api/x");
        assert_eq!(join_url("http://host//", "api/x"), "http://host/api/x");
    }

    #[test]
    fn configure_swaps_endpoints() {
        let mut client = HttpStoryClient::new(ApiConfig::default());
        client.configure(ApiConfig {
            base_url: "http://example.test".into(),
            timeout_secs: 5,
            ..ApiConfig::default()
        });

        assert_eq!(client.config.generate_url(), "http://example.test/api/generateStory");
        assert_eq!(client.config.timeout_secs, 5);
    }

    #[test]
    fn unreachable_backend_is_a_request_error() {
        let client = HttpStoryClient::new(ApiConfig {
            base_url: "http://127.0.0.1:1".into(),
            timeout_secs: 2,
            ..ApiConfig::default()
        });

        let err = client.run_game().unwrap_err();
        assert!(matches!(err, ClientError::Request(_)));
    }
}
