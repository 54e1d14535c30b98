//! REST backend
//!
//! ```text
//! GET  {base}/patients   -> [Patient]       (or {"data": [Patient]})
//! GET  {base}/messages   -> [Message]       (or {"data": [Message]})
//! POST {base}/messages   <- NewMessage      -> Message
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use super::DataApi;
use crate::error::{CareError, CareResult};
use crate::types::{Message, NewMessage, Patient};

/// Either a bare JSON array or one wrapped in a `data` field.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListBody<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            ListBody::Bare(items) | ListBody::Wrapped { data: items } => items,
        }
    }
}

/// HTTP client for the CareLink REST API.
#[derive(Debug, Clone)]
pub struct HttpApi {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpApi {
    /// Create a client rooted at `base_url`.
    pub fn new(base_url: Url, token: Option<String>, timeout: Duration) -> CareResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: normalize_base(base_url),
            token,
        })
    }

    fn endpoint(&self, path: &str) -> CareResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn with_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> CareResult<Vec<T>> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");
        let resp = self.with_auth(self.http.get(url)).send().await?;
        let body: ListBody<T> = check_status(resp).await?.json().await?;
        Ok(body.into_vec())
    }
}

/// `Url::join` drops the last path segment unless it ends with a slash.
fn normalize_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

async fn check_status(resp: Response) -> CareResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    Err(CareError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl DataApi for HttpApi {
    async fn fetch_patients(&self) -> CareResult<Vec<Patient>> {
        self.get_list("patients").await
    }

    async fn fetch_messages(&self) -> CareResult<Vec<Message>> {
        self.get_list("messages").await
    }

    async fn add_message(&self, _sender_id: &str, input: &NewMessage) -> CareResult<Message> {
        // Sender comes from the bearer token server-side.
        let url = self.endpoint("messages")?;
        tracing::debug!(%url, receiver = %input.receiver_id, "POST");
        let resp = self.with_auth(self.http.post(url)).json(input).send().await?;
        Ok(check_status(resp).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Answer a single request with `status` and `body`; the handle yields
    /// the raw request text.
    async fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (Url::parse(&format!("http://{}/api", addr)).unwrap(), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let body_len = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + body_len {
                    break;
                }
            }
        }
        String::from_utf8(buf).unwrap()
    }

    fn request_body(request: &str) -> serde_json::Value {
        let (_, body) = request.split_once("\r\n\r\n").unwrap();
        serde_json::from_str(body).unwrap()
    }

    fn client(base: Url, token: Option<&str>) -> HttpApi {
        HttpApi::new(base, token.map(str::to_string), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_patients_sends_bearer_token() {
        let (base, server) = serve_once("200 OK", r#"{"data":[{"id":"1","fullName":"Alice"}]}"#).await;
        let api = client(base, Some("secret-token"));

        let patients = api.fetch_patients().await.unwrap();
        assert_eq!(patients, vec![Patient::new("1", "Alice")]);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/patients HTTP/1.1"));
        assert!(request
            .to_lowercase()
            .contains("authorization: bearer secret-token"));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_api_error() {
        let (base, server) = serve_once("500 Internal Server Error", "database down").await;
        let api = client(base, None);

        let err = api.fetch_messages().await.unwrap_err();
        assert!(matches!(
            err,
            CareError::Api { status: 500, ref message } if message == "database down"
        ));

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/messages HTTP/1.1"));
        assert!(!request.to_lowercase().contains("authorization:"));
    }

    #[tokio::test]
    async fn test_add_message_posts_camel_case_body() {
        let (base, server) = serve_once(
            "201 Created",
            r#"{"id":"m9","senderId":"A1","receiverId":"P1","content":"See you Monday","isRead":false,"createdAt":"2024-06-01T08:00:00Z"}"#,
        )
        .await;
        let api = client(base, Some("secret-token"));

        let created = api
            .add_message("A1", &NewMessage::unread("P1", "See you Monday"))
            .await
            .unwrap();
        assert_eq!(created.id, "m9");
        assert_eq!(created.sender_id, "A1");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/messages HTTP/1.1"));
        assert!(request
            .to_lowercase()
            .contains("content-type: application/json"));
        assert_eq!(
            request_body(&request),
            json!({"receiverId": "P1", "content": "See you Monday", "isRead": false})
        );
    }

    #[test]
    fn test_normalize_base_adds_slash() {
        let url = normalize_base(Url::parse("https://care.example/api").unwrap());
        assert_eq!(url.as_str(), "https://care.example/api/");
    }

    #[test]
    fn test_endpoint_keeps_prefix() {
        let api = HttpApi::new(
            Url::parse("https://care.example/api/v1").unwrap(),
            None,
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            api.endpoint("messages").unwrap().as_str(),
            "https://care.example/api/v1/messages"
        );
    }

    #[test]
    fn test_list_body_accepts_both_shapes() {
        let bare: ListBody<Patient> =
            serde_json::from_str(r#"[{"id":"1","fullName":"Alice"}]"#).unwrap();
        assert_eq!(bare.into_vec().len(), 1);

        let wrapped: ListBody<Patient> =
            serde_json::from_str(r#"{"data":[{"id":"1","fullName":"Alice"}]}"#).unwrap();
        assert_eq!(wrapped.into_vec()[0].full_name, "Alice");
    }
}
