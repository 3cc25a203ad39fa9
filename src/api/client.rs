use std::time::Instant;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::models::{
    CourseList, Credentials, FeedbackDetail, FeedbackInfo, FeedbackRequest,
    RegistrationRequest, StudentFeedback,
};

/// One-shot JSON client for the feedback service.
///
/// Every call makes exactly one attempt. The client holds no state besides
/// the connection pool and the base origin, so it is shared as `Arc<ApiClient>`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST /api/login`; succeeds only on 200.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.post_json(endpoints::LOGIN, credentials, StatusCode::OK)
            .await
            .map(drop)
    }

    /// `POST /api/register`; succeeds only on 201.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError> {
        self.post_json(endpoints::REGISTER, request, StatusCode::CREATED)
            .await
            .map(drop)
    }

    /// `POST /api/feedback_requests`; succeeds only on 201.
    pub async fn create_feedback_request(&self, request: &FeedbackRequest) -> Result<(), ApiError> {
        self.post_json(endpoints::FEEDBACK_REQUESTS, request, StatusCode::CREATED)
            .await
            .map(drop)
    }

    /// `POST /api/student_feedbacks`; succeeds only on 201.
    pub async fn submit_student_feedback(&self, feedback: &StudentFeedback) -> Result<(), ApiError> {
        self.post_json(endpoints::STUDENT_FEEDBACKS, feedback, StatusCode::CREATED)
            .await
            .map(drop)
    }

    pub async fn feedback_info(&self) -> Result<FeedbackInfo, ApiError> {
        self.get_json(endpoints::FEEDBACK_INFO).await
    }

    pub async fn student_feedback(&self) -> Result<Vec<FeedbackDetail>, ApiError> {
        self.get_json(endpoints::STUDENT_FEEDBACK).await
    }

    pub async fn courses(&self) -> Result<CourseList, ApiError> {
        self.get_json(endpoints::COURSES).await
    }

    /// Student email addresses. Not used by any screen.
    pub async fn students(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(endpoints::STUDENTS).await
    }

    /// `GET path`, expecting 200 and a JSON body of type `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let builder = self.client.get(url);
        let body = self.execute(builder, "GET", path, StatusCode::OK).await?;

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            body,
            source,
        })
    }

    /// `POST path` with a JSON body, expecting `expected`.
    ///
    /// Returns the raw response text.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        expected: StatusCode,
    ) -> Result<String, ApiError> {
        let url = self.endpoint(path)?;
        let builder = self.client.post(url).json(body);
        self.execute(builder, "POST", path, expected).await
    }

    async fn execute(
        &self,
        builder: RequestBuilder,
        method_name: &'static str,
        path: &str,
        expected: StatusCode,
    ) -> Result<String, ApiError> {
        let request_id = Uuid::new_v4();
        let started = Instant::now();

        tracing::debug!(%request_id, method = method_name, path, "Sending request");

        let response = builder
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| {
                tracing::warn!(%request_id, method = method_name, path, error = %source, "Request failed");
                ApiError::Transport {
                    method: method_name,
                    path: path.to_string(),
                    source,
                }
            })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await.map_err(|source| ApiError::Transport {
            method: method_name,
            path: path.to_string(),
            source,
        })?;

        tracing::debug!(
            %request_id,
            method = method_name,
            path,
            status = status.as_u16(),
            content_type = content_type.as_deref().unwrap_or("-"),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Received response"
        );

        if status != expected {
            return Err(ApiError::Status {
                method: method_name,
                path: path.to_string(),
                status,
                body,
            });
        }

        Ok(body)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                message: e.to_string(),
            })
    }
}

/// Parses the base origin and makes sure it ends with `/`, so that
/// endpoint paths are resolved below any path prefix it carries.
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw).map_err(|e| ApiError::InvalidUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
