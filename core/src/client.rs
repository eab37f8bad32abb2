//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Health, ServiceInfo, Todo, TodoInput};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_service_info(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/")
    }

    pub fn build_health(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/health")
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/todos")
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        self.bare(HttpMethod::Get, &format!("/todos/{id}"))
    }

    pub fn build_create_todo(&self, input: &TodoInput) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/todos", input)
    }

    /// Replaces every mutable field of todo `id` with `input`.
    pub fn build_update_todo(&self, id: u64, input: &TodoInput) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, &format!("/todos/{id}"), input)
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        self.bare(HttpMethod::Delete, &format!("/todos/{id}"))
    }

    pub fn parse_service_info(&self, response: HttpResponse) -> Result<ServiceInfo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<Health, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 201)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    fn bare(&self, method: HttpMethod, route: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{route}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(
        &self,
        method: HttpMethod,
        route: &str,
        input: &TodoInput,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            ..self.bare(method, route)
        })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        422 => {
            let detail = serde_json::from_str::<ErrorBody>(&response.body)
                .map(|b| b.detail)
                .unwrap_or_else(|_| response.body.clone());
            Err(ApiError::Validation(detail))
        }
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_omits_absent_description() {
        let req = client().build_create_todo(&TodoInput::new("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title":"Buy milk","completed":false}));
    }

    #[test]
    fn build_update_todo_sends_full_record() {
        let input = TodoInput {
            title: "Updated".to_string(),
            description: Some("more".to_string()),
            completed: true,
        };
        let req = client().build_update_todo(3, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/todos/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"title":"Updated","description":"more","completed":true})
        );
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(1);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/todos/1");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_health_and_service_info_hit_expected_routes() {
        assert_eq!(client().build_health().path, "http://localhost:3000/health");
        assert_eq!(client().build_service_info().path, "http://localhost:3000/");
    }

    #[test]
    fn parse_get_todo_with_null_description() {
        let todo = client()
            .parse_get_todo(response(
                200,
                r#"{"id":1,"title":"Buy milk","description":null,"completed":false}"#,
            ))
            .unwrap();
        assert_eq!(todo.id, 1);
        assert!(todo.description.is_none());
    }

    #[test]
    fn parse_get_todo_not_found() {
        let err = client()
            .parse_get_todo(response(404, r#"{"detail":"Todo not found"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_todo_validation_error_extracts_detail() {
        let err = client()
            .parse_create_todo(response(422, r#"{"detail":"missing field `title`"}"#))
            .unwrap_err();
        match err {
            ApiError::Validation(detail) => assert_eq!(detail, "missing field `title`"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn parse_create_todo_validation_error_keeps_raw_body() {
        let err = client().parse_create_todo(response(422, "bad")).unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref d) if d == "bad"));
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let err = client()
            .parse_create_todo(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_create_todo_rejects_200() {
        let err = client()
            .parse_create_todo(response(
                200,
                r#"{"id":1,"title":"x","description":null,"completed":false}"#,
            ))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 200, .. }));
    }

    #[test]
    fn parse_health_success() {
        let health = client()
            .parse_health(response(200, r#"{"status":"healthy","todos_count":2}"#))
            .unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.todos_count, 2);
    }

    #[test]
    fn parse_service_info_success() {
        let info = client()
            .parse_service_info(response(
                200,
                r#"{"message":"TODO API","version":"0.1.0","endpoints":{"GET /todos":"List all todos"}}"#,
            ))
            .unwrap();
        assert_eq!(info.message, "TODO API");
        assert_eq!(info.endpoints["GET /todos"], "List all todos");
    }

    #[test]
    fn parse_delete_todo_success() {
        assert!(client().parse_delete_todo(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_todo_not_found() {
        let err = client().parse_delete_todo(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_list_todos();
        assert_eq!(req.path, "http://localhost:3000/todos");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client().parse_list_todos(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
