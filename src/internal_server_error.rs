//! Defines the templates and route handlers for the page to display when a request fails.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

pub struct InternalServerError<'a> {
    pub status_code: StatusCode,
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

impl InternalServerError<'_> {
    pub fn into_html(self) -> Html<String> {
        let title = self
            .status_code
            .canonical_reason()
            .unwrap_or("Internal Server Error");

        Html(
            error_view(
                title,
                self.status_code.as_str(),
                self.description,
                self.fix,
            )
            .into_string(),
        )
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        let status_code = self.status_code;
        (status_code, self.into_html()).into_response()
    }
}

pub async fn get_internal_server_error_page() -> Response {
    InternalServerError::default().into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use scraper::Selector;

    use crate::{
        internal_server_error::{InternalServerError, get_internal_server_error_page},
        test_utils::{assert_content_type, assert_valid_html, parse_html_document},
    };
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn error_page_shows_status_code() {
        let response = get_internal_server_error_page().await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let header = html
            .select(&Selector::parse("h1").unwrap())
            .next()
            .expect("no h1 on error page");
        assert_eq!(header.text().collect::<String>().trim(), "500");
    }

    #[tokio::test]
    async fn error_page_uses_given_status_code() {
        let response = InternalServerError {
            status_code: StatusCode::SERVICE_UNAVAILABLE,
            description: "Database Unavailable",
            fix: "Try again later.",
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let html = parse_html_document(response).await;
        let header = html
            .select(&Selector::parse("h1").unwrap())
            .next()
            .expect("no h1 on error page");
        assert_eq!(header.text().collect::<String>().trim(), "503");
    }
}
