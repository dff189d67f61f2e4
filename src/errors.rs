use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    StoreUnavailable(sqlx::Error),
    TemplateRender(askama::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::StoreUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "The post store is unavailable right now. Please try again later.",
            ),
            Self::TemplateRender(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Html(format!(
            "<!doctype html><html><body><p class=\"error\">{message}</p>\
             <p><a href=\"/\">Back to posts</a></p></body></html>"
        ));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        error!("Store error: {:?}", err);
        Self::StoreUnavailable(err)
    }
}

impl From<askama::Error> for Error {
    fn from(err: askama::Error) -> Self {
        error!("Template rendering failed: {:?}", err);
        Self::TemplateRender(err)
    }
}
