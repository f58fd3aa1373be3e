//! Custom Axum extractors
//!
//! Keep extraction failures inside the fixed error envelopes instead of
//! axum's plain-text rejections.

use std::convert::Infallible;

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::errors::ApiError;

/// JSON request body whose rejection is the 400 envelope
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(ApiError::bad_request)?;

        Ok(Self(value))
    }
}

/// Page selector taken from the query string on paginated routes.
///
/// An absent or unparseable `page` value falls back to the default, the
/// first page; this extractor never rejects a request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

impl PageQuery {
    /// Requested page, defaulting to the first. Clamping of non-positive
    /// values happens in the pagination helper.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<PageQuery>::from_request_parts(parts, state)
            .await
            .map(|Query(query)| query)
            .unwrap_or_default();

        Ok(query)
    }
}
