//! Form extractor accepting both encodings browsers send.
//!
//! The front end posts `FormData`, which arrives as `multipart/form-data`;
//! scripts and tests usually send `application/x-www-form-urlencoded`.

use axum::{
    Form,
    extract::{FromRequest, Multipart, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::IntegrationError;

/// Text form fields deserialized into `T`.
#[derive(Debug, Clone)]
pub struct FormFields<T>(pub T);

impl<S, T> FromRequest<S> for FormFields<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = IntegrationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| IntegrationError::bad_request(e.body_text()))?;
            return Ok(Self(value));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| IntegrationError::bad_request(e.body_text()))?;

        let mut fields = Map::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| IntegrationError::bad_request(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let text = field.text().await.map_err(|e| IntegrationError::bad_request(e.body_text()))?;
            fields.insert(name, Value::String(text));
        }

        serde_json::from_value(Value::Object(fields))
            .map(Self)
            .map_err(|e| IntegrationError::bad_request(format!("Invalid form: {e}")))
    }
}
