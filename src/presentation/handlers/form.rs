use std::collections::HashMap;

use axum::Form;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use super::error::error_response;

/// A file part of a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub data: Bytes,
}

/// Form fields read from either `multipart/form-data` or
/// `application/x-www-form-urlencoded` bodies. Any other body yields an empty
/// form, leaving the handler to report what is missing.
#[derive(Debug, Default)]
pub struct FormFields {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl FormFields {
    /// Text value of a field; blank values count as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, FormRejection> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| {
                FormRejection::new(
                    e.status(),
                    format!("Failed to read multipart: {}", e.body_text()),
                )
            })?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let data = field.bytes().await.map_err(|e| {
                        FormRejection::new(
                            e.status(),
                            format!("Failed to read file: {}", e.body_text()),
                        )
                    })?;
                    let file_name = Some(file_name).filter(|n| !n.is_empty());
                    form.files.insert(name, UploadedFile { file_name, data });
                }
                None => {
                    let data = field.bytes().await.map_err(|e| {
                        FormRejection::new(
                            e.status(),
                            format!("Failed to read field {}: {}", name, e.body_text()),
                        )
                    })?;
                    // Parts without a filename are text fields, never uploads.
                    match std::str::from_utf8(&data) {
                        Ok(value) => {
                            form.fields.insert(name, value.to_string());
                        }
                        Err(_) => {
                            tracing::debug!(
                                field = %name,
                                bytes = data.len(),
                                "Skipping non-text form field"
                            );
                        }
                    }
                }
            }
        }

        Ok(form)
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = FormRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| FormRejection::new(e.status(), e.body_text()))?;
            return Self::from_multipart(multipart).await;
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| FormRejection::new(e.status(), e.body_text()))?;
            return Ok(Self {
                fields,
                files: HashMap::new(),
            });
        }

        tracing::debug!(content_type = %content_type, "Request body is not a form");
        Ok(Self::default())
    }
}

/// A form body that could not be read, e.g. malformed or over the size limit.
#[derive(Debug)]
pub struct FormRejection {
    pub status: StatusCode,
    pub message: String,
}

impl FormRejection {
    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for FormRejection {
    fn into_response(self) -> Response {
        tracing::warn!(status = %self.status, error = %self.message, "Rejected form body");
        error_response(self.status, self.message)
    }
}
