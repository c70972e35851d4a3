//! Page controller error types

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::models::credentials::Role;
use crate::models::field::{FieldVerdict, PickupField};

/// Per-field verdicts collected when the whole pickup form is checked
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    pub fields: BTreeMap<PickupField, FieldVerdict>,
    pub items_selected: bool,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.items_selected && self.fields.values().all(FieldVerdict::is_valid)
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = PickupField> + '_ {
        self.fields
            .iter()
            .filter(|(_, verdict)| !verdict.is_valid())
            .map(|(field, _)| *field)
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", .0.failure_message())]
    InvalidCredentials(Role),

    #[error("Please correct the highlighted fields")]
    FormRejected(FormReport),

    #[error("A pickup request is already being submitted")]
    SubmissionInProgress,

    #[error("Submission was cancelled")]
    SubmissionCancelled,

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Session not found")]
    SessionNotFound,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            AppError::FormRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::SubmissionInProgress => StatusCode::CONFLICT,
            AppError::SubmissionCancelled => StatusCode::GONE,
            AppError::UnknownField(_) | AppError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            AppError::SessionNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::FormRejected(report) => {
                json!({ "success": false, "reason": self.to_string(), "report": report })
            }
            _ => json!({ "success": false, "reason": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
