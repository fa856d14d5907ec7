//! The reply envelope every remote operation answers with.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::codec::{decode_str, entity};
use crate::error::{ModelError, Result};

use super::Message;

/// `{"ok": .., "result": ..}` on success, `{"ok": false, "error_code": .., "description": ..}`
/// on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

impl<T> ApiResponse<T> {
    pub fn success(result: T) -> Self {
        Self {
            ok: true,
            result: Some(result),
            description: None,
            error_code: None,
            parameters: None,
        }
    }

    pub fn failure(error_code: i32, description: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            description: Some(description.into()),
            error_code: Some(error_code),
            parameters: None,
        }
    }

    /// Unwraps `result`, turning an `ok=false` reply into [`ModelError::Api`].
    pub fn into_result(self) -> Result<T> {
        if !self.ok {
            return Err(ModelError::Api {
                error_code: self.error_code,
                description: self.description.unwrap_or_default(),
                parameters: self.parameters,
            });
        }
        self.result.ok_or_else(|| ModelError::Decode {
            entity: "ApiResponse",
            path: None,
            field: Some("result".to_string()),
            message: "successful reply without a result".to_string(),
        })
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decodes a reply body and unwraps it in one step.
    pub fn parse(json: &str) -> Result<T> {
        trace!(bytes = json.len(), "decoding api response");
        decode_str::<ApiResponse<T>>("ApiResponse", json)?.into_result()
    }
}

/// Why a request failed and how to recover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group was migrated to a supergroup with this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before repeating a flood-limited request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i32>,
}

/// Result of edit operations: the edited message, or `true` for inline messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageOrTrue {
    Message(Box<Message>),
    True(bool),
}

impl MessageOrTrue {
    pub fn message(&self) -> Option<&Message> {
        match self {
            MessageOrTrue::Message(message) => Some(message),
            MessageOrTrue::True(_) => None,
        }
    }
}

entity!(ResponseParameters, MessageOrTrue);
