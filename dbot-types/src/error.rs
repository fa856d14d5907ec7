use thiserror::Error;

use crate::types::ResponseParameters;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Decode error in {entity}{}{}: {message}", path_suffix(.path), field_suffix(.field))]
    Decode {
        entity: &'static str,
        /// Dotted location of the failing value inside `entity`, e.g. `message.chat`.
        path: Option<String>,
        field: Option<String>,
        message: String,
    },

    #[error("Unrecognized {union} variant: {discriminator}")]
    UnrecognizedVariant {
        union: &'static str,
        discriminator: String,
    },

    #[error("Encode error in {entity}: {message}")]
    Encode {
        entity: &'static str,
        message: String,
    },

    #[error("API error {}: {description}", code_label(.error_code))]
    Api {
        error_code: Option<i32>,
        description: String,
        parameters: Option<ResponseParameters>,
    },
}

fn path_suffix(path: &Option<String>) -> String {
    match path {
        Some(path) => format!(" at `{}`", path),
        None => String::new(),
    }
}

fn field_suffix(field: &Option<String>) -> String {
    match field {
        Some(name) => format!(" (field `{}`)", name),
        None => String::new(),
    }
}

fn code_label(code: &Option<i32>) -> String {
    code.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
}

impl ModelError {
    /// Entity or union name the error was raised for, if any.
    pub fn entity(&self) -> Option<&'static str> {
        match self {
            ModelError::Decode { entity, .. } | ModelError::Encode { entity, .. } => Some(*entity),
            ModelError::UnrecognizedVariant { union, .. } => Some(*union),
            ModelError::Api { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
