//! Profile photos and file downloads.

use dbot_types::{File, UserProfilePhotos};
use serde::Serialize;

use crate::request::impl_request;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetUserProfilePhotos {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl GetUserProfilePhotos {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            offset: None,
            limit: None,
        }
    }
}

/// Prepares a file for download; the returned path is valid for at least one hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetFile {
    pub file_id: String,
}

impl GetFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

impl_request! {
    GetUserProfilePhotos => "getUserProfilePhotos", UserProfilePhotos;
    GetFile => "getFile", File;
}
