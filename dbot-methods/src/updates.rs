//! Getting updates: long polling and webhook management.

use dbot_types::{Update, WebhookInfo};
use serde::Serialize;

use crate::request::impl_request;

/// Receives incoming updates by long polling.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetUpdates {
    /// First update to return; pass the last `update_id + 1` to confirm earlier ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// 1-100, defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Long polling timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

impl GetUpdates {
    pub fn new() -> Self {
        Self {
            offset: None,
            limit: None,
            timeout: None,
            allowed_updates: None,
        }
    }

    /// Next poll after `last`, confirming it and everything before it.
    pub fn after(last: &Update) -> Self {
        Self {
            offset: Some(last.update_id + 1),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetWebhook {
    /// HTTPS URL; an empty string removes the webhook.
    pub url: String,
    /// Public key certificate reference, for self-signed certificates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
}

impl SetWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            certificate: None,
            ip_address: None,
            max_connections: None,
            allowed_updates: None,
            drop_pending_updates: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteWebhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
}

impl DeleteWebhook {
    pub fn new() -> Self {
        Self {
            drop_pending_updates: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetWebhookInfo {}

impl GetWebhookInfo {
    pub fn new() -> Self {
        Self {}
    }
}

impl_request! {
    GetUpdates => "getUpdates", Vec<Update>;
    SetWebhook => "setWebhook", bool;
    DeleteWebhook => "deleteWebhook", bool;
    GetWebhookInfo => "getWebhookInfo", WebhookInfo;
}
