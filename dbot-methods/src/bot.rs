//! The bot's own account and command list.

use dbot_types::{BotCommand, User};
use serde::Serialize;

use crate::request::impl_request;

/// Basic information about the bot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetMe {}

impl GetMe {
    pub fn new() -> Self {
        Self {}
    }
}

/// Logs out from the cloud Bot API server before moving to a local one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogOut {}

impl LogOut {
    pub fn new() -> Self {
        Self {}
    }
}

/// Closes the bot instance before moving it between local servers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Close {}

impl Close {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetMyCommands {
    /// At most 100 commands.
    pub commands: Vec<BotCommand>,
}

impl SetMyCommands {
    pub fn new(commands: Vec<BotCommand>) -> Self {
        Self { commands }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetMyCommands {}

impl GetMyCommands {
    pub fn new() -> Self {
        Self {}
    }
}

impl_request! {
    GetMe => "getMe", User;
    LogOut => "logOut", bool;
    Close => "close", bool;
    SetMyCommands => "setMyCommands", bool;
    GetMyCommands => "getMyCommands", Vec<BotCommand>;
}
