//! # dbot-types
//!
//! Entity model of the Bot API (revision 5.1): [`Update`] and everything it can carry, the closed
//! unions ([`KeyboardOption`], [`InputMedia`], [`InlineQueryResult`], [`InputMessageContent`],
//! [`PassportElementError`]), the [`ApiResponse`] reply wrapper, and the JSON codec shared by all
//! of them. Pure data; no I/O. Used by dbot-methods and dbot-cli.

pub mod codec;
pub mod error;
pub mod types;

pub use codec::{parse_update, parse_updates, Entity};
pub use error::{ModelError, Result};
pub use types::*;
