//! # dbot-methods
//!
//! Request model of the Bot API: one struct per remote operation, each implementing [`Request`].
//! A request renders as its direct payload ([`Request::to_payload`]) for a POST to the method's
//! endpoint, or as an envelope ([`Request::to_envelope`]) carrying the method name in the body
//! for webhook replies. Required parameters are constructor arguments; optional ones are set
//! with struct-update syntax over `new`.
//!
//! No transport: callers own the HTTP client, the token and retry policy.

mod bot;
mod chat;
mod edit;
mod files;
mod games;
mod inline;
mod params;
mod passport;
mod payments;
pub mod request;
mod send;
mod stickers;
mod updates;

pub use bot::*;
pub use chat::*;
pub use edit::*;
pub use files::*;
pub use games::*;
pub use inline::*;
pub use params::{ChatAction, MessageTarget};
pub use passport::*;
pub use payments::*;
pub use request::{decode_result, is_known_method, Envelope, Request, ALL_METHODS};
pub use send::*;
pub use stickers::*;
pub use updates::*;
