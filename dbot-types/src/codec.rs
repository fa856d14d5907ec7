//! JSON codec shared by every entity.
//!
//! Decoding maps `serde_json` failures onto [`ModelError`]: syntax errors and missing or ill-typed
//! fields become [`ModelError::Decode`], unknown union discriminators become
//! [`ModelError::UnrecognizedVariant`]. Decode errors carry the dotted path of the value that
//! failed (`message.chat`), so a missing `id` deep in an update can be told apart from one at the
//! top. Encoding never emits absent optional fields; that part is carried by the
//! `skip_serializing_if` attributes on the types themselves.

use serde::de::{self, DeserializeOwned};
use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::error::{ModelError, Result};
use crate::types::Update;

/// Names of the closed unions, used to recover the union from a nested decode failure.
pub const UNION_NAMES: [&str; 5] = [
    "KeyboardOption",
    "InputMedia",
    "InlineQueryResult",
    "InputMessageContent",
    "PassportElementError",
];

/// A typed value the platform sends or accepts, with a lossless JSON round-trip.
pub trait Entity: Serialize + DeserializeOwned {
    /// Entity type name reported in errors.
    const NAME: &'static str;

    fn from_json(json: &str) -> Result<Self> {
        trace!(entity = Self::NAME, bytes = json.len(), "decoding entity");
        decode_str(Self::NAME, json)
    }

    fn from_value(value: Value) -> Result<Self> {
        trace!(entity = Self::NAME, "decoding entity from value");
        decode_value(Self::NAME, value)
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ModelError::Encode {
            entity: Self::NAME,
            message: e.to_string(),
        })
    }

    fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ModelError::Encode {
            entity: Self::NAME,
            message: e.to_string(),
        })
    }
}

/// Implements [`Entity`] for each listed type, naming it after the type.
macro_rules! entity {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::codec::Entity for $ty {
                const NAME: &'static str = stringify!($ty);
            }
        )+
    };
}
pub(crate) use entity;

/// Decodes one inbound update. This is the entry point for webhook bodies.
pub fn parse_update(json: &str) -> Result<Update> {
    Update::from_json(json)
}

/// Decodes a batch of updates (the `result` array of a poll).
pub fn parse_updates(json: &str) -> Result<Vec<Update>> {
    trace!(bytes = json.len(), "decoding update batch");
    decode_str(Update::NAME, json)
}

/// Decodes `json` as `T`, reporting failures against `entity` with the path that failed.
pub fn decode_str<T: DeserializeOwned>(entity: &'static str, json: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let decoded = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| classify_at(entity, e))?;
    deserializer.end().map_err(|e| classify(entity, &e))?;
    Ok(decoded)
}

/// Same as [`decode_str`] for an already-parsed value.
pub fn decode_value<T: DeserializeOwned>(entity: &'static str, value: Value) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|e| classify_at(entity, e))
}

fn classify_at(
    entity: &'static str,
    err: serde_path_to_error::Error<serde_json::Error>,
) -> ModelError {
    let path = err.path().to_string();
    let mut error = classify(entity, err.inner());
    if let ModelError::Decode { path: slot, .. } = &mut error {
        *slot = Some(path).filter(|p| p != ".");
    }
    error
}

/// Maps a `serde_json` error raised while decoding `entity` onto the model's error taxonomy.
pub fn classify(entity: &'static str, err: &serde_json::Error) -> ModelError {
    let message = err.to_string();
    if err.is_data() {
        if let Some((union, discriminator)) = parse_unrecognized(&message) {
            return ModelError::UnrecognizedVariant {
                union,
                discriminator,
            };
        }
    }
    let field = if err.is_data() {
        message
            .strip_prefix("missing field ")
            .and_then(backticked)
            .map(str::to_string)
    } else {
        None
    };
    ModelError::Decode {
        entity,
        path: None,
        field,
        message,
    }
}

/// Builds the error a union deserializer raises for a discriminator outside its table.
pub(crate) fn unrecognized<E: de::Error>(union: &'static str, discriminator: &str) -> E {
    E::custom(format_args!(
        "unrecognized {} variant `{}`",
        union, discriminator
    ))
}

/// Reads the string discriminator stored under `key`.
///
/// A payload without one (or that is not an object) fails as a missing `key`.
pub(crate) fn discriminator<'v, E: de::Error>(
    value: &'v Value,
    key: &'static str,
) -> std::result::Result<&'v str, E> {
    value
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| E::missing_field(key))
}

/// Decodes one union variant out of an already-buffered payload.
pub(crate) fn variant<T, E>(value: Value) -> std::result::Result<T, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    serde_json::from_value(value).map_err(E::custom)
}

/// Splits `unrecognized <Union> variant `<raw>`` back into its parts. The raw value may itself
/// hold backticks, so it runs to the last one.
fn parse_unrecognized(message: &str) -> Option<(&'static str, String)> {
    let rest = message.strip_prefix("unrecognized ")?;
    let (union, rest) = rest.split_once(" variant `")?;
    let union = UNION_NAMES.iter().copied().find(|name| *name == union)?;
    let end = rest.rfind('`')?;
    Some((union, rest[..end].to_string()))
}

fn backticked(s: &str) -> Option<&str> {
    let start = s.find('`')? + 1;
    let len = s[start..].find('`')?;
    Some(&s[start..start + len])
}
