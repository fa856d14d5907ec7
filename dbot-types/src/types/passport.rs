//! Telegram Passport: encrypted personal data shared with the bot, and the errors a bot reports
//! back about it.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{discriminator, entity, unrecognized, variant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportData {
    pub data: Vec<EncryptedPassportElement>,
    pub credentials: EncryptedCredentials,
}

impl PassportData {
    pub fn element(&self, kind: &PassportElementType) -> Option<&EncryptedPassportElement> {
        self.data.iter().find(|element| &element.kind == kind)
    }
}

/// File uploaded to Telegram Passport (JPEG, at most 10MB).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportFile {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: i64,
    /// Unix time the file was uploaded.
    pub file_date: i64,
}

/// Kind of a passport element. Unknown literals are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassportElementType {
    PersonalDetails,
    Passport,
    DriverLicense,
    IdentityCard,
    InternalPassport,
    Address,
    UtilityBill,
    BankStatement,
    RentalAgreement,
    PassportRegistration,
    TemporaryRegistration,
    PhoneNumber,
    Email,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedPassportElement {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    /// Base64-encoded encrypted data for personal details, documents and addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<PassportFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_side: Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_side: Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selfie: Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<Vec<PassportFile>>,
    /// Base64-encoded element hash, used in [`PassportElementError::Unspecified`].
    pub hash: String,
}

/// Data required for decrypting and authenticating passport elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedCredentials {
    pub data: String,
    pub hash: String,
    pub secret: String,
}

/// Error in a passport element submitted by the user, tagged by `source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source")]
pub enum PassportElementError {
    #[serde(rename = "data")]
    DataField(PassportElementErrorDataField),
    #[serde(rename = "front_side")]
    FrontSide(PassportElementErrorFrontSide),
    #[serde(rename = "reverse_side")]
    ReverseSide(PassportElementErrorReverseSide),
    #[serde(rename = "selfie")]
    Selfie(PassportElementErrorSelfie),
    #[serde(rename = "file")]
    File(PassportElementErrorFile),
    #[serde(rename = "files")]
    Files(PassportElementErrorFiles),
    #[serde(rename = "translation_file")]
    TranslationFile(PassportElementErrorTranslationFile),
    #[serde(rename = "translation_files")]
    TranslationFiles(PassportElementErrorTranslationFiles),
    #[serde(rename = "unspecified")]
    Unspecified(PassportElementErrorUnspecified),
}

impl PassportElementError {
    /// `source` literals, in declaration order.
    pub const SOURCES: [&'static str; 9] = [
        "data",
        "front_side",
        "reverse_side",
        "selfie",
        "file",
        "files",
        "translation_file",
        "translation_files",
        "unspecified",
    ];

    pub fn source(&self) -> &'static str {
        match self {
            PassportElementError::DataField(_) => "data",
            PassportElementError::FrontSide(_) => "front_side",
            PassportElementError::ReverseSide(_) => "reverse_side",
            PassportElementError::Selfie(_) => "selfie",
            PassportElementError::File(_) => "file",
            PassportElementError::Files(_) => "files",
            PassportElementError::TranslationFile(_) => "translation_file",
            PassportElementError::TranslationFiles(_) => "translation_files",
            PassportElementError::Unspecified(_) => "unspecified",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            PassportElementError::DataField(e) => &e.message,
            PassportElementError::FrontSide(e) => &e.message,
            PassportElementError::ReverseSide(e) => &e.message,
            PassportElementError::Selfie(e) => &e.message,
            PassportElementError::File(e) => &e.message,
            PassportElementError::Files(e) => &e.message,
            PassportElementError::TranslationFile(e) => &e.message,
            PassportElementError::TranslationFiles(e) => &e.message,
            PassportElementError::Unspecified(e) => &e.message,
        }
    }
}

impl<'de> Deserialize<'de> for PassportElementError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let source = discriminator::<D::Error>(&value, "source")?.to_string();
        match source.as_str() {
            "data" => variant(value).map(PassportElementError::DataField),
            "front_side" => variant(value).map(PassportElementError::FrontSide),
            "reverse_side" => variant(value).map(PassportElementError::ReverseSide),
            "selfie" => variant(value).map(PassportElementError::Selfie),
            "file" => variant(value).map(PassportElementError::File),
            "files" => variant(value).map(PassportElementError::Files),
            "translation_file" => variant(value).map(PassportElementError::TranslationFile),
            "translation_files" => variant(value).map(PassportElementError::TranslationFiles),
            "unspecified" => variant(value).map(PassportElementError::Unspecified),
            other => Err(unrecognized::<D::Error>("PassportElementError", other)),
        }
    }
}

/// Error in a data field; resolved when the field's value changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorDataField {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub field_name: String,
    pub data_hash: String,
    pub message: String,
}

/// Problem with the front side of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorFrontSide {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hash: String,
    pub message: String,
}

/// Problem with the reverse side of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorReverseSide {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorSelfie {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hash: String,
    pub message: String,
}

/// Problem with a document scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorFile {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hash: String,
    pub message: String,
}

/// Problem with the list of document scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorFiles {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hashes: Vec<String>,
    pub message: String,
}

/// Problem with one file of a document translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorTranslationFile {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hash: String,
    pub message: String,
}

/// Problem with the translated version of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorTranslationFiles {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hashes: Vec<String>,
    pub message: String,
}

/// Problem not tied to a specific field or file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorUnspecified {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub element_hash: String,
    pub message: String,
}

entity!(
    PassportData,
    PassportFile,
    PassportElementType,
    EncryptedPassportElement,
    EncryptedCredentials,
    PassportElementError,
    PassportElementErrorDataField,
    PassportElementErrorFrontSide,
    PassportElementErrorReverseSide,
    PassportElementErrorSelfie,
    PassportElementErrorFile,
    PassportElementErrorFiles,
    PassportElementErrorTranslationFile,
    PassportElementErrorTranslationFiles,
    PassportElementErrorUnspecified
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Entity;

    #[test]
    fn test_source_table_matches_variants() {
        let error = PassportElementError::Files(PassportElementErrorFiles {
            kind: PassportElementType::UtilityBill,
            file_hashes: vec!["h1".to_string(), "h2".to_string()],
            message: "Scans are blurry".to_string(),
        });
        assert!(PassportElementError::SOURCES.contains(&error.source()));
        assert_eq!(error.message(), "Scans are blurry");
        let value = error.to_value().unwrap();
        assert_eq!(value["source"], "files");
        assert_eq!(value["type"], "utility_bill");
    }

    #[test]
    fn test_missing_source_is_decode_error() {
        let err = PassportElementError::from_json(
            r#"{"type":"passport","file_hash":"h","message":"m"}"#,
        )
        .unwrap_err();
        match err {
            crate::error::ModelError::Decode { entity, field, .. } => {
                assert_eq!(entity, "PassportElementError");
                assert_eq!(field.as_deref(), Some("source"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_element_lookup() {
        let data = PassportData::from_json(
            r#"{"data":[{"type":"email","email":"a@b.c","hash":"x"}],
                "credentials":{"data":"d","hash":"h","secret":"s"}}"#,
        )
        .unwrap();
        let email = data.element(&PassportElementType::Email).unwrap();
        assert_eq!(email.email.as_deref(), Some("a@b.c"));
        assert!(data.element(&PassportElementType::Passport).is_none());
    }
}
