//! Compact string encoding for structured state (CBOR, then URL-safe base64).

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};


/// Any serde type as a string, through `Display` / `FromStr`.
///
/// The bytes are CBOR rather than JSON so that field layout stays compact, and
/// the URL-safe base64 alphabet means the same string can sit in local storage
/// or in a query value without further escaping.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct EncodedParam<T>(pub T);

impl <T> From<T> for EncodedParam<T> {
    fn from(value: T) -> Self {
        EncodedParam(value)
    }
}

impl<T: Serialize> Display for EncodedParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(&self.0, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum EncodedParamError {
    DecodeError(base64::DecodeError),
    CiboriumError(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for EncodedParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "Failed to decode base64: {}", err),
            Self::CiboriumError(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl std::error::Error for EncodedParamError {}

impl<T: for<'de> Deserialize<'de>> FromStr for EncodedParam<T> {
    type Err = EncodedParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE
            .decode(s.trim().as_bytes())
            .map_err(EncodedParamError::DecodeError)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(bytes))
            .map_err(EncodedParamError::CiboriumError)?;
        Ok(EncodedParam(parsed))
    }
}
