use crate::{
    db::order::{SortField, SortValue},
    serialize::{deserialize_bounded, serialize},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// CursorTokenVersion
///
/// Wire-level cursor token version owned by the cursor protocol boundary.
/// This keeps version parsing and compatibility behavior centralized.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CursorTokenVersion {
    V1,
}

impl CursorTokenVersion {
    const V1_TAG: u8 = 1;

    const fn decode(raw: u8) -> Option<Self> {
        match raw {
            Self::V1_TAG => Some(Self::V1),
            _ => None,
        }
    }

    const fn encode(self) -> u8 {
        match self {
            Self::V1 => Self::V1_TAG,
        }
    }
}

///
/// ContinuationTokenWire
///

#[derive(Deserialize, Serialize)]
struct ContinuationTokenWire {
    version: u8,
    sort_field: SortField,
    sort_value: SortValue,
    id: String,
}

///
/// ContinuationToken
/// Cursor payload bound to the sort field it was minted under.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ContinuationToken {
    sort_field: SortField,
    sort_value: SortValue,
    id: String,
}

impl ContinuationToken {
    pub(crate) const fn new(sort_field: SortField, sort_value: SortValue, id: String) -> Self {
        Self {
            sort_field,
            sort_value,
            id,
        }
    }

    pub(crate) const fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub(crate) fn into_parts(self) -> (SortValue, String) {
        (self.sort_value, self.id)
    }

    pub(crate) fn encode(&self) -> Result<Vec<u8>, ContinuationTokenError> {
        self.encode_with_version(CursorTokenVersion::V1.encode())
    }

    pub(crate) fn decode(bytes: &[u8], max_bytes: usize) -> Result<Self, ContinuationTokenError> {
        let wire: ContinuationTokenWire = deserialize_bounded(bytes, max_bytes)
            .map_err(|err| ContinuationTokenError::Decode(err.to_string()))?;

        // Decode the protocol version first so compatibility behavior remains centralized.
        match CursorTokenVersion::decode(wire.version) {
            Some(CursorTokenVersion::V1) => Ok(Self::new(wire.sort_field, wire.sort_value, wire.id)),
            None => Err(ContinuationTokenError::UnsupportedVersion {
                version: wire.version,
            }),
        }
    }

    fn encode_with_version(&self, version: u8) -> Result<Vec<u8>, ContinuationTokenError> {
        let wire = ContinuationTokenWire {
            version,
            sort_field: self.sort_field,
            sort_value: self.sort_value.clone(),
            id: self.id.clone(),
        };

        serialize(&wire).map_err(|err| ContinuationTokenError::Encode(err.to_string()))
    }

    #[cfg(test)]
    pub(crate) fn encode_with_version_for_test(
        &self,
        version: u8,
    ) -> Result<Vec<u8>, ContinuationTokenError> {
        self.encode_with_version(version)
    }
}

///
/// ContinuationTokenError
/// Cursor token encoding/decoding failures.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ContinuationTokenError {
    #[error("failed to encode continuation token: {0}")]
    Encode(String),

    #[error("failed to decode continuation token: {0}")]
    Decode(String),

    #[error("unsupported continuation token version: {version}")]
    UnsupportedVersion { version: u8 },
}
