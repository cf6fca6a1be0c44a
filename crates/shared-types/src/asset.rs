//! # Asset Payload
//!
//! The caller-supplied asset and the content hash the object store assigns
//! to its encrypted envelope.

use crate::errors::TypesError;
use crate::messages::Message;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Asset type of a file wrapped as an NFT-like record.
pub const FILE_NFT_TYPE: &str = "FileNFT";

/// Extension key: original filename.
pub const NFT_FILENAME_KEY: &str = "nft_filename";
/// Extension key: byte size.
pub const NFT_SIZE_KEY: &str = "nft_size";
/// Extension key: MIME type.
pub const NFT_CONTENT_TYPE_KEY: &str = "nft_content_type";
/// Extension key: raw file bytes.
pub const NFT_BYTES_KEY: &str = "nft_bytes";

/// Value stored in the asset extension map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetValue {
    /// UTF-8 string.
    String(String),
    /// Signed integer.
    Int64(i64),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

/// Structured asset payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset identity.
    pub id: Uuid,
    /// Free-form classifier, e.g. `heloc` or `FileNFT`.
    #[serde(default)]
    pub asset_type: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Extension map.
    #[serde(default)]
    pub kv: BTreeMap<String, AssetValue>,
}

impl Asset {
    /// Parse an asset from JSON.
    pub fn from_json(json: &str) -> Result<Self, TypesError> {
        serde_json::from_str(json).map_err(|e| TypesError::InvalidAssetPayload(e.to_string()))
    }

    /// Parse an asset from its binary encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypesError> {
        <Self as Message>::decode(bytes)
            .map_err(|e| TypesError::InvalidAssetPayload(e.to_string()))
    }

    /// Wrap a file as an NFT-like asset.
    pub fn file_nft(
        id: Uuid,
        filename: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Self {
        let mut kv = BTreeMap::new();
        kv.insert(
            NFT_FILENAME_KEY.to_string(),
            AssetValue::String(filename.to_string()),
        );
        kv.insert(
            NFT_SIZE_KEY.to_string(),
            AssetValue::Int64(i64::try_from(bytes.len()).unwrap_or(i64::MAX)),
        );
        kv.insert(
            NFT_CONTENT_TYPE_KEY.to_string(),
            AssetValue::String(
                content_type
                    .unwrap_or("application/octet-stream")
                    .to_string(),
            ),
        );
        kv.insert(NFT_BYTES_KEY.to_string(), AssetValue::Bytes(bytes));
        Self {
            id,
            asset_type: FILE_NFT_TYPE.to_string(),
            name: filename.to_string(),
            description: String::new(),
            kv,
        }
    }

    /// Classifier, if the asset carries a non-blank one.
    pub fn classifier(&self) -> Option<&str> {
        let trimmed = self.asset_type.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

impl Message for Asset {
    const TYPE_URL: &'static str = "/tech.figure.asset.v1beta1.Asset";
}

/// Identifier the object store assigns to a stored envelope.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(Vec<u8>);

impl ContentHash {
    /// Wrap raw hash bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Parse the base64 form.
    pub fn from_base64(s: &str) -> Result<Self, TypesError> {
        STANDARD
            .decode(s.trim())
            .map(Self)
            .map_err(|e| TypesError::InvalidContentHash(e.to_string()))
    }

    /// Base64 form.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self.to_base64())
    }
}

impl FromStr for ContentHash {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base64(s)
    }
}

impl Serialize for ContentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_base64())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for ContentHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Self::from_base64(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = serde_bytes_vec(deserializer)?;
            Ok(Self(bytes))
        }
    }
}

fn serde_bytes_vec<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    struct BytesVisitor;

    impl<'de> serde::de::Visitor<'de> for BytesVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("hash bytes")
        }

        fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
            Ok(v.to_vec())
        }

        fn visit_byte_buf<E: serde::de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_seq<A: serde::de::SeqAccess<'de>>(
            self,
            mut seq: A,
        ) -> Result<Self::Value, A::Error> {
            let mut out = Vec::new();
            while let Some(b) = seq.next_element::<u8>()? {
                out.push(b);
            }
            Ok(out)
        }
    }

    deserializer.deserialize_bytes(BytesVisitor)
}
