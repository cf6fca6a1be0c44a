//! # Domain Entities

use crate::domain::AssemblerError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use shared_types::{Any, ErrorCode, HasErrorCode, WriteOperation};
use std::fmt::Display;
use uuid::Uuid;

/// Unsigned transaction body: packed messages plus a memo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxBody {
    /// Messages in submission order.
    pub messages: Vec<Any>,
    /// Free-form memo.
    pub memo: String,
}

impl TxBody {
    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the body carries no message.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Binary form.
    pub fn encode(&self) -> Result<Vec<u8>, AssemblerError> {
        Ok(bincode::serialize(self)?)
    }

    /// Parse the binary form.
    pub fn decode(bytes: &[u8]) -> Result<Self, AssemblerError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// One base64 string per encoded message.
    pub fn to_base64_messages(&self) -> Result<Vec<String>, AssemblerError> {
        self.messages
            .iter()
            .map(|any| Ok(STANDARD.encode(bincode::serialize(any)?)))
            .collect()
    }
}

/// Per-asset failure surfaced by a bulk assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFailure {
    /// Asset that failed.
    pub asset_id: Uuid,
    /// Stable error identifier.
    pub code: ErrorCode,
    /// Human-readable error text.
    pub message: String,
}

/// Result of storing and building one asset of a bulk request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Batch built successfully.
    Built {
        /// Asset the batch describes.
        asset_id: Uuid,
        /// Write operations in builder order.
        operations: Vec<WriteOperation>,
    },
    /// Asset failed before a batch could be built.
    Failed(AssetFailure),
}

impl BatchOutcome {
    /// Successful outcome.
    pub fn built(asset_id: Uuid, operations: Vec<WriteOperation>) -> Self {
        BatchOutcome::Built {
            asset_id,
            operations,
        }
    }

    /// Failed outcome carrying the error's stable code.
    pub fn failed<E: HasErrorCode + Display>(asset_id: Uuid, error: &E) -> Self {
        BatchOutcome::Failed(AssetFailure {
            asset_id,
            code: error.code(),
            message: error.to_string(),
        })
    }

    /// Asset this outcome belongs to.
    pub fn asset_id(&self) -> Uuid {
        match self {
            BatchOutcome::Built { asset_id, .. } => *asset_id,
            BatchOutcome::Failed(f) => f.asset_id,
        }
    }
}

/// Transaction for the successful assets of a bulk request, plus the
/// failures that were left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAssembly {
    /// Messages of every included asset, in input order.
    pub tx_body: TxBody,
    /// Assets whose batches are in `tx_body`.
    pub included: Vec<Uuid>,
    /// Assets left out, in input order.
    pub failures: Vec<AssetFailure>,
}

impl BulkAssembly {
    /// Whether every asset of the request is included.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of assets in the request.
    pub fn total(&self) -> usize {
        self.included.len() + self.failures.len()
    }
}
