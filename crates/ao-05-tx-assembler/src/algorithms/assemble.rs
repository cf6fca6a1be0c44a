//! # Assembly
//!
//! Concatenation only: batch order and the order inside each batch are
//! preserved.

use crate::algorithms::TypeRegistry;
use crate::domain::{AssemblerError, BatchOutcome, BulkAssembly, TxBody};
use serde_json::{json, Value};
use shared_types::WriteOperation;

/// Flatten `batches` into one transaction body.
pub fn assemble(batches: &[Vec<WriteOperation>]) -> Result<TxBody, AssemblerError> {
    let messages = batches
        .iter()
        .flatten()
        .map(|op| op.to_any().map_err(AssemblerError::from))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TxBody {
        messages,
        memo: String::new(),
    })
}

/// Assemble the successful outcomes and collect the failures.
pub fn assemble_outcomes(outcomes: Vec<BatchOutcome>) -> Result<BulkAssembly, AssemblerError> {
    let mut batches = Vec::with_capacity(outcomes.len());
    let mut included = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            BatchOutcome::Built {
                asset_id,
                operations,
            } => {
                included.push(asset_id);
                batches.push(operations);
            }
            BatchOutcome::Failed(failure) => failures.push(failure),
        }
    }
    Ok(BulkAssembly {
        tx_body: assemble(&batches)?,
        included,
        failures,
    })
}

impl TxBody {
    /// Pretty JSON with every message tagged by `@type`.
    pub fn to_json(&self, registry: &TypeRegistry) -> Result<String, AssemblerError> {
        let messages = self
            .messages
            .iter()
            .map(|any| registry.render(any))
            .collect::<Result<Vec<Value>, _>>()?;
        let body = json!({
            "messages": messages,
            "memo": self.memo,
        });
        Ok(serde_json::to_string_pretty(&body)?)
    }

    /// Typed write operations, in message order.
    pub fn decode_operations(
        &self,
        registry: &TypeRegistry,
    ) -> Result<Vec<WriteOperation>, AssemblerError> {
        self.messages.iter().map(|any| registry.decode(any)).collect()
    }
}
