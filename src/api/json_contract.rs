use serde::{Deserialize, Serialize};

use crate::backend::Dataset;
use crate::error::{ChartError, ChartResult};

pub const DATASET_JSON_SCHEMA_V1: u32 = 1;

/// Versioned wire shape for handing a bound dataset to an out-of-process
/// charting collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetJsonContractV1 {
    pub schema_version: u32,
    pub dataset: Dataset,
}

impl Dataset {
    pub fn to_json_contract_v1(&self) -> ChartResult<String> {
        let payload = DatasetJsonContractV1 {
            schema_version: DATASET_JSON_SCHEMA_V1,
            dataset: self.clone(),
        };
        serde_json::to_string(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize dataset contract v1: {e}"))
        })
    }

    pub fn from_json_contract_v1(input: &str) -> ChartResult<Self> {
        let payload: DatasetJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse dataset json payload: {e}"))
        })?;
        if payload.schema_version != DATASET_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported dataset schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.dataset)
    }
}
