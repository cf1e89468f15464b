use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Reply to an index create call
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct IndicesCreateResponse {
    /// Whether the cluster acknowledged the request
    pub acknowledged: bool,
    /// Whether the required shard copies were started before timing out
    pub shards_acknowledged: bool,
    /// Name of the created index
    pub index: String,
}

/// Reply to an index delete call
///
/// With `ignore_unavailable` set, deleting a missing index also comes back
/// as `acknowledged: true`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct IndicesDeleteResponse {
    /// Whether the cluster acknowledged the request
    pub acknowledged: bool,
}

/// Shard accounting attached to document write replies
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ShardStats {
    /// Shard copies the operation was attempted on
    pub total: u32,
    /// Shard copies the operation succeeded on
    pub successful: u32,
    /// Shard copies the operation failed on
    pub failed: u32,
}

/// Reply to a document create or delete call
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DocumentResponse {
    /// Index the document lives in
    #[serde(rename = "_index")]
    pub index: String,
    /// Document identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Document version after the operation
    #[serde(rename = "_version")]
    pub version: u64,
    /// Outcome of the operation: `created`, `deleted` or `not_found`
    pub result: String,
    /// Shard accounting for the operation
    #[serde(rename = "_shards")]
    pub shards: ShardStats,
    /// Sequence number assigned to the operation
    #[serde(rename = "_seq_no")]
    pub seq_no: u64,
    /// Primary term at the time of the operation
    #[serde(rename = "_primary_term")]
    pub primary_term: u64,
}
