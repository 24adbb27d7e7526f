//! The low-level content store contract.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use stocklens_core::DocumentId;

use crate::error::StoreError;

/// An opaque query descriptor: a GROQ query string plus named parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuerySpec {
    pub query: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, JsonValue>,
}

impl QuerySpec {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

/// The JSON-shaped result tree a query evaluates to.
pub type ResultSet = JsonValue;

/// A single mutation, in the store's mutation vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationSpec {
    /// Create a document; fails if the id already exists.
    Create(JsonValue),

    /// Create a document unless one with its id already exists.
    CreateIfNotExists(JsonValue),

    /// Patch an existing document: set and/or unset fields.
    Patch {
        id: DocumentId,
        set: BTreeMap<String, JsonValue>,
        unset: Vec<String>,
    },

    /// Delete every document matching a query.
    DeleteByQuery(String),
}

impl MutationSpec {
    /// Render to the store's wire format (one entry of the `mutations` array).
    pub fn to_wire(&self) -> JsonValue {
        match self {
            MutationSpec::Create(doc) => serde_json::json!({ "create": doc }),
            MutationSpec::CreateIfNotExists(doc) => {
                serde_json::json!({ "createIfNotExists": doc })
            }
            MutationSpec::Patch { id, set, unset } => {
                let mut patch = serde_json::Map::new();
                patch.insert("id".into(), JsonValue::String(id.as_str().to_string()));
                if !set.is_empty() {
                    patch.insert("set".into(), serde_json::json!(set));
                }
                if !unset.is_empty() {
                    patch.insert("unset".into(), serde_json::json!(unset));
                }
                serde_json::json!({ "patch": patch })
            }
            MutationSpec::DeleteByQuery(query) => {
                serde_json::json!({ "delete": { "query": query } })
            }
        }
    }
}

/// Acknowledgment of a committed mutation batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(rename = "transactionId", default)]
    pub transaction_id: Option<String>,

    /// Per-mutation outcomes (document ids), when the store returns them.
    #[serde(default)]
    pub results: Vec<MutationResult>,
}

/// Outcome of one mutation within a committed batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MutationResult {
    pub id: String,

    #[serde(default)]
    pub operation: Option<String>,
}

/// Stateless pass-through to the external document store.
///
/// Implementations perform no validation beyond surfacing store-reported
/// errors unchanged, retain no state between calls, and never retry.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Execute a query and return the JSON result tree.
    async fn fetch(&self, query: &QuerySpec) -> Result<ResultSet, StoreError>;

    /// Commit a batch of mutations.
    async fn mutate(&self, mutations: &[MutationSpec]) -> Result<Ack, StoreError>;
}

#[async_trait]
impl<S> ContentStore for Arc<S>
where
    S: ContentStore + ?Sized,
{
    async fn fetch(&self, query: &QuerySpec) -> Result<ResultSet, StoreError> {
        (**self).fetch(query).await
    }

    async fn mutate(&self, mutations: &[MutationSpec]) -> Result<Ack, StoreError> {
        (**self).mutate(mutations).await
    }
}
