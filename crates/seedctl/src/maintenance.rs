//! Dataset cleanup and one-off migrations.

use std::collections::BTreeMap;

use anyhow::Context;
use serde_json::Value as JsonValue;

use stocklens_core::DocumentId;
use stocklens_store::{ContentStore, MutationSpec, QuerySpec};

/// Document types in deletion order: variants before products before the
/// taxonomies they reference, so the store never sees a dangling reference.
const CLEAR_ORDER: [&str; 5] = ["variant", "product", "category", "color", "size"];

pub async fn clear<S: ContentStore>(store: &S) -> anyhow::Result<()> {
    for doc_type in CLEAR_ORDER {
        tracing::info!(doc_type, "deleting documents");
        store
            .mutate(&[MutationSpec::DeleteByQuery(format!(
                r#"*[_type == "{doc_type}"]"#
            ))])
            .await?;
    }
    tracing::info!("all documents deleted");
    Ok(())
}

/// Migrate colors from the historical `hex: [..]` array shape to the
/// normalized single-hex string, keeping the first entry.
pub async fn migrate_colors<S: ContentStore>(store: &S) -> anyhow::Result<()> {
    let result = store
        .fetch(&QuerySpec::new(r#"*[_type == "color"]"#))
        .await?;
    let colors: Vec<JsonValue> = serde_json::from_value(result)?;

    let mut patches = Vec::new();
    for color in &colors {
        let Some(hexes) = color["hex"].as_array() else {
            continue;
        };
        let id = color["_id"].as_str().context("color document missing _id")?;
        let first = hexes
            .first()
            .and_then(|v| v.as_str())
            .with_context(|| format!("color {id} has an empty hex array"))?;
        if hexes.len() > 1 {
            tracing::warn!(id, discarded = hexes.len() - 1, "keeping first hex code only");
        }

        let mut set = BTreeMap::new();
        set.insert("hex".to_string(), JsonValue::String(first.to_string()));
        patches.push(MutationSpec::Patch {
            id: DocumentId::new(id)?,
            set,
            unset: Vec::new(),
        });
    }

    if patches.is_empty() {
        tracing::info!("no legacy colors found");
        return Ok(());
    }

    let migrated = patches.len();
    store.mutate(&patches).await?;
    tracing::info!(migrated, "colors migrated to single-hex shape");
    Ok(())
}
