//! Randomized demo-data seeding.
//!
//! Base documents (categories, colors, sizes) use fixed ids and
//! create-if-not-exists, so reseeding is idempotent for them. Products are
//! created fresh each run: create the product, create its variants, then
//! patch the product's variant reference list — one mutation batch per
//! product, committed atomically by the store.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use stocklens_catalog::SizeCode;
use stocklens_core::DocumentId;
use stocklens_store::{ContentStore, MutationSpec};

const CATEGORIES: [(&str, &str); 4] = [
    ("cat-hoodies", "Hoodies"),
    ("cat-tshirts", "T-Shirts"),
    ("cat-jeans", "Jeans"),
    ("cat-shoes", "Shoes"),
];

const COLORS: [(&str, &str, &str); 7] = [
    ("color-black", "Black", "#000000"),
    ("color-white", "White", "#FFFFFF"),
    ("color-red", "Red", "#FF0000"),
    ("color-blue", "Blue", "#0000FF"),
    ("color-green", "Green", "#008000"),
    ("color-golden-fire", "Golden Fire", "#FFD700"),
    ("color-arctic", "Arctic", "#B3D9FF"),
];

const ADJECTIVES: [&str; 8] = [
    "Classic", "Slim", "Heavy", "Urban", "Coastal", "Vintage", "Bold", "Quiet",
];
const NOUNS: [&str; 8] = [
    "Hoodie", "Tee", "Jeans", "Sneaker", "Jacket", "Pullover", "Chino", "Boot",
];

pub async fn run<S: ContentStore>(store: &S, product_count: usize) -> anyhow::Result<()> {
    tracing::info!("seeding base documents");
    store.mutate(&base_mutations()).await?;

    let mut rng = rand::thread_rng();
    for i in 0..product_count {
        let batch = product_batch(&mut rng)?;
        store.mutate(&batch).await?;
        tracing::info!(
            product = i + 1,
            of = product_count,
            // batch = product create + variant creates + one patch
            variants = batch.len() - 2,
            "created product"
        );
    }

    tracing::info!("seeding complete");
    Ok(())
}

fn base_mutations() -> Vec<MutationSpec> {
    let mut mutations = Vec::new();

    for (id, name) in CATEGORIES {
        mutations.push(MutationSpec::CreateIfNotExists(serde_json::json!({
            "_id": id,
            "_type": "category",
            "name": name,
        })));
    }
    for (id, name, hex) in COLORS {
        mutations.push(MutationSpec::CreateIfNotExists(serde_json::json!({
            "_id": id,
            "_type": "color",
            "name": name,
            "hex": hex,
        })));
    }
    for code in SizeCode::ALL {
        mutations.push(MutationSpec::CreateIfNotExists(serde_json::json!({
            "_id": format!("size-{}", code.as_str().to_lowercase()),
            "_type": "size",
            "name": code,
        })));
    }

    mutations
}

/// Build the create-product + create-variants + patch batch for one product.
fn product_batch(rng: &mut impl Rng) -> anyhow::Result<Vec<MutationSpec>> {
    let product_id = format!("prod-{}", Uuid::now_v7().simple());
    let name = format!(
        "{} {}",
        ADJECTIVES.choose(rng).unwrap(),
        NOUNS.choose(rng).unwrap()
    );
    let slug = slugify(&name, rng);
    let category = CATEGORIES.choose(rng).unwrap().0;

    let mut batch = vec![MutationSpec::Create(serde_json::json!({
        "_id": product_id,
        "_type": "product",
        "name": name,
        "slug": {"_type": "slug", "current": slug},
        "description": format!("{name} from the seeded demo catalog."),
        "category": reference(category),
        "isFeatured": rng.gen_bool(0.25),
        "rating": round2(rng.gen_range(3.0..5.0)),
        "variants": [],
    }))];

    let variant_count = rng.gen_range(2..=4);
    let mut variant_refs = Vec::new();
    for _ in 0..variant_count {
        let variant_id = format!("variant-{}", Uuid::now_v7().simple());
        batch.push(MutationSpec::Create(serde_json::json!({
            "_id": variant_id,
            "_type": "variant",
            "product": reference(&product_id),
            "sku": Uuid::now_v7().to_string(),
            "color": reference(COLORS.choose(rng).unwrap().0),
            "size": reference(&format!(
                "size-{}",
                SizeCode::ALL.choose(rng).unwrap().as_str().to_lowercase()
            )),
            "price": round2(rng.gen_range(20.0..100.0)),
            "stock": rng.gen_range(0..=100u32),
        })));
        variant_refs.push(keyed_reference(&variant_id));
    }

    let mut set = BTreeMap::new();
    set.insert("variants".to_string(), JsonValue::Array(variant_refs));
    batch.push(MutationSpec::Patch {
        id: DocumentId::new(product_id)?,
        set,
        unset: Vec::new(),
    });

    Ok(batch)
}

fn reference(id: &(impl AsRef<str> + ?Sized)) -> JsonValue {
    serde_json::json!({"_type": "reference", "_ref": id.as_ref()})
}

fn keyed_reference(id: &str) -> JsonValue {
    serde_json::json!({
        "_type": "reference",
        "_ref": id,
        "_key": Uuid::now_v7().simple().to_string(),
    })
}

fn slugify(name: &str, rng: &mut impl Rng) -> String {
    let base: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let suffix: String = (0..4)
        .map(|_| rng.sample(rand::distributions::Alphanumeric) as char)
        .collect();
    format!("{base}-{}", suffix.to_lowercase())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
