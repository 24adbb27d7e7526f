//! GROQ query construction.
//!
//! Query strings mirror the ones the studio's desk structure and dashboard
//! ran. Two reference directions are used: product selection walks
//! parent→children via reverse lookup (`references(^._id)`), while the
//! product detail projection walks child→parent via the variant's explicit
//! `product` reference field.

use stocklens_aggregation::Predicate;

use crate::gateway::QuerySpec;

pub const VARIANTS_QUERY: &str = r#"*[_type == "variant"]"#;
pub const CATEGORIES_QUERY: &str = r#"*[_type == "category"]"#;

/// Filter expression selecting products that match a predicate.
pub fn product_filter(predicate: &Predicate) -> String {
    match *predicate {
        Predicate::Any => r#"*[_type == "product"]"#.to_string(),
        Predicate::AnyVariantStockBelow(limit) => stock_filter("<", limit),
        Predicate::AnyVariantStockEquals(value) => stock_filter("==", value),
        Predicate::AnyVariantStockAbove(floor) => stock_filter(">", floor),
    }
}

fn stock_filter(op: &str, bound: u32) -> String {
    format!(
        r#"*[_type == "product" && count(*[_type == "variant" && references(^._id) && stock {op} {bound}]) > 0]"#
    )
}

/// Count of products matching a predicate.
pub fn product_count(predicate: &Predicate) -> String {
    format!("count({})", product_filter(predicate))
}

/// One product plus its owning variants, in a single round trip.
///
/// The nested sub-query projects the full variant documents under
/// `variantDocs` (the plain `variants` field would collide with the
/// product's own reference array).
pub fn product_detail(id: &str) -> QuerySpec {
    QuerySpec::new(
        r#"*[_type == "product" && _id == $id][0]{..., "variantDocs": *[_type == "variant" && product._ref == ^._id]}"#,
    )
    .with_param("id", id)
}
