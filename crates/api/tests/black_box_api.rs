use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;

use stocklens_aggregation::Predicate;
use stocklens_catalog::{Category, Product, Reference, Slug, Variant};
use stocklens_core::DocumentId;
use stocklens_store::{CatalogSource, InMemoryCatalog, ProductDetail, StoreError};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(source: Arc<dyn CatalogSource>) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = stocklens_api::app::build_app(source);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Delegates to an in-memory catalog until `fail` is flipped, then reports
/// the store as unreachable. Lets tests exercise the failed-refresh path.
struct FlakyCatalog {
    inner: InMemoryCatalog,
    fail: AtomicBool,
}

impl FlakyCatalog {
    fn new(inner: InMemoryCatalog) -> Self {
        Self {
            inner,
            fail: AtomicBool::new(false),
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogSource for FlakyCatalog {
    async fn products(&self, predicate: &Predicate) -> Result<Vec<Product>, StoreError> {
        self.check()?;
        self.inner.products(predicate).await
    }

    async fn count_products(&self, predicate: &Predicate) -> Result<u64, StoreError> {
        self.check()?;
        self.inner.count_products(predicate).await
    }

    async fn variants(&self) -> Result<Vec<Variant>, StoreError> {
        self.check()?;
        self.inner.variants().await
    }

    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        self.check()?;
        self.inner.categories().await
    }

    async fn product_detail(&self, id: &DocumentId) -> Result<Option<ProductDetail>, StoreError> {
        self.check()?;
        self.inner.product_detail(id).await
    }
}

fn doc_id(s: &str) -> DocumentId {
    DocumentId::new(s).unwrap()
}

fn product(id: &str, name: &str, category: &str) -> Product {
    Product {
        id: doc_id(id),
        name: name.to_string(),
        slug: Some(Slug::new(id)),
        description: String::new(),
        category: Reference::to(doc_id(category)),
        is_featured: false,
        rating: None,
        main_image: None,
        variants: Vec::new(),
    }
}

fn variant(id: &str, product_id: &str, stock: u32) -> Variant {
    Variant {
        id: doc_id(id),
        product: Reference::to(doc_id(product_id)),
        sku: format!("SKU-{id}"),
        color: Reference::to(doc_id("color-black")),
        size: Reference::to(doc_id("size-m")),
        price: 49.99,
        stock,
        images: Vec::new(),
    }
}

fn category(id: &str, name: &str) -> Category {
    Category {
        id: doc_id(id),
        name: name.to_string(),
        image: None,
    }
}

/// prod-1 (hoodies): stocks 0 + 30; prod-2 (jeans): stock 9;
/// prod-3 (shoes): stock 51; t-shirts has no products.
fn fixture() -> InMemoryCatalog {
    InMemoryCatalog::with_documents(
        vec![
            product("prod-1", "Classic Hoodie", "cat-hoodies"),
            product("prod-2", "Slim Jeans", "cat-jeans"),
            product("prod-3", "Trail Shoe", "cat-shoes"),
        ],
        vec![
            variant("variant-1", "prod-1", 0),
            variant("variant-2", "prod-1", 30),
            variant("variant-3", "prod-2", 9),
            variant("variant-4", "prod-3", 51),
        ],
        vec![
            category("cat-hoodies", "Hoodies"),
            category("cat-jeans", "Jeans"),
            category("cat-shoes", "Shoes"),
            category("cat-tshirts", "T-Shirts"),
        ],
    )
}

#[tokio::test]
async fn health_endpoint_is_open() {
    let srv = TestServer::spawn(Arc::new(fixture())).await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn stats_before_any_refresh_reports_no_data() {
    let srv = TestServer::spawn(Arc::new(fixture())).await;

    let res = reqwest::get(format!("{}/dashboard/stats", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "no_data");
}

#[tokio::test]
async fn refresh_computes_and_serves_snapshot() {
    let srv = TestServer::spawn(Arc::new(fixture())).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/dashboard/refresh", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();

    assert_eq!(body["total_products"], 3);
    assert_eq!(body["total_variants"], 4);
    assert_eq!(body["low_stock_variant_count"], 2);
    assert_eq!(body["out_of_stock_count"], 1);

    // Zero-fill: the empty t-shirts category is present with count 0.
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 4);
    let tshirts = categories
        .iter()
        .find(|c| c["name"] == "T-Shirts")
        .expect("t-shirts present");
    assert_eq!(tshirts["product_count"], 0);

    // Ranked ascending by summed variant stock: 9, 30, 51.
    let ranked = body["lowest_stock_products"].as_array().unwrap();
    let names: Vec<&str> = ranked.iter().map(|e| e["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Slim Jeans", "Classic Hoodie", "Trail Shoe"]);

    // GET serves the same snapshot afterwards.
    let res = client
        .get(format!("{}/dashboard/stats", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let served: serde_json::Value = res.json().await.unwrap();
    assert_eq!(served["total_products"], 3);
}

#[tokio::test]
async fn failed_refresh_keeps_previous_snapshot() {
    let flaky = Arc::new(FlakyCatalog::new(fixture()));
    let srv = TestServer::spawn(flaky.clone()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/dashboard/refresh", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    flaky.fail.store(true, Ordering::SeqCst);

    let res = client
        .post(format!("{}/dashboard/refresh", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "store_unavailable");

    // Previous snapshot is still served, undisturbed.
    let res = client
        .get(format!("{}/dashboard/stats", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["total_products"], 3);
}

#[tokio::test]
async fn product_filters_select_by_variant_stock() {
    let srv = TestServer::spawn(Arc::new(fixture())).await;
    let client = reqwest::Client::new();

    let list = |filter: &str| {
        let url = format!("{}/products?filter={filter}", srv.base_url);
        let client = client.clone();
        async move {
            let res = client.get(url).send().await.unwrap();
            assert_eq!(res.status(), StatusCode::OK);
            res.json::<serde_json::Value>().await.unwrap()
        }
    };

    let all = list("all").await;
    assert_eq!(all["total"], 3);

    let low = list("low").await;
    let names: Vec<&str> = low["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Classic Hoodie", "Slim Jeans"]);

    let out = list("out").await;
    assert_eq!(out["total"], 1);
    assert_eq!(out["items"][0]["name"], "Classic Hoodie");

    let high = list("high").await;
    assert_eq!(high["items"][0]["name"], "Trail Shoe");
}

#[tokio::test]
async fn unknown_filter_mode_is_rejected() {
    let srv = TestServer::spawn(Arc::new(fixture())).await;

    let res = reqwest::get(format!("{}/products?filter=everything", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_filter");
}

#[tokio::test]
async fn product_detail_includes_owning_variants() {
    let srv = TestServer::spawn(Arc::new(fixture())).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/products/prod-1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["name"], "Classic Hoodie");
    assert_eq!(body["variants"].as_array().unwrap().len(), 2);

    let res = client
        .get(format!("{}/products/prod-404", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
