use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use poem::test::TestResponse;
use serde_json::Value;
use tokio::sync::Mutex;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductId};
use business::domain::product::repository::ProductRepository;

/// Repository fake with the same ordering and id rules as the SQL adapter.
pub struct InMemoryProductRepository {
    rows: Mutex<BTreeMap<ProductId, Product>>,
    last_id: Mutex<ProductId>,
    calls: AtomicUsize,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            last_id: Mutex::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of repository operations performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.record_call();
        let mut products: Vec<Product> = self.rows.lock().await.values().cloned().collect();
        products.sort_by(|a, b| b.price.total_cmp(&a.price).then(a.id.cmp(&b.id)));
        Ok(products)
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.record_call();
        self.rows
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        self.record_call();
        let mut last_id = self.last_id.lock().await;
        *last_id += 1;
        let now = Utc::now();
        let stored = Product::from_repository(
            *last_id,
            product.name.clone(),
            product.price,
            product.availability,
            now,
            now,
        );
        self.rows.lock().await.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        self.record_call();
        let mut rows = self.rows.lock().await;
        let row = rows.get_mut(&product.id).ok_or(RepositoryError::NotFound)?;
        *row = product.clone();
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        self.record_call();
        self.rows
            .lock()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

/// Repository whose every call fails as if the database were down.
pub struct FailingProductRepository;

#[async_trait]
impl ProductRepository for FailingProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Err(RepositoryError::DatabaseError)
    }

    async fn get_by_id(&self, _id: ProductId) -> Result<Product, RepositoryError> {
        Err(RepositoryError::DatabaseError)
    }

    async fn create(&self, _product: &NewProduct) -> Result<Product, RepositoryError> {
        Err(RepositoryError::DatabaseError)
    }

    async fn update(&self, _product: &Product) -> Result<Product, RepositoryError> {
        Err(RepositoryError::DatabaseError)
    }

    async fn delete(&self, _id: ProductId) -> Result<(), RepositoryError> {
        Err(RepositoryError::DatabaseError)
    }
}

pub async fn body_json(resp: TestResponse) -> Value {
    resp.0
        .into_body()
        .into_json()
        .await
        .expect("response body should be JSON")
}
