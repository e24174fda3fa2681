use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::ProductId;

use super::entity::ProductEntity;

struct ProductTable {
    next_id: ProductId,
    rows: Vec<ProductEntity>,
}

impl ProductTable {
    fn push(&mut self, draft: &ProductDraft) -> Product {
        let product = Product::from_draft(self.next_id, draft.clone());
        self.next_id = self.next_id.next();
        self.rows.push(ProductEntity::from_domain(&product));
        product
    }
}

/// Product catalog held in process memory.
///
/// Ids come from a counter stored next to the rows. The counter only moves
/// forward, so deleting the newest product never frees its id.
pub struct ProductRepositoryInMemory {
    table: RwLock<ProductTable>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Builds a catalog pre-filled with `drafts`, numbered from 1 in order.
    pub fn with_products(drafts: Vec<ProductDraft>) -> Self {
        let mut table = ProductTable {
            next_id: ProductId::FIRST,
            rows: Vec::with_capacity(drafts.len()),
        };
        for draft in &drafts {
            table.push(draft);
        }

        Self {
            table: RwLock::new(table),
        }
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().map(|e| e.to_domain()).collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let table = self.table.read().await;
        table
            .rows
            .iter()
            .find(|e| e.id == id.value())
            .map(|e| e.to_domain())
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let mut table = self.table.write().await;
        Ok(table.push(draft))
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut table = self.table.write().await;
        let entity = table
            .rows
            .iter_mut()
            .find(|e| e.id == product.id.value())
            .ok_or(RepositoryError::NotFound)?;

        entity.name = product.name.clone();
        entity.price = product.price;
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut table = self.table.write().await;
        let index = table
            .rows
            .iter()
            .position(|e| e.id == id.value())
            .ok_or(RepositoryError::NotFound)?;

        table.rows.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn draft(name: &str, price: f64) -> ProductDraft {
        ProductDraft::new(Some(name.to_string()), Some(price)).unwrap()
    }

    #[tokio::test]
    async fn should_assign_first_id_when_catalog_empty() {
        let repo = ProductRepositoryInMemory::new();

        let product = repo.insert(&draft("Pen", 2.0)).await.unwrap();

        assert_eq!(product.id, ProductId::new(1));
    }

    #[tokio::test]
    async fn should_not_reuse_id_of_deleted_product() {
        let repo = ProductRepositoryInMemory::new();

        let pen = repo.insert(&draft("Pen", 2.0)).await.unwrap();
        let mug = repo.insert(&draft("Mug", 5.0)).await.unwrap();
        repo.delete(pen.id).await.unwrap();
        let cup = repo.insert(&draft("Cup", 3.0)).await.unwrap();

        assert_eq!(pen.id, ProductId::new(1));
        assert_eq!(mug.id, ProductId::new(2));
        assert_eq!(cup.id, ProductId::new(3));
        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Mug", "Cup"]);
    }

    #[tokio::test]
    async fn should_not_reuse_id_after_deleting_last_product() {
        let repo = ProductRepositoryInMemory::new();

        let pen = repo.insert(&draft("Pen", 2.0)).await.unwrap();
        repo.delete(pen.id).await.unwrap();
        let mug = repo.insert(&draft("Mug", 5.0)).await.unwrap();

        assert_eq!(mug.id, ProductId::new(2));
    }

    #[tokio::test]
    async fn should_number_seed_products_in_order() {
        let repo = ProductRepositoryInMemory::with_products(vec![
            draft("Pen", 2.0),
            draft("Mug", 5.0),
        ]);

        let products = repo.get_all().await.unwrap();
        assert_eq!(products[0].id, ProductId::new(1));
        assert_eq!(products[1].id, ProductId::new(2));

        let next = repo.insert(&draft("Cup", 3.0)).await.unwrap();
        assert_eq!(next.id, ProductId::new(3));
    }

    #[tokio::test]
    async fn should_return_not_found_when_getting_unknown_id() {
        let repo = ProductRepositoryInMemory::new();

        let result = repo.get_by_id(ProductId::new(1)).await;

        assert_eq!(result.unwrap_err(), RepositoryError::NotFound);
    }

    #[tokio::test]
    async fn should_overwrite_name_and_price_in_place() {
        let repo = ProductRepositoryInMemory::with_products(vec![
            draft("Pen", 2.0),
            draft("Mug", 5.0),
        ]);

        repo.update(&Product::from_repository(
            ProductId::new(1),
            "Fountain Pen".to_string(),
            12.5,
        ))
        .await
        .unwrap();

        let products = repo.get_all().await.unwrap();
        assert_eq!(products[0].name, "Fountain Pen");
        assert_eq!(products[0].price, 12.5);
        assert_eq!(products[1].name, "Mug");
    }

    #[tokio::test]
    async fn should_leave_catalog_unchanged_when_updating_unknown_id() {
        let repo = ProductRepositoryInMemory::with_products(vec![draft("Pen", 2.0)]);

        let result = repo
            .update(&Product::from_repository(
                ProductId::new(9),
                "Ghost".to_string(),
                1.0,
            ))
            .await;

        assert_eq!(result.unwrap_err(), RepositoryError::NotFound);
        let products = repo.get_all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Pen");
        assert_eq!(products[0].price, 2.0);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_unknown_id() {
        let repo = ProductRepositoryInMemory::with_products(vec![draft("Pen", 2.0)]);

        let result = repo.delete(ProductId::new(2)).await;

        assert_eq!(result.unwrap_err(), RepositoryError::NotFound);
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_hand_out_distinct_ids_under_concurrent_inserts() {
        let repo = std::sync::Arc::new(ProductRepositoryInMemory::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert(&draft(&format!("Item {i}"), 1.0))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }

    proptest! {
        #[test]
        fn should_keep_created_minus_deleted_products(
            created in 1usize..20,
            deletions in proptest::collection::btree_set(1u64..20, 0..20),
        ) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            runtime.block_on(async {
                let repo = ProductRepositoryInMemory::new();
                let mut max_id = 0;
                for i in 0..created {
                    let product = repo.insert(&draft(&format!("P{i}"), 1.0)).await.unwrap();
                    prop_assert!(product.id.value() > max_id);
                    max_id = product.id.value();
                }

                let mut deleted = 0;
                for id in &deletions {
                    if repo.delete(ProductId::new(*id)).await.is_ok() {
                        deleted += 1;
                    }
                }

                let expected = deletions.iter().filter(|id| **id as usize <= created).count();
                prop_assert_eq!(deleted, expected);
                prop_assert_eq!(repo.get_all().await.unwrap().len(), created - deleted);
                Ok::<(), TestCaseError>(())
            })?;
        }
    }
}
