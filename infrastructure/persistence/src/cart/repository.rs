use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::cart::model::CartLine;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

use super::entity::CartLineEntity;

/// The single implicit cart, held in process memory.
#[derive(Default)]
pub struct CartRepositoryInMemory {
    lines: RwLock<Vec<CartLineEntity>>,
}

impl CartRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for CartRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<CartLine>, RepositoryError> {
        let lines = self.lines.read().await;
        Ok(lines.iter().map(|e| e.to_domain()).collect())
    }

    async fn add_product(&self, product: &Product) -> Result<CartLine, RepositoryError> {
        let mut lines = self.lines.write().await;

        if let Some(entity) = lines.iter_mut().find(|e| e.product_id == product.id.value()) {
            let mut line = entity.to_domain();
            line.increment();
            entity.quantity = line.quantity;
            return Ok(line);
        }

        let line = CartLine::for_product(product);
        lines.push(CartLineEntity::from_domain(&line));
        Ok(line)
    }

    async fn delete(&self, product_id: ProductId) -> Result<(), RepositoryError> {
        let mut lines = self.lines.write().await;
        let index = lines
            .iter()
            .position(|e| e.product_id == product_id.value())
            .ok_or(RepositoryError::NotFound)?;

        lines.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str, price: f64) -> Product {
        Product::from_repository(ProductId::new(id), name.to_string(), price)
    }

    #[tokio::test]
    async fn should_start_empty() {
        let repo = CartRepositoryInMemory::new();

        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_append_line_with_quantity_one() {
        let repo = CartRepositoryInMemory::new();

        let line = repo.add_product(&product(1, "Pen", 2.0)).await.unwrap();

        assert_eq!(line.quantity, 1);
        let lines = repo.get_all().await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id, ProductId::new(1));
        assert_eq!(lines[0].name, "Pen");
        assert_eq!(lines[0].price, 2.0);
    }

    #[tokio::test]
    async fn should_increment_quantity_when_same_product_added_twice() {
        let repo = CartRepositoryInMemory::new();
        let pen = product(1, "Pen", 2.0);

        repo.add_product(&pen).await.unwrap();
        let line = repo.add_product(&pen).await.unwrap();

        assert_eq!(line.quantity, 2);
        let lines = repo.get_all().await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[tokio::test]
    async fn should_keep_first_added_order() {
        let repo = CartRepositoryInMemory::new();

        repo.add_product(&product(2, "Mug", 5.0)).await.unwrap();
        repo.add_product(&product(1, "Pen", 2.0)).await.unwrap();
        repo.add_product(&product(2, "Mug", 5.0)).await.unwrap();

        let ids: Vec<ProductId> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|line| line.id)
            .collect();
        assert_eq!(ids, vec![ProductId::new(2), ProductId::new(1)]);
    }

    #[tokio::test]
    async fn should_keep_snapshot_of_product_when_incrementing() {
        let repo = CartRepositoryInMemory::new();

        repo.add_product(&product(1, "Pen", 2.0)).await.unwrap();
        let line = repo
            .add_product(&product(1, "Fountain Pen", 12.5))
            .await
            .unwrap();

        assert_eq!(line.name, "Pen");
        assert_eq!(line.price, 2.0);
    }

    #[tokio::test]
    async fn should_remove_line_when_present() {
        let repo = CartRepositoryInMemory::new();
        repo.add_product(&product(1, "Pen", 2.0)).await.unwrap();
        repo.add_product(&product(2, "Mug", 5.0)).await.unwrap();

        repo.delete(ProductId::new(1)).await.unwrap();

        let lines = repo.get_all().await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id, ProductId::new(2));
    }

    #[tokio::test]
    async fn should_leave_cart_unchanged_when_removing_absent_line() {
        let repo = CartRepositoryInMemory::new();
        repo.add_product(&product(1, "Pen", 2.0)).await.unwrap();

        let result = repo.delete(ProductId::new(7)).await;

        assert_eq!(result.unwrap_err(), RepositoryError::NotFound);
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_count_every_concurrent_addition() {
        let repo = std::sync::Arc::new(CartRepositoryInMemory::new());

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.add_product(&product(1, "Pen", 2.0)).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let lines = repo.get_all().await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 20);
    }
}
