use crate::domain::product::model::{NewProduct, Product, ProductPatch};
use crate::domain::product::value_objects::ProductId;

/// In-memory copy of the product collection for the current session.
///
/// Insertion order is the default display order. Nothing here talks to the
/// network; every operation is synchronous and total.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the collection wholesale.
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    pub fn load(&mut self, products: Vec<Product>) {
        let mut seen = std::collections::HashSet::with_capacity(products.len());
        self.products = products
            .into_iter()
            .filter(|p| seen.insert(p.id))
            .collect();
    }

    /// Assigns the next id and prepends the product.
    pub fn insert(&mut self, fields: NewProduct) -> Product {
        let id = self.next_id();
        let product = Product::from_fields(id, fields);
        self.products.insert(0, product.clone());
        product
    }

    /// Merges `patch` into the product with `id`. Returns `None` when absent.
    pub fn replace(&mut self, id: ProductId, patch: &ProductPatch) -> Option<Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        product.apply(patch);
        Some(product.clone())
    }

    /// Removes the product with `id`. Returns `None` when absent.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn next_id(&self) -> ProductId {
        self.products
            .iter()
            .map(|p| p.id)
            .max()
            .map(|max| max.next())
            .unwrap_or(ProductId::new(1))
    }
}
