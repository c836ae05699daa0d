//! Product catalog service.

use rust_decimal::Decimal;

use boutique_core::ProductId;

use crate::error::AppError;
use crate::models::Product;
use crate::models::product::DEFAULT_CATEGORY;
use crate::store::DocumentStore;

/// Sort directive for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    /// Parse the wire value; anything unrecognized means "no sort".
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price_asc" => Some(Self::PriceAsc),
            "price_desc" => Some(Self::PriceDesc),
            _ => None,
        }
    }
}

/// Catalog listing filters. All fields are independently optional and
/// compose with logical AND.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive substring match against name or description.
    pub q: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Minimum price (inclusive).
    pub min_price: Option<Decimal>,
    /// Maximum price (inclusive).
    pub max_price: Option<Decimal>,
    /// Price sort; `None` preserves store order.
    pub sort: Option<SortOrder>,
}

/// Fields for a new product. Omitted fields take catalog defaults.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub category: Option<String>,
    pub color: Option<String>,
    pub desc: Option<String>,
    pub images: Option<Vec<String>>,
    pub stock: Option<u32>,
}

/// Partial update: only present fields are applied.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub desc: Option<String>,
    pub images: Option<Vec<String>>,
    pub stock: Option<u32>,
}

/// Product catalog service.
pub struct CatalogService<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// List products matching the filter, in store order unless sorted.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the document cannot be loaded.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError> {
        let doc = self.store.load().await?;
        let mut list = doc.products;

        if let Some(q) = filter.q.as_deref().filter(|q| !q.is_empty()) {
            let q = q.to_lowercase();
            list.retain(|p| {
                p.name.to_lowercase().contains(&q) || p.desc.to_lowercase().contains(&q)
            });
        }
        if let Some(category) = filter.category.as_deref().filter(|c| !c.is_empty()) {
            list.retain(|p| p.category == category);
        }
        if let Some(min) = filter.min_price {
            list.retain(|p| p.price >= min);
        }
        if let Some(max) = filter.max_price {
            list.retain(|p| p.price <= max);
        }
        match filter.sort {
            Some(SortOrder::PriceAsc) => list.sort_by(|a, b| a.price.cmp(&b.price)),
            Some(SortOrder::PriceDesc) => list.sort_by(|a, b| b.price.cmp(&a.price)),
            None => {}
        }

        Ok(list)
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the ID is absent.
    pub async fn get(&self, id: ProductId) -> Result<Product, AppError> {
        let doc = self.store.load().await?;
        doc.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Not found".to_string()))
    }

    /// Create a product, assigning a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the price is negative.
    pub async fn create(&self, new: NewProduct) -> Result<Product, AppError> {
        if new.price < Decimal::ZERO {
            return Err(AppError::Validation(
                "price must be non-negative".to_string(),
            ));
        }

        let product = Product {
            id: ProductId::new(),
            name: new.name,
            price: new.price,
            category: new
                .category
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
            color: new.color.unwrap_or_default(),
            desc: new.desc.unwrap_or_default(),
            images: new.images.unwrap_or_default(),
            stock: new.stock.unwrap_or(0),
        };

        let mut doc = self.store.load().await?;
        doc.products.push(product.clone());
        self.store.save(&doc).await?;
        Ok(product)
    }

    /// Apply a partial update to an existing product.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the ID is absent and
    /// `AppError::Validation` if the new price is negative.
    pub async fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, AppError> {
        if patch.price.is_some_and(|p| p < Decimal::ZERO) {
            return Err(AppError::Validation(
                "price must be non-negative".to_string(),
            ));
        }

        let mut doc = self.store.load().await?;
        let product = doc
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Not found".to_string()))?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(color) = patch.color {
            product.color = color;
        }
        if let Some(desc) = patch.desc {
            product.desc = desc;
        }
        if let Some(images) = patch.images {
            product.images = images;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }

        let updated = product.clone();
        self.store.save(&doc).await?;
        Ok(updated)
    }

    /// Delete a product. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the document cannot be rewritten.
    pub async fn delete(&self, id: ProductId) -> Result<(), AppError> {
        let mut doc = self.store.load().await?;
        doc.products.retain(|p| p.id != id);
        self.store.save(&doc).await?;
        Ok(())
    }
}
