//! Seed the data file with sample products.
//!
//! Reads `BOUTIQUE_DATA_FILE` (default `data.json`), creates the file if
//! needed, and populates the catalog with a small set of sample sarees. An
//! already-populated catalog is left alone unless `--force` is given.

use rust_decimal::Decimal;
use tracing::info;

use boutique_core::ProductId;
use boutique_server::models::Product;
use boutique_server::store::{DocumentStore, JsonFileStore};

/// Seed the catalog.
///
/// # Arguments
///
/// * `force` - Replace the catalog even if it already has products
///
/// # Errors
///
/// Returns an error if the data file cannot be read or written.
pub async fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let data_file =
        std::env::var("BOUTIQUE_DATA_FILE").unwrap_or_else(|_| "data.json".to_string());

    let store = JsonFileStore::new(&data_file);
    store.init().await?;

    let mut doc = store.load().await?;
    if !doc.products.is_empty() && !force {
        info!(
            path = %data_file,
            products = doc.products.len(),
            "Catalog already populated, skipping (use --force to replace)"
        );
        return Ok(());
    }

    doc.products = sample_products();
    store.save(&doc).await?;

    info!(path = %data_file, products = doc.products.len(), "Seeded sample products");
    Ok(())
}

/// The sample catalog.
fn sample_products() -> Vec<Product> {
    [
        (
            "Kanchipuram Pattu Saree - Maroon",
            8999,
            "Pattu",
            "Maroon",
            "Traditional Kanchipuram pattu saree with zari border.",
            "https://via.placeholder.com/800x800?text=Kanchipuram+Maroon",
            5,
        ),
        (
            "Soft Silk Saree - Pastel Pink",
            3499,
            "Silk",
            "Pink",
            "Soft silk saree for parties and weddings.",
            "https://via.placeholder.com/800x800?text=Soft+Silk+Pink",
            8,
        ),
        (
            "Banarasi Saree - Gold Zari",
            12999,
            "Banarasi",
            "Gold",
            "Rich Banarasi with intricate floral patterns.",
            "https://via.placeholder.com/800x800?text=Banarasi+Gold",
            3,
        ),
        (
            "Cotton Daily Wear Saree - Blue",
            1199,
            "Cotton",
            "Blue",
            "Comfortable cotton saree for daily wear.",
            "https://via.placeholder.com/800x800?text=Cotton+Blue",
            20,
        ),
    ]
    .into_iter()
    .map(|(name, price, category, color, desc, image, stock)| Product {
        id: ProductId::new(),
        name: name.to_owned(),
        price: Decimal::from(price),
        category: category.to_owned(),
        color: color.to_owned(),
        desc: desc.to_owned(),
        images: vec![image.to_owned()],
        stock,
    })
    .collect()
}
