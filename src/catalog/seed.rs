use super::catalog::{Catalog, CatalogError};
use super::product::Product;

/// The demo storefront's six products, in display order.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("1", "Premium Wireless Headphones", "Audio", 299.99, 4.8)
            .with_description(
                "Immersive audio experience with active noise cancellation and premium comfort.",
            )
            .with_image("assets/headphones.jpg")
            .with_review_count(342)
            .with_features([
                "Active Noise Cancellation",
                "40-hour Battery",
                "Premium Sound Quality",
            ]),
        Product::new("2", "Smart Fitness Watch", "Wearables", 399.99, 4.6)
            .with_description(
                "Track your health and fitness with advanced sensors and beautiful OLED display.",
            )
            .with_image("assets/smartwatch.jpg")
            .with_review_count(521)
            .with_features(["Heart Rate Monitor", "GPS Tracking", "Water Resistant"]),
        Product::new("3", "Mechanical RGB Keyboard", "Accessories", 159.99, 4.9)
            .with_description(
                "Professional-grade mechanical keyboard with customizable RGB lighting.",
            )
            .with_image("assets/keyboard.jpg")
            .with_review_count(187)
            .with_features(["Mechanical Switches", "RGB Backlight", "Aluminum Frame"]),
        Product::new("4", "Ergonomic Wireless Mouse", "Accessories", 79.99, 4.7)
            .with_description(
                "Precision gaming mouse with ergonomic design and customizable buttons.",
            )
            .with_image("assets/mouse.jpg")
            .with_review_count(289)
            .with_features(["16000 DPI", "6 Programmable Buttons", "RGB Lighting"]),
        Product::new("5", "Professional Laptop Backpack", "Bags", 89.99, 4.5)
            .with_description(
                "Durable backpack with dedicated laptop compartment and anti-theft features.",
            )
            .with_image("assets/backpack.jpg")
            .with_review_count(156)
            .with_features(["Water Resistant", "USB Charging Port", "Anti-Theft Pocket"]),
        Product::new("6", "Portable Bluetooth Speaker", "Audio", 129.99, 4.8)
            .with_description("Powerful 360-degree sound in a compact, waterproof design.")
            .with_image("assets/speaker.jpg")
            .with_review_count(412)
            .with_features(["360° Sound", "Waterproof", "20-hour Battery"]),
    ]
}

impl Catalog {
    /// The seeded demo catalog.
    pub fn seed() -> Result<Self, CatalogError> {
        Catalog::new(seed_products())
    }
}
