use storefront_core::cart::{Cart, CartChange, CartError, CartStore, CheckoutSummary};
use storefront_core::catalog::{seed_products, ProductId};
use tempfile::tempdir;

#[test]
fn adding_twice_increments_quantity() {
    let products = seed_products();
    let mut cart = Cart::new();

    assert_eq!(cart.add(&products[0]), CartChange::Added);
    assert_eq!(cart.add(&products[0]), CartChange::QuantityIncreased);
    assert_eq!(cart.add(&products[3]), CartChange::Added);

    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.get(&products[0].id).unwrap().quantity, 2);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.items()[1].product.id.as_str(), "4");
}

#[test]
fn update_quantity_sets_or_removes() {
    let products = seed_products();
    let mut cart = Cart::new();
    cart.add(&products[1]);
    cart.add(&products[2]);

    assert_eq!(
        cart.update_quantity(&products[1].id, 5),
        Ok(CartChange::QuantityUpdated)
    );
    assert_eq!(cart.get(&products[1].id).unwrap().quantity, 5);

    assert_eq!(cart.update_quantity(&products[2].id, 0), Ok(CartChange::Removed));
    assert!(cart.get(&products[2].id).is_none());

    let missing = ProductId::new("nope");
    assert_eq!(
        cart.update_quantity(&missing, 3),
        Err(CartError::UnknownProduct(missing.clone()))
    );
}

#[test]
fn remove_and_clear() {
    let products = seed_products();
    let mut cart = Cart::new();
    cart.add(&products[0]);
    cart.add(&products[5]);

    assert!(cart.remove(&products[0].id).is_some());
    assert!(cart.remove(&products[0].id).is_none());
    assert_eq!(cart.items().len(), 1);

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total(), 0.0);
}

#[test]
fn checkout_summary_rounds_to_cents() {
    let products = seed_products();
    let mut cart = Cart::new();
    cart.add(&products[0]); // 299.99
    cart.add(&products[3]); // 79.99
    cart.add(&products[3]);

    let summary = CheckoutSummary::from_cart(&cart);

    assert!((summary.subtotal - 459.97).abs() < 1e-9);
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.amount_minor_units, 45_997);
}

#[test]
fn cart_blob_is_flat_and_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cart.json");
    let products = seed_products();

    let mut store = CartStore::open(&path).unwrap();
    assert!(store.cart().is_empty());
    store.cart_mut().add(&products[5]);
    store.cart_mut().add(&products[5]);
    store.persist().unwrap();

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[0]["id"], "6");
    assert_eq!(raw[0]["quantity"], 2);
    assert_eq!(raw[0]["reviews"], 412);

    let reopened = CartStore::open(&path).unwrap();
    assert_eq!(reopened.cart(), store.cart());
}
