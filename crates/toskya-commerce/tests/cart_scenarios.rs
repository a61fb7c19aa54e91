//! End-to-end cart and checkout scenarios.

use toskya_commerce::prelude::*;

fn clasica() -> Product {
    Product::new(
        ProductId::new(1),
        "Toskya clasica",
        Money::from_decimal(7500.0, Currency::ARS),
    )
}

fn fresh() -> Product {
    Product::new(
        ProductId::new(2),
        "Fresh Toskya",
        Money::from_decimal(8300.0, Currency::ARS),
    )
}

fn add_simple(state: CartState, product: &Product) -> CartState {
    reduce(state, CartAction::AddItem(CartEntry::new(product, Some(Size::Simple))))
}

fn quantities(state: &CartState) -> Vec<(u32, i64)> {
    state
        .items
        .iter()
        .map(|i| (i.key.product_id.get(), i.quantity))
        .collect()
}

#[test]
fn add_update_remove_walkthrough() {
    let product = clasica();
    let key = LineKey::new(product.id, Some(Size::Simple));

    let state = add_simple(CartState::new(Currency::ARS), &product);
    assert_eq!(quantities(&state), vec![(1, 1)]);
    assert_eq!(state.total, Money::from_decimal(7500.0, Currency::ARS));

    let state = add_simple(state, &product);
    assert_eq!(quantities(&state), vec![(1, 2)]);
    assert_eq!(state.total, Money::from_decimal(15000.0, Currency::ARS));

    let state = reduce(state, CartAction::UpdateQuantity { key, quantity: 5 });
    assert_eq!(quantities(&state), vec![(1, 5)]);
    assert_eq!(state.total, Money::from_decimal(37500.0, Currency::ARS));

    let state = reduce(state, CartAction::RemoveItem(key));
    assert!(state.items.is_empty());
    assert_eq!(state.total, Money::zero(Currency::ARS));
}

#[test]
fn update_preserves_order() {
    let a = clasica();
    let b = fresh();

    let state = add_simple(add_simple(CartState::default(), &a), &b);
    let state = reduce(
        state,
        CartAction::UpdateQuantity {
            key: LineKey::new(a.id, Some(Size::Simple)),
            quantity: 3,
        },
    );

    assert_eq!(quantities(&state), vec![(1, 3), (2, 1)]);
}

#[test]
fn empty_checkout_produces_nothing() {
    let config = CheckoutConfig::new("5492281378685");
    let state = CartState::default();

    assert_eq!(order_summary(&state), None);
    assert_eq!(handoff_link(&config, &state).unwrap(), None);
}

#[test]
fn checkout_lists_items_in_order_with_total() {
    let config = CheckoutConfig::new("5492281378685");
    let state = add_simple(add_simple(CartState::default(), &fresh()), &clasica());

    let summary = order_summary(&state).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(
        lines,
        vec![
            "1x Fresh Toskya (simple) - $8300.00",
            "1x Toskya clasica (simple) - $7500.00",
            "",
            "Total: $15800.00",
        ]
    );

    let expected_total = Money::sum(state.items.iter().map(|i| i.line_total()), Currency::ARS);
    assert_eq!(state.total, expected_total);

    let link = handoff_link(&config, &state).unwrap().unwrap();
    let text = link
        .query_pairs()
        .find(|(k, _)| k == "text")
        .map(|(_, v)| v.into_owned())
        .unwrap();
    assert!(text.ends_with(&summary));
}

#[test]
fn bundled_store_config_drives_checkout() {
    let config = StoreConfig::from_toml_str(
        r#"
        [store]
        name = "Toskya Burger"

        [menu]
        variants = false

        [checkout]
        contact_id = "5492281378685"
        greeting = "Pedido:"

        [[products]]
        id = 4
        name = "La Slider"
        price = 10500.0
        "#,
    )
    .unwrap();

    let slider = config
        .catalog
        .products()
        .iter()
        .find(|p| p.id == ProductId::new(4))
        .unwrap();
    let size = config.menu.variants.then_some(Size::Simple);
    let state = reduce(
        CartState::new(config.menu.currency),
        CartAction::AddItem(CartEntry::new(slider, size)),
    );

    assert_eq!(state.items[0].key.to_string(), "4");
    let message = order_message(&config.checkout.greeting, &state).unwrap();
    assert_eq!(message, "Pedido:\n\n1x La Slider - $10500.00\n\nTotal: $10500.00");
}
