//! Model-level tests.
//! - validation helpers run everywhere
//! - `crud_tests` needs a reachable PostgreSQL (`DATABASE_URL`) and skips otherwise

mod crud_tests;

use crate::{item, stock_item, store, validate_public_id};

#[test]
fn public_id_must_not_be_blank() {
    assert!(validate_public_id("item", "sku-1").is_ok());
    assert!(validate_public_id("item", "   ").is_err());
    assert!(validate_public_id("item", &"x".repeat(65)).is_err());
}

#[test]
fn names_are_required_and_bounded() {
    assert!(item::validate_name("Widget").is_ok());
    assert!(item::validate_name("").is_err());
    assert!(store::validate_name(&"s".repeat(129)).is_err());
    assert!(store::validate_address(Some("Main street 1")).is_ok());
    assert!(store::validate_address(None).is_ok());
}

#[test]
fn stock_amounts_reject_negative_and_nan() {
    assert!(stock_item::validate_quantity(0).is_ok());
    assert!(stock_item::validate_quantity(-1).is_err());
    assert!(stock_item::validate_amount("price", 9.99).is_ok());
    assert!(stock_item::validate_amount("price", -0.01).is_err());
    assert!(stock_item::validate_amount("cost", f64::NAN).is_err());
}
