//! Tests for Inventory
//!
//! These tests verify:
//! - add/find/list behaviour
//! - sell and restock, including failure kinds
//! - stable persistent sorting
//! - category grouping and total value
//! - persistence after every mutation, and surfaced save failures

use stockroom::storage::MemoryPersister;
use stockroom::{Inventory, InventoryError, Item, SortOrder};

// =============================================================================
// Helper Functions
// =============================================================================

fn empty_inventory() -> Inventory<MemoryPersister> {
    Inventory::open(MemoryPersister::new()).unwrap()
}

fn stocked_inventory() -> Inventory<MemoryPersister> {
    let mut inventory = empty_inventory();
    inventory.add("Apple", "Fruit", 10, 2.0).unwrap();
    inventory.add("Carrot", "Veg", 4, 0.5).unwrap();
    inventory.add("Banana", "Fruit", 25, 1.25).unwrap();
    inventory
}

fn names(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

// =============================================================================
// Add / Find / List Tests
// =============================================================================

#[test]
fn test_add_then_find_returns_exact_fields() {
    let mut inventory = empty_inventory();

    inventory.add("Widget, large", "Hardware|Tools", 7, 12.99).unwrap();

    let item = inventory.find("widget, LARGE").unwrap();
    assert_eq!(item, Item::new("Widget, large", "Hardware|Tools", 7, 12.99));
}

#[test]
fn test_add_allows_duplicates_and_find_returns_first() {
    let mut inventory = empty_inventory();

    inventory.add("Apple", "Fruit", 1, 1.0).unwrap();
    inventory.add("apple", "Imported", 2, 3.0).unwrap();

    assert_eq!(inventory.len(), 2);
    assert_eq!(inventory.find("APPLE").unwrap().category, "Fruit");
}

#[test]
fn test_find_missing_is_not_found() {
    let inventory = stocked_inventory();

    let err = inventory.find("Durian").unwrap_err();
    assert!(matches!(err, InventoryError::NotFound { ref name } if name == "Durian"));
}

#[test]
fn test_list_preserves_insertion_order() {
    let inventory = stocked_inventory();

    assert_eq!(names(&inventory.list()), vec!["Apple", "Carrot", "Banana"]);
}

#[test]
fn test_list_is_a_copy() {
    let inventory = stocked_inventory();

    let mut copy = inventory.list();
    copy[0].quantity = 999;
    copy.clear();

    assert_eq!(inventory.len(), 3);
    assert_eq!(inventory.find("Apple").unwrap().quantity, 10);
}

#[test]
fn test_empty_inventory() {
    let inventory = empty_inventory();

    assert!(inventory.is_empty());
    assert!(inventory.list().is_empty());
    assert!(inventory.group_by_category().is_empty());
    assert_eq!(inventory.total_value(), 0.0);
}

// =============================================================================
// Sell / Restock Tests
// =============================================================================

#[test]
fn test_sell_reduces_quantity() {
    let mut inventory = stocked_inventory();

    let remaining = inventory.sell("banana", 5).unwrap();

    assert_eq!(remaining, 20);
    assert_eq!(inventory.find("Banana").unwrap().quantity, 20);
}

#[test]
fn test_sell_entire_stock() {
    let mut inventory = stocked_inventory();

    assert_eq!(inventory.sell("Carrot", 4).unwrap(), 0);
    assert_eq!(inventory.find("Carrot").unwrap().quantity, 0);
}

#[test]
fn test_sell_more_than_available_is_insufficient_stock() {
    let mut inventory = stocked_inventory();
    let saves_before = inventory.persister().save_count();

    let err = inventory.sell("Carrot", 5).unwrap_err();

    match err {
        InventoryError::InsufficientStock {
            name,
            requested,
            available,
        } => {
            assert_eq!(name, "Carrot");
            assert_eq!(requested, 5);
            assert_eq!(available, 4);
        }
        other => panic!("expected InsufficientStock, got {:?}", other),
    }
    assert_eq!(inventory.find("Carrot").unwrap().quantity, 4);
    assert_eq!(inventory.persister().save_count(), saves_before);
}

#[test]
fn test_sell_missing_is_not_found_and_mutates_nothing() {
    let mut inventory = stocked_inventory();
    let before = inventory.list();
    let saves_before = inventory.persister().save_count();

    let err = inventory.sell("Durian", 1).unwrap_err();

    assert!(err.is_not_found());
    assert!(!err.is_insufficient_stock());
    assert_eq!(inventory.list(), before);
    assert_eq!(inventory.persister().save_count(), saves_before);
}

#[test]
fn test_sell_hits_first_duplicate_only() {
    let mut inventory = empty_inventory();
    inventory.add("Apple", "Fruit", 3, 1.0).unwrap();
    inventory.add("Apple", "Fruit", 50, 1.0).unwrap();

    let err = inventory.sell("apple", 10).unwrap_err();

    assert!(err.is_insufficient_stock());
    assert_eq!(inventory.list()[1].quantity, 50);
}

#[test]
fn test_restock_increases_quantity() {
    let mut inventory = stocked_inventory();

    assert_eq!(inventory.restock("CARROT", 6).unwrap(), 10);
    assert_eq!(inventory.find("carrot").unwrap().quantity, 10);
}

#[test]
fn test_restock_missing_is_not_found() {
    let mut inventory = stocked_inventory();
    let before = inventory.list();

    let err = inventory.restock("Durian", 3).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(inventory.list(), before);
}

#[test]
fn test_restock_overflow_rejected() {
    let mut inventory = empty_inventory();
    inventory.add("Bolt", "Hardware", u32::MAX - 1, 0.01).unwrap();

    let err = inventory.restock("Bolt", 2).unwrap_err();

    assert!(matches!(err, InventoryError::QuantityOverflow { .. }));
    assert_eq!(inventory.find("Bolt").unwrap().quantity, u32::MAX - 1);
}

#[test]
fn test_sell_restock_scenario() {
    let mut inventory = empty_inventory();
    inventory.add("Apple", "Fruit", 10, 2.0).unwrap();

    assert_eq!(inventory.sell("apple", 3).unwrap(), 7);

    let err = inventory.sell("Apple", 100).unwrap_err();
    assert!(err.is_insufficient_stock());
    assert_eq!(inventory.find("Apple").unwrap().quantity, 7);

    assert_eq!(inventory.restock("APPLE", 5).unwrap(), 12);
    assert_eq!(inventory.find("apple").unwrap().quantity, 12);
}

// =============================================================================
// Sort Tests
// =============================================================================

#[test]
fn test_sort_quantity_ascending_is_stable() {
    let mut inventory = empty_inventory();
    inventory.add("A", "first", 5, 1.0).unwrap();
    inventory.add("B", "x", 1, 1.0).unwrap();
    inventory.add("C", "second", 5, 1.0).unwrap();
    inventory.add("D", "x", 3, 1.0).unwrap();

    inventory.sort(SortOrder::QuantityAscending).unwrap();

    let items = inventory.list();
    let quantities: Vec<u32> = items.iter().map(|item| item.quantity).collect();
    assert_eq!(quantities, vec![1, 3, 5, 5]);
    assert_eq!(items[2].category, "first");
    assert_eq!(items[3].category, "second");
}

#[test]
fn test_sort_quantity_descending_is_stable() {
    let mut inventory = empty_inventory();
    inventory.add("A", "first", 5, 1.0).unwrap();
    inventory.add("B", "x", 9, 1.0).unwrap();
    inventory.add("C", "second", 5, 1.0).unwrap();

    inventory.sort(SortOrder::QuantityDescending).unwrap();

    assert_eq!(names(&inventory.list()), vec!["B", "A", "C"]);
}

#[test]
fn test_sort_by_price() {
    let mut inventory = stocked_inventory();

    inventory.sort(SortOrder::PriceAscending).unwrap();
    assert_eq!(names(&inventory.list()), vec!["Carrot", "Banana", "Apple"]);

    inventory.sort(SortOrder::PriceDescending).unwrap();
    assert_eq!(names(&inventory.list()), vec!["Apple", "Banana", "Carrot"]);
}

#[test]
fn test_sort_is_persisted() {
    let mut inventory = stocked_inventory();

    inventory.sort(SortOrder::QuantityDescending).unwrap();

    let reopened = Inventory::open(inventory.persister().clone()).unwrap();
    assert_eq!(names(&reopened.list()), vec!["Banana", "Apple", "Carrot"]);
}

#[test]
fn test_sort_order_parse_and_display() {
    for order in SortOrder::ALL {
        assert_eq!(order.to_string().parse::<SortOrder>().unwrap(), order);
    }
    assert_eq!("QUANTITY-ASC".parse::<SortOrder>().unwrap(), SortOrder::QuantityAscending);
    assert!(matches!(
        "by-name".parse::<SortOrder>(),
        Err(InventoryError::UnknownSortOrder(_))
    ));
}

// =============================================================================
// Grouping / Valuation Tests
// =============================================================================

#[test]
fn test_group_by_category() {
    let mut inventory = empty_inventory();
    inventory.add("A", "fruit", 1, 1.0).unwrap();
    inventory.add("B", "veg", 1, 1.0).unwrap();
    inventory.add("C", "fruit", 1, 1.0).unwrap();

    let groups = inventory.group_by_category();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].category, "fruit");
    assert_eq!(names(&groups[0].items), vec!["A", "C"]);
    assert_eq!(groups[1].category, "veg");
    assert_eq!(names(&groups[1].items), vec!["B"]);
}

#[test]
fn test_total_value() {
    let mut inventory = empty_inventory();
    inventory.add("A", "x", 3, 2.50).unwrap();
    inventory.add("B", "x", 0, 100.00).unwrap();

    assert_eq!(inventory.total_value(), 7.50);
}

#[test]
fn test_low_stock() {
    let inventory = stocked_inventory();

    assert_eq!(names(&inventory.low_stock(5)), vec!["Carrot"]);
    assert!(inventory.low_stock(4).is_empty());
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_every_mutation_saves() {
    let mut inventory = empty_inventory();

    inventory.add("Apple", "Fruit", 10, 2.0).unwrap();
    inventory.sell("Apple", 1).unwrap();
    inventory.restock("Apple", 1).unwrap();
    inventory.sort(SortOrder::PriceAscending).unwrap();

    assert_eq!(inventory.persister().save_count(), 4);
    assert_eq!(inventory.persister().contents(), "Apple,Fruit,10,2.0\n");
}

#[test]
fn test_reads_do_not_save() {
    let inventory = stocked_inventory();
    let saves = inventory.persister().save_count();

    let _ = inventory.find("Apple");
    let _ = inventory.list();
    let _ = inventory.group_by_category();
    let _ = inventory.total_value();

    assert_eq!(inventory.persister().save_count(), saves);
}

#[test]
fn test_save_failure_is_surfaced_and_change_kept() {
    let mut inventory = stocked_inventory();
    inventory.persister_mut().set_fail_saves(true);

    let err = inventory.sell("Apple", 2).unwrap_err();

    assert!(matches!(err, InventoryError::Persistence(_)));
    assert_eq!(inventory.find("Apple").unwrap().quantity, 8);

    inventory.persister_mut().set_fail_saves(false);
    inventory.restock("Apple", 1).unwrap();
    assert!(inventory.persister().contents().starts_with("Apple,Fruit,9,2.0\n"));
}

#[test]
fn test_open_rejects_malformed_data() {
    let persister = MemoryPersister::with_contents("Apple,Fruit,10,2.0\nPear,Fruit,lots,1.0\n");

    let err = Inventory::open(persister).err().unwrap();

    assert!(matches!(err, InventoryError::Load { line: 2, .. }));
}

#[test]
fn test_open_or_empty_discards_partial_load() {
    let persister = MemoryPersister::with_contents("Apple,Fruit,10,2.0\nbroken\n");

    let inventory = Inventory::open_or_empty(persister);

    assert!(inventory.is_empty());
}
