mod common;

use aquifer_core::prelude::*;
use common::*;
use std::any::{Any, TypeId};
use std::str::FromStr;

fn hydrate_order(row: &BufferedRow) -> Result<Order, Error> {
    let registry = MetadataRegistry::new();
    let mut order = Order::default();
    hydrate(&mut order, row, &registry)?;

    Ok(order)
}

// ---- root fields -------------------------------------------------------

#[test]
fn populates_declared_fields_from_matching_columns() {
    let row = BufferedRow::from_pairs([
        ("Id", Value::from(1i64)),
        ("Total", Value::from("12.50")),
        ("Status", Value::from(2i64)),
        ("PlacedOn", Value::from("2024-01-02")),
        ("Note", Value::from("rush")),
    ]);

    let order = hydrate_order(&row).unwrap();

    assert_eq!(order.id, 1);
    assert_eq!(order.total, Decimal::from_str("12.50").unwrap());
    assert_eq!(order.status, Status::Shipped);
    assert_eq!(order.placed_on, Date::new(2024, 1, 2));
    assert_eq!(order.note.as_deref(), Some("rush"));
}

#[test]
fn missing_column_keeps_the_prehydration_value() {
    let row = BufferedRow::from_pairs([("Note", Value::from("kept"))]);

    let registry = MetadataRegistry::new();
    let mut order = Order {
        id: 99,
        ..Order::default()
    };
    hydrate(&mut order, &row, &registry).unwrap();

    assert_eq!(order.id, 99);
    assert_eq!(order.note.as_deref(), Some("kept"));
}

#[test]
fn null_column_resets_to_the_null_sentinel() {
    let row = BufferedRow::from_pairs([("Id", Value::Null), ("Note", Value::Null)]);

    let registry = MetadataRegistry::new();
    let mut order = Order {
        id: 99,
        note: Some("stale".to_string()),
        ..Order::default()
    };
    hydrate(&mut order, &row, &registry).unwrap();

    // null is not "missing": scalars reset to default, options to None
    assert_eq!(order.id, 0);
    assert_eq!(order.note, None);
}

#[test]
fn column_override_is_used_instead_of_the_declared_name() {
    let row = BufferedRow::from_pairs([
        ("Reference", Value::from("00000000000000000000000000")),
        ("Ref", Value::from(SAMPLE_ULID)),
    ]);

    let order = hydrate_order(&row).unwrap();

    assert_eq!(order.reference, sample_ulid());
}

#[test]
fn identifier_hydrates_from_native_and_canonical_string_alike() {
    let native = BufferedRow::from_pairs([("Ref", Value::from(sample_ulid()))]);
    let text = BufferedRow::from_pairs([("Ref", Value::from(SAMPLE_ULID))]);

    assert_eq!(
        hydrate_order(&native).unwrap().reference,
        hydrate_order(&text).unwrap().reference
    );
}

// ---- conversion failures -----------------------------------------------

#[test]
fn conversion_failure_surfaces_with_the_column_name() {
    let row = BufferedRow::from_pairs([("Total", Value::from("abc"))]);

    let err = hydrate_order(&row).unwrap_err();

    assert!(matches!(err, Error::Conversion { ref column, .. } if column == "Total"));
}

#[test]
fn undeclared_enum_discriminant_is_a_conversion_failure() {
    let row = BufferedRow::from_pairs([("Status", Value::from(9i64))]);

    let err = hydrate_order(&row).unwrap_err();

    assert!(matches!(err, Error::Conversion { ref column, .. } if column == "Status"));
}

// ---- nested mappings ---------------------------------------------------

#[test]
fn scenario_a_null_primary_key_skips_the_nested_entity() {
    let row = BufferedRow::from_pairs([
        ("Id", Value::from(1i64)),
        ("Customer.Id", Value::Null),
    ]);

    let order = hydrate_order(&row).unwrap();

    assert_eq!(order.id, 1);
    assert_eq!(order.customer, None);
}

#[test]
fn scenario_b_present_primary_key_populates_the_nested_entity() {
    let row = BufferedRow::from_pairs([
        ("Id", Value::from(1i64)),
        ("Customer.Id", Value::from(5i64)),
        ("Customer.Name", Value::from("Ada")),
    ]);

    let order = hydrate_order(&row).unwrap();

    let customer = order.customer.expect("customer should be instantiated");
    assert_eq!(customer.id, 5);
    assert_eq!(customer.name, "Ada");
}

#[test]
fn scenario_c_omitted_column_leaves_the_default_without_error() {
    let row = BufferedRow::from_pairs([("Unrelated", Value::from(1i64))]);

    let order = hydrate_order(&row).unwrap();

    assert_eq!(order.id, 0);
    assert_eq!(order.customer, None);
}

#[test]
fn absent_primary_key_column_skips_the_nested_mapping_entirely() {
    // Customer.Name alone does not qualify the relation: the gate is the
    // declared primary-key column, not any projected child column.
    let row = BufferedRow::from_pairs([("Customer.Name", Value::from("Ada"))]);

    let order = hydrate_order(&row).unwrap();

    assert_eq!(order.customer, None);
}

#[test]
fn nested_mapping_without_primary_key_is_always_instantiated() {
    let row = BufferedRow::from_pairs([("Id", Value::from(1i64))]);

    let order = hydrate_order(&row).unwrap();

    assert_eq!(order.audit, Some(Audit::default()));
}

#[test]
fn nested_fields_resolve_through_the_extended_prefix() {
    let row = BufferedRow::from_pairs([
        ("Customer.Id", Value::from(5i64)),
        ("Customer.Address.Id", Value::from(2i64)),
        ("Customer.Address.City", Value::from("Oslo")),
        ("Audit.Source", Value::from("import")),
        ("Audit.SeenAt", Value::from(100u64)),
    ]);

    let order = hydrate_order(&row).unwrap();

    let customer = order.customer.expect("customer should be instantiated");
    let address = customer.address.expect("address should be instantiated");
    assert_eq!(address.id, 2);
    assert_eq!(address.city, "Oslo");

    let audit = order.audit.expect("audit is unconditional");
    assert_eq!(audit.source, "import");
    assert_eq!(audit.seen_at, Timestamp::from_seconds(100));
}

#[test]
fn deep_null_primary_key_skips_only_that_level() {
    let row = BufferedRow::from_pairs([
        ("Customer.Id", Value::from(5i64)),
        ("Customer.Address.Id", Value::Null),
        ("Customer.Address.City", Value::from("Oslo")),
    ]);

    let order = hydrate_order(&row).unwrap();

    let customer = order.customer.expect("customer should be instantiated");
    assert_eq!(customer.id, 5);
    assert_eq!(customer.address, None);
}

// ---- empty descriptors and erased hydration ----------------------------

#[test]
fn empty_descriptor_hydration_is_a_no_op() {
    let row = BufferedRow::from_pairs([("Id", Value::from(1i64))]);

    let registry = MetadataRegistry::new();
    let mut empty = Empty;
    hydrate(&mut empty, &row, &registry).unwrap();

    assert_eq!(empty, Empty);
}

#[test]
fn erased_hydration_uses_registered_metadata() {
    let row = BufferedRow::from_pairs([("Id", Value::from(7i64))]);

    let registry = MetadataRegistry::new();
    registry.warm::<Order>();

    let mut boxed: Box<dyn Any> = Box::new(Order::default());
    hydrate_dyn(boxed.as_mut(), TypeId::of::<Order>(), &row, &registry).unwrap();

    let order = boxed.downcast::<Order>().unwrap();
    assert_eq!(order.id, 7);
}

#[test]
fn erased_hydration_of_an_undeclared_type_is_a_configuration_error() {
    let row = BufferedRow::from_pairs([("Id", Value::from(7i64))]);

    let registry = MetadataRegistry::new();
    let mut order = Order::default();

    let err = hydrate_dyn(&mut order, TypeId::of::<Order>(), &row, &registry).unwrap_err();

    assert_eq!(
        err,
        Error::MissingEntityDeclaration {
            type_id: TypeId::of::<Order>(),
        }
    );
}

// ---- registry reuse ----------------------------------------------------

#[test]
fn one_registry_serves_the_whole_graph_lazily() {
    let row = BufferedRow::from_pairs([
        ("Customer.Id", Value::from(5i64)),
        ("Customer.Address.Id", Value::from(2i64)),
    ]);

    let registry = MetadataRegistry::new();
    let mut order = Order::default();
    hydrate(&mut order, &row, &registry).unwrap();

    // Order plus every nested type reached during the walk.
    assert!(registry.contains(TypeId::of::<Order>()));
    assert!(registry.contains(TypeId::of::<Customer>()));
    assert!(registry.contains(TypeId::of::<Address>()));
    assert!(registry.contains(TypeId::of::<Audit>()));
}
