//! Mapping fixtures shared by the integration tests: a three-level order
//! graph with a keyed customer relation and an unkeyed audit relation.

#![allow(dead_code)]

use aquifer_core::prelude::*;

///
/// Status
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Status {
    #[default]
    Draft,
    Paid,
    Shipped,
}

enum_value!(Status { Draft = 0, Paid = 1, Shipped = 2 });

///
/// Address
///

#[derive(Debug, Default, PartialEq)]
pub struct Address {
    pub id: i64,
    pub city: String,
}

impl Entity for Address {
    const NAME: &'static str = "Address";

    fn declare(map: &mut EntityMap<Self>) {
        map.field("Id", |e: &mut Self, v| e.id = v)
            .field("City", |e: &mut Self, v| e.city = v);
    }
}

///
/// Customer
///

#[derive(Debug, Default, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub address: Option<Address>,
}

impl Entity for Customer {
    const NAME: &'static str = "Customer";

    fn declare(map: &mut EntityMap<Self>) {
        map.field("Id", |e: &mut Self, v| e.id = v)
            .field("Name", |e: &mut Self, v| e.name = v)
            .nested_keyed("Address", "Id", |e: &mut Self, a| e.address = Some(a));
    }
}

///
/// Audit
///

#[derive(Debug, Default, PartialEq)]
pub struct Audit {
    pub source: String,
    pub seen_at: Timestamp,
}

impl Entity for Audit {
    const NAME: &'static str = "Audit";

    fn declare(map: &mut EntityMap<Self>) {
        map.field("Source", |e: &mut Self, v| e.source = v)
            .field("SeenAt", |e: &mut Self, v| e.seen_at = v);
    }
}

///
/// Order
///

#[derive(Debug, Default, PartialEq)]
pub struct Order {
    pub id: i64,
    pub reference: Ulid,
    pub total: Decimal,
    pub status: Status,
    pub placed_on: Date,
    pub note: Option<String>,
    pub customer: Option<Customer>,
    pub audit: Option<Audit>,
}

impl Entity for Order {
    const NAME: &'static str = "Order";

    fn declare(map: &mut EntityMap<Self>) {
        map.field("Id", |e: &mut Self, v| e.id = v)
            .field_as("Reference", "Ref", |e: &mut Self, v| e.reference = v)
            .field("Total", |e: &mut Self, v| e.total = v)
            .field("Status", |e: &mut Self, v| e.status = v)
            .field("PlacedOn", |e: &mut Self, v| e.placed_on = v)
            .field("Note", |e: &mut Self, v| e.note = v)
            .nested_keyed("Customer", "Id", |e: &mut Self, c| e.customer = Some(c))
            .nested("Audit", |e: &mut Self, a| e.audit = Some(a));
    }
}

///
/// Empty
///

#[derive(Debug, Default, PartialEq)]
pub struct Empty;

impl Entity for Empty {
    const NAME: &'static str = "Empty";

    fn declare(_: &mut EntityMap<Self>) {}
}

pub const SAMPLE_ULID: &str = "01ARZ3NDEKTSV4RRFFQ69G5FAV";

pub fn sample_ulid() -> Ulid {
    Ulid::from_string(SAMPLE_ULID).expect("sample ulid is canonical")
}
