//! Shared mapping fixtures for unit tests.

use crate::{metadata::EntityMap, traits::Entity, types::Decimal};

///
/// Status
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Status {
    #[default]
    Draft,
    Shipped,
}

crate::enum_value!(Status { Draft = 0, Shipped = 1 });

///
/// Customer
///

#[derive(Debug, Default, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}

impl Entity for Customer {
    const NAME: &'static str = "Customer";

    fn declare(map: &mut EntityMap<Self>) {
        map.field("Id", |e: &mut Self, v| e.id = v)
            .field_as("Name", "FullName", |e: &mut Self, v| e.name = v);
    }
}

///
/// OrderMeta
///

#[derive(Debug, Default, PartialEq)]
pub struct OrderMeta {
    pub source: String,
}

impl Entity for OrderMeta {
    const NAME: &'static str = "OrderMeta";

    fn declare(map: &mut EntityMap<Self>) {
        map.field("Source", |e: &mut Self, v| e.source = v);
    }
}

///
/// Order
///

#[derive(Debug, Default, PartialEq)]
pub struct Order {
    pub id: i64,
    pub total: Decimal,
    pub status: Status,
    pub note: Option<String>,
    pub customer: Option<Customer>,
    pub meta: OrderMeta,
}

impl Entity for Order {
    const NAME: &'static str = "Order";

    fn declare(map: &mut EntityMap<Self>) {
        map.field("Id", |e: &mut Self, v| e.id = v)
            .field("Total", |e: &mut Self, v| e.total = v)
            .field("Status", |e: &mut Self, v| e.status = v)
            .field("Note", |e: &mut Self, v| e.note = v)
            .nested_keyed("Customer", "Id", |e: &mut Self, c| e.customer = Some(c))
            .nested("Meta", |e: &mut Self, m| e.meta = m);
    }
}
