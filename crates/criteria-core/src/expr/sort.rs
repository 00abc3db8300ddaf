use crate::path::FieldPath;
use serde::{Deserialize, Serialize};

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    Asc,
    Desc,
}

///
/// Order
/// One sort key.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Order {
    pub path: FieldPath,
    pub direction: OrderDirection,
}

impl Order {
    #[must_use]
    pub const fn asc(path: FieldPath) -> Self {
        Self {
            path,
            direction: OrderDirection::Asc,
        }
    }

    #[must_use]
    pub const fn desc(path: FieldPath) -> Self {
        Self {
            path,
            direction: OrderDirection::Desc,
        }
    }
}

///
/// Sort
///
/// Ordered sort specification; insertion order is significant and
/// duplicate paths are kept for the consuming framework to settle.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Sort {
    pub orders: Vec<Order>,
}

impl Sort {
    #[must_use]
    pub const fn unsorted() -> Self {
        Self { orders: Vec::new() }
    }

    #[must_use]
    pub const fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }
}

impl<'a> IntoIterator for &'a Sort {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}
