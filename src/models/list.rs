use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::object::{ListObject, Object};

// ---------------------------------------------------------------------------
// List — One page of a paginated collection
// ---------------------------------------------------------------------------

/// A page of results.
///
/// Decoding rejects a page that claims `has_more` without a `next_page` URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List<T> {
    object: Object<ListObject>,
    pub data: Vec<T>,
    pub has_more: bool,
    pub next_page: Option<String>,
    pub total_cards: Option<u32>,
    pub warnings: Option<Vec<String>>,
}

impl<T> List<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The URL of the following page, only when the API says there is one.
    pub fn continuation(&self) -> Option<&str> {
        if self.has_more {
            self.next_page.as_deref()
        } else {
            None
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[derive(Deserialize)]
struct ListWire<T> {
    object: Object<ListObject>,
    data: Vec<T>,
    has_more: bool,
    next_page: Option<String>,
    total_cards: Option<u32>,
    warnings: Option<Vec<String>>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = ListWire::<T>::deserialize(deserializer)?;
        if wire.has_more && wire.next_page.is_none() {
            return Err(de::Error::custom(
                "list has_more is true but next_page is missing",
            ));
        }
        Ok(List {
            object: wire.object,
            data: wire.data,
            has_more: wire.has_more,
            next_page: wire.next_page,
            total_cards: wire.total_cards,
            warnings: wire.warnings,
        })
    }
}
