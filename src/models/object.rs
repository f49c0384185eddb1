//! The `object` discriminator carried by every API resource.
//!
//! Each resource type embeds an [`Object<K>`] field. Decoding checks that the
//! wire tag equals `K::OBJECT` and fails otherwise; encoding always writes it.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A resource kind with a fixed wire discriminator.
pub trait WireObject {
    const OBJECT: &'static str;
}

/// Zero-sized marker for a validated `object` field.
pub struct Object<K>(PhantomData<fn() -> K>);

impl<K: WireObject> Object<K> {
    pub fn tag(&self) -> &'static str {
        K::OBJECT
    }
}

impl<K> Clone for Object<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Object<K> {}

impl<K> PartialEq for Object<K> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<K> Eq for Object<K> {}

impl<K> Default for Object<K> {
    fn default() -> Self {
        Object(PhantomData)
    }
}

impl<K: WireObject> fmt::Debug for Object<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({:?})", K::OBJECT)
    }
}

impl<K: WireObject> Serialize for Object<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(K::OBJECT)
    }
}

impl<'de, K: WireObject> Deserialize<'de> for Object<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == K::OBJECT {
            Ok(Object(PhantomData))
        } else {
            Err(de::Error::custom(format!(
                "expected object '{}', found '{}'",
                K::OBJECT,
                raw
            )))
        }
    }
}

macro_rules! wire_objects {
    ($($(#[$meta:meta])* $marker:ident => $tag:literal,)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub enum $marker {}

            impl WireObject for $marker {
                const OBJECT: &'static str = $tag;
            }
        )+
    };
}

wire_objects! {
    CardObject => "card",
    FaceObject => "card_face",
    RelatedObject => "related_card",
    CatalogObject => "catalog",
    ListObject => "list",
    RulingObject => "ruling",
    ErrorObject => "error",
}
