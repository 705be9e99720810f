//! # REST Countries Types
//!
//! Wire types for the country records returned by the region endpoint.
//! Only the fields requested through the field selection are modelled;
//! anything missing falls back to an empty value so partial records still
//! decode.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
    #[serde(rename = "nativeName", default, deserialize_with = "ordered_map")]
    pub native_name: Vec<(String, NativeName)>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct NativeName {
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub common: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

/// One country record.
///
/// `name.common` doubles as the lookup key and the navigation parameter.
/// The API does not guarantee it is unique.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area: f64,
    /// Language code → language name, in the order the API sent them.
    #[serde(default, deserialize_with = "ordered_map")]
    pub languages: Vec<(String, String)>,
    /// Currency code → currency, in the order the API sent them.
    #[serde(default, deserialize_with = "ordered_map")]
    pub currencies: Vec<(String, Currency)>,
}

impl Country {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn first_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }
}

/// Deserializes a JSON object into `(key, value)` pairs, keeping key order.
///
/// A `HashMap`/`BTreeMap` would lose the order the API sent, which shows up
/// when currencies or languages are joined for display. `null` decodes to
/// an empty list.
fn ordered_map<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct OrderedMapVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a JSON object or null")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, V>()? {
                entries.push((key, value));
            }
            Ok(entries)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(OrderedMapVisitor(PhantomData))
}
