//! Catalog entities as they appear on the wire.
//!
//! The source document uses Spanish keys (`autor_nombre`, `autor_apellido`,
//! `obras`, `edicion`); the Rust fields carry English names and are mapped at
//! the serde boundary. Anything else on an author or a work is kept in
//! `extra` and written back unchanged.
//!
//! Each entity remembers the key order of the object it was read from and
//! serializes in that order, so a loaded entry is re-emitted exactly as the
//! source lays it out. Keys that were not in the source (attributes added
//! through the builders, or a missing `obras`) are written after it.

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

const NAME_KEY: &str = "autor_nombre";
const SURNAME_KEY: &str = "autor_apellido";
const WORKS_KEY: &str = "obras";
const EDITION_KEY: &str = "edicion";

/// One author entry in the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Author {
    /// Given name.
    pub name: String,

    /// Family name; the catalog is ordered by this field.
    pub surname: String,

    /// Works owned by this author, in document order.
    pub works: Vec<Work>,

    /// Unvalidated pass-through attributes.
    pub extra: Map<String, Value>,

    order: Vec<String>,
}

/// One published item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Work {
    /// Year of the edition or printing.
    pub edition_year: i32,

    /// Title, genre, links and whatever else the source carries.
    pub extra: Map<String, Value>,

    order: Vec<String>,
}

impl Author {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            works: Vec::new(),
            extra: Map::new(),
            order: vec![NAME_KEY.into(), SURNAME_KEY.into(), WORKS_KEY.into()],
        }
    }

    pub fn with_work(mut self, work: Work) -> Self {
        self.works.push(work);
        self
    }
}

impl Work {
    pub fn new(edition_year: i32) -> Self {
        Self {
            edition_year,
            extra: Map::new(),
            order: vec![EDITION_KEY.into()],
        }
    }

    /// Attach a pass-through attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl TryFrom<Map<String, Value>> for Author {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut name = None;
        let mut surname = None;
        let mut works = None;
        let mut extra = Map::new();
        let mut order = Vec::with_capacity(object.len());

        for (key, value) in object {
            match key.as_str() {
                NAME_KEY => name = Some(serde_json::from_value(value)?),
                SURNAME_KEY => surname = Some(serde_json::from_value(value)?),
                WORKS_KEY => works = Some(serde_json::from_value(value)?),
                _ => {
                    extra.insert(key.clone(), value);
                }
            }
            order.push(key);
        }

        Ok(Self {
            name: name.ok_or_else(|| serde_json::Error::missing_field(NAME_KEY))?,
            surname: surname.ok_or_else(|| serde_json::Error::missing_field(SURNAME_KEY))?,
            works: works.unwrap_or_default(),
            extra,
            order,
        })
    }
}

impl TryFrom<Map<String, Value>> for Work {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut edition_year = None;
        let mut extra = Map::new();
        let mut order = Vec::with_capacity(object.len());

        for (key, value) in object {
            if key == EDITION_KEY {
                edition_year = Some(serde_json::from_value(value)?);
            } else {
                extra.insert(key.clone(), value);
            }
            order.push(key);
        }

        Ok(Self {
            edition_year: edition_year
                .ok_or_else(|| serde_json::Error::missing_field(EDITION_KEY))?,
            extra,
            order,
        })
    }
}

impl Serialize for Author {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for key in layout(&self.order, &self.extra, &[NAME_KEY, SURNAME_KEY, WORKS_KEY]) {
            match key {
                NAME_KEY => map.serialize_entry(key, &self.name)?,
                SURNAME_KEY => map.serialize_entry(key, &self.surname)?,
                WORKS_KEY => map.serialize_entry(key, &self.works)?,
                other => {
                    if let Some(value) = self.extra.get(other) {
                        map.serialize_entry(other, value)?;
                    }
                }
            }
        }
        map.end()
    }
}

impl Serialize for Work {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for key in layout(&self.order, &self.extra, &[EDITION_KEY]) {
            if key == EDITION_KEY {
                map.serialize_entry(key, &self.edition_year)?;
            } else if let Some(value) = self.extra.get(key) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

/// Output key order: the recorded source order, then pass-through keys added
/// since, then typed keys the source did not have.
fn layout<'a>(
    order: &'a [String],
    extra: &'a Map<String, Value>,
    typed: &'a [&'a str],
) -> impl Iterator<Item = &'a str> {
    let recorded = move |key: &str| order.iter().any(|seen| seen.as_str() == key);
    let added = extra
        .keys()
        .map(String::as_str)
        .filter(move |key| !recorded(*key));
    let missing = typed.iter().copied().filter(move |key| !recorded(*key));
    order.iter().map(String::as_str).chain(added).chain(missing)
}
