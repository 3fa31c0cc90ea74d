//! Catalog loading.
//!
//! The catalog is read once at startup, sorted by surname under Spanish
//! collation and never mutated afterwards. Callers share it behind an `Arc`.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::collate::CollationKey;
use crate::error::CatalogError;
use crate::model::{Author, Work};

const INLINE_SOURCE: &str = "<inline>";

/// Immutable, surname-sorted collection of authors.
#[derive(Debug, Clone)]
pub struct Catalog {
    authors: Vec<Author>,
    keys: Vec<FoldedKeys>,
}

/// Lowercased name/surname, computed once per author for matching.
#[derive(Debug, Clone)]
pub(crate) struct FoldedKeys {
    pub(crate) name: String,
    pub(crate) surname: String,
}

impl Catalog {
    /// Build a catalog from already-parsed authors.
    ///
    /// The sort is stable: authors whose surnames collate equal keep their
    /// relative order.
    pub fn new(mut authors: Vec<Author>) -> Self {
        authors.sort_by_cached_key(|author| CollationKey::new(&author.surname));
        let keys = authors
            .iter()
            .map(|author| FoldedKeys {
                name: author.name.to_lowercase(),
                surname: author.surname.to_lowercase(),
            })
            .collect();
        Self { authors, keys }
    }

    /// Read and parse the JSON document at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&content, path)?;
        tracing::info!(
            path = %path.display(),
            authors = catalog.len(),
            works = catalog.work_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a JSON document held in memory.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::parse(json, Path::new(INLINE_SOURCE))
    }

    /// Parse a JSON document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let authors: Vec<Author> =
            serde_json::from_reader(reader).map_err(|source| CatalogError::Parse {
                path: PathBuf::from(INLINE_SOURCE),
                source,
            })?;
        Ok(Self::new(authors))
    }

    fn parse(json: &str, path: &Path) -> Result<Self, CatalogError> {
        let authors: Vec<Author> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(authors))
    }

    /// Authors in surname order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Total number of works across all authors.
    pub fn work_count(&self) -> usize {
        self.authors.iter().map(|author| author.works.len()).sum()
    }

    /// Every work, flattened in catalog order.
    pub fn works(&self) -> impl Iterator<Item = &Work> {
        self.authors.iter().flat_map(|author| author.works.iter())
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&Author, &FoldedKeys)> {
        self.authors.iter().zip(self.keys.iter())
    }
}

impl From<Vec<Author>> for Catalog {
    fn from(authors: Vec<Author>) -> Self {
        Self::new(authors)
    }
}
