//! In-memory author/works catalog.
//!
//! This crate loads a JSON catalog of authors and their works once, sorts it
//! by surname under Spanish collation and answers read-only lookups over it.
//! The HTTP surface lives in the `catalogo-server` crate; everything here is
//! transport-agnostic and can be exercised without a running process.
//!
//! ```rust
//! use catalogo::{Catalog, EditionYear, SearchTerm, SurnamePrefix};
//!
//! let catalog = Catalog::from_json(r#"[
//!     {"autor_nombre": "Gabriel", "autor_apellido": "García Márquez",
//!      "obras": [{"titulo": "Cien años de soledad", "edicion": 1967},
//!                {"titulo": "El amor en los tiempos del cólera", "edicion": 1985}]}
//! ]"#)?;
//!
//! let name = SearchTerm::parse("nombre", "gabriel")?;
//! let prefix = SurnamePrefix::from_query(Some("Gar".into()));
//! assert_eq!(catalog.find_by_name(&name, prefix.as_ref())?.len(), 1);
//!
//! let works = catalog.find_by_edition_year("1967".parse::<EditionYear>()?)?;
//! assert_eq!(works.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod collate;
pub mod error;
pub mod model;
pub mod params;
pub mod query;

pub use catalog::Catalog;
pub use collate::{collate, CollationKey};
pub use error::{CatalogError, QueryError};
pub use model::{Author, Work};
pub use params::{EditionYear, SearchTerm, SurnamePrefix};
