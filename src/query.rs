//! Read-only lookups over a loaded [`Catalog`].
//!
//! Every lookup is a pure function of the catalog and its typed parameters.
//! Name and surname comparisons are case-insensitive; an empty result is
//! reported as a [`QueryError`] rather than an empty list.

use crate::catalog::{Catalog, FoldedKeys};
use crate::error::QueryError;
use crate::model::{Author, Work};
use crate::params::{EditionYear, SearchTerm, SurnamePrefix};

impl Catalog {
    /// The whole catalog in surname order.
    pub fn list_all(&self) -> &[Author] {
        self.authors()
    }

    /// Authors whose surname equals `surname`, ignoring case.
    pub fn find_by_surname(&self, surname: &SearchTerm) -> Result<Vec<&Author>, QueryError> {
        self.filter_authors(
            || format!("apellido={surname}"),
            |keys| keys.surname == surname.folded(),
        )
    }

    /// Authors matching both `name` and `surname` exactly, ignoring case.
    pub fn find_by_name_and_surname(
        &self,
        name: &SearchTerm,
        surname: &SearchTerm,
    ) -> Result<Vec<&Author>, QueryError> {
        self.filter_authors(
            || format!("nombre={name} apellido={surname}"),
            |keys| keys.name == name.folded() && keys.surname == surname.folded(),
        )
    }

    /// Authors with the given name, optionally narrowed to surnames starting
    /// with `prefix`.
    pub fn find_by_name(
        &self,
        name: &SearchTerm,
        prefix: Option<&SurnamePrefix>,
    ) -> Result<Vec<&Author>, QueryError> {
        match prefix {
            None => self.filter_authors(
                || format!("nombre={name}"),
                |keys| keys.name == name.folded(),
            ),
            Some(prefix) => self.filter_authors(
                || format!("nombre={name} apellido^={prefix}"),
                |keys| keys.name == name.folded() && keys.surname.starts_with(prefix.folded()),
            ),
        }
    }

    /// Every work, across all authors, whose edition year is `year`.
    ///
    /// The result is flat and follows catalog order; it is not grouped by
    /// author.
    pub fn find_by_edition_year(&self, year: EditionYear) -> Result<Vec<&Work>, QueryError> {
        let works: Vec<&Work> = self
            .works()
            .filter(|work| work.edition_year == year.get())
            .collect();
        if works.is_empty() {
            tracing::debug!(year = year.get(), "no work matched");
            return Err(QueryError::NoWorksForYear { year: year.get() });
        }
        Ok(works)
    }

    fn filter_authors(
        &self,
        criteria: impl FnOnce() -> String,
        predicate: impl Fn(&FoldedKeys) -> bool,
    ) -> Result<Vec<&Author>, QueryError> {
        let found: Vec<&Author> = self
            .entries()
            .filter(|(_, keys)| predicate(*keys))
            .map(|(author, _)| author)
            .collect();
        if found.is_empty() {
            let criteria = criteria();
            tracing::debug!(%criteria, "no author matched");
            return Err(QueryError::AuthorNotFound { criteria });
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collate::collate;
    use std::cmp::Ordering;

    fn term(raw: &str) -> SearchTerm {
        SearchTerm::parse("test", raw).unwrap()
    }

    fn prefix(raw: &str) -> SurnamePrefix {
        SurnamePrefix::from_query(Some(raw.to_string())).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Author::new("Gabriel", "García Márquez")
                .with_work(Work::new(1967).with_attr("titulo", "Cien años de soledad"))
                .with_work(Work::new(1985).with_attr("titulo", "El amor en los tiempos del cólera")),
            Author::new("Federico", "García Lorca")
                .with_work(Work::new(1928).with_attr("titulo", "Romancero gitano"))
                .with_work(Work::new(1936).with_attr("titulo", "La casa de Bernarda Alba")),
            Author::new("Gabriel", "Celaya").with_work(Work::new(1955)),
            Author::new("Carmen", "Laforet").with_work(Work::new(1945)),
            Author::new("Gabriel", "García").with_work(Work::new(1967)),
            Author::new("Benito", "Pérez Galdós").with_work(Work::new(1887)),
        ])
    }

    #[test]
    fn list_all_is_sorted_and_idempotent() {
        let catalog = catalog();
        let first = catalog.list_all();
        let second = catalog.list_all();
        assert_eq!(first, second);
        for pair in first.windows(2) {
            assert_ne!(
                collate(&pair[0].surname, &pair[1].surname),
                Ordering::Greater,
                "{} before {}",
                pair[0].surname,
                pair[1].surname
            );
        }
    }

    #[test]
    fn surname_lookup_is_case_insensitive() {
        let catalog = catalog();
        let upper = catalog.find_by_surname(&term("GARCÍA MÁRQUEZ")).unwrap();
        let lower = catalog.find_by_surname(&term("garcía márquez")).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].name, "Gabriel");
    }

    #[test]
    fn surname_lookup_is_exact_only() {
        let catalog = catalog();
        let found = catalog.find_by_surname(&term("garcía")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].surname, "García");

        let err = catalog.find_by_surname(&term("Garc")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn surname_miss_echoes_input() {
        let err = catalog().find_by_surname(&term("zzznoexist")).unwrap_err();
        assert_eq!(
            err,
            QueryError::AuthorNotFound {
                criteria: "apellido=zzznoexist".into()
            }
        );
        assert_eq!(err.to_string(), "Autor no encontrado");
    }

    #[test]
    fn name_and_surname_must_both_match() {
        let catalog = catalog();
        let found = catalog
            .find_by_name_and_surname(&term("gabriel"), &term("CELAYA"))
            .unwrap();
        assert_eq!(found.len(), 1);

        let err = catalog
            .find_by_name_and_surname(&term("Federico"), &term("Celaya"))
            .unwrap_err();
        assert!(matches!(err, QueryError::AuthorNotFound { .. }));
    }

    #[test]
    fn name_without_prefix_returns_all_namesakes() {
        let binding = catalog();
        let found = binding.find_by_name(&term("GABRIEL"), None).unwrap();
        let surnames: Vec<&str> = found.iter().map(|a| a.surname.as_str()).collect();
        assert_eq!(surnames, vec!["Celaya", "García", "García Márquez"]);
    }

    #[test]
    fn name_with_prefix_filters_surnames() {
        let catalog = catalog();
        let p = prefix("gar");
        let found = catalog.find_by_name(&term("Gabriel"), Some(&p)).unwrap();
        assert_eq!(found.len(), 2);
        for author in &found {
            assert!(author.surname.to_lowercase().starts_with(p.folded()));
            assert_eq!(author.name.to_lowercase(), "gabriel");
        }

        let err = catalog
            .find_by_name(&term("Carmen"), Some(&prefix("Gar")))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn long_prefix_is_not_truncated() {
        let catalog = catalog();
        let found = catalog
            .find_by_name(&term("Gabriel"), Some(&prefix("García M")))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].surname, "García Márquez");

        let err = catalog
            .find_by_name(&term("Gabriel"), Some(&prefix("García Márquezz")))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = catalog().find_by_name(&term("Nadie"), None).unwrap_err();
        assert_eq!(
            err,
            QueryError::AuthorNotFound {
                criteria: "nombre=Nadie".into()
            }
        );
    }

    #[test]
    fn edition_year_flattens_across_authors() {
        let catalog = catalog();
        let works = catalog.find_by_edition_year(EditionYear::new(1967)).unwrap();
        let expected = catalog
            .list_all()
            .iter()
            .flat_map(|a| a.works.iter())
            .filter(|w| w.edition_year == 1967)
            .count();
        assert_eq!(works.len(), expected);
        assert_eq!(works.len(), 2);
        assert!(works.iter().all(|w| w.edition_year == 1967));
    }

    #[test]
    fn edition_year_miss_names_the_year() {
        let err = catalog()
            .find_by_edition_year(EditionYear::new(1854))
            .unwrap_err();
        assert_eq!(err, QueryError::NoWorksForYear { year: 1854 });
        assert_eq!(err.to_string(), "No se encontraron obras del año 1854");
    }

    #[test]
    fn single_author_scenario() {
        let catalog = Catalog::new(vec![Author::new("Gabriel", "García Márquez")
            .with_work(Work::new(1967))
            .with_work(Work::new(1985))]);

        let works = catalog.find_by_edition_year(EditionYear::new(1967)).unwrap();
        assert_eq!(works.len(), 1);
        assert_eq!(works[0].edition_year, 1967);

        let found = catalog
            .find_by_name(&term("Gabriel"), Some(&prefix("Gar")))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].surname, "García Márquez");
    }

    #[test]
    fn empty_catalog_finds_nothing() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.list_all().is_empty());
        assert!(catalog.find_by_surname(&term("x")).is_err());
        assert!(catalog.find_by_edition_year(EditionYear::new(2000)).is_err());
    }
}
