//! Filter Utilities
//!
//! Case-insensitive substring matching over record names.

use crate::domain::Person;

/// True when `name` contains `filter`, ignoring case. An empty filter matches everything.
pub fn name_matches(name: &str, filter: &str) -> bool {
    name.to_lowercase().contains(&filter.to_lowercase())
}

/// Records whose name matches `filter`, in list order
pub fn filter_persons<'a>(persons: &'a [Person], filter: &str) -> Vec<&'a Person> {
    persons
        .iter()
        .filter(|person| name_matches(&person.name, filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Vec<Person> {
        vec![
            Person::new("1", "Arto Hellas", "040-1231244"),
            Person::new("2", "Ada Lovelace", "39-44-5323523"),
            Person::new("3", "Dan Abramov", "12-43-234345"),
            Person::new("4", "Mary Poppendieck", "39-23-6423122"),
        ]
    }

    #[test]
    fn test_every_name_matches_its_own_substrings() {
        let persons = book();
        for person in &persons {
            let lower = person.name.to_lowercase();
            let upper = person.name.to_uppercase();
            for (start, _) in person.name.char_indices() {
                let end = (start + 3).min(person.name.len());
                if !person.name.is_char_boundary(end) {
                    continue;
                }
                let slice = &person.name[start..end];
                for filter in [slice.to_string(), slice.to_lowercase(), slice.to_uppercase()] {
                    let shown = filter_persons(&persons, &filter);
                    assert!(shown.iter().any(|p| p.id == person.id), "{} hidden by {:?}", person.name, filter);
                }
            }
            assert!(name_matches(&person.name, &lower));
            assert!(name_matches(&person.name, &upper));
        }
    }

    #[test]
    fn test_absent_filter_yields_empty_view() {
        assert!(filter_persons(&book(), "zzz").is_empty());
    }

    #[test]
    fn test_empty_filter_shows_everything() {
        assert_eq!(filter_persons(&book(), "").len(), 4);
    }

    #[test]
    fn test_filter_keeps_list_order() {
        let persons = book();
        let shown: Vec<_> = filter_persons(&persons, "a").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(shown, vec!["1", "2", "3", "4"]);
        let shown: Vec<_> = filter_persons(&persons, "LOVE").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(shown, vec!["2"]);
    }
}
