// Sort directives: an ordered field-to-direction mapping handed to repositories

use std::cmp::Ordering;

use crate::models::author::AuthorRecord;

/// Author fields a directive can order by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorField {
    FirstName,
    FamilyName,
    DateOfBirth,
    DateOfDeath,
}

impl AuthorField {
    /// ORDER BY expression; text columns use byte order so PostgreSQL
    /// agrees with the in-memory comparator
    pub fn sort_expression(self) -> &'static str {
        match self {
            AuthorField::FirstName => r#"first_name COLLATE "C""#,
            AuthorField::FamilyName => r#"family_name COLLATE "C""#,
            AuthorField::DateOfBirth => "date_of_birth",
            AuthorField::DateOfDeath => "date_of_death",
        }
    }

    // Text compares by byte order: "Smith" sorts before "de la Cruz"
    fn compare(self, a: &AuthorRecord, b: &AuthorRecord) -> Ordering {
        match self {
            AuthorField::FirstName => a.first_name.cmp(&b.first_name),
            AuthorField::FamilyName => a.family_name.cmp(&b.family_name),
            AuthorField::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
            // Absent death dates (living authors) sort after any date
            AuthorField::DateOfDeath => match (a.date_of_death, b.date_of_death) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn sql_keyword(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Ordered list of sort keys; earlier keys take precedence.
/// Adding a field that is already present replaces its direction in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortDirective {
    keys: Vec<(AuthorField, SortOrder)>,
}

impl SortDirective {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directive with a single key
    pub fn by(field: AuthorField, order: SortOrder) -> Self {
        Self::new().then_by(field, order)
    }

    pub fn then_by(mut self, field: AuthorField, order: SortOrder) -> Self {
        match self.keys.iter_mut().find(|(f, _)| *f == field) {
            Some(existing) => existing.1 = order,
            None => self.keys.push((field, order)),
        }
        self
    }

    pub fn keys(&self) -> &[(AuthorField, SortOrder)] {
        &self.keys
    }

    /// Compares two records key by key
    pub fn compare(&self, a: &AuthorRecord, b: &AuthorRecord) -> Ordering {
        self.keys
            .iter()
            .map(|(field, order)| order.apply(field.compare(a, b)))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }

    /// Stable in-place sort; ties keep their incoming order
    pub fn sort(&self, records: &mut [AuthorRecord]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(first: &str, family: &str, year: i32) -> AuthorRecord {
        AuthorRecord::new(first, family, NaiveDate::from_ymd_opt(year, 1, 1).unwrap(), None)
    }

    fn firsts(records: &[AuthorRecord]) -> Vec<&str> {
        records.iter().map(|r| r.first_name.as_str()).collect()
    }

    #[test]
    fn sorts_ascending_and_keeps_ties_stable() {
        let mut records: Vec<AuthorRecord> = vec![
            record("Kim", "Woon", 1958),
            record("Moon", "Sen", 1964),
            record("John", "Woon", 1989),
            record("Ann", "Sen", 1992),
        ];

        SortDirective::by(AuthorField::FamilyName, SortOrder::Ascending).sort(&mut records);

        assert_eq!(firsts(&records), vec!["Moon", "Ann", "Kim", "John"]);
    }

    #[test]
    fn secondary_key_breaks_ties() {
        let mut records: Vec<AuthorRecord> = vec![
            record("Kim", "Woon", 1958),
            record("John", "Woon", 1989),
            record("Moon", "Sen", 1964),
        ];

        SortDirective::by(AuthorField::FamilyName, SortOrder::Descending)
            .then_by(AuthorField::DateOfBirth, SortOrder::Descending)
            .sort(&mut records);

        assert_eq!(firsts(&records), vec!["John", "Kim", "Moon"]);
    }

    #[test]
    fn repeated_field_replaces_direction() {
        let directive: SortDirective = SortDirective::by(AuthorField::FamilyName, SortOrder::Ascending)
            .then_by(AuthorField::FamilyName, SortOrder::Descending);

        assert_eq!(directive.keys(), &[(AuthorField::FamilyName, SortOrder::Descending)]);
    }

    #[test]
    fn text_keys_compare_by_byte_order() {
        let mut records: Vec<AuthorRecord> = vec![
            record("Ana", "de la Cruz", 1970),
            record("Joan", "Smith", 1970),
            record("Zoe", "Alvarez", 1970),
        ];

        SortDirective::by(AuthorField::FamilyName, SortOrder::Ascending).sort(&mut records);

        assert_eq!(firsts(&records), vec!["Zoe", "Joan", "Ana"]);
    }

    #[test]
    fn living_authors_sort_after_deceased() {
        let living: AuthorRecord = record("Moon", "Sen", 1964);
        let mut deceased: AuthorRecord = record("Kim", "Woon", 1958);
        deceased.date_of_death = NaiveDate::from_ymd_opt(2020, 1, 1);

        let directive: SortDirective = SortDirective::by(AuthorField::DateOfDeath, SortOrder::Ascending);
        assert_eq!(directive.compare(&deceased, &living), Ordering::Less);
    }
}
