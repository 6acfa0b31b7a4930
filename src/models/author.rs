// Author data model: the stored record and the display projection served by the API

use chrono::NaiveDate;
use uuid::Uuid;

// ! Display format for dates inside a lifespan, e.g. "Oct 10, 1958"
const LIFESPAN_DATE_FORMAT: &str = "%b %-d, %Y";
const LIVING_MARKER: &str = "present";

/// A catalog author as it is persisted
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AuthorRecord {
    pub id: Uuid,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
}

impl AuthorRecord {
    /// Creates a record with a fresh identifier
    pub fn new(
        first_name: impl Into<String>,
        family_name: impl Into<String>,
        date_of_birth: NaiveDate,
        date_of_death: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            family_name: family_name.into(),
            date_of_birth,
            date_of_death,
        }
    }
}

/// Read-only view of an author with its derived display fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
    pub name: String,
    pub lifespan: String,
}

impl Author {
    /// One line per author as listed by `GET /authors`
    pub fn summary(&self) -> String {
        format!("{} : {}", self.name, self.lifespan)
    }
}

impl From<AuthorRecord> for Author {
    fn from(record: AuthorRecord) -> Self {
        let name: String = display_name(&record.first_name, &record.family_name);
        let lifespan: String = lifespan(record.date_of_birth, record.date_of_death);

        Self {
            id: record.id,
            first_name: record.first_name,
            family_name: record.family_name,
            date_of_birth: record.date_of_birth,
            date_of_death: record.date_of_death,
            name,
            lifespan,
        }
    }
}

/// "Family, First", or just the family name when no first name is stored
pub fn display_name(first_name: &str, family_name: &str) -> String {
    let first_name: &str = first_name.trim();
    if first_name.is_empty() {
        family_name.trim().to_string()
    } else {
        format!("{}, {}", family_name.trim(), first_name)
    }
}

/// "<birth> - <death>", open-ended as "<birth> - present" for living authors
pub fn lifespan(date_of_birth: NaiveDate, date_of_death: Option<NaiveDate>) -> String {
    let born: String = date_of_birth.format(LIFESPAN_DATE_FORMAT).to_string();

    match date_of_death {
        Some(died) => format!("{} - {}", born, died.format(LIFESPAN_DATE_FORMAT)),
        None => format!("{} - {}", born, LIVING_MARKER),
    }
}
