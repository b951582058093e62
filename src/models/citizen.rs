use diesel::prelude::*;
use diesel::sql_types::{BigInt, Bool, Nullable, Text};

use crate::domain::citizen::Citizen as DomainCitizen;

#[derive(Debug, Clone, QueryableByName)]
/// Row returned by the citizen search, see [`crate::repository::query`].
pub struct Citizen {
    #[diesel(sql_type = Text)]
    pub id: String,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Text)]
    pub surname: String,
    #[diesel(sql_type = Nullable<Bool>)]
    pub arrested: Option<bool>,
    #[diesel(sql_type = Nullable<Text>)]
    pub phone_number: Option<String>,
}

#[derive(QueryableByName)]
pub struct ArrestedFlag {
    #[diesel(sql_type = Nullable<Bool>)]
    pub arrested: Option<bool>,
}

#[derive(QueryableByName)]
pub struct CitizenCount {
    #[diesel(sql_type = BigInt)]
    pub count: i64,
}

impl From<Citizen> for DomainCitizen {
    fn from(row: Citizen) -> Self {
        Self {
            id: row.id,
            name: row.name,
            surname: row.surname,
            arrested: row.arrested.unwrap_or(false),
            phone_number: row.phone_number,
        }
    }
}
