//! Parameterized SQL for the citizen table.
//!
//! Every value that originates from a caller travels as a bound parameter;
//! the statement text only ever contains fixed SQL and `$n` placeholders.

use diesel::pg::Pg;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{Bool, Text};

use crate::domain::citizen::{SearchCriteria, StatusFilter};
use crate::domain::types::CitizenId;

/// Fixed upper bound on rows returned by a search.
pub const SEARCH_LIMIT: usize = 200;

const CITIZEN_TABLE: &str = r#"public."Citizen""#;

/// Value bound to a statement placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    Bool(bool),
}

/// Statement text with its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl Statement {
    /// Converts into a Diesel query with every parameter bound in order.
    pub fn into_query<'f>(self) -> BoxedSqlQuery<'f, Pg, SqlQuery> {
        self.params.into_iter().fold(
            diesel::sql_query(self.sql).into_boxed::<Pg>(),
            |query, param| match param {
                SqlParam::Text(value) => query.bind::<Text, _>(value),
                SqlParam::Bool(value) => query.bind::<Bool, _>(value),
            },
        )
    }
}

/// Escapes LIKE metacharacters so user text matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Builds the search SELECT for the given criteria.
pub fn build_search_query(criteria: &SearchCriteria) -> Statement {
    let mut sql = format!(
        r#"SELECT id::text AS id, name, surname, arrested, "phoneNumber" AS phone_number FROM {CITIZEN_TABLE}"#
    );
    let mut params = Vec::new();
    let mut where_clauses = Vec::new();

    if let Some(term) = criteria.search_term() {
        let pattern = format!("%{}%", escape_like(term));
        let first = params.len() + 1;
        where_clauses.push(format!(
            r#"(LOWER(name) LIKE LOWER(${}) OR LOWER(surname) LIKE LOWER(${}) OR LOWER("phoneNumber") LIKE LOWER(${}))"#,
            first,
            first + 1,
            first + 2
        ));
        params.extend(std::iter::repeat_n(SqlParam::Text(pattern), 3));
    }

    match criteria.status {
        StatusFilter::Arrested => where_clauses.push("arrested = TRUE".to_string()),
        StatusFilter::Free => where_clauses.push("arrested = FALSE".to_string()),
        StatusFilter::All => {}
    }

    if !where_clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&where_clauses.join(" AND "));
    }

    sql.push_str(&format!(" ORDER BY surname, name LIMIT {SEARCH_LIMIT}"));

    Statement { sql, params }
}

/// Builds the UPDATE that sets the arrested flag of one citizen.
pub fn build_toggle_arrested_statement(citizen_id: &CitizenId, arrested: bool) -> Statement {
    Statement {
        sql: format!("UPDATE {CITIZEN_TABLE} SET arrested = $1 WHERE id::text = $2"),
        params: vec![
            SqlParam::Bool(arrested),
            SqlParam::Text(citizen_id.as_str().to_string()),
        ],
    }
}

/// Builds the SELECT that reads the arrested flag back after an update.
pub fn build_verify_statement(citizen_id: &CitizenId) -> Statement {
    Statement {
        sql: format!("SELECT arrested FROM {CITIZEN_TABLE} WHERE id::text = $1"),
        params: vec![SqlParam::Text(citizen_id.as_str().to_string())],
    }
}

/// Builds the row count used by the connection self-test.
pub fn build_count_statement() -> Statement {
    Statement {
        sql: format!("SELECT COUNT(*) AS count FROM {CITIZEN_TABLE}"),
        params: Vec::new(),
    }
}
