//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the `books` table.

use crate::model::{BookFilter, BookInput};

pub const TABLE: &str = "books";

/// Columns returned by every row-producing statement, in `Book` field order.
pub const COLUMNS: &str = "id, title, author, publish_date, publisher";

/// A value bound to a positional placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Int(i32),
    Text(Option<String>),
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// Wrap a filter value for substring matching. `%` and `_` inside the value are not escaped.
fn contains_pattern(s: &str) -> String {
    format!("%{}%", s)
}

/// SELECT list with optional case-insensitive substring filters joined by AND.
/// Placeholder `$n` is bound to `params[n - 1]`.
pub fn select_list(filter: &BookFilter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    for (col, val) in filter.active() {
        let n = q.push_param(BindValue::Text(Some(contains_pattern(val))));
        where_parts.push(format!("{} ILIKE ${}", col, n));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.sql = format!("SELECT {} FROM {}{}", COLUMNS, TABLE, where_clause);
    q
}

/// SELECT by primary key.
pub fn select_by_id(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(id));
    q.sql = format!("SELECT {} FROM {} WHERE id = ${}", COLUMNS, TABLE, n);
    q
}

/// Pushes the four content columns as `col = $n` / placeholder pairs; `publish_date` gets a `::date` cast.
fn push_content(q: &mut QueryBuf, body: &BookInput) -> Vec<(&'static str, String)> {
    [
        ("title", &body.title, ""),
        ("author", &body.author, ""),
        ("publish_date", &body.publish_date, "::date"),
        ("publisher", &body.publisher, ""),
    ]
    .into_iter()
    .map(|(col, v, cast)| {
        let n = q.push_param(BindValue::Text(v.clone()));
        (col, format!("${}{}", n, cast))
    })
    .collect()
}

/// INSERT all four content columns; id comes from the table's sequence.
pub fn insert(body: &BookInput) -> QueryBuf {
    let mut q = QueryBuf::new();
    let pairs = push_content(&mut q, body);
    let cols: Vec<&str> = pairs.iter().map(|(c, _)| *c).collect();
    let placeholders: Vec<&str> = pairs.iter().map(|(_, p)| p.as_str()).collect();
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        TABLE,
        cols.join(", "),
        placeholders.join(", "),
        COLUMNS
    );
    q
}

/// UPDATE by id: full replace, absent fields are written as NULL.
pub fn update(id: i32, body: &BookInput) -> QueryBuf {
    let mut q = QueryBuf::new();
    let sets: Vec<String> = push_content(&mut q, body)
        .into_iter()
        .map(|(c, p)| format!("{} = {}", c, p))
        .collect();
    let id_param = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE id = ${} RETURNING {}",
        TABLE,
        sets.join(", "),
        id_param,
        COLUMNS
    );
    q
}

/// DELETE by id, returning the id when a row was removed.
pub fn delete(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(id));
    q.sql = format!("DELETE FROM {} WHERE id = ${} RETURNING id", TABLE, n);
    q
}
