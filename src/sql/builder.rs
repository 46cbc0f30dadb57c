//! Builds parameterized SELECTs: identifiers come from code constants only, values are always parameters.

/// A value bound to a `$n` placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlParam {
    Text(String),
    Bool(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    const fn keyword(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlParam) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// SELECT with column projection, equality filters (ANDed) and ordering.
pub struct Select<'a> {
    schema: &'a str,
    table: &'a str,
    columns: &'a [&'a str],
    filters: Vec<(&'a str, SqlParam)>,
    order: Vec<(&'a str, SortDirection)>,
}

impl<'a> Select<'a> {
    pub fn from(schema: &'a str, table: &'a str, columns: &'a [&'a str]) -> Self {
        Select {
            schema,
            table,
            columns,
            filters: Vec::new(),
            order: Vec::new(),
        }
    }

    pub fn filter_eq(mut self, column: &'a str, value: SqlParam) -> Self {
        self.filters.push((column, value));
        self
    }

    pub fn order_by(mut self, column: &'a str, direction: SortDirection) -> Self {
        self.order.push((column, direction));
        self
    }

    pub fn build(self) -> QueryBuf {
        let mut q = QueryBuf::new();
        let cols = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
        };
        q.sql = format!("SELECT {} FROM {}", cols, qualified_table(self.schema, self.table));

        let mut conditions = Vec::with_capacity(self.filters.len());
        for (col, value) in self.filters {
            let n = q.push_param(value);
            conditions.push(format!("{} = ${}", quoted(col), n));
        }
        if !conditions.is_empty() {
            q.sql.push_str(" WHERE ");
            q.sql.push_str(&conditions.join(" AND "));
        }

        if !self.order.is_empty() {
            let order: Vec<String> = self
                .order
                .iter()
                .map(|(col, dir)| format!("{} {}", quoted(col), dir.keyword()))
                .collect();
            q.sql.push_str(" ORDER BY ");
            q.sql.push_str(&order.join(", "));
        }
        q
    }
}
