//! Builds the parameterized statements for the products table.

/// Table name is fixed; the schema comes from config.
pub const PRODUCTS_TABLE: &str = "products";

/// Quote identifier for PostgreSQL.
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

/// SQL text for every store operation, built once per store.
#[derive(Clone, Debug)]
pub struct ProductQueries {
    pub table: String,
    pub insert: String,
    pub select_by_id: String,
    pub update: String,
    pub delete: String,
    pub select_page: String,
}

impl ProductQueries {
    pub fn new(schema: &str) -> Self {
        let table = qualified_table(schema, PRODUCTS_TABLE);
        let cols = "id, name, price";
        ProductQueries {
            insert: format!("INSERT INTO {} (name, price) VALUES ($1, $2) RETURNING {}", table, cols),
            select_by_id: format!("SELECT {} FROM {} WHERE id = $1", cols, table),
            update: format!(
                "UPDATE {} SET name = $1, price = $2 WHERE id = $3 RETURNING {}",
                table, cols
            ),
            delete: format!("DELETE FROM {} WHERE id = $1", table),
            select_page: format!("SELECT {} FROM {} ORDER BY id ASC LIMIT $1 OFFSET $2", cols, table),
            table,
        }
    }

    /// Idempotent DDL for the table these queries target.
    pub fn create_table(&self) -> String {
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id SERIAL,
                name TEXT NOT NULL,
                price NUMERIC(10,2) NOT NULL DEFAULT 0.00,
                CONSTRAINT products_pkey PRIMARY KEY (id)
            )
            "#,
            self.table
        )
    }
}
