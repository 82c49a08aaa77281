//! SQLite schema for the graph store

use rusqlite::Connection;

use crate::error::{PathgraphError, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

const SCHEMA_SQL: &str = r#"
-- One row per stored graph
CREATE TABLE IF NOT EXISTS graphs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    identity TEXT NOT NULL,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Nodes, in declaration order
CREATE TABLE IF NOT EXISTS nodes (
    graph_id INTEGER NOT NULL REFERENCES graphs(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    node_id TEXT NOT NULL,
    name TEXT NOT NULL,
    PRIMARY KEY (graph_id, node_id)
);
CREATE INDEX IF NOT EXISTS idx_nodes_position ON nodes(graph_id, position);

-- Edges, in declaration order; self-loops are kept
CREATE TABLE IF NOT EXISTS edges (
    graph_id INTEGER NOT NULL REFERENCES graphs(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    edge_id TEXT NOT NULL,
    from_node TEXT NOT NULL,
    to_node TEXT NOT NULL,
    cost REAL NOT NULL,
    PRIMARY KEY (graph_id, position)
);

-- Store metadata
CREATE TABLE IF NOT EXISTS store_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

/// Read the recorded schema version; `None` for a fresh database
pub fn schema_version(conn: &Connection) -> Option<i32> {
    conn.query_row(
        "SELECT value FROM store_meta WHERE key = 'schema_version'",
        [],
        |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
    )
    .ok()
}

/// Create the schema on a fresh database, or check an existing one
pub fn create_schema(conn: &Connection) -> Result<()> {
    match schema_version(conn) {
        None => {
            conn.execute_batch(SCHEMA_SQL)
                .map_err(|e| PathgraphError::db_operation("create database schema", e))?;
            conn.execute(
                "INSERT INTO store_meta (key, value) VALUES ('schema_version', ?1)",
                [&CURRENT_SCHEMA_VERSION.to_string()],
            )
            .map_err(|e| PathgraphError::db_operation("record schema version", e))?;
            tracing::debug!(version = CURRENT_SCHEMA_VERSION, "created store schema");
            Ok(())
        }
        Some(v) if v == CURRENT_SCHEMA_VERSION => Ok(()),
        Some(v) => Err(PathgraphError::db_operation(
            "open graph store",
            format!(
                "unsupported schema version {} (expected {})",
                v, CURRENT_SCHEMA_VERSION
            ),
        )),
    }
}
