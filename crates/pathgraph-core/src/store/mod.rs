//! SQLite-backed graph store
//!
//! Graphs are written once, in a single transaction, and read back by the id
//! the store assigns. A loaded graph is not re-validated; construction still
//! re-checks that every edge names a stored node.

pub mod schema;

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

use crate::error::{PathgraphError, Result};
use crate::graph::{Cost, Edge, Graph, GraphDescription, Node};
use crate::map_db_err;
pub use schema::{create_schema, CURRENT_SCHEMA_VERSION};

/// Listing entry for a stored graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    pub id: i64,
    pub identity: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub nodes: i64,
    pub edges: i64,
}

/// Handle to a graph database. Owned by whoever performs persistence.
#[derive(Debug)]
pub struct GraphStore {
    conn: Connection,
}

impl GraphStore {
    /// Open or create the database file at `path`
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .map_err(|e| PathgraphError::io_operation("open database", path.display(), e))?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| map_db_err!("enable WAL mode", e))?;

        Self::init(conn)
    }

    /// Open a private, empty in-memory store
    pub fn open_in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| map_db_err!("open in-memory database", e))?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| map_db_err!("enable foreign keys", e))?;
        create_schema(&conn)?;
        Ok(GraphStore { conn })
    }

    /// Persist a graph and return its new store id
    #[tracing::instrument(skip(self, graph), fields(graph = %graph.identity()))]
    pub fn create(&mut self, graph: &Graph) -> Result<i64> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| map_db_err!("begin transaction", e))?;

        tx.execute(
            "INSERT INTO graphs (identity, name, created_at) VALUES (?1, ?2, ?3)",
            params![graph.identity(), graph.name(), Utc::now().to_rfc3339()],
        )
        .map_err(|e| map_db_err!("insert graph", e))?;
        let id = tx.last_insert_rowid();

        {
            let mut insert_node = tx
                .prepare(
                    "INSERT INTO nodes (graph_id, position, node_id, name) VALUES (?1, ?2, ?3, ?4)",
                )
                .map_err(|e| map_db_err!("prepare node insert", e))?;
            for (position, node) in graph.nodes().iter().enumerate() {
                insert_node
                    .execute(params![id, position as i64, node.id, node.name])
                    .map_err(|e| map_db_err!("insert node", e))?;
            }

            let mut insert_edge = tx
                .prepare(
                    "INSERT INTO edges (graph_id, position, edge_id, from_node, to_node, cost)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                )
                .map_err(|e| map_db_err!("prepare edge insert", e))?;
            for (position, edge) in graph.edges().iter().enumerate() {
                insert_edge
                    .execute(params![
                        id,
                        position as i64,
                        edge.id,
                        edge.from,
                        edge.to,
                        edge.cost.value()
                    ])
                    .map_err(|e| map_db_err!("insert edge", e))?;
            }
        }

        tx.commit().map_err(|e| map_db_err!("commit graph", e))?;
        tracing::debug!(id, "graph stored");
        Ok(id)
    }

    /// Load a stored graph by id
    #[tracing::instrument(skip(self))]
    pub fn load(&self, id: i64) -> Result<Graph> {
        let header: Option<(String, String)> = self
            .conn
            .query_row(
                "SELECT identity, name FROM graphs WHERE id = ?1",
                [id],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .optional()
            .map_err(|e| map_db_err!("load graph", e))?;
        let Some((identity, name)) = header else {
            return Err(PathgraphError::GraphNotFound { id });
        };

        let nodes = self.load_nodes(id)?;
        let edges = self.load_edges(id)?;

        let graph = Graph::new(GraphDescription {
            id: identity,
            name,
            nodes,
            edges,
        })?;
        Ok(graph.with_store_id(id))
    }

    fn load_nodes(&self, id: i64) -> Result<Vec<Node>> {
        let mut stmt = self
            .conn
            .prepare("SELECT node_id, name FROM nodes WHERE graph_id = ?1 ORDER BY position")
            .map_err(|e| map_db_err!("prepare node query", e))?;
        let rows = stmt
            .query_map([id], |r| Ok(Node::new(r.get::<_, String>(0)?, r.get::<_, String>(1)?)))
            .map_err(|e| map_db_err!("query nodes", e))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read nodes", e))
    }

    fn load_edges(&self, id: i64) -> Result<Vec<Edge>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT edge_id, from_node, to_node, cost FROM edges
                 WHERE graph_id = ?1 ORDER BY position",
            )
            .map_err(|e| map_db_err!("prepare edge query", e))?;
        let rows = stmt
            .query_map([id], |r| {
                Ok(Edge {
                    id: r.get(0)?,
                    from: r.get(1)?,
                    to: r.get(2)?,
                    cost: Cost::new(r.get(3)?),
                })
            })
            .map_err(|e| map_db_err!("query edges", e))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read edges", e))
    }

    /// All stored graphs, oldest first
    pub fn list(&self) -> Result<Vec<GraphSummary>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT g.id, g.identity, g.name, g.created_at,
                        (SELECT COUNT(*) FROM nodes n WHERE n.graph_id = g.id),
                        (SELECT COUNT(*) FROM edges e WHERE e.graph_id = g.id)
                 FROM graphs g ORDER BY g.id",
            )
            .map_err(|e| map_db_err!("prepare graph listing", e))?;

        let rows = stmt
            .query_map([], |r| {
                Ok((
                    r.get::<_, i64>(0)?,
                    r.get::<_, String>(1)?,
                    r.get::<_, String>(2)?,
                    r.get::<_, String>(3)?,
                    r.get::<_, i64>(4)?,
                    r.get::<_, i64>(5)?,
                ))
            })
            .map_err(|e| map_db_err!("list graphs", e))?;

        let mut summaries = Vec::new();
        for row in rows {
            let (id, identity, name, created_at, nodes, edges) =
                row.map_err(|e| map_db_err!("read graph listing", e))?;
            let created_at = DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| map_db_err!("parse created_at", e))?
                .with_timezone(&Utc);
            summaries.push(GraphSummary {
                id,
                identity,
                name,
                created_at,
                nodes,
                edges,
            });
        }
        Ok(summaries)
    }

    /// Remove a stored graph with its nodes and edges
    #[tracing::instrument(skip(self))]
    pub fn delete(&self, id: i64) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM graphs WHERE id = ?1", [id])
            .map_err(|e| map_db_err!("delete graph", e))?;
        if removed == 0 {
            return Err(PathgraphError::GraphNotFound { id });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
