//! XML reader for `<graph>` documents
//!
//! Element paths are matched against a stack of open element names, so the
//! same local name (`id`, `name`, `node`) means different things under
//! `<graph>`, `<nodes>` and `<edges>`. Edge elements may be spelled `<edge>`
//! or `<node>`. Anything unrecognized is skipped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{PathgraphError, Result};
use crate::event::GraphEvent;
use crate::graph::Cost;

#[derive(Debug, Default)]
struct NodeDraft {
    id: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Default)]
struct Scanner {
    stack: Vec<String>,
    text: String,
    seen_root: bool,
    node: Option<NodeDraft>,
    edges_read: usize,
    events: Vec<GraphEvent>,
}

impl Scanner {
    fn open(&mut self, name: String) -> Result<()> {
        if self.stack.is_empty() {
            if self.seen_root {
                return Err(PathgraphError::malformed("content after </graph>"));
            }
            if name != "graph" {
                return Err(PathgraphError::malformed(format!(
                    "root element must be <graph>, found <{}>",
                    name
                )));
            }
            self.seen_root = true;
        }

        self.stack.push(name);
        self.text.clear();

        let path: Vec<&str> = self.stack.iter().map(String::as_str).collect();
        let event = match path.as_slice() {
            ["graph", "nodes"] => Some(GraphEvent::NodesStart),
            ["graph", "nodes", "node"] => {
                self.node = Some(NodeDraft::default());
                None
            }
            ["graph", "edges"] => Some(GraphEvent::EdgesStart),
            ["graph", "edges", "node" | "edge"] => {
                self.edges_read += 1;
                Some(GraphEvent::EdgeStart)
            }
            _ => None,
        };

        if let Some(event) = event {
            self.events.push(event);
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let text = std::mem::take(&mut self.text);
        let value = text.trim().to_string();

        let path: Vec<&str> = self.stack.iter().map(String::as_str).collect();
        let event = match path.as_slice() {
            ["graph", "id"] => Some(GraphEvent::GraphId(value)),
            ["graph", "name"] => Some(GraphEvent::GraphName(value)),
            ["graph", "nodes", "node", "id"] => {
                if let Some(node) = self.node.as_mut() {
                    node.id.get_or_insert(value);
                }
                None
            }
            ["graph", "nodes", "node", "name"] => {
                if let Some(node) = self.node.as_mut() {
                    node.name.get_or_insert(value);
                }
                None
            }
            ["graph", "nodes", "node"] => self.node.take().map(|node| GraphEvent::Node {
                id: node.id.unwrap_or_default(),
                name: node.name.unwrap_or_default(),
            }),
            ["graph", "nodes"] => Some(GraphEvent::NodesEnd),
            ["graph", "edges", "node" | "edge", "id"] => Some(GraphEvent::EdgeId(value)),
            ["graph", "edges", "node" | "edge", "from"] => Some(GraphEvent::EdgeFrom(value)),
            ["graph", "edges", "node" | "edge", "to"] => Some(GraphEvent::EdgeTo(value)),
            ["graph", "edges", "node" | "edge", "cost"] => {
                Some(GraphEvent::EdgeCost(parse_cost(&value, self.edges_read)?))
            }
            ["graph", "edges", "node" | "edge"] => Some(GraphEvent::EdgeEnd),
            ["graph", "edges"] => Some(GraphEvent::EdgesEnd),
            _ => None,
        };

        if let Some(event) = event {
            self.events.push(event);
        }
        self.stack.pop();
        Ok(())
    }

    fn finish(self) -> Result<Vec<GraphEvent>> {
        if !self.seen_root {
            return Err(PathgraphError::malformed("missing <graph> root element"));
        }
        if let Some(open) = self.stack.last() {
            return Err(PathgraphError::malformed(format!(
                "document ends inside <{}>",
                open
            )));
        }
        Ok(self.events)
    }
}

fn parse_cost(value: &str, edge: usize) -> Result<Cost> {
    match value.parse::<f64>() {
        Ok(cost) if cost.is_finite() => Ok(Cost::new(cost)),
        _ => Err(PathgraphError::malformed(format!(
            "invalid <cost> '{}' in edge {}",
            value, edge
        ))),
    }
}

fn element_name(element: &BytesStart<'_>) -> Result<String> {
    std::str::from_utf8(element.local_name().as_ref())
        .map(str::to_string)
        .map_err(|e| PathgraphError::malformed(format!("element name is not UTF-8: {}", e)))
}

/// Parse a `<graph>` document into its field events.
///
/// Only lexical problems fail here. Structural rules are left to
/// [`validate`](crate::validate::validate).
pub fn read_events(xml: &str) -> Result<Vec<GraphEvent>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut scanner = Scanner::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) => scanner.open(element_name(&element)?)?,
            Ok(Event::Empty(element)) => {
                scanner.open(element_name(&element)?)?;
                scanner.close()?;
            }
            Ok(Event::Text(text)) => scanner.text.push_str(&text.unescape()?),
            Ok(Event::CData(data)) => scanner.text.push_str(&String::from_utf8_lossy(&data)),
            Ok(Event::End(_)) => scanner.close()?,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(PathgraphError::malformed(format!(
                    "at byte {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        }
    }

    scanner.finish()
}
