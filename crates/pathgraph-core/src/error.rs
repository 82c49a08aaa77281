//! Error types and exit codes for pathgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, bad query request)
//! - 3: Data error (rejected graph, cycle present, unknown graph id)

mod macros;

use thiserror::Error;

use crate::graph::CycleWitness;

/// Exit codes for the pathgraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph, cycle, missing graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Structural violations of a graph description.
///
/// The set is closed: validation stops at the first violation and reports
/// exactly one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("the <nodes> group must come before the <edges> group")]
    GroupsOutOfOrder,

    #[error("there must be at least one <node> in the <nodes> group")]
    NoNodes,

    #[error("all nodes must have different <id> tags")]
    DuplicateNodeId { id: String },

    #[error("every <edge> must have a single <from> tag")]
    MissingFrom,

    #[error("every <edge> must have a single <to> tag")]
    MissingTo,

    #[error("the <from> node of an edge must be declared in <nodes>")]
    UnknownFromNode { id: String },

    #[error("the <to> node of an edge must be declared in <nodes>")]
    UnknownToNode { id: String },

    #[error("the <cost> of an edge must be non-negative")]
    NegativeCost { edge: String },

    #[error("there must be an <id> in the <graph>")]
    MissingGraphId,

    #[error("there must be a <name> in the <graph>")]
    MissingGraphName,
}

impl StructureError {
    /// Stable identifier for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            StructureError::GroupsOutOfOrder => "groups_out_of_order",
            StructureError::NoNodes => "no_nodes",
            StructureError::DuplicateNodeId { .. } => "duplicate_node_id",
            StructureError::MissingFrom => "missing_from",
            StructureError::MissingTo => "missing_to",
            StructureError::UnknownFromNode { .. } => "unknown_from_node",
            StructureError::UnknownToNode { .. } => "unknown_to_node",
            StructureError::NegativeCost { .. } => "negative_cost",
            StructureError::MissingGraphId => "missing_graph_id",
            StructureError::MissingGraphName => "missing_graph_name",
        }
    }
}

fn describe_witnesses(witnesses: &[CycleWitness]) -> String {
    match witnesses.first() {
        Some(first) if witnesses.len() > 1 => {
            format!("{} (and {} more)", first, witnesses.len() - 1)
        }
        Some(first) => first.to_string(),
        None => "no witness recorded".to_string(),
    }
}

impl From<quick_xml::Error> for PathgraphError {
    fn from(err: quick_xml::Error) -> Self {
        PathgraphError::Malformed {
            reason: err.to_string(),
        }
    }
}

/// Errors that can occur during pathgraph operations
#[derive(Error, Debug)]
pub enum PathgraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid graph: {0}")]
    Structure(#[from] StructureError),

    #[error("cycle detected: {}", describe_witnesses(.witnesses))]
    CyclePresent { witnesses: Vec<CycleWitness> },

    #[error("graph not found: {id}")]
    GraphNotFound { id: i64 },

    #[error("malformed graph document: {reason}")]
    Malformed { reason: String },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl PathgraphError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        PathgraphError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PathgraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathgraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a document the ingestion layer cannot read
    pub fn malformed(reason: impl Into<String>) -> Self {
        PathgraphError::Malformed {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathgraphError::UnknownFormat(_)
            | PathgraphError::UsageError(_)
            | PathgraphError::InvalidValue { .. } => ExitCode::Usage,

            PathgraphError::Structure(_)
            | PathgraphError::CyclePresent { .. }
            | PathgraphError::GraphNotFound { .. }
            | PathgraphError::Malformed { .. } => ExitCode::Data,

            PathgraphError::Json(_)
            | PathgraphError::Toml(_)
            | PathgraphError::FailedOperation { .. }
            | PathgraphError::FailedOperationWithTarget { .. }
            | PathgraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathgraphError::UnknownFormat(_) => "unknown_format",
            PathgraphError::UsageError(_) => "usage_error",
            PathgraphError::InvalidValue { .. } => "invalid_value",
            PathgraphError::Structure(err) => err.code(),
            PathgraphError::CyclePresent { .. } => "cycle_present",
            PathgraphError::GraphNotFound { .. } => "graph_not_found",
            PathgraphError::Malformed { .. } => "malformed",
            PathgraphError::Json(_) => "json_error",
            PathgraphError::Toml(_) => "toml_error",
            PathgraphError::FailedOperation { .. } => "failed_operation",
            PathgraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            PathgraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    /// Cycle errors carry their witnesses.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let PathgraphError::CyclePresent { witnesses } = self {
            error_obj["cycles"] = serde_json::json!(witnesses);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for pathgraph operations
pub type Result<T> = std::result::Result<T, PathgraphError>;
