//! Caller-supplied trace input
//!
//! [`Input`] is what a trace is instantiated against. Text parsers accept the formats
//! the command line uses: comma-separated integers for arrays and semicolon-separated
//! neighbor lists for graphs (`"1,2;0,3;..."`, an empty segment is a node without
//! edges). Anything that is not an integer is rejected rather than skipped.

use crate::catalog::Category;
use crate::error::TraceError;
use crate::trace::graph::Graph;
use crate::trace::Value;
use serde::{Deserialize, Serialize};

/// Input for one trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Input {
    /// Values to sort
    Sequence { values: Vec<Value> },
    /// Values to search and the value to look for
    Search { values: Vec<Value>, target: Value },
    /// Graph to traverse and its start node
    Graph { graph: Graph, start: usize },
}

impl Input {
    pub fn category(&self) -> Category {
        match self {
            Input::Sequence { .. } => Category::Sorting,
            Input::Search { .. } => Category::Searching,
            Input::Graph { .. } => Category::Graph,
        }
    }

    /// Array contents, for the families that have one
    pub fn values(&self) -> &[Value] {
        match self {
            Input::Sequence { values } | Input::Search { values, .. } => values,
            Input::Graph { .. } => &[],
        }
    }
}

/// Parse `"5, 3, 8, 1"` into values
pub fn parse_values(text: &str) -> Result<Vec<Value>, TraceError> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<Value>().map_err(|_| TraceError::InvalidValue {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parse `"1,2;0,3,4;0"` into a validated graph
pub fn parse_graph(text: &str) -> Result<Graph, TraceError> {
    let adjacency = text
        .split(';')
        .map(|segment| {
            segment
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(|token| {
                    token.parse::<usize>().map_err(|_| TraceError::InvalidValue {
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<usize>, TraceError>>()
        })
        .collect::<Result<Vec<_>, TraceError>>()?;
    Graph::new(adjacency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("5, 3,8 ,1").unwrap(), vec![5, 3, 8, 1]);
        assert_eq!(parse_values("-4,,2").unwrap(), vec![-4, 2]);
        assert!(parse_values("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_values_rejects_garbage() {
        match parse_values("1, two, 3") {
            Err(TraceError::InvalidValue { token }) => assert_eq!(token, "two"),
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_graph() {
        let graph = parse_graph("1,2;0,3,4;0,5;1;1,5;2,4").unwrap();
        assert_eq!(graph, Graph::demo());

        let isolated = parse_graph("1;0;").unwrap();
        assert_eq!(isolated.node_count(), 3);
        assert!(isolated.neighbors(2).is_empty());
    }

    #[test]
    fn test_parse_graph_validates_ids() {
        assert!(matches!(
            parse_graph("1;7"),
            Err(TraceError::NeighborOutOfRange { neighbor: 7, .. })
        ));
        assert!(matches!(
            parse_graph("1;-1"),
            Err(TraceError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_input_json_shape() {
        let input: Input =
            serde_json::from_str(r#"{"kind":"search","values":[1,3],"target":3}"#).unwrap();
        assert_eq!(input.category(), Category::Searching);
        assert_eq!(input.values(), &[1, 3]);
    }
}
