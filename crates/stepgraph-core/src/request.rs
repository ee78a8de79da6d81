//! Run requests: parse caller input, build a driver, shape the one-shot result

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::bail_request;
use crate::error::{Result, StepgraphError};
use crate::graph::{Algorithm, Distance, GraphModel, NodeId, Snapshot, StepDriver, ValidateOptions};

/// Encoding of a request document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick the format from a file extension; anything but `.yaml`/`.yml`
    /// is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                InputFormat::Yaml
            }
            _ => InputFormat::Json,
        }
    }
}

/// Caller-supplied fields that replace the document's own `start`/`algo`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOverrides {
    pub start: Option<NodeId>,
    pub algorithm: Option<Algorithm>,
}

impl RequestOverrides {
    /// Write the overrides into a decoded document before its fields are
    /// checked, so an override can fill a field the document lacks.
    fn apply(&self, doc: &mut Value) {
        let Value::Object(fields) = doc else {
            return;
        };
        if let Some(start) = &self.start {
            fields.insert("start".to_string(), Value::String(start.clone()));
        }
        if let Some(algorithm) = self.algorithm {
            fields.insert("algo".to_string(), Value::String(algorithm.to_string()));
        }
    }
}

/// A traversal request: graph adjacency, start node and algorithm
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Raw adjacency, validated when a driver is built
    pub graph: Value,
    pub start: NodeId,
    pub algorithm: Algorithm,
}

impl RunRequest {
    /// Read a request document from `content`.
    ///
    /// `default_algorithm` applies when neither the document nor the
    /// overrides name one.
    pub fn parse(
        content: &str,
        format: InputFormat,
        default_algorithm: Algorithm,
        overrides: &RequestOverrides,
    ) -> Result<Self> {
        let mut doc = decode(content, format)?;
        overrides.apply(&mut doc);
        Self::from_value(&doc, default_algorithm)
    }

    /// Load a request file. Without an explicit `format` the extension
    /// decides.
    pub fn load(
        path: &Path,
        format: Option<InputFormat>,
        default_algorithm: Algorithm,
        overrides: &RequestOverrides,
    ) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| StepgraphError::io_operation("read request", path.display(), e))?;
        let format = format.unwrap_or_else(|| InputFormat::from_path(path));
        Self::parse(&content, format, default_algorithm, overrides)
    }

    /// Build a request from a decoded document with `graph`, `start` and
    /// optional `algo` (or `algorithm`) fields.
    pub fn from_value(value: &Value, default_algorithm: Algorithm) -> Result<Self> {
        let Some(doc) = value.as_object() else {
            bail_request!("request", "expected a mapping with 'graph' and 'start'");
        };

        let graph = match doc.get("graph") {
            None | Some(Value::Null) => bail_request!("graph", "field is required"),
            Some(graph) => graph.clone(),
        };

        let start = match doc.get("start") {
            None | Some(Value::Null) => bail_request!("start", "field is required"),
            Some(Value::String(s)) if s.is_empty() => bail_request!("start", "must not be empty"),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(_) => bail_request!("start", "expected a node identifier"),
        };

        let algorithm = match doc.get("algo").or_else(|| doc.get("algorithm")) {
            None | Some(Value::Null) => default_algorithm,
            Some(Value::String(s)) => s.parse()?,
            Some(_) => bail_request!("algo", "expected one of bfs, dfs, dijkstra"),
        };

        Ok(Self {
            graph,
            start,
            algorithm,
        })
    }

    /// Validate the graph, bind the stepper to the start node and wrap it in
    /// a fresh driver.
    #[tracing::instrument(skip(self), fields(algorithm = %self.algorithm, start = %self.start))]
    pub fn driver(&self, opts: &ValidateOptions) -> Result<StepDriver> {
        let graph = Arc::new(GraphModel::validate_with(&self.graph, opts)?);
        let stepper = self.algorithm.stepper(graph, &self.start)?;
        Ok(StepDriver::new(stepper))
    }

    /// One-shot path: drain to completion and shape the final outcome.
    pub fn run(&self, opts: &ValidateOptions) -> Result<RunOutcome> {
        let mut driver = self.driver(opts)?;
        let last = driver.drain_final()?;
        Ok(RunOutcome::from_final(&last, &self.start, driver.steps_taken()))
    }
}

/// Final result of a one-shot run.
///
/// BFS and DFS report the visited set; Dijkstra adds distances,
/// predecessors and the reconstructed path to every reached node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    pub algorithm: Algorithm,
    pub start: NodeId,
    pub steps: usize,
    pub visited: BTreeSet<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<BTreeMap<NodeId, Distance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessor: Option<BTreeMap<NodeId, NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<BTreeMap<NodeId, Vec<NodeId>>>,
}

impl RunOutcome {
    pub fn from_final(snapshot: &Snapshot, start: &str, steps: usize) -> Self {
        let mut outcome = Self {
            algorithm: snapshot.algorithm(),
            start: start.to_string(),
            steps,
            visited: snapshot.visited().clone(),
            distances: None,
            predecessor: None,
            paths: None,
        };

        if let Some(d) = snapshot.as_dijkstra() {
            let paths = d
                .distances
                .keys()
                .filter_map(|node| d.path_to(node).map(|path| (node.clone(), path)))
                .collect();
            outcome.distances = Some(d.distances.clone());
            outcome.predecessor = Some(d.predecessor.clone());
            outcome.paths = Some(paths);
        }

        outcome
    }
}

/// Decode a request document into a JSON value without checking its fields.
///
/// YAML scalar mapping keys become strings, so `1: {2: 1}` reads as node `"1"`.
fn decode(content: &str, format: InputFormat) -> Result<Value> {
    match format {
        InputFormat::Json => Ok(serde_json::from_str(content)?),
        InputFormat::Yaml => yaml_to_json(&serde_yaml::from_str(content)?, "request"),
    }
}

fn yaml_to_json(value: &serde_yaml::Value, field: &str) -> Result<Value> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(*b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                match n.as_f64().and_then(serde_json::Number::from_f64) {
                    Some(f) => Value::Number(f),
                    None => bail_request!(field, format!("unsupported number {}", n)),
                }
            }
        }
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Sequence(items) => Value::Array(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| yaml_to_json(item, &format!("{}[{}]", field, i)))
                .collect::<Result<_>>()?,
        ),
        Yaml::Mapping(map) => {
            let mut object = serde_json::Map::new();
            for (key, item) in map {
                let key = match key {
                    Yaml::String(s) => s.clone(),
                    Yaml::Number(n) => n.to_string(),
                    Yaml::Bool(b) => b.to_string(),
                    _ => bail_request!(field, "mapping keys must be scalars"),
                };
                let item = yaml_to_json(item, &format!("{}.{}", field, key))?;
                object.insert(key, item);
            }
            Value::Object(object)
        }
        #[allow(unreachable_patterns)]
        _ => bail_request!(field, "tagged values are not supported"),
    })
}
