pub mod export;
pub mod pattern;
pub mod resolve;
pub mod settings;
pub mod store;
pub mod synth;
pub mod templates;

use serde::{Deserialize, Serialize};

// --- Types (matching the canvas frontend's JSON shapes) ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Model,
    ControllerView,
    Router,
    AppSettings,
}

impl ComponentKind {
    /// Default component name for a freshly placed node.
    pub fn default_name(&self) -> &'static str {
        match self {
            ComponentKind::Model => "NewModel",
            ComponentKind::ControllerView => "NewController",
            ComponentKind::Router => "NewRouter",
            ComponentKind::AppSettings => "NewAppSettings",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// The named, typed, code-bearing payload of a node. Owned by exactly one
/// node and removed with it. The code blob is opaque to the engine except
/// for pattern extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub kind: ComponentKind,
    pub name: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub label: String,
    pub component: Component,
}

/// A node on the canvas. Matches ReactFlow's Node structure; `position` is
/// display state the engine stores but never interprets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub selected: bool,
    pub data: NodeData,
}

/// A directed edge expressing "produces/feeds" between two nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub selected: bool,
}

/// Partial update for a node's component. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

// --- Derived facts (computed fresh per query, never stored) ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    pub path: String,
    pub component: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceFact {
    pub name: String,
    pub raw_declaration: String,
}
