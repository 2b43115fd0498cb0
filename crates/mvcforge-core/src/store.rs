use serde::{Deserialize, Serialize};

use crate::{CanvasNode, Component, ComponentKind, ComponentPatch, Edge, NodeData, Position};

/// A structural edit to the node collection. Matches the change objects the
/// canvas layer emits (move / select / remove).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeChange {
    Position { id: String, position: Position },
    Select { id: String, selected: bool },
    Remove { id: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EdgeChange {
    Select { id: String, selected: bool },
    Remove { id: String },
}

/// The canonical node and edge collections. All mutations are synchronous
/// and leave the graph with no dangling edge endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphStore {
    #[serde(default)]
    pub nodes: Vec<CanvasNode>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

fn next_id(existing: impl Iterator<Item = String>, prefix: &str) -> String {
    let max = existing
        .filter_map(|id| {
            id.strip_prefix(prefix)
                .and_then(|s| s.strip_prefix('-'))
                .and_then(|s| s.parse::<u64>().ok())
        })
        .max()
        .unwrap_or(0);
    format!("{}-{}", prefix, max + 1)
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next node ID by scanning existing nodes ("node-N").
    fn next_node_id(&self) -> String {
        next_id(self.nodes.iter().map(|n| n.id.clone()), "node")
    }

    fn next_component_id(&self) -> String {
        next_id(
            self.nodes.iter().map(|n| n.data.component.id.clone()),
            "component",
        )
    }

    fn next_edge_id(&self) -> String {
        next_id(self.edges.iter().map(|e| e.id.clone()), "edge")
    }

    pub fn node(&self, id: &str) -> Option<&CanvasNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Place a new node with a default-named, empty component. Never fails;
    /// the node's display label starts out equal to the component name.
    pub fn add_node(&mut self, kind: ComponentKind, position: Position) -> String {
        let node_id = self.next_node_id();
        let component_id = self.next_component_id();
        let name = kind.default_name().to_string();
        self.nodes.push(CanvasNode {
            id: node_id.clone(),
            kind,
            position,
            selected: false,
            data: NodeData {
                label: name.clone(),
                component: Component {
                    id: component_id,
                    kind,
                    name,
                    code: String::new(),
                },
            },
        });
        node_id
    }

    /// Apply a batch of node edits in the order given. Removing a node
    /// cascade-deletes every edge touching it together with its owned
    /// component, so no dangling references survive the batch.
    pub fn apply_node_changes(&mut self, changes: &[NodeChange]) {
        for change in changes {
            match change {
                NodeChange::Position { id, position } => {
                    if let Some(node) = self.nodes.iter_mut().find(|n| n.id == *id) {
                        node.position = position.clone();
                    }
                }
                NodeChange::Select { id, selected } => {
                    if let Some(node) = self.nodes.iter_mut().find(|n| n.id == *id) {
                        node.selected = *selected;
                    }
                }
                NodeChange::Remove { id } => self.remove_node(id),
            }
        }
    }

    fn remove_node(&mut self, id: &str) {
        // The component lives inside the node, so it goes with it.
        self.nodes.retain(|n| n.id != id);
        self.edges.retain(|e| e.source != id && e.target != id);
    }

    pub fn apply_edge_changes(&mut self, changes: &[EdgeChange]) {
        for change in changes {
            match change {
                EdgeChange::Select { id, selected } => {
                    if let Some(edge) = self.edges.iter_mut().find(|e| e.id == *id) {
                        edge.selected = *selected;
                    }
                }
                EdgeChange::Remove { id } => self.edges.retain(|e| e.id != *id),
            }
        }
    }

    /// Connect source → target. Returns None (and appends nothing) if either
    /// endpoint does not resolve to an existing node. Duplicate connections
    /// between the same pair are permitted.
    pub fn connect(&mut self, source: &str, target: &str) -> Option<String> {
        if self.node(source).is_none() || self.node(target).is_none() {
            return None;
        }
        let id = self.next_edge_id();
        self.edges.push(Edge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
            selected: false,
        });
        Some(id)
    }

    /// Merge a patch into the component owned by `node_id`. A name change
    /// also updates the node's display label so the two never diverge.
    /// Unknown ids are a silent no-op.
    pub fn update_component(&mut self, node_id: &str, patch: &ComponentPatch) {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) else {
            return;
        };
        if let Some(name) = &patch.name {
            node.data.component.name = name.clone();
            node.data.label = name.clone();
        }
        if let Some(code) = &patch.code {
            node.data.component.code = code.clone();
        }
    }
}
