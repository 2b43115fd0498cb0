use std::collections::HashSet;

use crate::pattern;
use crate::store::GraphStore;
use crate::{CanvasNode, ComponentKind, InterfaceFact, RouteEntry};

/// All nodes feeding into `node_id` with the given kind, in edge insertion
/// order. Duplicate edges between the same pair collapse to one logical
/// connection.
pub fn connected_nodes<'a>(
    store: &'a GraphStore,
    node_id: &str,
    kind: ComponentKind,
) -> Vec<&'a CanvasNode> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for edge in &store.edges {
        if edge.target != node_id {
            continue;
        }
        let Some(node) = store.node(&edge.source) else {
            continue;
        };
        if node.kind != kind {
            continue;
        }
        if seen.insert(node.id.as_str()) {
            out.push(node);
        }
    }
    out
}

/// First connected node of the given kind, if any.
pub fn connected_node<'a>(
    store: &'a GraphStore,
    node_id: &str,
    kind: ComponentKind,
) -> Option<&'a CanvasNode> {
    connected_nodes(store, node_id, kind).into_iter().next()
}

/// First `interface` declaration found in each listed node's code. Nodes
/// that don't resolve or have no match are silently excluded.
pub fn extract_interfaces(store: &GraphStore, node_ids: &[&str]) -> Vec<InterfaceFact> {
    node_ids
        .iter()
        .filter_map(|id| store.node(id))
        .filter_map(|n| pattern::first_interface(&n.data.component.code))
        .collect()
}

/// One route per controller that has at least one connected model, in node
/// insertion order. Recomputed per call so it never goes stale.
pub fn routes_for_graph(store: &GraphStore) -> Vec<RouteEntry> {
    store
        .nodes
        .iter()
        .filter(|n| n.kind == ComponentKind::ControllerView)
        .filter(|n| !connected_nodes(store, &n.id, ComponentKind::Model).is_empty())
        .map(|n| RouteEntry {
            path: format!("/{}", n.data.component.name.to_lowercase()),
            component: n.data.component.name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ComponentPatch, Position};

    fn store_with(kinds: &[ComponentKind]) -> (GraphStore, Vec<String>) {
        let mut store = GraphStore::new();
        let ids = kinds
            .iter()
            .map(|k| store.add_node(*k, Position::default()))
            .collect();
        (store, ids)
    }

    #[test]
    fn connected_nodes_filters_by_direction_and_kind() {
        let (mut store, ids) = store_with(&[
            ComponentKind::Model,
            ComponentKind::Router,
            ComponentKind::ControllerView,
        ]);
        store.connect(&ids[0], &ids[2]).unwrap();
        store.connect(&ids[1], &ids[2]).unwrap();
        // reverse direction must not count
        store.connect(&ids[2], &ids[0]).unwrap();

        let models = connected_nodes(&store, &ids[2], ComponentKind::Model);
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].id, ids[0]);
    }

    #[test]
    fn unrelated_edges_do_not_change_the_result() {
        let (mut store, ids) = store_with(&[
            ComponentKind::Model,
            ComponentKind::ControllerView,
            ComponentKind::ControllerView,
        ]);
        store.connect(&ids[0], &ids[1]).unwrap();
        let before: Vec<String> = connected_nodes(&store, &ids[1], ComponentKind::Model)
            .iter()
            .map(|n| n.id.clone())
            .collect();

        store.connect(&ids[0], &ids[2]).unwrap();
        let after: Vec<String> = connected_nodes(&store, &ids[1], ComponentKind::Model)
            .iter()
            .map(|n| n.id.clone())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn duplicate_edges_collapse_to_one_logical_connection() {
        let (mut store, ids) = store_with(&[ComponentKind::Model, ComponentKind::ControllerView]);
        store.connect(&ids[0], &ids[1]).unwrap();
        store.connect(&ids[0], &ids[1]).unwrap();
        assert_eq!(connected_nodes(&store, &ids[1], ComponentKind::Model).len(), 1);
        assert_eq!(routes_for_graph(&store).len(), 1);
    }

    #[test]
    fn connected_nodes_preserve_edge_insertion_order() {
        let (mut store, ids) = store_with(&[
            ComponentKind::Model,
            ComponentKind::Model,
            ComponentKind::ControllerView,
        ]);
        store.connect(&ids[1], &ids[2]).unwrap();
        store.connect(&ids[0], &ids[2]).unwrap();
        let order: Vec<&str> = connected_nodes(&store, &ids[2], ComponentKind::Model)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(order, vec![ids[1].as_str(), ids[0].as_str()]);
    }

    #[test]
    fn routes_exclude_controllers_without_a_model() {
        let (mut store, ids) = store_with(&[
            ComponentKind::Model,
            ComponentKind::ControllerView,
            ComponentKind::ControllerView,
        ]);
        store.connect(&ids[0], &ids[1]).unwrap();
        store.update_component(
            &ids[1],
            &ComponentPatch {
                name: Some("Dashboard".to_string()),
                code: None,
            },
        );

        let routes = routes_for_graph(&store);
        assert_eq!(
            routes,
            vec![RouteEntry {
                path: "/dashboard".to_string(),
                component: "Dashboard".to_string(),
            }]
        );
    }

    #[test]
    fn extract_interfaces_skips_nodes_without_a_match() {
        let (mut store, ids) = store_with(&[ComponentKind::Model, ComponentKind::Model]);
        store.update_component(
            &ids[0],
            &ComponentPatch {
                name: None,
                code: Some("interface User { id: string }".to_string()),
            },
        );
        let facts = extract_interfaces(&store, &[ids[0].as_str(), ids[1].as_str()]);
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].name, "User");
    }

    // The full canvas flow: place a model and a controller, wire them up,
    // and watch the derived facts line up.
    #[test]
    fn todo_scenario_end_to_end() {
        let mut store = GraphStore::new();
        let model_id = store.add_node(ComponentKind::Model, Position::default());
        store.update_component(
            &model_id,
            &ComponentPatch {
                name: None,
                code: Some("interface Todo { id: string; text: string }".to_string()),
            },
        );
        let controller_id = store.add_node(ComponentKind::ControllerView, Position::default());
        store.connect(&model_id, &controller_id).unwrap();

        let models = connected_nodes(&store, &controller_id, ComponentKind::Model);
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].id, model_id);

        let facts = extract_interfaces(&store, &[model_id.as_str()]);
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].name, "Todo");

        store.update_component(
            &controller_id,
            &ComponentPatch {
                name: Some("TodoController".to_string()),
                code: None,
            },
        );
        assert_eq!(
            routes_for_graph(&store),
            vec![RouteEntry {
                path: "/todocontroller".to_string(),
                component: "TodoController".to_string(),
            }]
        );
    }
}
