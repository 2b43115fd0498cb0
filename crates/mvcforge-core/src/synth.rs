use std::collections::BTreeMap;

use crate::resolve;
use crate::settings::AppSettings;
use crate::store::GraphStore;
use crate::templates::TechStack;
use crate::{ComponentKind, RouteEntry};

/// Turn the graph into a file-path → content mapping.
///
/// Deterministic and idempotent: output depends only on graph contents and
/// settings, never on node positions or call count. Later writes win when a
/// path collides with a template file. Never fails; a component with empty
/// code contributes an empty file.
pub fn synthesize(store: &GraphStore, settings: &AppSettings) -> BTreeMap<String, String> {
    let stack = settings.tech_stack.as_deref().and_then(TechStack::from_id);
    let (ext, view_ext) = stack.map(|s| s.extensions()).unwrap_or(("ts", "tsx"));

    let mut files = BTreeMap::new();

    if let Some(stack) = stack {
        for (path, content) in stack.files() {
            files.insert((*path).to_string(), (*content).to_string());
        }
    }

    for node in &store.nodes {
        let component = &node.data.component;
        match node.kind {
            ComponentKind::Model => {
                files.insert(
                    format!("src/models/{}.{}", component.name, ext),
                    component.code.clone(),
                );
            }
            ComponentKind::ControllerView => {
                // The view lives inside the controller's code blob; there is
                // no separate view artifact.
                files.insert(
                    format!(
                        "src/components/{0}/{0}.{1}",
                        component.name, view_ext
                    ),
                    component.code.clone(),
                );
            }
            ComponentKind::Router | ComponentKind::AppSettings => {}
        }
    }

    let router_path = format!("src/router/AppRouter.{}", view_ext);
    if let Some(router) = store
        .nodes
        .iter()
        .find(|n| n.kind == ComponentKind::Router)
    {
        files.insert(router_path, router.data.component.code.clone());
    } else {
        let routes = resolve::routes_for_graph(store);
        if !routes.is_empty() {
            files.insert(router_path, render_router(&routes, settings));
        }
    }

    files
}

/// Expand the route list into a router file: a themed navigation bar plus
/// the route table, importing each page component by name.
fn render_router(routes: &[RouteEntry], settings: &AppSettings) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("import { BrowserRouter, Routes, Route, Link } from 'react-router-dom';\n");
    for route in routes {
        out.push_str(&format!(
            "import {0} from '../components/{0}/{0}';\n",
            route.component
        ));
    }
    out.push('\n');
    out.push_str("export default function AppRouter() {\n");
    out.push_str("  return (\n    <BrowserRouter>\n");
    out.push_str(&format!(
        "      <nav style={{{{ background: '{}' }}}}>\n",
        settings.theme.primary
    ));
    out.push_str(&format!(
        "        <span style={{{{ color: '{}' }}}}>{}</span>\n",
        settings.theme.secondary, settings.title
    ));
    for route in routes {
        out.push_str(&format!(
            "        <Link to=\"{}\">{}</Link>\n",
            route.path, route.component
        ));
    }
    out.push_str("      </nav>\n");
    out.push_str("      <Routes>\n");
    for route in routes {
        out.push_str(&format!(
            "        <Route path=\"{}\" element={{<{} />}} />\n",
            route.path, route.component
        ));
    }
    out.push_str("      </Routes>\n");
    out.push_str("    </BrowserRouter>\n  );\n}\n");
    out
}
