mod clean;
pub mod engine;
mod prompt;

use mvcforge_core::pattern;
use mvcforge_core::resolve;
use mvcforge_core::settings::AppSettings;
use mvcforge_core::store::GraphStore;
use mvcforge_core::ComponentKind;

pub use engine::ProviderConfig;

/// Code generated for a component. `name` is the rename the caller should
/// apply alongside the code, when one could be derived.
#[derive(Debug, Clone)]
pub struct Generated {
    pub name: Option<String>,
    pub code: String,
}

/// Generate model code from an interface declaration. The returned code
/// keeps the interface at the top, matching what the canvas editor shows.
/// Fails before calling out when the interface text is empty.
pub async fn generate_model(
    cfg: &ProviderConfig,
    interface_code: &str,
) -> Result<Generated, String> {
    if interface_code.trim().is_empty() {
        return Err("Define the interface first".to_string());
    }

    let raw = engine::generate(cfg, prompt::SYSTEM, &prompt::model_prompt(interface_code)).await?;
    let code = clean::strip_code_fences(&raw);

    Ok(Generated {
        name: pattern::interface_name(interface_code).map(|n| format!("{}Model", n)),
        code: format!("{}\n\n{}", interface_code.trim_end(), code),
    })
}

/// Generate controller code for `controller_id`. Requires a connected model
/// with an extractable interface; fails with an actionable message
/// otherwise, leaving the graph untouched.
pub async fn generate_controller(
    cfg: &ProviderConfig,
    store: &GraphStore,
    controller_id: &str,
) -> Result<Generated, String> {
    let model = resolve::connected_node(store, controller_id, ComponentKind::Model)
        .ok_or_else(|| "Connect this controller to a model first".to_string())?;

    let model_code = &model.data.component.code;
    let fact = pattern::first_interface(model_code)
        .ok_or_else(|| "No interface found in the model code".to_string())?;

    let raw = engine::generate(
        cfg,
        prompt::SYSTEM,
        &prompt::controller_prompt(model_code, &fact.raw_declaration),
    )
    .await?;

    Ok(Generated {
        name: Some(format!("{}Controller", fact.name)),
        code: clean::strip_code_fences(&raw),
    })
}

/// Generate a view component from controller code and its interface, for
/// stacks that keep the view as a separate artifact.
pub async fn generate_view(
    cfg: &ProviderConfig,
    controller_code: &str,
    interface_code: &str,
) -> Result<String, String> {
    let raw = engine::generate(
        cfg,
        prompt::SYSTEM,
        &prompt::view_prompt(controller_code, interface_code),
    )
    .await?;
    Ok(clean::strip_code_fences(&raw))
}

/// Generate router code from the graph's derived route list. Requires at
/// least one controller with a connected model.
pub async fn generate_router(
    cfg: &ProviderConfig,
    store: &GraphStore,
    settings: &AppSettings,
) -> Result<Generated, String> {
    let routes = resolve::routes_for_graph(store);
    if routes.is_empty() {
        return Err("Add and connect some controllers first".to_string());
    }

    let raw = engine::generate(cfg, prompt::SYSTEM, &prompt::router_prompt(&routes, settings))
        .await?;

    Ok(Generated {
        name: Some("AppRouter".to_string()),
        code: clean::strip_code_fences(&raw),
    })
}
