use mvcforge_core::settings::AppSettings;
use mvcforge_core::RouteEntry;

/// System prompt shared by every generation request. Fence stripping in
/// `clean` catches the providers that ignore the "no markdown" instruction.
pub const SYSTEM: &str = "You are an expert TypeScript developer. Generate clean, maintainable, \
and type-safe code based on the given requirements. Return ONLY the raw code without any \
markdown code blocks or explanations. Do not include ``` markers.";

pub fn model_prompt(interface_code: &str) -> String {
    format!(
        "Given this TypeScript interface:\n\
{interface_code}\n\n\
Generate a complete model class that:\n\
- Implements CRUD operations\n\
- Includes data persistence\n\
- Has proper error handling\n\
- Is fully typed\n\
- Uses modern TypeScript features\n\n\
Return only the implementation code without any markdown formatting."
    )
}

pub fn controller_prompt(model_code: &str, interface_code: &str) -> String {
    format!(
        "Given this model implementation:\n\
{model_code}\n\n\
And this interface:\n\
{interface_code}\n\n\
Generate a controller class that:\n\
- Connects the model with views\n\
- Implements all necessary handlers\n\
- Includes error handling\n\
- Uses proper typing\n\
- Follows SOLID principles\n\n\
Return only the implementation code without any markdown formatting."
    )
}

pub fn view_prompt(controller_code: &str, interface_code: &str) -> String {
    format!(
        "Given this controller implementation:\n\
{controller_code}\n\n\
And this interface:\n\
{interface_code}\n\n\
Generate a React functional component that:\n\
- Uses modern React patterns\n\
- Implements proper form handling\n\
- Has a clean, responsive UI using Tailwind CSS\n\
- Includes loading and error states\n\
- Uses proper TypeScript types\n\n\
Return only the implementation code without any markdown formatting."
    )
}

pub fn router_prompt(routes: &[RouteEntry], settings: &AppSettings) -> String {
    let route_list =
        serde_json::to_string_pretty(routes).unwrap_or_else(|e| format!("Serialization error: {}", e));
    format!(
        "Generate a React Router configuration with these routes:\n\
{route_list}\n\n\
Requirements:\n\
1. Use React Router v6\n\
2. Create a navigation layout with Tailwind CSS, titled \"{title}\"\n\
3. Include proper TypeScript types\n\
4. Add loading and error boundaries\n\
5. Support dark mode\n\
6. Use these theme colors: primary={primary}, secondary={secondary}\n\n\
Import components from proper relative paths and include all necessary imports.",
        title = settings.title,
        primary = settings.theme.primary,
        secondary = settings.theme.secondary,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_prompt_carries_routes_theme_and_title() {
        let routes = vec![RouteEntry {
            path: "/todocontroller".to_string(),
            component: "TodoController".to_string(),
        }];
        let settings = AppSettings::default();
        let prompt = router_prompt(&routes, &settings);
        assert!(prompt.contains("/todocontroller"));
        assert!(prompt.contains("TodoController"));
        assert!(prompt.contains(&settings.theme.primary));
        assert!(prompt.contains(&settings.title));
    }

    #[test]
    fn model_prompt_embeds_the_interface() {
        let prompt = model_prompt("interface User { id: string }");
        assert!(prompt.contains("interface User { id: string }"));
        assert!(prompt.contains("CRUD"));
    }
}
