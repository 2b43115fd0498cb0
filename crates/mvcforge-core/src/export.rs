//! Project export boundary. The synthesizer produces the file map; this
//! module adds the fixed boilerplate (package manifest, build config) and
//! writes everything to disk under deterministic, collision-free relative
//! paths for the archive packager to pick up.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::settings::AppSettings;

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("Serialization error: {}", e))
}

/// The fixed boilerplate merged under the synthesized map. Synthesized paths
/// stay inside src/ (plus the template files), so a synthesized entry at the
/// same path takes precedence over boilerplate.
pub fn boilerplate_files(settings: &AppSettings) -> Vec<(String, String)> {
    let package_json = serde_json::json!({
        "name": settings.name,
        "private": true,
        "version": "0.0.0",
        "type": "module",
        "scripts": {
            "dev": "vite",
            "build": "tsc && vite build",
            "preview": "vite preview"
        },
        "dependencies": {
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
            "react-router-dom": "^6.22.0"
        },
        "devDependencies": {
            "@types/react": "^18.2.15",
            "@types/react-dom": "^18.2.7",
            "@vitejs/plugin-react": "^4.0.3",
            "typescript": "^5.0.2",
            "vite": "^4.4.5"
        }
    });

    let tsconfig = serde_json::json!({
        "compilerOptions": {
            "target": "ES2020",
            "useDefineForClassFields": true,
            "lib": ["ES2020", "DOM", "DOM.Iterable"],
            "module": "ESNext",
            "skipLibCheck": true,
            "moduleResolution": "bundler",
            "resolveJsonModule": true,
            "isolatedModules": true,
            "noEmit": true,
            "jsx": "react-jsx",
            "strict": true
        },
        "include": ["src"]
    });

    vec![
        ("package.json".to_string(), pretty(&package_json)),
        ("tsconfig.json".to_string(), pretty(&tsconfig)),
    ]
}

/// Write boilerplate plus the synthesized file map to `dir`, creating parent
/// directories as needed. Map entries overwrite boilerplate on collision.
pub fn export_project(
    dir: &Path,
    settings: &AppSettings,
    files: &BTreeMap<String, String>,
) -> Result<(), String> {
    let entries = boilerplate_files(settings)
        .into_iter()
        .chain(files.iter().map(|(p, c)| (p.clone(), c.clone())));

    for (rel, content) in entries {
        let full = dir.join(&rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        fs::write(&full, content).map_err(|e| e.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsPatch;

    #[test]
    fn package_manifest_is_named_from_settings() {
        let mut settings = AppSettings::default();
        settings.update(&SettingsPatch {
            name: Some("todo-app".to_string()),
            ..SettingsPatch::default()
        });
        let files = boilerplate_files(&settings);
        let (_, package_json) = files
            .iter()
            .find(|(p, _)| p == "package.json")
            .unwrap();
        assert!(package_json.contains("\"name\": \"todo-app\""));
    }

    #[test]
    fn export_writes_the_full_tree() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = BTreeMap::new();
        files.insert(
            "src/models/Todo.ts".to_string(),
            "interface Todo { id: string }".to_string(),
        );

        export_project(dir.path(), &AppSettings::default(), &files).unwrap();

        assert!(dir.path().join("package.json").exists());
        assert!(dir.path().join("tsconfig.json").exists());
        let code = std::fs::read_to_string(dir.path().join("src/models/Todo.ts")).unwrap();
        assert_eq!(code, "interface Todo { id: string }");
    }

    #[test]
    fn synthesized_entries_overwrite_boilerplate() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = BTreeMap::new();
        files.insert("package.json".to_string(), "{}".to_string());

        export_project(dir.path(), &AppSettings::default(), &files).unwrap();

        let manifest = std::fs::read_to_string(dir.path().join("package.json")).unwrap();
        assert_eq!(manifest, "{}");
    }
}
