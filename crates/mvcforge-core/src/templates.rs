//! Tech-stack templates: named bundles of static boilerplate files merged
//! into synthesized output, plus the source extensions each stack uses.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechStack {
    ReactTs,
    ReactJs,
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <link rel="icon" type="image/svg+xml" href="/vite.svg" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Vite + React</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>
"#;

const INDEX_HTML_JS: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <link rel="icon" type="image/svg+xml" href="/vite.svg" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Vite + React</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>
"#;

const MAIN_TSX: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import AppRouter from './router/AppRouter';
import './index.css';

ReactDOM.createRoot(document.getElementById('root')!).render(
  <React.StrictMode>
    <AppRouter />
  </React.StrictMode>
);
"#;

const MAIN_JSX: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import AppRouter from './router/AppRouter';
import './index.css';

ReactDOM.createRoot(document.getElementById('root')).render(
  <React.StrictMode>
    <AppRouter />
  </React.StrictMode>
);
"#;

const INDEX_CSS: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;
"#;

const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [react()],
});
"#;

impl TechStack {
    pub fn from_id(id: &str) -> Option<TechStack> {
        match id {
            "react-ts" => Some(TechStack::ReactTs),
            "react-js" => Some(TechStack::ReactJs),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            TechStack::ReactTs => "react-ts",
            TechStack::ReactJs => "react-js",
        }
    }

    pub fn all() -> &'static [TechStack] {
        &[TechStack::ReactTs, TechStack::ReactJs]
    }

    /// Extensions for (plain source files, view components).
    pub fn extensions(&self) -> (&'static str, &'static str) {
        match self {
            TechStack::ReactTs => ("ts", "tsx"),
            TechStack::ReactJs => ("js", "jsx"),
        }
    }

    /// Static files contributed verbatim to every synthesized project for
    /// this stack.
    pub fn files(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            TechStack::ReactTs => &[
                ("index.html", INDEX_HTML),
                ("src/main.tsx", MAIN_TSX),
                ("src/index.css", INDEX_CSS),
                ("vite.config.ts", VITE_CONFIG),
            ],
            TechStack::ReactJs => &[
                ("index.html", INDEX_HTML_JS),
                ("src/main.jsx", MAIN_JSX),
                ("src/index.css", INDEX_CSS),
                ("vite.config.js", VITE_CONFIG),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for stack in TechStack::all() {
            assert_eq!(TechStack::from_id(stack.id()), Some(*stack));
        }
    }

    #[test]
    fn unknown_id_is_none() {
        assert_eq!(TechStack::from_id("rails"), None);
    }

    #[test]
    fn template_paths_are_unique_per_stack() {
        for stack in TechStack::all() {
            let mut paths: Vec<&str> = stack.files().iter().map(|(p, _)| *p).collect();
            let before = paths.len();
            paths.sort_unstable();
            paths.dedup();
            assert_eq!(paths.len(), before);
        }
    }
}
