use std::sync::OnceLock;

use regex::Regex;

use crate::InterfaceFact;

fn declaration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"interface\s+(\w+)\s*\{[^}]+\}").unwrap())
}

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"interface\s+(\w+)").unwrap())
}

/// First `interface <Name> { ... }` declaration in a code blob. Matching is
/// a flat regex with no nesting awareness; when a blob holds several
/// declarations only the first one counts.
pub fn first_interface(code: &str) -> Option<InterfaceFact> {
    let caps = declaration_re().captures(code)?;
    Some(InterfaceFact {
        name: caps[1].to_string(),
        raw_declaration: caps[0].to_string(),
    })
}

/// Just the interface name, tolerating a missing body. Used for deriving
/// component names while a declaration is still being typed.
pub fn interface_name(code: &str) -> Option<String> {
    name_re().captures(code).map(|caps| caps[1].to_string())
}
