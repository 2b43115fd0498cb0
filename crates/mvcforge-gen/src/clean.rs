/// Strip markdown code fencing from raw LLM output. Providers occasionally
/// wrap code in ``` fences despite the prompt asking them not to.
pub fn strip_code_fences(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for line in raw.lines() {
        if line.trim_start().starts_with("```") {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.trim().to_string()
}
