//! Post-processing for the generated `requirements.txt`.
//!
//! The dependency scanner cannot tell GPU and CPU TensorFlow builds apart, so
//! its output is rewritten to always request `tensorflow-gpu` and drop any
//! explicit `tensorflow_gpu` pin.

/// Ordered rewrite rules: a line whose lowercase form contains `<key>==` is
/// replaced wholesale by `<value>` plus a newline. Order matters.
pub const REWRITE_RULES: &[(&str, &str)] =
    &[("matplotlib", "matplotlib"), ("tensorflow_gpu", ""), ("tensorflow", "tensorflow-gpu")];

/// Apply a single rule to every line of `content`.
fn rewrite_lines(content: &str, key: &str, value: &str) -> String {
    let needle = format!("{key}==");
    content
        .split_inclusive('\n')
        .map(|line| {
            if line.to_lowercase().contains(&needle) { format!("{value}\n") } else { line.to_string() }
        })
        .collect()
}

/// Drop every blank or whitespace-only line.
pub fn strip_blank_lines(content: &str) -> String {
    content.split_inclusive('\n').filter(|line| !line.trim().is_empty()).collect()
}

/// Apply [`REWRITE_RULES`] in order, then strip blank lines.
///
/// Idempotent: fixing an already fixed manifest changes nothing.
pub fn fix_requirements(content: &str) -> String {
    let rewritten = REWRITE_RULES
        .iter()
        .fold(content.to_string(), |acc, (key, value)| rewrite_lines(&acc, key, value));
    strip_blank_lines(&rewritten)
}
