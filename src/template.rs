//! Template markers inside card content
//!
//! A marker is `{{name}}` or `{{name|default}}`. Filling replaces each marker
//! with the supplied value, falling back to the default, and leaves the
//! marker verbatim when neither exists.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static VARIABLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}|]+)(?:\|[^}]*)?\}\}").expect("valid marker regex"));

static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("valid marker regex"));

/// Unique variable names in order of first appearance
pub fn extract_variables(content: &str) -> Vec<String> {
    let mut vars: Vec<String> = Vec::new();
    for caps in VARIABLE_NAME.captures_iter(content) {
        let name = caps[1].trim();
        if !vars.iter().any(|v| v == name) {
            vars.push(name.to_string());
        }
    }
    vars
}

/// Split `name|default` into `(name, default)`; default is empty when absent
pub fn parse_default_value(marker: &str) -> (&str, &str) {
    match marker.split_once('|') {
        Some((name, default)) => (name.trim(), default.trim()),
        None => (marker.trim(), ""),
    }
}

/// Replace every marker using `vars`, then defaults
pub fn fill_template(content: &str, vars: &HashMap<String, String>) -> String {
    MARKER
        .replace_all(content, |caps: &Captures| {
            let (name, default) = parse_default_value(&caps[1]);
            match vars.get(name) {
                Some(value) if !value.is_empty() => value.clone(),
                _ if !default.is_empty() => default.to_string(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

pub fn has_template_variables(content: &str) -> bool {
    MARKER.is_match(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_extract_simple_variables() {
        assert_eq!(
            extract_variables("docker run -p {{port}}:{{port}} {{image}}"),
            vec!["port", "image"]
        );
    }

    #[test]
    fn test_extract_variables_with_defaults() {
        assert_eq!(
            extract_variables("server --port={{port|3000}} --host={{host|localhost}}"),
            vec!["port", "host"]
        );
    }

    #[test]
    fn test_extract_no_variables() {
        assert!(extract_variables("plain text content").is_empty());
    }

    #[test]
    fn test_extract_trims_names() {
        assert_eq!(extract_variables("{{ name }} and {{name|x}}"), vec!["name"]);
    }

    #[test]
    fn test_parse_default_value() {
        assert_eq!(parse_default_value("port|3000"), ("port", "3000"));
        assert_eq!(parse_default_value("simple"), ("simple", ""));
        assert_eq!(parse_default_value("  spaced | value  "), ("spaced", "value"));
    }

    #[test]
    fn test_fill_supplied_value_overrides_default() {
        assert_eq!(
            fill_template("a {{x|1}} b {{y}}", &vars(&[("x", "5")])),
            "a 5 b {{y}}"
        );
    }

    #[test]
    fn test_fill_uses_defaults() {
        assert_eq!(
            fill_template(
                "server --port={{port|3000}} --host={{host|localhost}}",
                &vars(&[("port", "8080")])
            ),
            "server --port=8080 --host=localhost"
        );
    }

    #[test]
    fn test_fill_empty_value_falls_back_to_default() {
        assert_eq!(fill_template("{{port|3000}}", &vars(&[("port", "")])), "3000");
    }

    #[test]
    fn test_fill_repeated_marker() {
        assert_eq!(
            fill_template(
                "docker run -p {{port}}:{{port}} {{image}}",
                &vars(&[("port", "8080"), ("image", "nginx")])
            ),
            "docker run -p 8080:8080 nginx"
        );
    }

    #[test]
    fn test_has_template_variables() {
        assert!(has_template_variables("docker run {{image}}"));
        assert!(!has_template_variables("plain text"));
        assert!(!has_template_variables("{single brace}"));
    }
}
