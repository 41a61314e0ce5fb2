// src/modernize/script.rs
//! JavaScript / TypeScript rewrites, applied top to bottom.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::{Replacement, Rewrite};

pub(super) const REWRITES: &[Rewrite] = &[
    Rewrite {
        name: "var-to-const-let",
        pattern: r"\bvar\s+(\w+)\s*=",
        replacement: Replacement::With(var_binding),
    },
    Rewrite {
        name: "ajax-to-fetch",
        pattern: r"(?s)\$\.ajax\(\s*\{([^}]+)\}\s*\)",
        replacement: Replacement::With(fetch_template),
    },
    Rewrite {
        name: "selector-to-query-selector",
        pattern: r#"\$\(['"]([^'"]+)['"]\)"#,
        replacement: Replacement::Template("document.querySelector('${1}')"),
    },
    Rewrite {
        name: "html-setter",
        pattern: r#"\.html\(\s*['"]([^'"]*)['"]\s*\)"#,
        replacement: Replacement::Template(".innerHTML = '${1}'"),
    },
    Rewrite {
        name: "html-getter",
        pattern: r"\.html\(\s*\)",
        replacement: Replacement::Template(".innerHTML"),
    },
    Rewrite {
        name: "append-child",
        pattern: r"\.append\(",
        replacement: Replacement::Template(".appendChild("),
    },
    Rewrite {
        name: "named-function-to-arrow",
        pattern: r"function\s+(\w+)\s*\(([^)]*)\)\s*\{",
        replacement: Replacement::Template("const ${1} = (${2}) => {"),
    },
    Rewrite {
        name: "anonymous-function-to-arrow",
        pattern: r"function\s*\(([^)]*)\)\s*\{",
        replacement: Replacement::Template("(${1}) => {"),
    },
    Rewrite {
        name: "alert-to-console-error",
        pattern: r#"alert\(\s*['"]Error:\s*['"]\s*\+\s*([^)]+)\)"#,
        replacement: Replacement::Template("console.error('Error:', ${1})"),
    },
];

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"url:\s*['"]([^'"]+)['"]"#).unwrap_or_else(|_| panic!("Invalid Regex"))
});
static METHOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"type:\s*['"](\w+)['"]"#).unwrap_or_else(|_| panic!("Invalid Regex"))
});

const DEFAULT_URL: &str = "/api/endpoint";
const DEFAULT_METHOD: &str = "GET";

/// `let` if the name is assigned more than once anywhere in the source, else `const`.
fn var_binding(caps: &Captures<'_>, source: &str) -> String {
    let name = caps.get(1).map_or("", |m| m.as_str());
    let keyword = if assignment_count(name, source) > 1 { "let" } else { "const" };
    format!("{keyword} {name} =")
}

/// Counts `name =` occurrences, excluding `==` and `===` comparisons.
fn assignment_count(name: &str, source: &str) -> usize {
    let pattern = format!(r"\b{}\s*(=+)", regex::escape(name));
    Regex::new(&pattern).map_or(0, |re| {
        re.captures_iter(source)
            .filter(|c| c.get(1).is_some_and(|m| m.len() == 1))
            .count()
    })
}

fn fetch_template(caps: &Captures<'_>, _source: &str) -> String {
    let body = caps.get(1).map_or("", |m| m.as_str());
    let url = URL_RE
        .captures(body)
        .and_then(|c| c.get(1))
        .map_or(DEFAULT_URL, |m| m.as_str());
    let method = METHOD_RE
        .captures(body)
        .and_then(|c| c.get(1))
        .map_or_else(|| DEFAULT_METHOD.to_string(), |m| m.as_str().to_uppercase());

    format!(
        "const fetchData = async () => {{
  try {{
    const response = await fetch('{url}', {{ method: '{method}' }});
    const data = await response.json();
    return data;
  }} catch (error) {{
    console.error('Error:', error);
    throw error;
  }}
}}"
    )
}

#[cfg(test)]
mod tests {
    use crate::modernize::modernize;

    fn rewrite(code: &str) -> String {
        modernize(code, "app.js").modern_code
    }

    #[test]
    fn reassigned_vars_become_let() {
        let code = "var count = 0;\ncount = count + 1;\nvar name = 'x';\nif (name == 'y') {}";
        assert_eq!(
            rewrite(code),
            "let count = 0;\ncount = count + 1;\nconst name = 'x';\nif (name == 'y') {}"
        );
    }

    #[test]
    fn selectors_and_dom_helpers() {
        let code = "$('#list').append(item);\n$('.title').html('Hi');\nvar t = $('.title').html();";
        assert_eq!(
            rewrite(code),
            "document.querySelector('#list').appendChild(item);\n\
             document.querySelector('.title').innerHTML = 'Hi';\n\
             const t = document.querySelector('.title').innerHTML;"
        );
    }

    #[test]
    fn functions_become_arrows() {
        let code = "function load(id, cb) {\n  get(id, function(err, data) {\n  });\n}";
        assert_eq!(
            rewrite(code),
            "const load = (id, cb) => {\n  get(id, (err, data) => {\n  });\n}"
        );
    }

    #[test]
    fn ajax_becomes_fetch_with_literal_url_and_method() {
        let out = rewrite("$.ajax({ url: '/api/users', type: 'post' });");
        assert!(out.starts_with("const fetchData = async () => {"));
        assert!(out.contains("await fetch('/api/users', { method: 'POST' })"));
        assert!(out.ends_with("};"));
    }

    #[test]
    fn ajax_without_url_uses_defaults() {
        let out = rewrite("$.ajax({ dataType: 'json' })");
        assert!(out.contains("await fetch('/api/endpoint', { method: 'GET' })"));
    }

    #[test]
    fn error_alerts_become_console_errors() {
        assert_eq!(
            rewrite("alert('Error: ' + err.message);"),
            "console.error('Error:', err.message);"
        );
    }
}
