// src/analysis/frameworks.rs
//! Framework detection by regex presence tests.

use regex::Regex;
use std::sync::LazyLock;

use crate::lang::Family;

pub const VANILLA: &str = "Vanilla";
pub const JQUERY: &str = "jQuery";

struct Signature {
    name: &'static str,
    family: Family,
    pattern: &'static str,
}

const SIGNATURES: &[Signature] = &[
    Signature { name: JQUERY, family: Family::Script, pattern: r"\$\.(ajax|get|post|getJSON)" },
    Signature { name: "AngularJS", family: Family::Script, pattern: r"angular\.module" },
    Signature { name: "Backbone.js", family: Family::Script, pattern: r"Backbone\.(Model|View|Collection)" },
    Signature { name: "Express", family: Family::Script, pattern: r#"require\(['"]express['"]\)"# },
    Signature {
        name: "React",
        family: Family::Script,
        pattern: r#"(?i)require\(['"]react['"]\)|import.*from\s+['"]react['"]"#,
    },
    Signature {
        name: "Vue",
        family: Family::Script,
        pattern: r#"(?i)require\(['"]vue['"]\)|import.*from\s+['"]vue['"]"#,
    },
    Signature { name: "mysql_*", family: Family::Php, pattern: r"mysql_connect|mysql_query|mysql_fetch" },
    Signature { name: "WordPress", family: Family::Php, pattern: r"wp_|get_header|the_content" },
];

static COMPILED: LazyLock<Vec<(&'static Signature, Regex)>> = LazyLock::new(|| {
    SIGNATURES
        .iter()
        .map(|s| {
            let re = Regex::new(s.pattern).unwrap_or_else(|_| panic!("Invalid Regex: {}", s.pattern));
            (s, re)
        })
        .collect()
});

/// Frameworks recognised in `code`, or `["Vanilla"]` when none match.
#[must_use]
pub fn detect(code: &str, family: Option<Family>) -> Vec<&'static str> {
    let found: Vec<&'static str> = match family {
        Some(family) => COMPILED
            .iter()
            .filter(|(sig, re)| sig.family == family && re.is_match(code))
            .map(|(sig, _)| sig.name)
            .collect(),
        None => Vec::new(),
    };

    if found.is_empty() {
        vec![VANILLA]
    } else {
        found
    }
}
