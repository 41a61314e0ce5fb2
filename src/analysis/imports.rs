// src/analysis/imports.rs
//! Import statement and dependency extraction.

use regex::Regex;
use std::sync::LazyLock;

use crate::lang::Family;

static ES_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+(?:[\w{},\s*]+\s+from\s+)?['"]([^'"]+)['"]"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static REQUIRE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"require\s*\(\s*['"]([^'"]+)['"]\s*\)"#).unwrap_or_else(|_| panic!("Invalid Regex"))
});
static SCRIPT_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<script[^>]+src=['"]([^'"]+)['"]"#).unwrap_or_else(|_| panic!("Invalid Regex"))
});
static PHP_INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:require|include)(?:_once)?\s*\(?['"]([^'"]+)['"]\)?"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Imports found in a file: full statements and the targets they name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    pub dependencies: Vec<String>,
    pub imports: Vec<String>,
}

impl Dependencies {
    fn collect(&mut self, re: &Regex, code: &str, record_statement: bool) {
        for caps in re.captures_iter(code) {
            let (Some(stmt), Some(target)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if record_statement {
                self.imports.push(stmt.as_str().to_string());
            }
            self.dependencies.push(target.as_str().to_string());
        }
    }
}

#[must_use]
pub fn parse(code: &str, family: Family) -> Dependencies {
    let mut deps = Dependencies::default();
    match family {
        Family::Script => {
            deps.collect(&ES_IMPORT_RE, code, true);
            deps.collect(&REQUIRE_RE, code, true);
            // Script tags are dependencies, not import statements.
            deps.collect(&SCRIPT_SRC_RE, code, false);
        }
        Family::Php => deps.collect(&PHP_INCLUDE_RE, code, true),
        Family::Other => {}
    }
    deps
}
