// src/modernize/php.rs
//! `mysql_*` to PDO rewrites.

use regex::Captures;

use super::{Replacement, Rewrite};

pub(super) const REWRITES: &[Rewrite] = &[
    Rewrite {
        name: "mysql-connect-to-pdo",
        pattern: r#"mysql_connect\(\s*['"]([^'"]+)['"]\s*,\s*['"]([^'"]+)['"]\s*,\s*['"]([^'"]+)['"]\s*\)"#,
        replacement: Replacement::Template("new PDO('mysql:host=${1};dbname=database', '${2}', '${3}')"),
    },
    Rewrite {
        name: "mysql-query-to-pdo",
        pattern: r#"mysql_query\(\s*['"]([^'"]+)['"]\s*\)"#,
        replacement: Replacement::Template("$$pdo->query('${1}')"),
    },
    Rewrite {
        name: "concatenated-select-to-prepared",
        pattern: r#"["']SELECT\s+\*\s+FROM\s+(\w+)\s+WHERE\s+(\w+)\s*=\s*["']\s*\.\s*\$(\w+)"#,
        replacement: Replacement::With(prepared_select),
    },
];

fn prepared_select(caps: &Captures<'_>, _source: &str) -> String {
    let group = |i| caps.get(i).map_or("", |m| m.as_str());
    let (table, column, variable) = (group(1), group(2), group(3));
    format!(
        "$stmt = $pdo->prepare('SELECT * FROM {table} WHERE {column} = :{column}');\n\
         $stmt->execute(['{column}' => ${variable}]);\n\
         $result = $stmt->fetchAll(PDO::FETCH_ASSOC)"
    )
}
