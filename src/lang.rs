// src/lang.rs
//! Language detection by file extension.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    JavaScript,
    JavaScriptReact,
    TypeScript,
    TypeScriptReact,
    Php,
    Python,
    Ruby,
    Java,
    CSharp,
    Go,
    Rust,
}

/// Broad grouping used by the framework, dependency and rewrite passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Script,
    Php,
    Other,
}

impl Lang {
    pub const UNKNOWN_LABEL: &'static str = "Unknown";

    #[must_use]
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "js" => Some(Self::JavaScript),
            "jsx" => Some(Self::JavaScriptReact),
            "ts" => Some(Self::TypeScript),
            "tsx" => Some(Self::TypeScriptReact),
            "php" => Some(Self::Php),
            "py" => Some(Self::Python),
            "rb" => Some(Self::Ruby),
            "java" => Some(Self::Java),
            "cs" => Some(Self::CSharp),
            "go" => Some(Self::Go),
            "rs" => Some(Self::Rust),
            _ => None,
        }
    }

    /// Detects the language from the text after the last `.` of the file name.
    #[must_use]
    pub fn from_filename(filename: &str) -> Option<Self> {
        let name = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(filename);
        let (_, ext) = name.rsplit_once('.')?;
        Self::from_ext(ext)
    }

    /// Human label shown in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::JavaScriptReact => "JavaScript (React)",
            Self::TypeScript => "TypeScript",
            Self::TypeScriptReact => "TypeScript (React)",
            Self::Php => "PHP",
            Self::Python => "Python",
            Self::Ruby => "Ruby",
            Self::Java => "Java",
            Self::CSharp => "C#",
            Self::Go => "Go",
            Self::Rust => "Rust",
        }
    }

    /// Lowercase identifier used by the modernizer output. Only the
    /// languages the modernizer names have one.
    #[must_use]
    pub const fn slug(self) -> Option<&'static str> {
        match self {
            Self::JavaScript | Self::JavaScriptReact => Some("javascript"),
            Self::TypeScript | Self::TypeScriptReact => Some("typescript"),
            Self::Php => Some("php"),
            Self::Python => Some("python"),
            Self::Ruby => Some("ruby"),
            Self::Java | Self::CSharp | Self::Go | Self::Rust => None,
        }
    }

    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::JavaScript | Self::JavaScriptReact | Self::TypeScript | Self::TypeScriptReact => {
                Family::Script
            }
            Self::Php => Family::Php,
            _ => Family::Other,
        }
    }

    #[must_use]
    pub const fn is_javascript(self) -> bool {
        matches!(self, Self::JavaScript | Self::JavaScriptReact)
    }
}

/// Label for a filename, falling back to `Unknown`.
#[must_use]
pub fn label_for(filename: &str) -> &'static str {
    Lang::from_filename(filename).map_or(Lang::UNKNOWN_LABEL, Lang::label)
}
