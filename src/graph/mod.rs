//! Import graph construction and relative-specifier resolution
//!
//! The scan is intentionally shallow: a compiled regex collects the quoted
//! specifiers of import-style statements. Computed imports, re-exports and
//! anything requiring evaluation are out of scope, as is transitive
//! traversal. Relative specifiers are resolved on demand against the
//! loaded-file set by probing a fixed ordered list of path conventions;
//! non-relative specifiers name external packages and never resolve.

use crate::paths;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;
use tracing::debug;

static IMPORT_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Matches `import ... from '<spec>'`, bare `import '<spec>'`, and
/// `require('<spec>')`. Multi-line import bodies are covered because the
/// character class crosses newlines.
fn import_pattern() -> &'static Regex {
    IMPORT_PATTERN.get_or_init(|| {
        Regex::new(r#"(?m)(?:^\s*import\s+(?:[^'";]*?\s+from\s+)?|\brequire\s*\(\s*)["']([^"']+)["']"#)
            .unwrap()
    })
}

/// Suffix conventions probed after the importer's own extension.
const RESOLVE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "py"];

/// Mapping from loaded file path to the raw import specifiers found in it.
/// One entry per loaded file; built once, read-only afterward.
#[derive(Debug, Default)]
pub struct ImportGraph {
    imports: BTreeMap<String, BTreeSet<String>>,
}

impl ImportGraph {
    /// Scan every loaded file for import specifiers.
    pub fn build(files: &BTreeMap<String, String>) -> Self {
        let pattern = import_pattern();
        let mut imports = BTreeMap::new();
        for (path, content) in files {
            let specifiers: BTreeSet<String> = pattern
                .captures_iter(content)
                .filter_map(|cap| cap.get(1))
                .map(|m| m.as_str().to_string())
                .collect();
            imports.insert(path.clone(), specifiers);
        }
        debug!("import graph built for {} files", imports.len());
        Self { imports }
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.imports.contains_key(path)
    }

    /// File paths in natural key order.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.imports.keys().map(String::as_str)
    }

    /// Raw specifiers recorded for a file.
    pub fn specifiers(&self, path: &str) -> Option<&BTreeSet<String>> {
        self.imports.get(path)
    }

    /// Resolve a relative specifier from `importer` into the loaded-file
    /// set. Probe order: exact path, the importer's own extension, the
    /// fixed extension list, then the index-file convention under the
    /// joined path. First hit wins; external specifiers return `None`.
    pub fn resolve(&self, importer: &str, specifier: &str) -> Option<String> {
        if !specifier.starts_with('.') {
            return None;
        }
        let joined = paths::normalize_join(paths::parent_dir(importer), specifier)?;
        if self.contains(&joined) {
            return Some(joined);
        }

        let own_ext = paths::extension(importer);
        let mut extensions: Vec<&str> = Vec::with_capacity(RESOLVE_EXTENSIONS.len() + 1);
        if let Some(ext) = own_ext {
            extensions.push(ext);
        }
        extensions.extend(
            RESOLVE_EXTENSIONS
                .iter()
                .copied()
                .filter(|ext| Some(*ext) != own_ext),
        );

        for ext in &extensions {
            let candidate = format!("{joined}.{ext}");
            if self.contains(&candidate) {
                return Some(candidate);
            }
        }
        for ext in &extensions {
            let candidate = format!("{joined}/index.{ext}");
            if self.contains(&candidate) {
                return Some(candidate);
            }
        }
        None
    }

    /// Every resolved relative target of `importer`, in specifier order.
    pub fn resolved_targets(&self, importer: &str) -> Vec<String> {
        let Some(specifiers) = self.specifiers(importer) else {
            return Vec::new();
        };
        specifiers
            .iter()
            .filter_map(|spec| self.resolve(importer, spec))
            .collect()
    }
}
