//! Module directory reader
//!
//! Lists rule modules (subdirectories of the rules root) and the rule files they
//! contain. Listing never fails: problems are reported as diagnostics and the
//! result degrades to whatever could be read.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::{RuleFile, RULE_EXTENSION};
use crate::config::{Layout, RULES_DIR};
use crate::diagnostics::{Diagnostic, Diagnostics};

/// Reads modules and rule files under a rules root
#[derive(Debug, Clone)]
pub struct ModuleReader {
    root: PathBuf,
}

impl ModuleReader {
    /// Reader over an explicit rules root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Reader over the rules root of a layout
    pub fn from_layout(layout: &Layout) -> Self {
        Self::new(layout.rules_dir())
    }

    /// Reader over `<base>/rules`
    pub fn with_base(base: &Path) -> Self {
        Self::new(base.join(RULES_DIR))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List module names, in directory enumeration order
    pub fn list_modules(&self, diagnostics: &mut dyn Diagnostics) -> Vec<String> {
        tracing::debug!(root = %self.root.display(), "listing rule modules");

        let listed = fs::metadata(&self.root).and_then(|metadata| {
            if metadata.is_dir() {
                read_entries(&self.root)
            } else {
                Err(io::Error::other("not a directory"))
            }
        });

        match listed {
            Ok(entries) => entries
                .iter()
                .filter(|e| e.file_type().is_dir())
                .map(entry_name)
                .collect(),
            Err(source) => {
                diagnostics.report(Diagnostic::RootUnreadable {
                    path: self.root.clone(),
                    source,
                });
                Vec::new()
            }
        }
    }

    /// List rule files for the given modules
    ///
    /// Modules are visited in the order given; inaccessible modules are reported
    /// and skipped.
    pub fn list_rule_files<S: AsRef<str>>(
        &self,
        modules: &[S],
        diagnostics: &mut dyn Diagnostics,
    ) -> Vec<RuleFile> {
        let mut files = Vec::new();

        for module in modules {
            let module = module.as_ref();
            let module_path = self.root.join(module);

            let metadata = match fs::metadata(&module_path) {
                Ok(m) => m,
                Err(e) => {
                    tracing::debug!(module, error = %e, "module not accessible");
                    diagnostics.report(Diagnostic::ModuleMissing {
                        module: module.to_string(),
                    });
                    continue;
                }
            };

            if !metadata.is_dir() {
                diagnostics.report(Diagnostic::ModuleUnreadable {
                    module: module.to_string(),
                    source: io::Error::other("not a directory"),
                });
                continue;
            }

            let entries = match read_entries(&module_path) {
                Ok(entries) => entries,
                Err(source) => {
                    diagnostics.report(Diagnostic::ModuleUnreadable {
                        module: module.to_string(),
                        source,
                    });
                    continue;
                }
            };

            let before = files.len();
            files.extend(
                entries
                    .iter()
                    .map(|e| (entry_name(e), e.path()))
                    .filter(|(name, _)| name.ends_with(RULE_EXTENSION))
                    .map(|(name, path)| RuleFile::new(module, name, path)),
            );
            tracing::debug!(module, count = files.len() - before, "read module");
        }

        files
    }
}

/// Read the direct children of a directory, all or nothing
fn read_entries(dir: &Path) -> io::Result<Vec<DirEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .map(|entry| entry.map_err(io::Error::from))
        .collect()
}

fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Collector, Severity};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "rule").unwrap();
    }

    fn names(files: &[RuleFile]) -> Vec<String> {
        files.iter().map(RuleFile::key).collect()
    }

    #[test]
    fn test_list_modules_only_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("js")).unwrap();
        fs::create_dir_all(dir.path().join("rust")).unwrap();
        touch(&dir.path().join("README.md"));

        let mut diagnostics = Collector::new();
        let mut modules = ModuleReader::new(dir.path()).list_modules(&mut diagnostics);
        modules.sort();

        assert_eq!(modules, vec!["js".to_string(), "rust".to_string()]);
        assert!(diagnostics.diagnostics.is_empty());
    }

    #[test]
    fn test_list_modules_missing_root() {
        let dir = TempDir::new().unwrap();
        let reader = ModuleReader::new(dir.path().join("nope"));

        let mut diagnostics = Collector::new();
        let modules = reader.list_modules(&mut diagnostics);

        assert!(modules.is_empty());
        assert_eq!(diagnostics.count(Severity::Error), 1);
        assert!(matches!(
            diagnostics.diagnostics[0],
            Diagnostic::RootUnreadable { .. }
        ));
    }

    #[test]
    fn test_list_modules_root_is_a_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("rules");
        touch(&root);

        let mut diagnostics = Collector::new();
        let modules = ModuleReader::new(&root).list_modules(&mut diagnostics);

        assert!(modules.is_empty());
        assert_eq!(diagnostics.count(Severity::Error), 1);
        assert!(matches!(
            diagnostics.diagnostics[0],
            Diagnostic::RootUnreadable { .. }
        ));
        assert!(diagnostics.messages()[0].starts_with("Error reading rule modules in "));
    }

    #[test]
    fn test_with_base_appends_rules() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("rules").join("common")).unwrap();

        let reader = ModuleReader::with_base(dir.path());
        assert_eq!(reader.root(), dir.path().join("rules"));

        let mut diagnostics = Collector::new();
        assert_eq!(reader.list_modules(&mut diagnostics), vec!["common".to_string()]);
    }

    #[test]
    fn test_list_rule_files_filters_extension() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("js").join("a.mdc"));
        touch(&dir.path().join("js").join("notes.md"));
        touch(&dir.path().join("js").join("a.mdc.bak"));

        let mut diagnostics = Collector::new();
        let files = ModuleReader::new(dir.path()).list_rule_files(&["js"], &mut diagnostics);

        assert_eq!(names(&files), vec!["js/a.mdc".to_string()]);
        assert_eq!(files[0].path, dir.path().join("js").join("a.mdc"));
        assert!(diagnostics.diagnostics.is_empty());
    }

    #[test]
    fn test_list_rule_files_module_order() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("js").join("a.mdc"));
        touch(&dir.path().join("js").join("b.mdc"));
        touch(&dir.path().join("rust").join("c.mdc"));

        let mut diagnostics = Collector::new();
        let reader = ModuleReader::new(dir.path());
        let mut files = reader.list_rule_files(&["js", "rust"], &mut diagnostics);

        // Enumeration order within a module is platform-defined
        files[..2].sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            files,
            vec![
                RuleFile::new("js", "a.mdc", dir.path().join("js").join("a.mdc")),
                RuleFile::new("js", "b.mdc", dir.path().join("js").join("b.mdc")),
                RuleFile::new("rust", "c.mdc", dir.path().join("rust").join("c.mdc")),
            ]
        );

        let reversed = reader.list_rule_files(&["rust", "js"], &mut diagnostics);
        assert_eq!(reversed[0].key(), "rust/c.mdc");
    }

    #[test]
    fn test_list_rule_files_skips_missing_module() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("rust").join("c.mdc"));

        let mut diagnostics = Collector::new();
        let files =
            ModuleReader::new(dir.path()).list_rule_files(&["go", "rust"], &mut diagnostics);

        assert_eq!(names(&files), vec!["rust/c.mdc".to_string()]);
        assert_eq!(diagnostics.messages(), vec!["Module go does not exist".to_string()]);
    }

    #[test]
    fn test_list_rule_files_module_is_a_file() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("js"));

        let mut diagnostics = Collector::new();
        let files = ModuleReader::new(dir.path()).list_rule_files(&["js"], &mut diagnostics);

        assert!(files.is_empty());
        assert!(matches!(
            diagnostics.diagnostics[0],
            Diagnostic::ModuleUnreadable { .. }
        ));
    }

    #[test]
    fn test_list_rule_files_empty_request() {
        let dir = TempDir::new().unwrap();
        let mut diagnostics = Collector::new();
        let files =
            ModuleReader::new(dir.path()).list_rule_files::<&str>(&[], &mut diagnostics);
        assert!(files.is_empty());
    }
}
