//! Tree-walking driver.
//!
//! The driver visits every compound node of the schema tree, produces one
//! datatypes module per node with compound children, then the facade. A
//! failure is recorded against its node and does not stop the walk, so
//! unrelated subtrees still produce their output.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::format::SourceFormatter;
use crate::python::{FacadeGenerator, ModuleGenerator};
use crate::render::{render_facade, render_module};
use plotgen_schema::SchemaNode;
use std::path::{Path, PathBuf};

/// Path of the facade module relative to the output directory.
pub const FACADE_FILE: &str = "__init__.py";

/// File name of every datatypes module.
pub const MODULE_FILE: &str = "__init__.py";

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    /// Path relative to the output directory.
    pub path: PathBuf,
    /// Source text.
    pub source: String,
}

/// A unit that could not be produced.
#[derive(Debug)]
pub struct GenerationFailure {
    /// Path of the node (or unit) that failed.
    pub node: String,
    /// Cause.
    pub error: CodegenError,
}

/// Outcome of one generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Units produced, modules in pre-order, facade last.
    pub units: Vec<OutputUnit>,
    /// Units that failed.
    pub failures: Vec<GenerationFailure>,
}

impl GenerationReport {
    /// Returns true if no failure was recorded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Looks up a unit by relative path.
    #[must_use]
    pub fn unit(&self, path: impl AsRef<Path>) -> Option<&OutputUnit> {
        let path = path.as_ref();
        self.units.iter().find(|u| u.path == path)
    }
}

/// Main code generator.
pub struct Generator<'a> {
    root: &'a SchemaNode,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for a schema root.
    #[must_use]
    pub fn new(root: &'a SchemaNode, config: &'a GeneratorConfig) -> Self {
        Self { root, config }
    }

    /// Generates every module and the facade.
    #[must_use]
    pub fn generate(&self) -> GenerationReport {
        let mut report = GenerationReport::default();
        let modules = ModuleGenerator::new(self.config);
        self.visit(self.root, &modules, &mut report);

        match FacadeGenerator::new(self.config).generate(self.root) {
            Ok(facade) => report.units.push(OutputUnit {
                path: PathBuf::from(FACADE_FILE),
                source: render_facade(&facade),
            }),
            Err(error) => {
                tracing::warn!(%error, "facade generation failed");
                report.failures.push(GenerationFailure {
                    node: self.root.display_path(),
                    error,
                });
            }
        }

        tracing::info!(
            units = report.units.len(),
            failures = report.failures.len(),
            "generation finished"
        );
        report
    }

    fn visit(&self, node: &SchemaNode, modules: &ModuleGenerator<'_>, report: &mut GenerationReport) {
        match modules.generate(node) {
            Ok(Some(module)) => {
                let path = self.module_path(node);
                tracing::debug!(
                    path = %path.display(),
                    classes = module.classes.len(),
                    "generated module"
                );
                report.units.push(OutputUnit {
                    path,
                    source: render_module(&module),
                });
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(node = %node.display_path(), %error, "module generation failed");
                report.failures.push(GenerationFailure {
                    node: node.display_path(),
                    error,
                });
            }
        }

        for child in node.compound_children() {
            self.visit(child, modules, report);
        }
    }

    /// Returns the module path of a node relative to the output directory.
    #[must_use]
    pub fn module_path(&self, node: &SchemaNode) -> PathBuf {
        let mut path = PathBuf::from("datatypes");
        path.push(&self.config.section);
        path.extend(node.dir_path());
        path.push(MODULE_FILE);
        path
    }

    /// Generates, formats and writes every unit under `out_dir`.
    ///
    /// Existing files are replaced. A unit that fails to format or write is
    /// recorded in the report and skipped; the remaining units are still
    /// written.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if `out_dir` cannot be created.
    pub fn write(
        &self,
        out_dir: &Path,
        formatter: &dyn SourceFormatter,
    ) -> Result<GenerationReport, CodegenError> {
        std::fs::create_dir_all(out_dir)?;
        let mut report = self.generate();
        let mut written = Vec::with_capacity(report.units.len());

        for unit in std::mem::take(&mut report.units) {
            let source = match formatter.format(&unit.source) {
                Ok(source) => source,
                Err(error) => {
                    tracing::warn!(path = %unit.path.display(), %error, "formatting failed");
                    report.failures.push(GenerationFailure {
                        node: unit.path.display().to_string(),
                        error,
                    });
                    continue;
                }
            };

            let target = out_dir.join(&unit.path);
            if let Err(error) = write_file(&target, &source) {
                tracing::warn!(path = %target.display(), %error, "write failed");
                report.failures.push(GenerationFailure {
                    node: unit.path.display().to_string(),
                    error: error.into(),
                });
                continue;
            }
            tracing::debug!(path = %target.display(), "wrote unit");

            written.push(OutputUnit {
                path: unit.path,
                source,
            });
        }

        report.units = written;
        Ok(report)
    }
}

fn write_file(target: &Path, source: &str) -> std::io::Result<()> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(target, source)
}
