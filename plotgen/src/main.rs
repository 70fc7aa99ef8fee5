//! plotgen CLI - plotly schema to Python datatypes
//!
//! Commands:
//! - `plotgen generate` - Generate datatype modules and the figure facade
//! - `plotgen check` - Load and validate a schema without generating

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plotgen::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plotgen")]
#[command(author, version, about = "Python datatype generator for plotly schemas", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate datatype modules and the figure facade
    Generate {
        /// Path to the plotly schema (plot-schema.json)
        #[arg(short, long)]
        schema: PathBuf,

        /// Output directory for generated code
        #[arg(short, long)]
        out: PathBuf,

        /// Path to a TOML generator configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Formatter program fed each source on stdin (e.g. "black")
        #[arg(short, long)]
        format: Option<String>,

        /// Argument passed to the formatter, repeatable (e.g. --format-arg=-q)
        #[arg(long = "format-arg", requires = "format", allow_hyphen_values = true)]
        format_args: Vec<String>,

        /// List the files that would be written without writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Load and validate a plotly schema
    Check {
        /// Path to the plotly schema
        #[arg(short, long)]
        schema: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            schema,
            out,
            config,
            format,
            format_args,
            dry_run,
        } => {
            let formatter = format.map(|program| {
                std::iter::once(program)
                    .chain(format_args)
                    .collect::<Vec<_>>()
            });
            generate(&schema, &out, config.as_deref(), formatter, dry_run)
        }
        Commands::Check { schema } => {
            check(&schema)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

fn load_schema(path: &Path) -> Result<SchemaNode> {
    let root = parse_schema_file(path)
        .with_context(|| format!("failed to load schema {}", path.display()))?;
    validate_tree(&root).with_context(|| format!("invalid schema {}", path.display()))?;
    Ok(root)
}

fn check(path: &Path) -> Result<()> {
    let root = load_schema(path)?;
    tracing::info!(
        path = %path.display(),
        traces = root.children.len(),
        "schema is valid"
    );
    Ok(())
}

fn generate(
    schema: &Path,
    out: &Path,
    config: Option<&Path>,
    formatter: Option<Vec<String>>,
    dry_run: bool,
) -> Result<ExitCode> {
    let mut config = match config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(command) = formatter {
        config = config.formatter(command);
    }

    let root = load_schema(schema)?;
    let generator = Generator::new(&root, &config);

    let report = if dry_run {
        let report = generator.generate();
        for unit in &report.units {
            println!("{}", out.join(&unit.path).display());
        }
        report
    } else {
        let formatter: Box<dyn SourceFormatter> = match config
            .formatter
            .as_deref()
            .and_then(ExternalFormatter::from_command)
        {
            Some(external) => Box::new(external),
            None => Box::new(Passthrough),
        };
        generator
            .write(out, formatter.as_ref())
            .with_context(|| format!("failed to write output to {}", out.display()))?
    };

    for failure in &report.failures {
        tracing::error!(node = %failure.node, error = %failure.error, "generation failed");
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"{"traces": {
        "scatter": {"attributes": {
            "x": {"valType": "data_array"},
            "marker": {"size": {"valType": "number", "dflt": 6}, "role": "object"}
        }},
        "bar": {"attributes": {"x": {"valType": "data_array"}}}
    }}"#;

    fn write_schema(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("plot-schema.json");
        std::fs::write(&path, json).expect("write schema");
        path
    }

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::try_parse_from([
            "plotgen",
            "-v",
            "generate",
            "--schema",
            "s.json",
            "--out",
            "out",
            "--format",
            "prettier",
            "--format-arg",
            "--stdin-filepath",
            "--format-arg",
            "my module.py",
            "--dry-run",
        ])
        .expect("parse");
        assert!(cli.verbose);
        match cli.command {
            Commands::Generate {
                schema,
                out,
                config,
                format,
                format_args,
                dry_run,
            } => {
                assert_eq!(schema, PathBuf::from("s.json"));
                assert_eq!(out, PathBuf::from("out"));
                assert!(config.is_none());
                assert_eq!(format.as_deref(), Some("prettier"));
                assert_eq!(format_args, vec!["--stdin-filepath", "my module.py"]);
                assert!(dry_run);
            }
            Commands::Check { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn test_format_arg_requires_format() {
        let result = Cli::try_parse_from([
            "plotgen", "generate", "--schema", "s.json", "--out", "out", "--format-arg", "-q",
        ]);
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_generate_runs_formatter_with_args() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = write_schema(dir.path(), SCHEMA);
        let out = dir.path().join("out");
        let formatter = vec![
            "sh".to_string(),
            "-c".to_string(),
            "cat > /dev/null; echo 'formatted source'".to_string(),
        ];

        let code = generate(&schema, &out, None, Some(formatter), false).expect("generate");
        assert_eq!(code, ExitCode::SUCCESS);
        let facade = std::fs::read_to_string(out.join("__init__.py")).expect("read facade");
        assert_eq!(facade, "formatted source\n");
    }

    #[test]
    fn test_check_valid_schema() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = write_schema(dir.path(), SCHEMA);
        assert!(check(&schema).is_ok());
    }

    #[test]
    fn test_check_invalid_schema() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = write_schema(dir.path(), r#"{"layout": {}}"#);
        assert!(check(&schema).is_err());
    }

    #[test]
    fn test_generate_writes_tree() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = write_schema(dir.path(), SCHEMA);
        let out = dir.path().join("out");

        let code = generate(&schema, &out, None, None, false).expect("generate");
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.join("__init__.py").is_file());
        assert!(out.join("datatypes/trace/__init__.py").is_file());
        assert!(out.join("datatypes/trace/scatter/__init__.py").is_file());
        assert!(!out.join("datatypes/trace/bar").exists());
    }

    #[test]
    fn test_generate_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = write_schema(dir.path(), SCHEMA);
        let out = dir.path().join("out");

        let code = generate(&schema, &out, None, None, true).expect("generate");
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(!out.exists());
    }

    #[test]
    fn test_generate_reads_config() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = write_schema(dir.path(), SCHEMA);
        let config = dir.path().join("plotgen.toml");
        std::fs::write(&config, "package = \"plotly\"\nmethod_prefix = \"new_\"\n")
            .expect("write config");
        let out = dir.path().join("out");

        generate(&schema, &out, Some(&config), None, false).expect("generate");
        let facade = std::fs::read_to_string(out.join("__init__.py")).expect("read facade");
        assert!(facade.contains("def new_scatter("));
        assert!(facade.contains("from plotly.datatypes.trace import"));
    }

    #[test]
    fn test_generate_unknown_type_fails() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = write_schema(
            dir.path(),
            r#"{"traces": {"pie": {"attributes": {
                "marker": {"colors": {"valType": "colorlist"}, "role": "object"}
            }}}}"#,
        );
        let out = dir.path().join("out");

        let code = generate(&schema, &out, None, None, false).expect("generate");
        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.join("__init__.py").is_file());
    }
}
