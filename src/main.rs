use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use courseware_upconvert::{
    ConvertOptions, ConverterRegistry, DocumentFolder, DocumentKind,
    FolderOptions, IssueReporter, LocalFolder, ReportFormat, SchemaVersion, UpconvertConfig,
    UpconvertEngine,
};

#[derive(Parser, Debug)]
#[command(name = "courseware-upconvert")]
#[command(about = "Convert legacy courseware XML documents to the current schema version")]
struct Args {
    /// Document to convert; with --folder, the root document of its folder
    file: PathBuf,

    /// Document kind - inferred from the file extension if not provided
    #[arg(long, value_enum, value_name = "KIND")]
    kind: Option<DocumentKind>,

    /// Also convert every auxiliary document in the file's folder
    #[arg(long)]
    folder: bool,

    /// Copy each original to <file>.bak before overwriting it
    #[arg(long)]
    backup: bool,

    /// Fail documents that do not validate cleanly against their schema
    #[arg(long)]
    strict: bool,

    /// Treat documents without a version attribute as the oldest supported version
    #[arg(long)]
    assume_legacy: bool,

    /// Report format
    #[arg(long, value_enum, value_name = "FORMAT")]
    format: Option<ReportFormat>,

    /// YAML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Convert and report without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Log every conversion step
    #[arg(short, long)]
    verbose: bool,
}

/// Settings after the config file and command line flags are merged.
#[derive(Debug)]
struct Settings {
    schema_root: Option<PathBuf>,
    options: FolderOptions,
    format: ReportFormat,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("\n❌ Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns whether every document converted.
fn run(args: &Args) -> Result<bool, String> {
    let settings = load_settings(args)?;
    debug!(?settings, "Resolved settings");

    let kind = match args.kind {
        Some(kind) => kind,
        None => infer_kind(&args.file)?,
    };

    let registry = match &settings.schema_root {
        Some(root) => ConverterRegistry::standard_with_schemas(root),
        None => ConverterRegistry::standard(),
    }
    .map_err(|e| format!("Failed to build the converter registry: {}", e))?;
    let mut engine = UpconvertEngine::new(registry);
    if let Some(root) = &settings.schema_root {
        engine = engine.with_schema_root(root);
    }

    let parent = match args.file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let folder = LocalFolder::new(parent);

    let console = settings.format == ReportFormat::Console;
    let (updated, failures) = if args.folder {
        let result = engine
            .upconvert_folder(kind, &args.file, &folder, settings.options)
            .map_err(|e| e.to_string())?;
        (result.updated, result.failures)
    } else {
        let updated = convert_single(&mut engine, kind, &args.file, &folder, settings.options)?;
        (updated.into_iter().collect(), Vec::new())
    };

    if console {
        println!("\n=== Conversion Complete ===");
        if updated.is_empty() && failures.is_empty() {
            println!(
                "  ✓ {} is already at version {}",
                args.file.display(),
                SchemaVersion::current()
            );
        }
        for file in &updated {
            if settings.options.dry_run {
                println!("  ℹ Would update: {}", file);
            } else {
                println!("  ✓ Updated: {}", file);
            }
        }
        println!();
    }

    let reporter = IssueReporter::new().with_format(settings.format);
    let report = reporter.generate_report(updated, &failures, engine.drain_issues());
    let formatted = reporter
        .format_report(&report)
        .map_err(|e| format!("Failed to format report: {}", e))?;
    print!("{}", formatted);

    Ok(failures.is_empty())
}

fn load_settings(args: &Args) -> Result<Settings, String> {
    let config = match &args.config {
        Some(path) => UpconvertConfig::load(path).map_err(|e| e.to_string())?,
        None => UpconvertConfig::default(),
    };

    Ok(Settings {
        schema_root: config.schema_root,
        options: FolderOptions {
            convert: ConvertOptions {
                confirm_unknown_version: args.assume_legacy || config.confirm_unknown_version,
                strict_validation: args.strict || config.strict_validation,
            },
            make_backup: args.backup || config.make_backup,
            dry_run: args.dry_run,
        },
        format: args.format.unwrap_or(config.report_format),
    })
}

fn infer_kind(file: &Path) -> Result<DocumentKind, String> {
    file.file_name()
        .and_then(|name| name.to_str())
        .and_then(DocumentKind::from_file_name)
        .ok_or_else(|| {
            format!(
                "Cannot infer the document kind of '{}'. Pass --kind explicitly.",
                file.display()
            )
        })
}

/// Returns the file id when the document was converted.
///
/// Dropped elements reach the engine's record only once the file is written.
fn convert_single(
    engine: &mut UpconvertEngine,
    kind: DocumentKind,
    file: &Path,
    folder: &dyn DocumentFolder,
    options: FolderOptions,
) -> Result<Option<String>, String> {
    let file_id = file.display().to_string();
    engine
        .upconvert_file(kind, file, folder, options)
        .map(|converted| converted.then_some(file_id))
        .map_err(|e| e.to_string())
}
