use clap::{Parser, Subcommand};
use mipmap_gen::config::{self, IconConfig};
use mipmap_gen::density::Density;
use mipmap_gen::imaging::{IconSource, LeafColor, Resample, RustBackend};
use mipmap_gen::materialize::{MaterializeError, materialize};
use mipmap_gen::output;
use std::path::{Path, PathBuf};

/// Flags for commands that read the source logo.
#[derive(clap::Args, Clone)]
struct LogoArgs {
    /// Source logo (overrides `logo` in mipmap.toml)
    #[arg(long)]
    logo: Option<PathBuf>,
}

/// Flags for commands that resample the source logo.
#[derive(clap::Args, Clone)]
struct ResampleArgs {
    #[command(flatten)]
    logo: LogoArgs,

    /// Resampling filter: nearest, triangle, catmullrom, gaussian, lanczos3
    #[arg(long)]
    filter: Option<Resample>,
}

fn version_string() -> &'static str {
    let hash = env!("MIPMAP_GEN_GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{} ({hash})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "mipmap-gen")]
#[command(about = "Populate Android mipmap launcher icons at every density")]
#[command(long_about = "\
Populate Android mipmap launcher icons at every density

Every command writes two identical files per density:

  android/app/src/main/res/
  ├── mipmap-mdpi/       48x48    ic_launcher.png, ic_launcher_round.png
  ├── mipmap-hdpi/       72x72
  ├── mipmap-xhdpi/      96x96
  ├── mipmap-xxhdpi/     144x144
  └── mipmap-xxxhdpi/    192x192

Settings can be stored in an optional mipmap.toml in the project root.
Run 'mipmap-gen gen-config' to print a documented one.")]
#[command(version = version_string())]
struct Cli {
    /// Project root (holds mipmap.toml; config paths are relative to it)
    #[arg(long, default_value = ".", global = true)]
    project: PathBuf,

    /// Android resource directory (overrides `res_dir` in mipmap.toml)
    #[arg(long, global = true)]
    res: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a flat placeholder icon at every density
    Placeholder,
    /// Draw the leaf emblem at every density
    Leaf {
        /// Fill color as RRGGBB or RRGGBBAA
        #[arg(long)]
        color: Option<LeafColor>,
    },
    /// Resize the source logo to every density
    Resize(ResampleArgs),
    /// Resize the source logo onto a transparent canvas at every density
    Fit(ResampleArgs),
    /// Copy the source logo unchanged into every density
    Copy(LogoArgs),
    /// Print a stock mipmap.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let config = config::load_config(&cli.project)?;
    let res_dir = cli
        .res
        .clone()
        .unwrap_or_else(|| project_path(&cli.project, &config.res_dir));
    let Some(source) = icon_source(&cli.command, &cli.project, &config) else {
        return Ok(());
    };

    run(&source, &res_dir, &config.densities)
}

/// Map a subcommand to its icon source, applying flag overrides.
fn icon_source(command: &Command, project: &Path, config: &IconConfig) -> Option<IconSource> {
    let logo = |args: &LogoArgs| {
        args.logo
            .clone()
            .unwrap_or_else(|| project_path(project, &config.logo))
    };
    let filter = |args: &ResampleArgs| args.filter.unwrap_or(config.resize.filter);

    let source = match command {
        Command::Placeholder => IconSource::Placeholder,
        Command::Leaf { color } => IconSource::Leaf {
            color: color.unwrap_or(config.leaf.color),
        },
        Command::Resize(args) => IconSource::Resize {
            path: logo(&args.logo),
            filter: filter(args),
        },
        Command::Fit(args) => IconSource::Fit {
            path: logo(&args.logo),
            filter: filter(args),
        },
        Command::Copy(args) => IconSource::Copy { path: logo(args) },
        Command::GenConfig => return None,
    };
    Some(source)
}

/// Render and write every density, printing progress as files land.
///
/// A missing logo for `copy` is reported and ends the run cleanly; every other
/// failure propagates to a non-zero exit.
fn run(
    source: &IconSource,
    res_dir: &Path,
    densities: &[Density],
) -> Result<(), Box<dyn std::error::Error>> {
    let backend = RustBackend::new();
    let (tx, rx) = std::sync::mpsc::channel();
    let result = materialize(&backend, source, res_dir, densities, Some(tx));
    for event in rx {
        output::print_icon_event(&event);
    }

    match result {
        Ok(result) => {
            output::print_summary(source, &result);
            Ok(())
        }
        Err(MaterializeError::SourceNotFound(path)) => {
            output::print_missing_source(&path);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Resolve a config path against the project root, leaving `.` roots untouched.
fn project_path(project: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || project == Path::new(".") {
        path.to_path_buf()
    } else {
        project.join(path)
    }
}
