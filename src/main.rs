use clap::{Parser, Subcommand};
use density_icons::imaging::RustBackend;
use density_icons::{config, generate, output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "density-icons")]
#[command(about = "Resize app logos into Android density buckets")]
#[command(long_about = "\
Resize app logos into Android density buckets

Every source image is resized to a square PNG for each density and written to
<res_dir>/drawable-<density>/<base_name>.png, replacing existing files.

  ldpi     36x36
  mdpi     48x48
  hdpi     72x72
  xhdpi    96x96
  xxhdpi   144x144
  xxxhdpi  192x192

Paths, sources and the density table come from icons.toml in the config
directory. Run 'density-icons gen-config' to print a documented one.")]
#[command(version)]
struct Cli {
    /// Directory containing icons.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    /// Output root, overriding res_dir from the config
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Exit with status 1 if any source failed
    #[arg(long, global = true)]
    strict: bool,

    /// Defaults to `generate`
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Resize every source into every density bucket
    Generate,
    /// Show resolved sources and output paths without writing anything
    Check,
    /// Print a stock icons.toml with all options documented
    GenConfig,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let strict = cli.strict;
    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => {
            let config = load(&cli.config, cli.output)?;
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                let mut first = true;
                for event in rx {
                    let starts_source =
                        matches!(event, generate::GenerateEvent::SourceStarted { .. });
                    for line in output::format_event(&event, first) {
                        println!("{}", line);
                    }
                    if starts_source {
                        first = false;
                    }
                }
            });
            let report = generate::generate_all(&RustBackend::new(), &config, Some(&tx));
            drop(tx);
            printer.join().map_err(|_| "output thread panicked")?;
            output::print_summary(&report, strict);

            if strict && !report.all_succeeded() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Check => {
            let config = load(&cli.config, cli.output)?;
            output::print_check_output(&config);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Load `icons.toml` and apply the `--output` override.
fn load(
    dir: &std::path::Path,
    output: Option<PathBuf>,
) -> Result<config::GeneratorConfig, config::ConfigError> {
    let mut config = config::load_config(dir)?;
    if let Some(output) = output {
        // Relative to the working directory, not the config directory.
        config.res_dir = std::env::current_dir()?.join(output);
    }
    Ok(config)
}
