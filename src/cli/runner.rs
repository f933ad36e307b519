use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use squarepad::{ImageSquarer, SquareParams};

use super::args::CliArgs;
use super::errors::AppError;

/// Preset (or defaults) first, then whatever was given on the command line.
fn resolve_params(args: &CliArgs) -> Result<SquareParams, AppError> {
    let mut params = match &args.config {
        Some(path) => SquareParams::load_preset(path)?,
        None => SquareParams::default(),
    };

    if let Some(source_dir) = &args.source_dir {
        params.source_dir = source_dir.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        params.output_dir = Some(output_dir.clone());
    }
    if !args.extensions.is_empty() {
        params.extensions = args.extensions.clone();
    }
    if let Some(policy) = args.on_error {
        params.on_error = policy;
    }
    params.backup |= args.backup;

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    run_to(args, &mut stdout.lock())
}

/// `run`, with console status lines written to `out`.
fn run_to<W: Write>(args: CliArgs, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    let params = resolve_params(&args)?;

    if let Some(path) = &args.save_config {
        params.validate().map_err(AppError::from)?;
        params.save_preset(path).map_err(AppError::from)?;
        writeln!(out, "Saved preset to {}", path.display())?;
        return Ok(());
    }

    info!("Source directory: {:?}", params.source_dir);
    info!("Output directory: {:?}", params.resolved_output_dir());

    let squarer = ImageSquarer::new(params).map_err(AppError::from)?;
    let mut write_error = None;
    let report = squarer
        .run_with(|file| {
            if let Err(e) = writeln!(out, "{}", file) {
                write_error.get_or_insert(e);
            }
        })
        .map_err(AppError::from)?;
    if let Some(e) = write_error {
        return Err(e.into());
    }

    writeln!(out, "{}", report.summary())?;
    writeln!(out, "Done padding images.")?;

    if report.failed > 0 {
        return Err(AppError::BatchFailed {
            errors: report.failed,
        }
        .into());
    }
    Ok(())
}
