use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn check_dir(dir: &Path) -> Result<(), AppError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(AppError::NotADirectory {
            path: dir.to_path_buf(),
        })
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    check_dir(&args.dir)?;
    info!("Padding columns in {:?}", args.dir);

    let report = colpad::pad_all_in(&args.dir).map_err(AppError::from)?;
    info!("Wrote {} padded columns", report.processed);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            check_dir(&missing),
            Err(AppError::NotADirectory { .. })
        ));
    }

    #[test]
    fn run_fails_on_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let args = CliArgs {
            dir: dir.path().to_path_buf(),
            log: false,
        };
        let err = run(args).unwrap_err();
        assert!(err.to_string().contains("column_1.png"));
    }
}
