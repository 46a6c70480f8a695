use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::error::FocusError;
use crate::output::to_json;

/// Execute a config subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be serialized or written, or if
/// `init` would overwrite an existing file without `--force`.
pub fn config(ctx: &Context, cmd: ConfigCommands) -> Result<String, FocusError> {
    match cmd {
        ConfigCommands::Show => match ctx.format {
            OutputFormat::Json => to_json(&ctx.config),
            OutputFormat::Pretty => ctx.config.to_yaml(),
        },
        ConfigCommands::Path => Ok(ctx.paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => {
            let path = &ctx.paths.config_file;
            if path.exists() && !force {
                return Err(FocusError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }

            Config::default().save(&ctx.paths)?;
            tracing::info!(path = %path.display(), "config file written");
            Ok(format!("✅ Wrote {}", path.display()).green().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Paths;
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir, format: OutputFormat) -> Context {
        Context {
            paths: Paths::with_root(temp_dir.path().to_path_buf()),
            config: Config::default(),
            format,
        }
    }

    #[test]
    fn test_init_then_refuse_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir, OutputFormat::Pretty);

        config(&ctx, ConfigCommands::Init { force: false }).unwrap();
        assert!(ctx.paths.config_file.exists());

        let err = config(&ctx, ConfigCommands::Init { force: false }).unwrap_err();
        assert!(matches!(err, FocusError::Config(_)));

        config(&ctx, ConfigCommands::Init { force: true }).unwrap();
        let loaded = Config::load(&ctx.paths).unwrap();
        assert_eq!(loaded.focus.default_minutes, 25);
        assert!(loaded.focus.abandon_on_focus_lost);
    }

    #[test]
    fn test_show_json() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir, OutputFormat::Json);

        let out = config(&ctx, ConfigCommands::Show).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["focus"]["default_minutes"], 25);
    }

    #[test]
    fn test_path() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir, OutputFormat::Pretty);

        let out = config(&ctx, ConfigCommands::Path).unwrap();
        assert!(out.ends_with("config.yaml"));
    }
}
