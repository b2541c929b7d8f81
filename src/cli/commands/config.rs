use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::env;
use std::process::Command;
use tracing::debug;

/// `config --set` runs first, then `--print` shows the result, then `--edit`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        set,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();
        let mut effective = cfg.clone();

        if !set.is_empty() {
            let pairs = set
                .iter()
                .map(|s| parse_assignment(s))
                .collect::<AppResult<Vec<_>>>()?;

            // the file keeps its own values; --db/--test only affect this run
            let mut stored = Config::load()?;
            for (key, value) in &pairs {
                stored.set(key, value)?;
                effective.set(key, value)?;
            }
            stored.save()?;

            for (key, value) in &pairs {
                success(format!("{key} = {value}"));
            }
        }

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", effective.to_yaml()?);
        }

        if *edit_config {
            if !path.exists() {
                Config::load()?.save()?;
                info(format!("Created {} with default settings.", path.display()));
            }

            let editor = resolve_editor(editor.as_deref());
            debug!(%editor, path = %path.display(), "opening config file");

            let status = Command::new(&editor)
                .arg(&path)
                .status()
                .map_err(|e| AppError::Config(format!("cannot start editor '{editor}': {e}")))?;
            if !status.success() {
                return Err(AppError::Config(format!(
                    "editor '{editor}' exited with {status}"
                )));
            }
            success(format!("Configuration saved with '{editor}'."));
        }

        if !*print_config && set.is_empty() && !*edit_config {
            info("Use `hrdash config --print`, `--set KEY=VALUE` or `--edit`.");
        }
    }

    Ok(())
}

fn parse_assignment(raw: &str) -> AppResult<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(AppError::Config(format!(
            "expected KEY=VALUE, got '{raw}'"
        ))),
    }
}

/// `--editor`, then `$VISUAL`, then `$EDITOR`, then the platform default.
fn resolve_editor(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| env::var("VISUAL").ok())
        .or_else(|| env::var("EDITOR").ok())
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}
