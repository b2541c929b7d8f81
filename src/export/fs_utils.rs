use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// An existing export target is only replaced with `force` or when the
/// first line read from `answers` is `y`/`yes`. EOF counts as no.
pub(crate) fn ensure_writable<R: BufRead + ?Sized>(
    path: &Path,
    force: bool,
    answers: &mut R,
) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!(
        "{} already exists (use --force to overwrite).",
        path.display()
    ));
    print!("Replace it with the current bookmarks? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    answers.read_line(&mut answer)?;

    if is_yes(&answer) {
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "{} left unchanged",
            path.display()
        )))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
