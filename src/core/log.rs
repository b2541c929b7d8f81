use crate::db::log::{LogEntry, load_entries};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

const MAX_ACTION_WIDTH: usize = 40;

fn strip_ansi(s: &str) -> String {
    crate::utils::table::strip_ansi(s)
}

/// ANSI color for each audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "bookmark" => Colour::Green,
        "unbookmark" => Colour::Red,
        "promote" => Colour::Yellow,
        "add_employee" => Colour::Blue,
        "export" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_entries(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let action_w = entries
            .iter()
            .map(|e| action_label(e).len())
            .max()
            .unwrap_or(10)
            .min(MAX_ACTION_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for entry in &entries {
            let color = color_for_operation(&entry.operation);

            let mut label = action_label(entry);
            if label.chars().count() > MAX_ACTION_WIDTH {
                label = label.chars().take(MAX_ACTION_WIDTH - 3).collect::<String>() + "...";
            }

            // only the operation word is colored
            let colored = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(label.as_str()).to_string(),
            };
            let padding = " ".repeat(action_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                colored,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn action_label(entry: &LogEntry) -> String {
    if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    }
}
