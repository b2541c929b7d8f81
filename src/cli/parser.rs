use crate::core::generators::DEFAULT_COUNT;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hrdash
#[derive(Parser)]
#[command(
    name = "hrdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal HR dashboard: browse demo employees, filter them, keep bookmarks and view analytics",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a separate bookmark set)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Read employees from a local JSON file (`{"users": [...]}`) instead of the API
    #[arg(global = true, long = "users-file", value_name = "FILE")]
    pub users_file: Option<String>,

    /// Run in test mode (no config file update, no simulated delays)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or change the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "set",
            value_name = "KEY=VALUE",
            help = "Change a setting (database, api_base_url, page_size, simulated_delay_ms, log_level); repeatable"
        )]
        set: Vec<String>,

        #[arg(
            long = "edit",
            help = "Open the configuration file in an editor (--editor, $VISUAL, $EDITOR, then nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// List employees, optionally filtered
    List {
        #[arg(
            long,
            short,
            help = "Case-insensitive match on first/last name, email or department"
        )]
        search: Option<String>,

        #[arg(
            long = "dept",
            short = 'd',
            value_name = "DEPARTMENT",
            help = "Only these departments (repeatable), e.g. engineering, customer-support"
        )]
        departments: Vec<String>,

        #[arg(
            long = "rating",
            short = 'r',
            value_parser = clap::value_parser!(u8).range(1..=5),
            help = "Only these whole-star ratings (repeatable, 1-5)"
        )]
        ratings: Vec<u8>,
    },

    /// Show the detail page of an employee
    Show {
        id: u32,

        #[arg(long, default_value_t = DEFAULT_COUNT, help = "Number of reviews, projects and feedback entries")]
        count: usize,
    },

    /// Bookmark an employee, or remove the bookmark if already present
    Bookmark { id: u32 },

    /// Remove a bookmark
    Unbookmark { id: u32 },

    /// List (or export) bookmarked employees
    Bookmarks {
        #[arg(long, value_name = "FILE", help = "Export bookmarks to FILE")]
        export: Option<String>,

        #[arg(long, value_enum, default_value = "json", help = "Export format")]
        format: ExportFormat,

        #[arg(long, short = 'f', help = "Overwrite an existing export file without asking")]
        force: bool,
    },

    /// Show performance insights and department statistics
    Analytics,

    /// Add a new employee (simulated, nothing is stored)
    AddEmployee {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long, value_name = "DEPARTMENT")]
        department: String,
        #[arg(long)]
        position: String,
        #[arg(long)]
        salary: u32,
        #[arg(long, value_name = "YYYY-MM-DD")]
        start_date: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        #[arg(long = "zip")]
        zip_code: String,
    },

    /// Promote an employee (simulated, nothing is stored)
    Promote { id: u32 },

    /// Print the internal log of actions
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
