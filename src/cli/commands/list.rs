use super::open_store;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::enrich::RandomStrategy;
use crate::core::query::{EmployeeFilter, EmployeeQuery};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::department::Department;
use crate::models::employee::Employee;
use crate::source;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET, YELLOW, colorize_rating};
use crate::utils::formatting::{format_currency, star_rating};
use crate::utils::table::{Column, Table};

/// The dashboard listing.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        departments,
        ratings,
    } = &cli.command
    {
        let departments = departments
            .iter()
            .map(|d| Department::parse(d))
            .collect::<AppResult<Vec<_>>>()?;

        let filter = EmployeeFilter {
            search_term: search.clone().unwrap_or_default(),
            departments,
            ratings: ratings.clone(),
        };

        let source = source::open(cli.users_file.as_deref(), cfg)?;
        let mut query = EmployeeQuery::new(cfg.page_size);
        query.set_filter(filter);
        query.load(source.as_ref(), &mut RandomStrategy::from_entropy());

        if let Some(msg) = query.error() {
            return Err(AppError::Fetch(msg.to_string()));
        }

        let pool = DbPool::new(&cfg.database)?;
        let store = open_store(&pool, None)?;

        print_filters(query.filter());

        if query.employees().is_empty() {
            info("No employees match the current filters.");
        } else {
            print_employees(query.employees(), |id| store.is_bookmarked(id));
        }

        println!(
            "\nShowing {} of {} employees",
            query.employees().len(),
            query.all_employees().len()
        );
    }
    Ok(())
}

fn print_filters(filter: &EmployeeFilter) {
    if !filter.is_active() {
        return;
    }

    let mut parts = Vec::new();
    if !filter.search_term.is_empty() {
        parts.push(format!("search \"{}\"", filter.search_term));
    }
    if !filter.departments.is_empty() {
        let names: Vec<&str> = filter.departments.iter().map(|d| d.name()).collect();
        parts.push(format!("departments: {}", names.join(", ")));
    }
    if !filter.ratings.is_empty() {
        let stars: Vec<String> = filter.ratings.iter().map(|r| format!("{r}★")).collect();
        parts.push(format!("ratings: {}", stars.join(", ")));
    }
    println!("{GREY}Filters: {}{RESET}\n", parts.join(" | "));
}

pub(crate) fn print_employees<F: Fn(u32) -> bool>(employees: &[Employee], is_bookmarked: F) {
    let mut table = Table::new(vec![
        Column::new("", 1),
        Column::new("ID", 3),
        Column::new("Name", 20),
        Column::new("Email", 28),
        Column::new("Department", 16),
        Column::new("Position", 20),
        Column::new("Rating", 6),
        Column::new("Salary", 9),
    ]);

    for e in employees {
        let marker = if is_bookmarked(e.id) {
            format!("{YELLOW}★{RESET}")
        } else {
            String::new()
        };

        table.add_row(vec![
            marker,
            e.id.to_string(),
            e.full_name(),
            e.email.clone(),
            e.department.to_string(),
            e.position.clone(),
            format!("{} {}", colorize_rating(e.rating), star_rating(e.rating, 5)),
            format_currency(e.salary as i64),
        ]);
    }

    print!("{}", table.render());
}
