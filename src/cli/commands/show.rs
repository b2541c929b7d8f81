use super::open_store;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::enrich::{RandomStrategy, enrich_one};
use crate::core::generators::Generators;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::insights::{Feedback, PerformanceReview, Project};
use crate::models::rating::RatingBand;
use crate::source;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREY, RESET, YELLOW, badge_rating, colorize_optional, colorize_rating};
use crate::utils::formatting::{bold, format_currency, format_long_date, initials, italic, star_rating};
use crate::utils::table::{Column, Table};

const WRAP_WIDTH: usize = 72;

/// Employee detail page with its mock reviews, projects and feedback.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, count } = &cli.command {
        let source = source::open(cli.users_file.as_deref(), cfg)?;
        let raw = source.fetch_by_id(*id)?;
        let employee = enrich_one(raw, &mut RandomStrategy::from_entropy());

        let mut generators = Generators::from_entropy();
        let history = generators.performance_history(*count);
        let projects = generators.projects(*count);
        let feedback = generators.feedback(*count);

        let pool = DbPool::new(&cfg.database)?;
        let store = open_store(&pool, None)?;

        print_card(&employee, store.is_bookmarked(employee.id));
        print_history(&history);
        print_projects(&projects);
        print_feedback(&feedback);
    }
    Ok(())
}

fn print_card(e: &Employee, bookmarked: bool) {
    let mark = if bookmarked {
        format!("  {YELLOW}★ bookmarked{RESET}")
    } else {
        String::new()
    };

    println!(
        "[{}] {}{}",
        initials(&e.first_name, &e.last_name),
        bold(&e.full_name()),
        mark
    );
    println!("{}", italic(&format!("{} · {}", e.position, e.department)));
    println!();

    let rows = [
        ("Email", e.email.clone()),
        ("Phone", colorize_optional(&e.phone)),
        ("Age", e.age.to_string()),
        ("Address", colorize_optional(&e.address.address)),
        ("Location", colorize_optional(&e.location())),
        ("Postal code", colorize_optional(&e.address.postal_code)),
        ("Joined", format_long_date(e.join_date)),
        ("Salary", format_currency(e.salary as i64)),
        (
            "Rating",
            format!(
                "{} {} {}",
                badge_rating(e.rating),
                star_rating(e.rating, 5),
                RatingBand::from_rating(e.rating).label()
            ),
        ),
    ];

    for (label, value) in rows {
        println!("  {CYAN}{:<12}{RESET} {}", label, value);
    }
}

fn print_history(history: &[PerformanceReview]) {
    header("Performance History");

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Rating", 6),
        Column::new("Summary", 40),
        Column::new("Reviewer", 16),
    ]);
    for r in history {
        table.add_row(vec![
            r.date.to_string(),
            colorize_rating(r.rating),
            r.summary.clone(),
            r.reviewer.clone(),
        ]);
    }
    print!("{}", table.render());
}

fn print_projects(projects: &[Project]) {
    header("Projects");

    for p in projects {
        println!(
            "{}. {}  [{}] priority {}, due {}",
            p.id,
            bold(&p.name),
            p.status,
            p.priority,
            format_long_date(p.due_date)
        );
        for line in textwrap::wrap(&p.description, WRAP_WIDTH) {
            println!("   {GREY}{line}{RESET}");
        }
    }
}

fn print_feedback(feedback: &[Feedback]) {
    header("Feedback");

    for f in feedback {
        println!(
            "{}  {} ({}) {}",
            f.date,
            bold(&f.category),
            f.reviewer,
            colorize_rating(f.rating)
        );
        for line in textwrap::wrap(&f.comment, WRAP_WIDTH) {
            println!("   \"{line}\"");
        }
    }
}
