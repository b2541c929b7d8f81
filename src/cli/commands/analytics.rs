use super::open_store;
use crate::config::Config;
use crate::core::analytics::AnalyticsLogic;
use crate::core::generators::Generators;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::analytics::{AnalyticsReport, BookmarkTrend, DepartmentStat};
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, colorize_rating};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table, pad_right};
use crate::utils::time::delay_from_millis;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let store = open_store(&pool, None)?;

    println!("{GREY}Loading analytics…{RESET}");
    let report = AnalyticsLogic::load(
        &mut Generators::from_entropy(),
        store.len(),
        delay_from_millis(cfg.simulated_delay_ms),
    );

    print_summary(&report);
    print_departments(&report.department_stats);
    print_trends(&report.bookmark_trends);
    Ok(())
}

fn print_summary(report: &AnalyticsReport) {
    let s = &report.summary;
    header("Overview");

    let cards = [
        ("Total Employees", s.total_employees.to_string(), s.employees_trend()),
        ("Average Rating", format!("{:.1}", s.avg_rating), s.rating_trend()),
        ("Bookmarked", s.total_bookmarks.to_string(), s.bookmarks_trend()),
        ("Promotion Rate", format!("{}%", s.promotion_rate), s.promotion_trend()),
    ];

    for (title, value, trend) in cards {
        println!(
            "  {CYAN}{}{RESET} {}  {GREEN}{}{RESET}",
            pad_right(title, 16),
            bold(&pad_right(&value, 6)),
            trend
        );
    }
}

fn print_departments(stats: &[DepartmentStat]) {
    header("Departments");

    let mut table = Table::new(vec![
        Column::new("Department", 16),
        Column::new("Avg rating", 10),
        Column::new("Employees", 9),
        Column::new("Bookmarks", 9),
    ]);
    for d in stats {
        table.add_row(vec![
            d.department.to_string(),
            colorize_rating(d.avg_rating),
            d.employee_count.to_string(),
            d.bookmark_count.to_string(),
        ]);
    }
    print!("{}", table.render());
}

fn print_trends(trends: &[BookmarkTrend]) {
    header("Bookmark Trends");

    for t in trends {
        println!("  {}  {:>3} {GREEN}{}{RESET}", t.month, t.count, "█".repeat(t.count as usize));
    }
}
