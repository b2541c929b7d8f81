use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::actions::ActionLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::department::Department;
use crate::models::employee::{Address, NewEmployee};
use crate::ui::messages::ConsoleNotifier;
use crate::utils::colors::{GREY, RESET};
use crate::utils::date;
use crate::utils::time::delay_from_millis;

/// Simulated creation: validated, acknowledged, never stored.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::AddEmployee {
        first_name,
        last_name,
        email,
        phone,
        department,
        position,
        salary,
        start_date,
        address,
        city,
        state,
        zip_code,
    } = cmd
    {
        let form = NewEmployee {
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            email: email.clone(),
            phone: phone.clone(),
            department: Department::parse(department)?,
            position: position.clone(),
            salary: *salary,
            start_date: date::parse_date(start_date)
                .ok_or_else(|| AppError::InvalidDate(start_date.clone()))?,
            address: Address {
                address: address.clone(),
                city: city.clone(),
                state: state.clone(),
                postal_code: zip_code.clone(),
            },
        };

        let pool = DbPool::new(&cfg.database)?;
        let mut notifier = ConsoleNotifier::audited(&pool.conn, "add_employee");

        println!("{GREY}Adding...{RESET}");
        ActionLogic::add_employee(&form, delay_from_millis(cfg.simulated_delay_ms), &mut notifier)?;
    }
    Ok(())
}
