//! Actions that only acknowledge the user: nothing is stored anywhere.

use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, NewEmployee};
use crate::models::notification::{Notification, Notifier};
use crate::utils::time::simulate_latency;
use std::time::Duration;
use tracing::info;

pub struct ActionLogic;

impl ActionLogic {
    /// Validate the form, wait out the simulated request and confirm.
    pub fn add_employee<N: Notifier + ?Sized>(
        form: &NewEmployee,
        delay: Duration,
        notifier: &mut N,
    ) -> AppResult<()> {
        if let Err(e) = Self::validate(form) {
            notifier.notify(Notification::destructive(
                "Error adding employee",
                "There was a problem adding the employee. Please try again.",
            ));
            return Err(e);
        }

        simulate_latency(delay);
        info!(
            first_name = %form.first_name,
            last_name = %form.last_name,
            department = %form.department,
            "simulated employee creation"
        );

        notifier.notify(Notification::success(
            "Employee added successfully",
            "The new employee has been added to the system.",
        ));
        Ok(())
    }

    pub fn promote<N: Notifier + ?Sized>(employee: &Employee, notifier: &mut N) {
        info!(id = employee.id, "simulated promotion");
        notifier.notify(Notification::success(
            "Employee promoted",
            format!("{} has been promoted.", employee.full_name()),
        ));
    }

    pub fn validate(form: &NewEmployee) -> AppResult<()> {
        let required = [
            ("first name", &form.first_name),
            ("last name", &form.last_name),
            ("email", &form.email),
            ("phone", &form.phone),
            ("position", &form.position),
            ("address", &form.address.address),
            ("city", &form.address.city),
            ("state", &form.address.state),
            ("ZIP code", &form.address.postal_code),
        ];

        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::InvalidEmployee(format!("{label} is required")));
            }
        }

        let email = form.email.trim();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.'),
            None => false,
        };
        if !valid_email {
            return Err(AppError::InvalidEmployee(format!(
                "'{}' is not a valid email address",
                form.email
            )));
        }

        if form.salary == 0 {
            return Err(AppError::InvalidEmployee(
                "salary must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}
