//! Enrichment: attaching synthetic HR attributes to raw person records.

use crate::models::department::Department;
use crate::models::employee::{Employee, HrProfile, RawPerson};
use crate::models::rating::round_rating;
use crate::utils::date;
use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::debug;

/// Candidate job titles handed out by enrichment.
pub const POSITIONS: [&str; 14] = [
    "Junior Developer",
    "Senior Developer",
    "Team Lead",
    "Project Manager",
    "Product Manager",
    "UX Designer",
    "UI Designer",
    "Marketing Specialist",
    "Sales Representative",
    "HR Coordinator",
    "Financial Analyst",
    "Customer Support Specialist",
    "Operations Manager",
    "Legal Counsel",
];

pub const MIN_SALARY: u32 = 50_000;
pub const MAX_SALARY: u32 = 150_000;

/// First possible join date.
pub fn join_window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Source of the five HR attributes attached to every person.
pub trait EnrichmentStrategy {
    fn department(&mut self) -> Department;
    /// Rating in [1.0, 5.0] with one decimal.
    fn rating(&mut self) -> f64;
    fn position(&mut self, person: &RawPerson) -> String;
    /// Salary in [50000, 150000).
    fn salary(&mut self) -> u32;
    fn join_date(&mut self) -> NaiveDate;

    fn profile(&mut self, person: &RawPerson) -> HrProfile {
        HrProfile {
            department: self.department(),
            rating: self.rating(),
            position: self.position(person),
            salary: self.salary(),
            join_date: self.join_date(),
        }
    }
}

/// Uniformly random attributes drawn from an explicit RNG.
pub struct RandomStrategy<R> {
    rng: R,
    today: NaiveDate,
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R, today: NaiveDate) -> Self {
        Self { rng, today }
    }
}

impl RandomStrategy<ThreadRng> {
    /// Thread-local RNG, anchored on the local calendar date.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng(), date::today())
    }
}

impl<R: Rng> EnrichmentStrategy for RandomStrategy<R> {
    fn department(&mut self) -> Department {
        Department::ALL[self.rng.gen_range(0..Department::ALL.len())]
    }

    fn rating(&mut self) -> f64 {
        random_rating(&mut self.rng)
    }

    // Positions are drawn independently of the person
    fn position(&mut self, _person: &RawPerson) -> String {
        POSITIONS[self.rng.gen_range(0..POSITIONS.len())].to_string()
    }

    fn salary(&mut self) -> u32 {
        self.rng.gen_range(MIN_SALARY..MAX_SALARY)
    }

    fn join_date(&mut self) -> NaiveDate {
        let start = join_window_start();
        let span = (self.today - start).num_days();
        if span <= 0 {
            return start;
        }
        start + Duration::days(self.rng.gen_range(0..=span))
    }
}

/// A rating in [1.0, 5.0], rounded to one decimal.
pub fn random_rating<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    round_rating(1.0 + rng.r#gen::<f64>() * 4.0)
}

/// Map raw records to employees, one profile per record, preserving order
/// and every original field.
pub fn enrich<S>(people: Vec<RawPerson>, strategy: &mut S) -> Vec<Employee>
where
    S: EnrichmentStrategy + ?Sized,
{
    let count = people.len();
    let employees: Vec<Employee> = people
        .into_iter()
        .map(|raw| {
            let hr = strategy.profile(&raw);
            Employee::from_parts(raw, hr)
        })
        .collect();

    debug!(count, "enriched employee records");
    employees
}

/// Enrich a single record, as the detail page does.
pub fn enrich_one<S>(person: RawPerson, strategy: &mut S) -> Employee
where
    S: EnrichmentStrategy + ?Sized,
{
    let hr = strategy.profile(&person);
    Employee::from_parts(person, hr)
}
