//! Mock data shown next to real employees: reviews, projects, feedback and
//! the analytics aggregates. Nothing here is derived from real records.

use super::enrich::random_rating;
use crate::models::analytics::{BookmarkTrend, DepartmentStat, StatsSummary};
use crate::models::department::Department;
use crate::models::insights::{Feedback, PerformanceReview, Priority, Project, ProjectStatus};
use crate::models::rating::round_rating;
use crate::utils::date;
use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use rand::rngs::ThreadRng;

pub const DEFAULT_COUNT: usize = 5;

pub const REVIEWERS: [&str; 10] = [
    "John Smith",
    "Emily Johnson",
    "Michael Williams",
    "Sarah Brown",
    "David Jones",
    "Jessica Miller",
    "Robert Davis",
    "Jennifer Garcia",
    "William Rodriguez",
    "Lisa Martinez",
];

pub const REVIEW_SUMMARIES: [&str; 10] = [
    "Consistently meets expectations",
    "Exceeds expectations in most areas",
    "Shows great potential but needs guidance",
    "Strong performer with leadership qualities",
    "Needs improvement in communication",
    "Outstanding technical skills",
    "Great team player",
    "Innovative problem solver",
    "Excellent client management skills",
    "Requires more training in core competencies",
];

pub const PROJECT_NAMES: [&str; 15] = [
    "Website Redesign",
    "Mobile App Development",
    "CRM Implementation",
    "Marketing Campaign",
    "Product Launch",
    "Data Migration",
    "Security Audit",
    "Performance Optimization",
    "Content Creation",
    "Customer Research",
    "Training Program",
    "Process Improvement",
    "Inventory Management",
    "Financial Reporting",
    "Compliance Review",
];

pub const PROJECT_DESCRIPTIONS: [&str; 15] = [
    "Redesigning the company website to improve user experience and conversion rates.",
    "Developing a new mobile application for customers to access our services on-the-go.",
    "Implementing a customer relationship management system to better track and manage client interactions.",
    "Planning and executing a marketing campaign for our new product line.",
    "Coordinating the launch of our latest product, including marketing, sales, and customer support preparation.",
    "Migrating data from legacy systems to our new platform.",
    "Conducting a comprehensive security audit of our IT infrastructure.",
    "Optimizing application performance to improve response times and reduce server load.",
    "Creating engaging content for our blog, social media, and marketing materials.",
    "Researching customer needs and preferences to inform product development.",
    "Developing and delivering a training program for new employees.",
    "Identifying and implementing improvements to our internal processes.",
    "Upgrading our inventory management system to improve accuracy and efficiency.",
    "Preparing financial reports for the upcoming board meeting.",
    "Reviewing and ensuring compliance with industry regulations and standards.",
];

pub const FEEDBACK_COMMENTS: [&str; 15] = [
    "Great team player who always helps others.",
    "Shows excellent attention to detail in all work.",
    "Communication skills need improvement.",
    "Consistently delivers projects ahead of schedule.",
    "Demonstrates strong leadership qualities.",
    "Technical skills are outstanding.",
    "Could improve time management.",
    "Creative problem solver who finds innovative solutions.",
    "Excellent client management skills.",
    "Needs to take more initiative on projects.",
    "Always willing to learn new skills and technologies.",
    "Positive attitude that motivates the team.",
    "Documentation could be more thorough.",
    "Adaptable and flexible when priorities change.",
    "Great mentor to junior team members.",
];

pub const FEEDBACK_CATEGORIES: [&str; 10] = [
    "Performance",
    "Communication",
    "Technical Skills",
    "Leadership",
    "Teamwork",
    "Time Management",
    "Problem Solving",
    "Client Relations",
    "Innovation",
    "Adaptability",
];

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Days ahead a project may be due.
const PROJECT_HORIZON_DAYS: i64 = 180;
/// Days back a feedback entry may date from.
const FEEDBACK_WINDOW_DAYS: i64 = 365;

/// Synthetic record generator driven by an explicit RNG and calendar date.
pub struct Generators<R> {
    rng: R,
    today: NaiveDate,
}

impl Generators<ThreadRng> {
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng(), date::today())
    }
}

impl<R: Rng> Generators<R> {
    pub fn new(rng: R, today: NaiveDate) -> Self {
        Self { rng, today }
    }

    fn pick<T: Copy>(&mut self, pool: &[T]) -> T {
        pool[self.rng.gen_range(0..pool.len())]
    }

    /// One review per year going back from the current year, newest first.
    pub fn performance_history(&mut self, count: usize) -> Vec<PerformanceReview> {
        let current_year = self.today.year();

        let mut history: Vec<PerformanceReview> = (0..count)
            .map(|i| {
                let year = current_year - i as i32;
                let month = self.rng.gen_range(1..=12);
                let day = self.rng.gen_range(1..=28);
                let date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(self.today);

                PerformanceReview {
                    date,
                    rating: random_rating(&mut self.rng),
                    summary: self.pick(&REVIEW_SUMMARIES).to_string(),
                    reviewer: self.pick(&REVIEWERS).to_string(),
                }
            })
            .collect();

        history.sort_by(|a, b| b.date.cmp(&a.date));
        history
    }

    /// Projects numbered from 1, due within the next 180 days.
    pub fn projects(&mut self, count: usize) -> Vec<Project> {
        (0..count)
            .map(|i| {
                let due_in = self.rng.gen_range(0..PROJECT_HORIZON_DAYS);
                Project {
                    id: i as u32 + 1,
                    name: self.pick(&PROJECT_NAMES).to_string(),
                    description: self.pick(&PROJECT_DESCRIPTIONS).to_string(),
                    status: self.pick(&ProjectStatus::ALL),
                    due_date: self.today + Duration::days(due_in),
                    priority: self.pick(&Priority::ALL),
                }
            })
            .collect()
    }

    /// Feedback from the past year, newest first.
    pub fn feedback(&mut self, count: usize) -> Vec<Feedback> {
        let mut feedback: Vec<Feedback> = (0..count)
            .map(|i| {
                let days_ago = self.rng.gen_range(0..FEEDBACK_WINDOW_DAYS);
                Feedback {
                    id: i as u32 + 1,
                    date: self.today - Duration::days(days_ago),
                    reviewer: self.pick(&REVIEWERS).to_string(),
                    rating: random_rating(&mut self.rng),
                    comment: self.pick(&FEEDBACK_COMMENTS).to_string(),
                    category: self.pick(&FEEDBACK_CATEGORIES).to_string(),
                }
            })
            .collect();

        feedback.sort_by(|a, b| b.date.cmp(&a.date));
        feedback
    }

    /// One entry per department, in department order.
    pub fn department_stats(&mut self) -> Vec<DepartmentStat> {
        Department::ALL
            .iter()
            .map(|&department| DepartmentStat {
                department,
                avg_rating: round_rating(2.0 + self.rng.r#gen::<f64>() * 3.0),
                employee_count: self.rng.gen_range(5..25),
                bookmark_count: self.rng.gen_range(0..15),
            })
            .collect()
    }

    /// One entry per calendar month, January first.
    pub fn bookmark_trends(&mut self) -> Vec<BookmarkTrend> {
        MONTHS
            .iter()
            .map(|&month| BookmarkTrend {
                month,
                count: self.rng.gen_range(5..30),
            })
            .collect()
    }

    /// Headline cards. Only the bookmark total is real.
    pub fn summary(&mut self, total_bookmarks: usize) -> StatsSummary {
        StatsSummary {
            total_employees: self.rng.gen_range(80..120),
            avg_rating: 3.7 + self.rng.r#gen::<f64>() * 0.8,
            total_bookmarks,
            promotion_rate: self.rng.gen_range(10..18),
        }
    }
}
