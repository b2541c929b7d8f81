use super::generators::Generators;
use crate::models::analytics::AnalyticsReport;
use crate::utils::time::simulate_latency;
use rand::Rng;
use std::time::Duration;
use tracing::debug;

pub struct AnalyticsLogic;

impl AnalyticsLogic {
    /// Build the analytics page after the simulated loading delay. The
    /// department stats and trends are regenerated on every call; only
    /// `total_bookmarks` comes from real data.
    pub fn load<R: Rng>(
        generators: &mut Generators<R>,
        total_bookmarks: usize,
        delay: Duration,
    ) -> AnalyticsReport {
        simulate_latency(delay);

        let report = AnalyticsReport {
            summary: generators.summary(total_bookmarks),
            department_stats: generators.department_stats(),
            bookmark_trends: generators.bookmark_trends(),
        };

        debug!(
            departments = report.department_stats.len(),
            months = report.bookmark_trends.len(),
            "analytics generated"
        );
        report
    }
}
