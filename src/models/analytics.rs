use super::department::Department;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentStat {
    pub department: Department,
    pub avg_rating: f64,
    pub employee_count: u32,
    pub bookmark_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkTrend {
    pub month: &'static str,
    pub count: u32,
}

/// Headline figures shown above the analytics charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub total_employees: u32,
    pub avg_rating: f64,
    pub total_bookmarks: usize,
    pub promotion_rate: u32,
}

impl StatsSummary {
    pub fn employees_trend(&self) -> &'static str {
        if self.total_employees > 50 {
            "+5% from last month"
        } else {
            "+2% from last month"
        }
    }

    pub fn rating_trend(&self) -> &'static str {
        if self.avg_rating > 3.5 {
            "+0.3 from last quarter"
        } else {
            "+0.1 from last quarter"
        }
    }

    pub fn bookmarks_trend(&self) -> &'static str {
        if self.total_bookmarks > 10 {
            "+15% from last month"
        } else {
            "+5% from last month"
        }
    }

    pub fn promotion_trend(&self) -> &'static str {
        if self.promotion_rate > 12 {
            "+2.5% from last year"
        } else {
            "+1.2% from last year"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub summary: StatsSummary,
    pub department_stats: Vec<DepartmentStat>,
    pub bookmark_trends: Vec<BookmarkTrend>,
}
