use chrono::NaiveDate;
use hrdash::core::enrich::RandomStrategy;
use hrdash::core::query::{EmployeeFilter, EmployeeQuery, QueryState};
use hrdash::errors::{AppError, AppResult};
use hrdash::models::department::Department;
use hrdash::models::employee::{Employee, RawPerson, UsersPage};
use hrdash::source::file::FileSource;
use hrdash::source::{EmployeeSource, LIST_FAILURE};
use rand::SeedableRng;
use rand::rngs::StdRng;

mod common;
use common::{USERS_JSON, employee, users_file};

fn staff() -> Vec<Employee> {
    vec![
        employee(1, "Alice", "Stone", Department::Engineering, 4.6),
        employee(2, "Bob", "Marsh", Department::Sales, 3.5),
        employee(3, "Carol", "Engel", Department::Marketing, 3.4),
        employee(4, "Dan", "Reed", Department::Engineering, 1.4),
        employee(5, "Erin", "Hale", Department::CustomerSupport, 2.5),
    ]
}

fn ids(employees: &[Employee]) -> Vec<u32> {
    employees.iter().map(|e| e.id).collect()
}

fn strategy() -> RandomStrategy<StdRng> {
    RandomStrategy::new(
        StdRng::seed_from_u64(7),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
}

struct StaticSource(Vec<RawPerson>);

impl EmployeeSource for StaticSource {
    fn fetch_page(&self, limit: usize) -> AppResult<Vec<RawPerson>> {
        Ok(self.0.iter().take(limit).cloned().collect())
    }

    fn fetch_by_id(&self, id: u32) -> AppResult<RawPerson> {
        self.0
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(AppError::EmployeeNotFound(id))
    }
}

struct FailingSource;

impl EmployeeSource for FailingSource {
    fn fetch_page(&self, _limit: usize) -> AppResult<Vec<RawPerson>> {
        Err(AppError::Fetch(LIST_FAILURE.to_string()))
    }

    fn fetch_by_id(&self, _id: u32) -> AppResult<RawPerson> {
        Err(AppError::Fetch(LIST_FAILURE.to_string()))
    }
}

fn fixture_source() -> StaticSource {
    StaticSource(serde_json::from_str::<UsersPage>(USERS_JSON).unwrap().users)
}

#[test]
fn test_empty_filter_matches_everything() {
    let filter = EmployeeFilter::default();
    assert!(!filter.is_active());
    assert_eq!(filter.apply(&staff()), staff());
}

#[test]
fn test_search_matches_names_email_and_department() {
    let all = staff();
    let filter = EmployeeFilter {
        search_term: "eng".to_string(),
        ..Default::default()
    };

    // Alice and Dan through "Engineering", Carol through "Engel"
    assert_eq!(ids(&filter.apply(&all)), vec![1, 3, 4]);
}

#[test]
fn test_search_is_case_insensitive() {
    let filter = EmployeeFilter {
        search_term: "ALICE".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&filter.apply(&staff())), vec![1]);

    let filter = EmployeeFilter {
        search_term: "customer sup".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&filter.apply(&staff())), vec![5]);
}

#[test]
fn test_search_on_email() {
    let filter = EmployeeFilter {
        search_term: "bob.marsh@".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&filter.apply(&staff())), vec![2]);
}

#[test]
fn test_department_filter() {
    let filter = EmployeeFilter {
        departments: vec![Department::Engineering, Department::Sales],
        ..Default::default()
    };
    assert_eq!(ids(&filter.apply(&staff())), vec![1, 2, 4]);
}

#[test]
fn test_rating_filter_rounds_to_whole_stars() {
    let all = staff();

    let five = EmployeeFilter {
        ratings: vec![5],
        ..Default::default()
    };
    assert_eq!(ids(&five.apply(&all)), vec![1]);

    // 3.5 rounds up, 3.4 rounds down
    let four = EmployeeFilter {
        ratings: vec![4],
        ..Default::default()
    };
    assert_eq!(ids(&four.apply(&all)), vec![2]);

    let three = EmployeeFilter {
        ratings: vec![3],
        ..Default::default()
    };
    assert_eq!(ids(&three.apply(&all)), vec![3, 5]);

    let one = EmployeeFilter {
        ratings: vec![1],
        ..Default::default()
    };
    assert_eq!(ids(&one.apply(&all)), vec![4]);
}

#[test]
fn test_filters_are_intersected() {
    let filter = EmployeeFilter {
        search_term: "eng".to_string(),
        departments: vec![Department::Engineering],
        ratings: vec![5],
    };
    assert_eq!(ids(&filter.apply(&staff())), vec![1]);
}

#[test]
fn test_result_is_ordered_subset() {
    let all = staff();
    let filters = [
        EmployeeFilter {
            search_term: "a".to_string(),
            ..Default::default()
        },
        EmployeeFilter {
            departments: vec![Department::Marketing, Department::Engineering],
            ..Default::default()
        },
        EmployeeFilter {
            ratings: vec![2, 3, 4],
            ..Default::default()
        },
        EmployeeFilter {
            search_term: "nobody".to_string(),
            ..Default::default()
        },
    ];

    for filter in filters {
        let result = filter.apply(&all);
        let positions: Vec<usize> = result
            .iter()
            .map(|e| all.iter().position(|a| a.id == e.id).unwrap())
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(result.iter().all(|e| filter.matches(e)));
        assert_eq!(
            result.len(),
            all.iter().filter(|e| filter.matches(e)).count()
        );
    }
}

#[test]
fn test_query_starts_loading() {
    let query = EmployeeQuery::new(20);
    assert!(query.is_loading());
    assert!(query.employees().is_empty());
    assert_eq!(query.error(), None);
}

#[test]
fn test_query_load_success() {
    let mut query = EmployeeQuery::new(20);
    let state = query.load(&fixture_source(), &mut strategy());

    assert_eq!(*state, QueryState::Ready);
    assert_eq!(ids(query.all_employees()), vec![1, 2, 7]);
    assert_eq!(query.employees(), query.all_employees());
}

#[test]
fn test_query_respects_page_size() {
    let mut query = EmployeeQuery::new(2);
    query.load(&fixture_source(), &mut strategy());
    assert_eq!(ids(query.all_employees()), vec![1, 2]);
}

#[test]
fn test_query_load_failure() {
    let mut query = EmployeeQuery::new(20);
    query.load(&FailingSource, &mut strategy());

    assert!(!query.is_loading());
    assert_eq!(query.error(), Some(LIST_FAILURE));
    assert!(query.employees().is_empty());
}

#[test]
fn test_query_filters_recompute_from_full_list() {
    let mut query = EmployeeQuery::new(20);
    query.load(&fixture_source(), &mut strategy());

    query.set_search_term("emily");
    assert_eq!(ids(query.employees()), vec![1]);

    // widening the search must bring the others back
    query.set_search_term("");
    assert_eq!(ids(query.employees()), vec![1, 2, 7]);

    query.set_search_term("williams");
    assert_eq!(ids(query.employees()), vec![2]);
    assert_eq!(query.all_employees().len(), 3);
}

#[test]
fn test_query_filter_set_before_load_applies() {
    let mut query = EmployeeQuery::new(20);
    query.set_search_term("ann.lee");
    query.load(&fixture_source(), &mut strategy());

    assert_eq!(ids(query.employees()), vec![7]);
}

#[test]
fn test_query_toggle_and_clear() {
    let mut query = EmployeeQuery::new(20);
    query.load(&fixture_source(), &mut strategy());

    query.toggle_rating(1);
    query.toggle_rating(2);
    query.toggle_rating(1);
    assert_eq!(query.filter().ratings, vec![2]);

    query.toggle_department(Department::Legal);
    query.toggle_department(Department::Legal);
    assert!(query.filter().departments.is_empty());

    // every rounded rating is 1..=5
    query.set_selected_ratings(vec![1, 2, 3, 4, 5]);
    assert_eq!(query.employees().len(), 3);

    query.set_selected_departments(vec![Department::Hr]);
    query.set_search_term("x");
    query.clear_filters();
    assert!(!query.filter().is_active());
    assert_eq!(query.employees().len(), 3);
}

#[test]
fn test_file_source() {
    let path = users_file("file_source");
    let source = FileSource::new(&path);

    assert_eq!(source.fetch_page(2).unwrap().len(), 2);
    assert_eq!(source.fetch_by_id(7).unwrap().first_name, "Ann");
    assert!(matches!(
        source.fetch_by_id(99),
        Err(AppError::EmployeeNotFound(99))
    ));
}

#[test]
fn test_file_source_missing_file() {
    let source = FileSource::new("/nonexistent/hrdash/users.json");
    let err = source.fetch_page(10).unwrap_err();
    assert!(err.to_string().starts_with(LIST_FAILURE));
}
