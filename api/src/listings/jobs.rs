use crate::models::{ExperienceLevel, Job, JobType, WorkLocation};
use crate::query::params::{comma_list, lenient};
use crate::query::predicate::{any_of, at_least, text_search};
use crate::query::{Comparator, ListQuery, PredicateSet};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// GET /jobs?search=&job_types=&work_locations=&experience_levels=&salary_min=&companies=
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFilters {
    pub search: String,
    #[serde(deserialize_with = "comma_list")]
    pub job_types: Vec<JobType>,
    #[serde(deserialize_with = "comma_list")]
    pub work_locations: Vec<WorkLocation>,
    #[serde(deserialize_with = "comma_list")]
    pub experience_levels: Vec<ExperienceLevel>,
    /// Compared against the bottom of the advertised range.
    #[serde(deserialize_with = "lenient")]
    pub salary_min: Option<u32>,
    #[serde(deserialize_with = "comma_list")]
    pub companies: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobSort {
    #[default]
    Recent,
    SalaryHigh,
    SalaryLow,
    /// Featured first, then urgent, then newest.
    Relevance,
}

fn salary_min(job: &Job) -> Option<u32> {
    job.salary.as_ref().map(|s| s.min)
}

fn salary_max(job: &Job) -> Option<u32> {
    job.salary.as_ref().map(|s| s.max)
}

impl Comparator<Job> for JobSort {
    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        match self {
            JobSort::Recent => b.posted_at.cmp(&a.posted_at),
            JobSort::SalaryHigh => salary_max(b).unwrap_or(0).cmp(&salary_max(a).unwrap_or(0)),
            JobSort::SalaryLow => salary_min(a).unwrap_or(0).cmp(&salary_min(b).unwrap_or(0)),
            JobSort::Relevance => b
                .is_featured
                .cmp(&a.is_featured)
                .then(b.is_urgent.cmp(&a.is_urgent))
                .then(b.posted_at.cmp(&a.posted_at)),
        }
    }
}

impl ListQuery for JobFilters {
    type Record = Job;
    type Sort = JobSort;

    fn predicates(&self) -> PredicateSet<'_, Job> {
        PredicateSet::new()
            .and_maybe(text_search(&self.search))
            .and_maybe(any_of(&self.job_types, |j: &Job| &j.job_type))
            .and_maybe(any_of(&self.work_locations, |j: &Job| &j.work_location))
            .and_maybe(any_of(&self.experience_levels, |j: &Job| &j.experience_level))
            .and_maybe(at_least(self.salary_min, salary_min))
            .and_maybe(any_of(&self.companies, |j: &Job| &j.company))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RecordStore;
    use crate::models::{JobSalary, SalaryPeriod};
    use crate::query::ListView;
    use chrono::{TimeZone, Utc};

    fn job(id: &str, salary: Option<u32>) -> Job {
        Job {
            id: id.to_string(),
            title: format!("Role {id}"),
            company: "Acme".into(),
            company_logo: None,
            location: "Remote".into(),
            work_location: WorkLocation::Remote,
            salary: salary.map(|amount| JobSalary {
                min: amount,
                max: amount,
                currency: "USD".into(),
                period: SalaryPeriod::Yearly,
            }),
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Mid,
            description: String::new(),
            responsibilities: vec![],
            requirements: vec![],
            benefits: vec![],
            tags: vec![],
            posted_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            expires_at: None,
            application_url: None,
            is_urgent: false,
            is_featured: false,
        }
    }

    fn salaries(results: &[&Job]) -> Vec<u32> {
        results.iter().filter_map(|j| salary_min(j)).collect()
    }

    #[test]
    fn test_salary_threshold_and_salary_sorts() {
        let jobs = vec![job("a", Some(40_000)), job("b", Some(60_000)), job("c", Some(80_000))];
        let mut view: ListView<JobFilters> = ListView::new(&jobs);
        view.update(|f| f.salary_min = Some(60_000));
        assert_eq!(salaries(&view.results()), vec![60_000, 80_000]);

        view.set_sort(JobSort::SalaryLow);
        assert_eq!(salaries(&view.results()), vec![60_000, 80_000]);

        view.set_sort(JobSort::SalaryHigh);
        assert_eq!(salaries(&view.results()), vec![80_000, 60_000]);
    }

    #[test]
    fn test_threshold_excludes_jobs_without_salary() {
        let jobs = vec![job("a", None), job("b", Some(10))];
        let view: ListView<JobFilters> = ListView::new(&jobs).with_filters(JobFilters {
            salary_min: Some(0),
            ..Default::default()
        });
        assert_eq!(view.results().len(), 1);
        assert_eq!(view.results()[0].id, "b");
    }

    #[test]
    fn test_missing_salary_sorts_as_zero() {
        let jobs = vec![job("a", None), job("b", Some(10)), job("c", Some(5))];
        let view: ListView<JobFilters> = ListView::new(&jobs).with_sort(JobSort::SalaryLow);
        let order: Vec<&str> = view.results().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(order, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_relevance_puts_featured_then_urgent_first() {
        let store = RecordStore::load_seed().unwrap();
        let view: ListView<JobFilters> = ListView::new(&store.jobs).with_sort(JobSort::Relevance);
        let order: Vec<&str> = view.results().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(
            order,
            vec!["job-1", "job-6", "job-2", "job-8", "job-5", "job-3", "job-4", "job-7"]
        );
    }

    #[test]
    fn test_company_and_type_filters() {
        let store = RecordStore::load_seed().unwrap();
        let mut view: ListView<JobFilters> = ListView::new(&store.jobs);
        view.update(|f| f.companies = vec!["Pipeline Labs".into()]);
        let order: Vec<&str> = view.results().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(order, vec!["job-5", "job-2"]);

        view.update(|f| f.experience_levels = vec![ExperienceLevel::Entry]);
        assert_eq!(view.count(), 1);
    }

    #[test]
    fn test_clear_filters_returns_to_recent_order() {
        let store = RecordStore::load_seed().unwrap();
        let default_order: Vec<&str> = ListView::<JobFilters>::new(&store.jobs)
            .results()
            .iter()
            .map(|j| j.id.as_str())
            .collect();

        let mut view: ListView<JobFilters> = ListView::new(&store.jobs);
        view.set_sort(JobSort::SalaryHigh);
        view.update(|f| f.search = "sales".into());
        view.clear_filters();

        let order: Vec<&str> = view.results().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(view.sort(), JobSort::Recent);
        assert_eq!(order, default_order);
        assert_eq!(&order[..4], &["job-1", "job-5", "job-2", "job-8"]);
    }
}
