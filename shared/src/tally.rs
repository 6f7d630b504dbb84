use serde::{Deserialize, Serialize};
use crate::models::{VoteChoice, VoteRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentStats {
    pub likes: usize,
    pub dislikes: usize,
    pub total: usize,
}

impl DepartmentStats {
    fn record(&mut self, choice: VoteChoice) {
        match choice {
            VoteChoice::Like => self.likes += 1,
            VoteChoice::Dislike => self.dislikes += 1,
        }
        self.total += 1;
    }

    pub fn like_percent(&self) -> f64 {
        percent(self.likes, self.total)
    }

    pub fn dislike_percent(&self) -> f64 {
        percent(self.dislikes, self.total)
    }
}

/// Counts over every vote, including votes for departments that are not in
/// the current list.
pub type Totals = DepartmentStats;

pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

pub fn department_stats<'a>(
    department: &str,
    votes: impl IntoIterator<Item = &'a VoteRecord>,
) -> DepartmentStats {
    votes.into_iter()
        .filter(|v| v.department == department)
        .fold(DepartmentStats::default(), |mut stats, v| {
            stats.record(v.vote);
            stats
        })
}

/// Per-department stats in department-list order. Duplicated department
/// names yield duplicated rows with identical counts.
pub fn tally(departments: &[String], votes: &[VoteRecord]) -> Vec<(String, DepartmentStats)> {
    departments.iter()
        .map(|dept| (dept.clone(), department_stats(dept, votes)))
        .collect()
}

pub fn totals(votes: &[VoteRecord]) -> Totals {
    votes.iter().fold(Totals::default(), |mut totals, v| {
        totals.record(v.vote);
        totals
    })
}
