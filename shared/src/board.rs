use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::models::{default_departments, VoteRecord};
use crate::tally::{self, DepartmentStats, Totals};

/// The department list and the vote list as last seen from the server.
/// Both lists are only ever replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    departments: Vec<String>,
    votes: Vec<VoteRecord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(default_departments())
    }
}

impl Board {
    pub fn new(departments: Vec<String>) -> Self {
        Self {
            departments,
            votes: Vec::new(),
        }
    }

    pub fn departments(&self) -> &[String] { &self.departments }

    pub fn votes(&self) -> &[VoteRecord] { &self.votes }

    pub fn total_votes(&self) -> usize { self.votes.len() }

    pub fn replace_votes(&mut self, votes: Vec<VoteRecord>) {
        debug!("replacing {} votes with {}", self.votes.len(), votes.len());
        self.votes = votes;
    }

    pub fn replace_departments(&mut self, departments: Vec<String>) {
        self.departments = departments;
    }

    pub fn clear_votes(&mut self) {
        self.votes.clear();
    }

    pub fn stats(&self) -> Vec<(String, DepartmentStats)> {
        tally::tally(&self.departments, &self.votes)
    }

    pub fn stats_for(&self, department: &str) -> DepartmentStats {
        tally::department_stats(department, &self.votes)
    }

    pub fn totals(&self) -> Totals {
        tally::totals(&self.votes)
    }
}
