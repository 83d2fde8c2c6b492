//! Projects and their per-project day ranges

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::range::DayRange;
use super::{ProjectId, UserId};

/// A project owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub owner_id: UserId,
    pub date_created: DateTime<Utc>,
}

/// Parameters for creating a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub owner_id: UserId,
    pub title: String,
}

/// Merged day ranges keyed by project.
///
/// Serializes as a JSON object whose keys are project ids, e.g.
/// `{"1": [["2024-01-01T00:00:00.000Z", "2024-01-03T00:00:00.000Z"]]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectDayRanges(BTreeMap<ProjectId, Vec<DayRange>>);

impl ProjectDayRanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, project_id: ProjectId, ranges: Vec<DayRange>) {
        self.0.insert(project_id, ranges);
    }

    pub fn get(&self, project_id: ProjectId) -> Option<&[DayRange]> {
        self.0.get(&project_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProjectId, &[DayRange])> {
        self.0.iter().map(|(id, ranges)| (*id, ranges.as_slice()))
    }
}

impl FromIterator<(ProjectId, Vec<DayRange>)> for ProjectDayRanges {
    fn from_iter<I: IntoIterator<Item = (ProjectId, Vec<DayRange>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
