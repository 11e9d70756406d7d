//! Patient diary entries

use crate::entities::audit_ranges;
use crate::query::{Comparison, FilterCriteria, PageRequest, PredicateSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the patient felt when writing the entry, worst first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Awful,
    Bad,
    Neutral,
    Good,
    Great,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diary {
    pub id: Uuid,
    pub owner: Uuid,
    pub mood: Mood,
    pub title: String,
    pub content: String,
    /// When the entry was written
    pub time: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

crate::impl_entity!(Diary, "diary", owned);

crate::sort_keys! {
    /// Sort keys for diary entries; `Time` is the default
    pub enum DiarySortKey {
        Time,
        Mood,
        Title,
        Created,
        LastModified,
    }
}

crate::impl_sortable!(Diary, DiarySortKey, {
    Time => |d| d.time.into(),
    Mood => |d| (d.mood as i64).into(),
    Title => |d| (&d.title).into(),
    Created => |d| d.created.into(),
    LastModified => |d| d.last_modified.into(),
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryFilter {
    pub id: Option<Uuid>,
    pub owner: Option<Uuid>,
    pub mood: Option<Mood>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub min_time: Option<DateTime<Utc>>,
    pub max_time: Option<DateTime<Utc>>,
    pub min_created: Option<DateTime<Utc>>,
    pub max_created: Option<DateTime<Utc>>,
    pub min_last_modified: Option<DateTime<Utc>>,
    pub max_last_modified: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub request: PageRequest<DiarySortKey>,
}

impl FilterCriteria<Diary> for DiaryFilter {
    fn predicates(&self, set: &mut PredicateSet<'_, Diary>) {
        set.equal("id", self.id, |d| d.id)
            .equal("owner", self.owner, |d| d.owner)
            .equal("mood", self.mood, |d| d.mood)
            .text("title", self.title.as_deref(), Comparison::Contains, |d| {
                Some(d.title.as_str())
            })
            .text("content", self.content.as_deref(), Comparison::Contains, |d| {
                Some(d.content.as_str())
            })
            .range("time", self.min_time, self.max_time, |d| d.time);
        audit_ranges(
            set,
            (self.min_created, self.max_created),
            (self.min_last_modified, self.max_last_modified),
        );
    }

    fn page_request(&self) -> &PageRequest<DiarySortKey> {
        &self.request
    }
}
