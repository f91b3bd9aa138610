use std::fmt;

use crate::http::models::GenerateRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Mood,
    Activity,
    TimeOfDay,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Mood, Category::Activity, Category::TimeOfDay];

    pub fn label(self) -> &'static str {
        match self {
            Category::Mood => "Mood",
            Category::Activity => "Activity",
            Category::TimeOfDay => "Time of day",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One active choice per category. Values are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub mood: Option<String>,
    pub activity: Option<String>,
    pub time_of_day: Option<String>,
}

impl Selection {
    pub fn set(&mut self, category: Category, value: impl Into<String>) {
        *self.slot_mut(category) = Some(value.into());
    }

    pub fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Mood => self.mood.as_deref(),
            Category::Activity => self.activity.as_deref(),
            Category::TimeOfDay => self.time_of_day.as_deref(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.mood.is_some() && self.activity.is_some() && self.time_of_day.is_some()
    }

    /// Request payload for the current selection. Missing categories are sent
    /// as empty strings; callers gate on [`Selection::is_complete`].
    pub fn to_request(&self) -> GenerateRequest {
        GenerateRequest {
            mood: self.mood.clone().unwrap_or_default(),
            activity: self.activity.clone().unwrap_or_default(),
            time_of_day: self.time_of_day.clone().unwrap_or_default(),
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<String> {
        match category {
            Category::Mood => &mut self.mood,
            Category::Activity => &mut self.activity,
            Category::TimeOfDay => &mut self.time_of_day,
        }
    }
}
