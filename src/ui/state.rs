use crate::{config::AppConfig, controller::selection::Category};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Mood,
    Activity,
    TimeOfDay,
    Playlist,
}

impl Panel {
    const ORDER: [Panel; 4] = [Panel::Mood, Panel::Activity, Panel::TimeOfDay, Panel::Playlist];

    pub fn category(self) -> Option<Category> {
        match self {
            Panel::Mood => Some(Category::Mood),
            Panel::Activity => Some(Category::Activity),
            Panel::TimeOfDay => Some(Category::TimeOfDay),
            Panel::Playlist => None,
        }
    }

    pub fn from_category(category: Category) -> Self {
        match category {
            Category::Mood => Panel::Mood,
            Category::Activity => Panel::Activity,
            Category::TimeOfDay => Panel::TimeOfDay,
        }
    }

    fn position(self) -> usize {
        Self::ORDER.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// The choices offered for each category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub moods: Vec<String>,
    pub activities: Vec<String>,
    pub times_of_day: Vec<String>,
}

impl Options {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            moods: config.moods.clone(),
            activities: config.activities.clone(),
            times_of_day: config.times_of_day.clone(),
        }
    }

    pub fn for_category(&self, category: Category) -> &[String] {
        match category {
            Category::Mood => &self.moods,
            Category::Activity => &self.activities,
            Category::TimeOfDay => &self.times_of_day,
        }
    }
}

/// Focus and cursor positions; everything else lives in the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub focus: Panel,
    pub option_cursor: [usize; 3],
    pub track_cursor: usize,
}

impl UiState {
    pub fn cursor(&self, category: Category) -> usize {
        self.option_cursor[category_slot(category)]
    }

    pub fn move_cursor(&mut self, delta: isize, options: &Options, track_count: usize) {
        let (cursor, len) = match self.focus.category() {
            Some(category) => (
                &mut self.option_cursor[category_slot(category)],
                options.for_category(category).len(),
            ),
            None => (&mut self.track_cursor, track_count),
        };

        if len == 0 {
            *cursor = 0;
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub fn show_playlist(&mut self) {
        self.focus = Panel::Playlist;
        self.track_cursor = 0;
    }
}

fn category_slot(category: Category) -> usize {
    match category {
        Category::Mood => 0,
        Category::Activity => 1,
        Category::TimeOfDay => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_all_panels() {
        let mut panel = Panel::Mood;
        for _ in 0..4 {
            panel = panel.next();
        }
        assert_eq!(panel, Panel::Mood);
        assert_eq!(Panel::Mood.previous(), Panel::Playlist);
        assert_eq!(Panel::Playlist.category(), None);
    }

    #[test]
    fn cursor_is_clamped_to_the_focused_list() {
        let options = Options::from_config(&AppConfig::default());
        let mut state = UiState::default();

        state.move_cursor(-1, &options, 0);
        assert_eq!(state.cursor(Category::Mood), 0);
        state.move_cursor(10, &options, 0);
        assert_eq!(state.cursor(Category::Mood), options.moods.len() - 1);
        assert_eq!(state.cursor(Category::Activity), 0);

        state.focus = Panel::Playlist;
        state.move_cursor(1, &options, 0);
        assert_eq!(state.track_cursor, 0);
        state.move_cursor(3, &options, 2);
        assert_eq!(state.track_cursor, 1);
    }
}
