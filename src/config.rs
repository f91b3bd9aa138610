use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/80";

const DEFAULT_MOODS: &[&str] = &["happy", "sad", "energetic", "calm", "party"];
const DEFAULT_ACTIVITIES: &[&str] = &["workout", "study", "party", "sleep"];
const DEFAULT_TIMES: &[&str] = &["morning", "afternoon", "evening", "night"];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub placeholder_image: String,
    pub volume: u8,
    pub moods: Vec<String>,
    pub activities: Vec<String>,
    pub times_of_day: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            volume: 100,
            moods: to_owned(DEFAULT_MOODS),
            activities: to_owned(DEFAULT_ACTIVITIES),
            times_of_day: to_owned(DEFAULT_TIMES),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; unset or blank keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("MOODLIST_API_URL") {
            config.api_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(image) = get("MOODLIST_PLACEHOLDER_IMAGE") {
            config.placeholder_image = image.trim().to_string();
        }
        if let Some(volume) = get("MOODLIST_VOLUME") {
            match volume.trim().parse::<u8>() {
                Ok(v) => config.volume = v.min(100),
                Err(_) => tracing::warn!("Ignoring invalid MOODLIST_VOLUME '{}'", volume),
            }
        }
        if let Some(list) = get("MOODLIST_MOODS").and_then(|v| parse_list(&v)) {
            config.moods = list;
        }
        if let Some(list) = get("MOODLIST_ACTIVITIES").and_then(|v| parse_list(&v)) {
            config.activities = list;
        }
        if let Some(list) = get("MOODLIST_TIMES").and_then(|v| parse_list(&v)) {
            config.times_of_day = list;
        }

        config
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn parse_list(value: &str) -> Option<Vec<String>> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() { None } else { Some(items) }
}
