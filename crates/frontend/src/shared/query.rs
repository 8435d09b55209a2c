//! Widget options passed in the page query string
//!
//! `?analytics=false` turns delivery off, `?endpoint=<url>` sends records
//! somewhere other than the serving host.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetQuery {
    pub analytics: bool,
    pub endpoint: Option<String>,
}

impl Default for WidgetQuery {
    fn default() -> Self {
        Self {
            analytics: true,
            endpoint: None,
        }
    }
}

impl WidgetQuery {
    /// Malformed query strings fall back to the defaults
    pub fn parse(search: &str) -> Self {
        let search = search.trim_start_matches('?');
        if search.is_empty() {
            return Self::default();
        }
        match serde_qs::from_str::<WidgetQuery>(search) {
            Ok(query) => query,
            Err(e) => {
                log::warn!("ignoring widget query {:?}: {}", search, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(WidgetQuery::parse(""), WidgetQuery::default());
        assert!(!WidgetQuery::parse("?analytics=false").analytics);
        assert_eq!(
            WidgetQuery::parse("endpoint=https%3A%2F%2Fstats.example.com%2Ftrack"),
            WidgetQuery {
                analytics: true,
                endpoint: Some("https://stats.example.com/track".to_string()),
            }
        );
        assert_eq!(WidgetQuery::parse("analytics=maybe"), WidgetQuery::default());
    }
}
