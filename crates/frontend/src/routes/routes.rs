use crate::domain::a001_estimator::ui::widget::{EstimatorWidget, HttpAnalytics};
use crate::shared::query::WidgetQuery;
use contracts::domain::a001_pricing::WidgetVariant;
use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

/// What a page path renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetPage {
    pub variant: WidgetVariant,
    /// Compact layout for the iframe snippet
    pub embedded: bool,
}

impl WidgetPage {
    /// Unknown paths fall back to the combined widget. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        let (variant, embedded) = match path.trim_end_matches('/') {
            "/embed" => (WidgetVariant::Combined, true),
            "/gh-msft" => (WidgetVariant::GithubInternal, false),
            "/extpar" => (WidgetVariant::ExternalPartner, false),
            _ => (WidgetVariant::Combined, false),
        };
        Self { variant, embedded }
    }
}

#[component]
fn PageFromLocation() -> impl IntoView {
    let location = use_location();
    let page = Memo::new(move |_| WidgetPage::from_path(&location.pathname.get()));
    let query = Memo::new(move |_| WidgetQuery::parse(&location.search.get()));

    move || {
        let page = page.get();
        let analytics = HttpAnalytics::from_query(&query.get());
        log::debug!("rendering {} widget (embedded: {})", page.variant, page.embedded);
        view! {
            <EstimatorWidget
                variant=page.variant
                embedded=page.embedded
                analytics=analytics
            />
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <PageFromLocation />
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            WidgetPage::from_path("/"),
            WidgetPage { variant: WidgetVariant::Combined, embedded: false }
        );
        assert_eq!(WidgetPage::from_path("/combined/").variant, WidgetVariant::Combined);
        assert!(WidgetPage::from_path("/embed/").embedded);
        assert_eq!(WidgetPage::from_path("/gh-msft").variant, WidgetVariant::GithubInternal);
        assert_eq!(WidgetPage::from_path("/extpar/").variant, WidgetVariant::ExternalPartner);
        assert_eq!(WidgetPage::from_path("/nope").variant, WidgetVariant::Combined);
    }
}
