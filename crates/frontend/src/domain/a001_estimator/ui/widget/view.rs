use super::model::HttpAnalytics;
use super::view_model::EstimatorViewModel;
use crate::shared::components::OptionToggle;
use crate::shared::embed::post_height;
use crate::shared::number_format::format_usd;
use contracts::domain::a001_pricing::WidgetVariant;
use contracts::enums::{OrganizationCategory, ServiceTier};
use contracts::shared::duration::EventDuration;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SERVICE_EMAIL: &str = "service@thegrossdomestic.com";

/// Delays after a change at which the host gets a height update; the second
/// one lands after the company-name panel has finished animating.
const HEIGHT_REPORT_DELAYS_MS: [u32; 2] = [0, 600];

fn theme_class(category: OrganizationCategory) -> &'static str {
    match category {
        OrganizationCategory::GithubInternal => "estimator--violet",
        OrganizationCategory::ExternalSponsor => "estimator--pink",
        OrganizationCategory::NonProfit => "estimator--teal",
    }
}

#[component]
pub fn EstimatorWidget(
    variant: WidgetVariant,
    /// Compact layout for the iframe snippet
    #[prop(optional)]
    embedded: bool,
    analytics: HttpAnalytics,
) -> impl IntoView {
    let vm = EstimatorViewModel::new(variant, analytics);
    let config = variant.config();

    // Keep the host's iframe sized to the content
    Effect::new(move |_| {
        vm.form.track();
        for delay in HEIGHT_REPORT_DELAYS_MS {
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                post_height();
            });
        }
    });

    let category_options: Vec<(String, String)> = config
        .categories
        .offered()
        .into_iter()
        .map(|c| (c.code().to_string(), c.display_name().to_string()))
        .collect();
    let tier_options: Vec<(String, String)> = ServiceTier::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect();

    view! {
        <div class=move || {
            format!(
                "estimator {} {}",
                theme_class(vm.form.with(|f| f.category())),
                if embedded { "estimator--embedded" } else { "" },
            )
        }>
            <h2 class="estimator__title">"Budget Estimator"</h2>

            {config.categories.is_selectable().then(|| view! {
                <OptionToggle
                    label="Event Organizer"
                    options=category_options
                    selected=Signal::derive(move || vm.form.with(|f| f.category().code().to_string()))
                    on_select=Callback::new(move |code: String| vm.select_category(&code))
                    hint=Signal::derive(move || vm.form.with(|f| f.category().description().to_string()))
                />
            })}

            <OptionToggle
                label="Service Type"
                options=tier_options
                selected=Signal::derive(move || vm.form.with(|f| f.tier().code().to_string()))
                on_select=Callback::new(move |code: String| vm.select_tier(&code))
                hint=Signal::derive(move || vm.form.with(|f| f.tier().description().to_string()))
            />

            <div class="panel">
                <label class="panel__label" for="attendees">"Expected Attendees"</label>
                <input
                    type="number"
                    id="attendees"
                    min="0"
                    class="panel__input"
                    placeholder="Enter number of attendees"
                    prop:value=move || {
                        let attendees = vm.form.with(|f| f.attendees());
                        if attendees == 0 { String::new() } else { attendees.to_string() }
                    }
                    on:input=move |ev| vm.set_attendees_input(&event_target_value(&ev))
                />
            </div>

            <div class="panel">
                <label class="panel__label" for="duration">"Duration of Event"</label>
                <select
                    id="duration"
                    class="panel__input"
                    on:change=move |ev| vm.set_duration_code(&event_target_value(&ev))
                >
                    {EventDuration::options()
                        .map(|duration| {
                            let is_selected = move || vm.form.with(|f| f.duration() == duration);
                            view! {
                                <option value=duration.code() selected=is_selected>
                                    {duration.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class=move || {
                if vm.requires_company_name() {
                    "reveal reveal--open"
                } else {
                    "reveal"
                }
            }>
                <div class="panel">
                    <label class="panel__label" for="companyName">"Company Name *"</label>
                    <input
                        type="text"
                        id="companyName"
                        class="panel__input"
                        placeholder="Enter your company name"
                        prop:value=move || vm.form.with(|f| f.company_name().to_string())
                        on:input=move |ev| vm.set_company_name(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="panel result">
                <Show
                    when=move || vm.form.with(|f| f.estimate().is_some())
                    fallback=move || view! {
                        <button
                            type="button"
                            class="result__generate"
                            disabled=move || !vm.is_form_valid()
                            on:click=move |_| vm.generate()
                        >
                            "Generate Estimate"
                        </button>
                        {move || vm.guidance().map(|text| view! {
                            <div class="result__guidance">{text}</div>
                        })}
                    }
                >
                    <div class="result__caption">"ESTIMATED COST"</div>
                    <div class="result__amount">
                        {move || vm.form.with(|f| f.estimate().map(format_usd).unwrap_or_default())}
                    </div>
                </Show>
            </div>

            <div class=move || {
                if vm.form.with(|f| f.is_settled()) {
                    "disclaimer disclaimer--bright"
                } else {
                    "disclaimer"
                }
            }>
                <p>
                    "This tool is intended for generating \u{201c}ball park\u{201d} estimates to aid in planning events. For official quotes, special requests or scenarios outside these parameters, please email "
                    <a href=format!("mailto:{}", SERVICE_EMAIL)>{SERVICE_EMAIL}</a>
                </p>
            </div>
        </div>
    }
}
