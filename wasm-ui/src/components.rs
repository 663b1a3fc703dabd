//! UI components for the launch dashboard.

use launchdash_rs::{ALL_SITES, PayloadRange, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Launch site dropdown.
#[derive(Properties, PartialEq)]
pub struct SiteDropdownProps {
    /// Distinct site names from the dataset, in first-seen order.
    pub sites: Vec<String>,
    /// Currently selected dropdown value (`ALL` or a site name).
    pub value: String,
    pub on_change: Callback<String>,
}

#[function_component(SiteDropdown)]
pub fn site_dropdown(props: &SiteDropdownProps) -> Html {
    let on_select = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    html! {
        <div class="control site-control">
            <label for="site-dropdown">{ "Launch Site" }</label>
            <select id="site-dropdown" onchange={on_select}>
                <option value={ALL_SITES} selected={props.value == ALL_SITES}>
                    { "All Sites" }
                </option>
                { for props.sites.iter().map(|site| {
                    html! {
                        <option value={site.clone()} selected={props.value == *site}>
                            { site }
                        </option>
                    }
                })}
            </select>
        </div>
    }
}

/// Dual-handle payload range control.
///
/// Rendered as paired min/max range inputs over the fixed slider
/// bounds. Each handle is clamped against the other so the emitted
/// range always satisfies min <= max.
#[derive(Properties, PartialEq)]
pub struct PayloadSliderProps {
    pub range: PayloadRange,
    pub on_change: Callback<PayloadRange>,
}

#[function_component(PayloadSlider)]
pub fn payload_slider(props: &PayloadSliderProps) -> Html {
    let on_min_input = {
        let on_change = props.on_change.clone();
        let range = props.range;
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = target.value().parse::<f64>() {
                on_change.emit(PayloadRange::new(value.min(range.max), range.max));
            }
        })
    };

    let on_max_input = {
        let on_change = props.on_change.clone();
        let range = props.range;
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = target.value().parse::<f64>() {
                on_change.emit(PayloadRange::new(range.min, value.max(range.min)));
            }
        })
    };

    html! {
        <div class="control range-control" id="payload-slider">
            <label>{ "Payload Range (kg)" }</label>
            <div class="range-handles">
                <input
                    type="range"
                    class="range-min"
                    min={SLIDER_MIN.to_string()}
                    max={SLIDER_MAX.to_string()}
                    step={SLIDER_STEP.to_string()}
                    value={props.range.min.to_string()}
                    oninput={on_min_input}
                />
                <input
                    type="range"
                    class="range-max"
                    min={SLIDER_MIN.to_string()}
                    max={SLIDER_MAX.to_string()}
                    step={SLIDER_STEP.to_string()}
                    value={props.range.max.to_string()}
                    oninput={on_max_input}
                />
            </div>
            <span class="range-value">
                { format!("{:.0} - {:.0} kg", props.range.min, props.range.max) }
            </span>
        </div>
    }
}
