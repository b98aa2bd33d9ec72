//! Doctor directory page: search box, card grid, empty state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The visible set is recomputed from the compiled-in roster on every input
//! event; there is no debounce and no paging.

use leptos::prelude::*;

use crate::components::doctor_card::DoctorCard;
use crate::state::directory::{DoctorViewState, roster};

#[component]
pub fn DoctorsPage() -> impl IntoView {
    let directory = RwSignal::new(DoctorViewState::new(roster()));

    let on_input = move |ev: leptos::ev::Event| {
        let query = event_target_value(&ev);
        directory.update(|d| d.apply_query(&query, roster()));
    };

    let no_results = move || directory.with(DoctorViewState::is_empty);
    let grid_display = move || if no_results() { "none" } else { "grid" };
    let empty_display = move || if no_results() { "block" } else { "none" };

    view! {
        <div class="doctors-page">
            <h1>"Our Doctors"</h1>
            <input
                id="searchInput"
                class="search-input"
                type="search"
                placeholder="Search by name, department, qualification or address..."
                prop:value=move || directory.with(|d| d.query.clone())
                on:input=on_input
            />

            <div id="doctorsGrid" class="doctors-grid" style:display=grid_display>
                {move || {
                    directory
                        .with(|d| d.visible.clone())
                        .into_iter()
                        .map(|doctor| view! { <DoctorCard doctor=doctor/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div id="noResults" class="no-results" style:display=empty_display>
                <p>"No doctors match your search."</p>
            </div>
        </div>
    }
}
