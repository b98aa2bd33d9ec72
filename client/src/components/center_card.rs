//! Card showing one medical centre on the navigation page.

use leptos::prelude::*;

use crate::state::centers::{NearbyCenter, format_distance, map_link};

#[component]
pub fn CenterCard(nearby: NearbyCenter, #[prop(optional)] nearest: bool) -> impl IntoView {
    let NearbyCenter { center, km } = nearby;
    let link = map_link(center.location);
    view! {
        <div class="center-card" class:center-card--nearest=nearest>
            <div class="center-header">
                <h2 class="center-name">{center.name}</h2>
                <span class="center-type">{center.center_type}</span>
            </div>
            <p class="center-distance">
                {format_distance(km)}
                " from the city centre"
                {nearest.then_some(" (nearest)")}
            </p>
            <a class="btn btn--primary" href=link target="_blank" rel="noopener noreferrer">
                "Open in map"
            </a>
        </div>
    }
}
