//! Medical centre finder: every centre ranked by distance from the city
//! centre, nearest first.

use leptos::prelude::*;

use crate::components::center_card::CenterCard;
use crate::state::centers::{CITY_CENTRE, centers, rank_by_distance};

#[component]
pub fn NavigationPage() -> impl IntoView {
    let ranked = rank_by_distance(centers(), CITY_CENTRE);
    let is_empty = ranked.is_empty();

    view! {
        <div class="navigation-page">
            <h1>"Nearest Medi-Help Centres"</h1>
            <p class="navigation-page__subtitle">"Hospitals, clinics and diagnostic centres around Bhubaneswar."</p>

            <div id="centersList" class="centers-list">
                {ranked
                    .into_iter()
                    .enumerate()
                    .map(|(rank, nearby)| view! { <CenterCard nearby=nearby nearest={rank == 0}/> })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=move || is_empty>
                <div class="no-results">
                    <p>"No medical centres available."</p>
                </div>
            </Show>
        </div>
    }
}
