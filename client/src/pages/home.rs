//! Landing page with service cards and the scripted assistant.

use leptos::prelude::*;

use crate::components::assistant_widget::AssistantWidget;
use crate::state::centers::CARD_TITLE;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Medi-Help"</h1>
            <div class="service-cards">
                <a class="service-card" id="diagnosis-chat" href="/diagnosis">
                    <h2>"Diagnosis Chat"</h2>
                    <p>"Describe your symptoms and get a suggested condition and department."</p>
                </a>
                <a class="service-card" id="doctor-details" href="/doctors">
                    <h2>"Doctor Details"</h2>
                    <p>"Browse and search our network of specialists."</p>
                </a>
                <a class="service-card" id="nearest-centre" href="/navigation">
                    <h2>{CARD_TITLE}</h2>
                    <p>"Find hospitals, clinics and diagnostic centres closest to you."</p>
                </a>
            </div>
            <AssistantWidget/>
        </div>
    }
}
