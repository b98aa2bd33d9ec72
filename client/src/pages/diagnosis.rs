//! Diagnosis chat page.

use leptos::prelude::*;

use crate::components::diagnosis_chat::DiagnosisChat;

#[component]
pub fn DiagnosisPage() -> impl IntoView {
    view! {
        <div class="diagnosis-page">
            <h1>"Diagnosis Chat"</h1>
            <p class="diagnosis-page__subtitle">
                "Tell us how you feel. Suggestions are not a substitute for a doctor's advice."
            </p>
            <DiagnosisChat/>
        </div>
    }
}
