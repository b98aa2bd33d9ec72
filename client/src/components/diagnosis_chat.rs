//! Symptom chat form backed by the prediction endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps one [`DiagnosisState`]. Each submit starts a numbered request on
//! `spawn_local`; the response is fed back through
//! [`DiagnosisState::resolve`], which ignores answers to superseded
//! requests.

use leptos::prelude::*;

use crate::components::chat_transcript::ChatTranscript;
use crate::net::api;
use crate::state::diagnosis::DiagnosisState;
use crate::util::scroll;

/// Transcript plus input form. `predict_url` defaults to
/// [`api::DEFAULT_PREDICT_URL`].
#[component]
pub fn DiagnosisChat(#[prop(optional, into)] predict_url: Option<String>) -> impl IntoView {
    let diagnosis = RwSignal::new(DiagnosisState::default());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let endpoint = api::predict_endpoint(predict_url.as_deref());

    // Only a change of `scroll_seq` scrolls; other state updates are ignored.
    let scroll_seq = Memo::new(move |_| diagnosis.with(|d| d.scroll_seq));
    Effect::new(move || {
        if scroll_seq.get() > 0 {
            scroll::scroll_to_bottom(messages_ref, true);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let near_bottom = scroll::container_near_bottom(messages_ref);
        let text = input.get_untracked();
        let mut pending = None;
        diagnosis.update(|d| pending = d.submit(&text, near_bottom));
        let Some(request) = pending else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            use crate::state::diagnosis::PredictionResult;
            use crate::util::cookie::{CSRF_COOKIE, read_cookie};

            let url = endpoint.clone();
            leptos::task::spawn_local(async move {
                let token = read_cookie(CSRF_COOKIE);
                let outcome = api::request_prediction(&url, &request.text, token.as_deref())
                    .await
                    .map(|resp| {
                        if let Some(extracted) = &resp.extracted {
                            log::debug!("prediction features: {extracted}");
                        }
                        PredictionResult::from(resp)
                    });
                if let Err(e) = &outcome {
                    log::warn!("prediction request {} failed: {e}", request.seq);
                }
                let mut rendered = false;
                diagnosis.update(|d| rendered = d.resolve(request.seq, outcome));
                if !rendered {
                    log::debug!("discarding superseded prediction response {}", request.seq);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&endpoint, request);
        }
    };

    let is_waiting = move || diagnosis.with(DiagnosisState::is_waiting);
    let messages = Signal::derive(move || diagnosis.with(|d| d.transcript.messages().to_vec()));

    view! {
        <div class="diagnosis-chat">
            <ChatTranscript messages=messages container=messages_ref class="chat-messages"/>

            <form id="diagnosis-form" class="diagnosis-form" on:submit=on_submit>
                <input
                    id="diagnosis-input"
                    class="diagnosis-input"
                    type="text"
                    placeholder="Describe your symptoms..."
                    autocomplete="off"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" aria-busy=move || is_waiting().to_string()>
                    "Send"
                </button>
            </form>
        </div>
    }
}
