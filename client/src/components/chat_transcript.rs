//! Scrollable list of chat messages shared by both chat widgets.

use leptos::prelude::*;

use crate::state::transcript::{Author, ChatMessage, Tone};
use crate::util::markup::render_markup;

/// Renders `messages` top to bottom inside the `container` scroll box.
///
/// User lines are plain text; assistant lines are rendered markup.
#[component]
pub fn ChatTranscript(
    messages: Signal<Vec<ChatMessage>>,
    container: NodeRef<leptos::html::Div>,
    #[prop(into)] class: String,
) -> impl IntoView {
    view! {
        <div class=class node_ref=container>
            {move || {
                messages
                    .get()
                    .into_iter()
                    .map(|msg| {
                        let is_user = msg.author == Author::User;
                        let is_bot = !is_user;
                        let is_error = msg.tone == Tone::Error;
                        let is_loading = msg.tone == Tone::Placeholder;
                        view! {
                            <div
                                class:user-message=is_user
                                class:bot-message=is_bot
                                class:bot-message--error=is_error
                                class:loading=is_loading
                            >
                                {if is_user || is_loading {
                                    view! { <p>{msg.text}</p> }.into_any()
                                } else {
                                    view! { <p inner_html=render_markup(&msg.text)></p> }.into_any()
                                }}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
