//! Floating scripted-assistant chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps one [`AssistantState`] and a [`ReplyTimers`] owner. Submissions are
//! applied to the state immediately; the assistant's lines are delivered by
//! timers, and a newer submission cancels the timers of the previous one.

use leptos::prelude::*;

use crate::components::chat_transcript::ChatTranscript;
use crate::state::assistant::{AssistantState, ScheduledReply};
use crate::util::reply_timer::ReplyTimers;
use crate::util::scroll;

/// Toggle button plus the expandable assistant panel.
#[component]
pub fn AssistantWidget() -> impl IntoView {
    let assistant = RwSignal::new(AssistantState::default());
    let timers = StoredValue::new_local(ReplyTimers::default());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let line_count = Memo::new(move |_| assistant.with(|a| a.transcript.len()));
    Effect::new(move || {
        line_count.track();
        scroll::scroll_to_bottom(messages_ref, false);
    });

    let deliver = move |reply: ScheduledReply| {
        assistant.update(|a| {
            a.deliver(&reply);
        });
    };

    let on_open = move |_| {
        let mut welcome = None;
        assistant.update(|a| welcome = a.open());
        if let Some(reply) = welcome {
            timers.update_value(|t| t.replace(vec![reply], deliver));
        }
    };

    let on_close = move |_| assistant.update(AssistantState::close);

    let do_send = move || {
        let text = input.get_untracked();
        let mut replies = None;
        assistant.update(|a| replies = a.submit(&text));
        let Some(replies) = replies else {
            return;
        };
        input.set(String::new());
        timers.update_value(|t| t.replace(replies, deliver));
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let is_open = move || assistant.with(|a| a.open);
    let is_collapsed = move || !is_open();
    let toggle_display = move || if is_open() { "none" } else { "flex" };
    let messages = Signal::derive(move || assistant.with(|a| a.transcript.messages().to_vec()));

    view! {
        <button
            id="chatbot-toggle"
            class="chatbot-toggle"
            style:display=toggle_display
            on:click=on_open
        >
            "Chat with us"
        </button>

        <div
            id="chatbot-widget"
            class="chatbot-widget"
            class:chatbot-expanded=is_open
            class:chatbot-collapsed=is_collapsed
        >
            <div class="chatbot-header">
                <span>"Medi-Help Assistant"</span>
                <button id="close-chat" class="chatbot-close" on:click=on_close>
                    "×"
                </button>
            </div>

            <ChatTranscript messages=messages container=messages_ref class="chatbot-messages"/>

            <div class="chatbot-input-row">
                <input
                    id="chatbot-input"
                    class="chatbot-input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button id="send-message" class="btn btn--primary" on:click=on_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}
