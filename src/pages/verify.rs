//! Phone verification page with the six-cell code form.
//!
//! DESIGN
//! ======
//! All entry rules live in [`OtpEntry`]; this page owns the signal wrapping
//! one entry, translates DOM events into its methods, and performs the focus
//! moves the methods ask for. The one-second countdown runs on a spawned
//! task guarded by an alive flag so a tick that fires during teardown never
//! touches the signal.

use leptos::prelude::*;
use wasm_bindgen::JsCast as _;

use crate::state::otp::{CODE_LENGTH, OtpEntry};
use crate::util::{focus, notify};

/// Masked delivery target shown above the code cells.
const MASKED_PHONE: &str = "(+91) 95*****04";

/// DOM id of the code cell at `index`.
fn cell_id(index: usize) -> String {
    format!("otp-cell-{index}")
}

/// Label for the running resend countdown.
fn countdown_label(seconds: u32) -> String {
    format!("{seconds} sec")
}

#[component]
pub fn VerifyPage() -> impl IntoView {
    let otp = RwSignal::new(OtpEntry::new());

    let tick_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    let tick_alive_task = tick_alive.clone();
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            if !tick_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            if otp.get_untracked().is_expired() {
                continue;
            }
            otp.update(|entry| entry.tick());
        }
    });
    on_cleanup(move || tick_alive.store(false, std::sync::atomic::Ordering::Relaxed));

    let on_resend = move |_| {
        otp.update(|entry| entry.resend());
        log::info!("verification code resent");
        notify::alert("Verification code resent!");
    };

    let on_cancel = move |_| {
        log::info!("verification cancelled");
        notify::alert("Verification cancelled");
    };

    let on_continue = move |_| {
        let code = otp.get().code();
        log::info!("verification code submitted");
        notify::alert(&format!("Submitted code: {code}"));
    };

    view! {
        <div class="verify-page">
            <div class="verify-card">
                <img class="verify-card__logo" src="/assets/logo.svg" alt=""/>
                <h2 class="verify-card__title">"Phone Verification"</h2>
                <p class="verify-card__sent-to">
                    "Code sent to " <span class="verify-card__phone">{MASKED_PHONE}</span>
                </p>
                <div class="verify-form__cells">
                    {(0..CODE_LENGTH)
                        .map(|index| {
                            let on_input = move |ev: leptos::ev::Event| {
                                let raw = event_target_value(&ev);
                                let mut entry = otp.get();
                                let advance_to = entry.input(index, &raw);
                                let canonical = entry.digit(index).to_owned();
                                otp.set(entry);

                                // A rejected edit leaves the signal as it was, so no
                                // re-render corrects the DOM. Write the canonical
                                // digit back by hand.
                                if raw != canonical
                                    && let Some(target) = ev.target()
                                    && let Ok(input) =
                                        target.dyn_into::<web_sys::HtmlInputElement>()
                                {
                                    input.set_value(&canonical);
                                }
                                if let Some(next) = advance_to {
                                    focus::focus_input(&cell_id(next));
                                }
                            };

                            let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() != "Backspace" {
                                    return;
                                }
                                if let Some(previous) = otp.get().backspace(index) {
                                    focus::focus_input(&cell_id(previous));
                                }
                            };

                            let on_paste = move |ev: leptos::ev::ClipboardEvent| {
                                ev.prevent_default();
                                if let Some(data) = ev.clipboard_data()
                                    && let Ok(text) = data.get_data("text")
                                {
                                    let mut entry = otp.get();
                                    let landed = entry.paste(&text);
                                    otp.set(entry);
                                    if let Some(last) = landed {
                                        focus::focus_input(&cell_id(last));
                                    }
                                }
                            };

                            view! {
                                <input
                                    id=cell_id(index)
                                    class="verify-form__cell"
                                    type="text"
                                    maxlength="1"
                                    prop:value=move || otp.get().digit(index).to_owned()
                                    on:input=on_input
                                    on:keydown=on_keydown
                                    on:paste=on_paste
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <p class="verify-form__timer">
                    "Request in "
                    <Show
                        when=move || otp.get().is_expired()
                        fallback=move || {
                            view! {
                                <span class="verify-form__count">
                                    {move || countdown_label(otp.get().seconds_remaining())}
                                </span>
                            }
                        }
                    >
                        <button class="verify-form__resend" on:click=on_resend>
                            "Resend"
                        </button>
                    </Show>
                </p>
                <div class="verify-form__actions">
                    <button class="btn" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !otp.get().is_complete()
                        on:click=on_continue
                    >
                        "Continue"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;
