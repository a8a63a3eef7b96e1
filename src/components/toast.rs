use crate::utils::RequestGeneration;
use gloo_timers::future::TimeoutFuture;
use leptos::*;

const TOAST_MILLIS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// One short message at a time; a newer message replaces the shown one.
#[derive(Clone)]
pub struct ToastState {
    pub message: RwSignal<Option<(ToastKind, String)>>,
    shown: RequestGeneration,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            message: create_rw_signal(None),
            shown: RequestGeneration::new(),
        }
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(ToastKind::Info, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(ToastKind::Error, text.into());
    }

    fn show(&self, kind: ToastKind, text: String) {
        let ticket = self.shown.begin();
        self.message.set(Some((kind, text)));

        let state = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MILLIS).await;
            // only the newest message clears itself
            state
                .shown
                .apply_if_current(&ticket, || state.message.set(None));
        });
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<ToastState>();
    let message = toast.message;

    move || {
        message.get().map(|(kind, text)| {
            let class = match kind {
                ToastKind::Info => "toast",
                ToastKind::Error => "toast toast-error",
            };
            view! { <div class=class role="status">{ text }</div> }
        })
    }
}
