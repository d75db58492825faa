//! Transient notifications shown in the corner of the screen.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays on screen
pub const TOAST_TIMEOUT_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    fn class(self) -> &'static str {
        match self {
            ToastVariant::Success => "toast toast--success",
            ToastVariant::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
}

/// Ordered list of visible toasts
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>, variant: ToastVariant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            message: message.into(),
            variant,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Context service, provided once in `App`
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    auto_dismiss: bool,
}

impl ToastService {
    /// Toasts disappear after [`TOAST_TIMEOUT_MS`]
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            auto_dismiss: true,
        }
    }

    /// Toasts stay until dismissed; for hosts without browser timers
    pub fn manual() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            auto_dismiss: false,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), ToastVariant::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), ToastVariant::Error);
    }

    fn show(&self, message: String, variant: ToastVariant) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(message, variant));

        if self.auto_dismiss {
            let this = *self;
            Timeout::new(TOAST_TIMEOUT_MS, move || this.dismiss(id)).forget();
        }
    }

    pub fn dismiss(&self, id: u64) {
        // the host may already be gone when the timer fires
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.items().to_vec())
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toasts of the [`ToastService`] found in context
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>();

    view! {
        <div class="toast-host">
            {move || {
                service
                    .map(|s| s.toasts())
                    .unwrap_or_default()
                    .into_iter()
                    .map(|t| {
                        let id = t.id;
                        view! {
                            <div
                                class=t.variant.class()
                                on:click=move |_| {
                                    if let Some(s) = service {
                                        s.dismiss(id);
                                    }
                                }
                            >
                                {t.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
