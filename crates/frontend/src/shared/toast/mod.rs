//! Transient notifications shown in the top-right corner.

use contracts::shared::api::ApiError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered queue, oldest first. Only the newest `MAX_VISIBLE` are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Option<u64> {
        let message = message.into();
        if message.trim().is_empty() {
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        Some(id)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    timeout_ms: u32,
}

impl ToastService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            timeout_ms,
        }
    }

    fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let mut pushed = None;
        self.queue.update(|q| pushed = q.push(kind, message));
        if let Some(id) = pushed {
            let svc = *self;
            spawn_local(async move {
                TimeoutFuture::new(svc.timeout_ms).await;
                svc.dismiss(id);
            });
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    /// Error toast for a failed call. Nothing is shown for an expired
    /// session, the login page replaces the layout instead.
    pub fn api_error(&self, err: &ApiError, fallback: &str) {
        if !err.is_unauthorized() {
            self.error(err.user_message(fallback));
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

/// Renders the toast queue. Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toast();

    view! {
        <div class="toast-stack">
            <For
                each=move || svc.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let intent = match toast.kind {
                        ToastKind::Success => MessageBarIntent::Success,
                        ToastKind::Error => MessageBarIntent::Error,
                        ToastKind::Info => MessageBarIntent::Info,
                    };
                    view! {
                        <div class="toast-stack__item">
                            <MessageBar intent=intent>
                                <span class="toast-stack__text">{toast.message}</span>
                                <button class="toast-stack__close" on:click=move |_| svc.dismiss(id)>
                                    "×"
                                </button>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_messages_are_dropped() {
        let mut queue = ToastQueue::default();
        assert_eq!(queue.push(ToastKind::Info, "  "), None);
        assert!(queue.items().is_empty());
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "Saved").unwrap();
        let b = queue.push(ToastKind::Error, "Server error").unwrap();
        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);
    }

    #[test]
    fn test_oldest_toasts_fall_off() {
        let mut queue = ToastQueue::default();
        for i in 0..7 {
            queue.push(ToastKind::Info, format!("message {i}"));
        }
        assert_eq!(queue.items().len(), MAX_VISIBLE);
        assert_eq!(queue.items()[0].message, "message 2");
    }
}
