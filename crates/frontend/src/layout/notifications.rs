use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// How long a notice stays on screen unless dismissed
pub const NOTICE_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Toast-style messages shared by all pages
#[derive(Clone, Copy)]
pub struct NotificationService {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, message.into())
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|notices| notices.retain(|n| n.id != id));
    }

    pub fn notices(&self) -> Signal<Vec<Notice>> {
        self.notices.into()
    }

    fn push(&self, kind: NoticeKind, message: String) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        match kind {
            NoticeKind::Success => log::info!("{}", message),
            NoticeKind::Error => log::error!("{}", message),
        }
        self.notices.update(|notices| notices.push(Notice { id, kind, message }));
        id
    }

    /// Push and schedule removal after [`NOTICE_TIMEOUT_MS`]
    fn show(&self, kind: NoticeKind, message: String) {
        let id = self.push(kind, message);
        let service = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            service.dismiss(id);
        });
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.show(NoticeKind::Success, message.into());
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.show(NoticeKind::Error, message.into());
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

#[component]
pub fn Notifications() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notices">
            <For
                each=move || service.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.class() role="status">
                            <span class="notice__message">{notice.message}</span>
                            <button
                                type="button"
                                class="notice__close"
                                aria-label="Dismiss"
                                on:click=move |_| service.dismiss(id)
                            >
                                "×"
                            </button>
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
    fn test_dismiss_removes_only_that_notice() {
        let service = NotificationService::new();
        let first = service.success("Facility added successfully");
        let second = service.error("Something went wrong: 500");
        service.dismiss(first);

        let notices = service.notices().get_untracked();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].id, second);
        assert_eq!(notices[0].kind, NoticeKind::Error);
    }
}
