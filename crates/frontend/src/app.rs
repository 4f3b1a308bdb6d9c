use crate::layout::notifications::NotificationService;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Success and error notices for every page
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
    }
}
