pub mod left;
pub mod notifications;

use leptos::prelude::*;

use notifications::Notifications;

/// Main application shell
///
/// ```text
/// +-----------+--------------------------+
/// |  Sidebar  |         Content          |
/// |  (Left)   |         (Center)         |
/// +-----------+--------------------------+
/// ```
///
/// Notices float above both zones.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <div data-zone="left" class="left">
                    {left()}
                </div>
                <div class="app-main">
                    <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
                        {center()}
                    </div>
                </div>
            </div>
            <Notifications />
        </div>
    }
}
