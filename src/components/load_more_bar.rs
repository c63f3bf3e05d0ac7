//! Load More Bar Component
//!
//! Footer of a paginated list: load-more button while the server reports
//! more pages, status text otherwise.

use leptos::prelude::*;

#[component]
pub fn LoadMoreBar(
    loading: Signal<bool>,
    has_more: Signal<bool>,
    total: Signal<u32>,
    on_more: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="load-more-bar">
            {move || if loading.get() {
                view! { <p class="list-status">"加载中..."</p> }.into_any()
            } else if has_more.get() {
                view! {
                    <button class="load-more" on:click=move |_| on_more.run(())>
                        "加载更多"
                    </button>
                }.into_any()
            } else if total.get() > 0 {
                view! { <p class="list-status">"没有更多了"</p> }.into_any()
            } else {
                view! { <p class="list-status">"暂无内容"</p> }.into_any()
            }}
        </div>
    }
}
