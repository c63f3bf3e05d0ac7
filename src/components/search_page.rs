//! Search Page
//!
//! Debounced keyword search over articles.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, SearchQuery};
use crate::components::ArticleCard;
use crate::models::Article;
use crate::stores::DEFAULT_PAGE_SIZE;

const DEBOUNCE_MS: u32 = 300;

#[component]
pub fn SearchPage() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (results, set_results) = signal(Vec::<Article>::new());
    let (total, set_total) = signal(0u32);
    let (took, set_took) = signal(None::<f64>);
    let (searching, set_searching) = signal(false);

    let run_search = move |q: String| {
        spawn_local(async move {
            set_searching.set(true);
            let request = SearchQuery {
                q,
                page: 1,
                size: DEFAULT_PAGE_SIZE,
                ..Default::default()
            };
            match api::search_articles(&request).await {
                Ok(response) => {
                    set_results.set(response.articles);
                    set_total.set(response.total);
                    set_took.set(Some(response.took));
                }
                Err(err) => log::error!("search failed: {err}"),
            }
            set_searching.set(false);
        });
    };

    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let value = input.value();
        set_query.set(value.clone());
        // Debounce: only the keystroke that still matches after the wait
        // dispatches a request.
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if query.get_untracked() == value && !value.trim().is_empty() {
                run_search(value);
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = query.get_untracked();
        if !value.trim().is_empty() {
            run_search(value);
        }
    };

    view! {
        <section class="search-page">
            <form class="search-form" on:submit=on_submit>
                <input
                    type="search"
                    placeholder="搜索新闻..."
                    prop:value=move || query.get()
                    on:input=on_input
                />
                <button type="submit" disabled=move || searching.get()>"搜索"</button>
            </form>

            {move || took.get().map(|seconds| view! {
                <p class="search-summary">
                    {format!("共 {} 条结果，耗时 {:.2} 秒", total.get(), seconds)}
                </p>
            })}

            <div class="article-list">
                <For
                    each=move || results.get()
                    key=|article| article.id
                    children=|article| view! { <ArticleCard article=article/> }
                />
            </div>
        </section>
    }
}
