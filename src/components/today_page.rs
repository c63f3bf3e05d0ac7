//! Today Page
//!
//! Curated picks with processing statistics, source/language filters and the
//! admin-only batch-processing trigger.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LoadMoreBar, TodayArticleCard};
use crate::stores::{
    self, CommonStateStoreFields, FetchTodayParams, TodayFilterPatch, TodayStateStoreFields,
};
use crate::utils::language_name;

/// Languages offered by the filter select.
const LANGUAGES: &[&str] = &["en", "zh", "ja", "ko", "fr", "de", "es", "ru"];

#[component]
pub fn TodayPage() -> impl IntoView {
    let today = stores::use_today_store();
    let common = stores::use_common_store();
    let auth = stores::use_auth_store();

    Effect::new(move |_| {
        spawn_local(stores::fetch_today_articles(today, FetchTodayParams::default()));
        spawn_local(stores::fetch_today_stats(today));
    });

    let on_source = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        spawn_local(async move {
            if value.is_empty() {
                stores::reset_today_filters(today).await;
            } else {
                stores::set_today_filters(
                    today,
                    TodayFilterPatch {
                        source: Some(value),
                        ..Default::default()
                    },
                )
                .await;
            }
        });
    };

    let on_language = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        spawn_local(stores::set_today_filters(
            today,
            TodayFilterPatch {
                language: Some(value),
                ..Default::default()
            },
        ));
    };

    view! {
        <section class="today-page">
            {move || today.stats().get().map(|stats| view! {
                <div class="today-stats">
                    <div class="stat"><span class="stat-value">{stats.today_total}</span><span class="stat-label">"今日文章"</span></div>
                    <div class="stat"><span class="stat-value">{stats.processed}</span><span class="stat-label">"已处理"</span></div>
                    <div class="stat"><span class="stat-value">{stats.processing}</span><span class="stat-label">"处理中"</span></div>
                    <div class="stat"><span class="stat-value">{stats.pending}</span><span class="stat-label">"待处理"</span></div>
                    <div class="stat"><span class="stat-value">{stats.failed}</span><span class="stat-label">"失败"</span></div>
                </div>
            })}

            <div class="filter-bar">
                <select class="source-select" on:change=on_source>
                    <option value="">"全部来源"</option>
                    <For
                        each=move || common.sources().get()
                        key=|source| source.id
                        children=|source| view! {
                            <option value=source.name.clone()>{source.name.clone()}</option>
                        }
                    />
                </select>
                <select class="language-select" on:change=on_language>
                    <option value="">"全部语言"</option>
                    {LANGUAGES.iter().map(|code| view! {
                        <option value=*code>{language_name(code)}</option>
                    }).collect_view()}
                </select>

                {move || stores::is_admin(&auth).then(|| view! {
                    <button
                        class="process-btn"
                        disabled=move || today.processing().get()
                        on:click=move |_| spawn_local(stores::process_today_articles(today))
                    >
                        {move || if today.processing().get() { "处理中..." } else { "立即处理" }}
                    </button>
                })}
            </div>

            <div class="today-list">
                <For
                    each=move || today.articles().get()
                    key=|article| article.id
                    children=|article| view! { <TodayArticleCard article=article/> }
                />
            </div>

            <LoadMoreBar
                loading=Signal::derive(move || today.loading().get())
                has_more=Signal::derive(move || today.pagination().read().has_more())
                total=Signal::derive(move || today.pagination().read().total)
                on_more=Callback::new(move |_| spawn_local(stores::load_more_today(today)))
            />
        </section>
    }
}
