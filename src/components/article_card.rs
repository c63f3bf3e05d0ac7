//! Article Card Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Article;
use crate::utils::{format_relative_time, truncate_text};

/// One article in a list: localized title when available, source, category,
/// relative time and a truncated summary.
#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let title = article
        .chinese_title
        .clone()
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| article.title.clone());
    let summary = article
        .llm_summary
        .clone()
        .or_else(|| article.summary.clone())
        .map(|summary| truncate_text(&summary, 120));
    let published = article
        .published_at
        .clone()
        .map(|published| format_relative_time(&published));
    let source_name = article.source.as_ref().map(|source| source.name.clone());

    view! {
        <article class="article-card">
            <h3 class="article-title">
                <A href=format!("/article/{}", article.id)>{title}</A>
            </h3>
            <div class="article-meta">
                {source_name.map(|name| view! { <span class="article-source">{name}</span> })}
                {article.category.clone().map(|category| view! {
                    <span class="article-category">{category}</span>
                })}
                {published.map(|published| view! { <span class="article-time">{published}</span> })}
            </div>
            {summary.map(|summary| view! { <p class="article-summary">{summary}</p> })}
            <div class="article-tags">
                {article
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                    .collect_view()}
            </div>
        </article>
    }
}
