//! Today Article Card Component

use leptos::prelude::*;

use crate::models::TodayArticle;
use crate::utils::{format_relative_time, language_name};

/// One curated pick: localized title with the original underneath, AI
/// summary and a link out to the source.
#[component]
pub fn TodayArticleCard(article: TodayArticle) -> impl IntoView {
    view! {
        <article class="today-card">
            <h3 class="today-title">{article.chinese_title.clone()}</h3>
            <p class="today-original-title">{article.original_title.clone()}</p>
            <div class="today-meta">
                <span class="today-source">{article.source_name.clone()}</span>
                <span class="today-language">{language_name(&article.original_language).to_string()}</span>
                <span class="today-time">{format_relative_time(&article.published_at)}</span>
            </div>
            <p class="today-summary">{article.llm_summary.clone()}</p>
            <div class="today-footer">
                <div class="article-tags">
                    {article
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                        .collect_view()}
                </div>
                <a href=article.url.clone() target="_blank" rel="noopener" class="today-link">
                    "阅读原文"
                </a>
            </div>
        </article>
    }
}
