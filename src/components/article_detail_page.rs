//! Article Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::stores::{self, ArticleStateStoreFields};
use crate::utils::{format_date, processing_status_text, processing_status_tone};

#[component]
pub fn ArticleDetailPage() -> impl IntoView {
    let articles = stores::use_article_store();
    let params = use_params_map();

    Effect::new(move |_| {
        if let Some(id) = params.read().get("id").and_then(|raw| raw.parse::<u32>().ok()) {
            spawn_local(stores::fetch_article(articles, id));
        }
    });

    view! {
        <section class="article-detail">
            {move || match articles.current_article().get() {
                Some(article) => {
                    let title = article
                        .chinese_title
                        .clone()
                        .filter(|title| !title.is_empty())
                        .unwrap_or_else(|| article.title.clone());
                    let status = article.llm_processing_status.clone();
                    view! {
                        <article>
                            <h1 class="detail-title">{title}</h1>
                            <div class="detail-meta">
                                {article.source.as_ref().map(|source| view! {
                                    <span class="detail-source">{source.name.clone()}</span>
                                })}
                                {article.author.clone().map(|author| view! {
                                    <span class="detail-author">{author}</span>
                                })}
                                {article.published_at.clone().map(|published| view! {
                                    <span class="detail-time">{format_date(&published)}</span>
                                })}
                                <span class=format!("badge {}", processing_status_tone(&status))>
                                    {processing_status_text(&status).to_string()}
                                </span>
                            </div>

                            {article.llm_summary.clone().map(|summary| view! {
                                <div class="detail-llm-summary">
                                    <h2>"AI 摘要"</h2>
                                    <p>{summary}</p>
                                </div>
                            })}

                            {article.content.clone().or_else(|| article.summary.clone()).map(|content| view! {
                                <div class="detail-content">
                                    <p>{content}</p>
                                </div>
                            })}

                            <div class="article-tags">
                                {article
                                    .tags
                                    .iter()
                                    .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                                    .collect_view()}
                            </div>

                            <a href=article.url.clone() target="_blank" rel="noopener" class="detail-link">
                                "查看原文"
                            </a>
                        </article>
                    }.into_any()
                }
                None => view! { <p class="list-status">"加载中..."</p> }.into_any(),
            }}
        </section>
    }
}
