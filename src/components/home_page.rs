//! Home Page
//!
//! Latest articles with a category filter and incremental loading.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ArticleCard, LoadMoreBar};
use crate::stores::{
    self, ArticleFilterPatch, ArticleStateStoreFields, CommonStateStoreFields,
    FetchArticlesParams,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let articles = stores::use_article_store();
    let common = stores::use_common_store();

    Effect::new(move |_| {
        spawn_local(stores::fetch_articles(articles, FetchArticlesParams::default()));
    });

    let on_category = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        spawn_local(async move {
            if value.is_empty() {
                stores::reset_article_filters(articles).await;
            } else {
                stores::set_article_filters(
                    articles,
                    ArticleFilterPatch {
                        category: Some(value),
                        ..Default::default()
                    },
                )
                .await;
            }
        });
    };

    view! {
        <section class="home-page">
            <div class="filter-bar">
                <select class="category-select" on:change=on_category>
                    <option value="">"全部分类"</option>
                    <For
                        each=move || common.categories().get()
                        key=|category| category.id
                        children=|category| view! {
                            <option value=category.name.clone()>{category.name.clone()}</option>
                        }
                    />
                </select>
            </div>

            <div class="article-list">
                <For
                    each=move || articles.articles().get()
                    key=|article| article.id
                    children=|article| view! { <ArticleCard article=article/> }
                />
            </div>

            <LoadMoreBar
                loading=Signal::derive(move || articles.loading().get())
                has_more=Signal::derive(move || articles.pagination().read().has_more())
                total=Signal::derive(move || articles.pagination().read().total)
                on_more=Callback::new(move |_| spawn_local(stores::load_more_articles(articles)))
            />
        </section>
    }
}
