//! Categories Page
//!
//! Category chips driving the article store's filters.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ArticleCard, LoadMoreBar};
use crate::stores::{
    self, ArticleFilterPatch, ArticleStateStoreFields, CommonStateStoreFields,
};

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let articles = stores::use_article_store();
    let common = stores::use_common_store();
    let (selected, set_selected) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(stores::reset_article_filters(articles));
    });

    let select_category = move |name: Option<String>| {
        set_selected.set(name.clone());
        spawn_local(async move {
            match name {
                Some(category) => {
                    stores::set_article_filters(
                        articles,
                        ArticleFilterPatch {
                            category: Some(category),
                            ..Default::default()
                        },
                    )
                    .await
                }
                None => stores::reset_article_filters(articles).await,
            }
        });
    };

    view! {
        <section class="categories-page">
            <div class="category-chips">
                <button
                    class=move || if selected.get().is_none() { "chip active" } else { "chip" }
                    on:click=move |_| select_category(None)
                >
                    "全部"
                </button>
                <For
                    each=move || common.categories().get()
                    key=|category| category.id
                    children=move |category| {
                        let name = category.name.clone();
                        let value = name.clone();
                        let is_active = move || selected.get().as_deref() == Some(name.as_str());
                        view! {
                            <button
                                class=move || if is_active() { "chip active" } else { "chip" }
                                on:click=move |_| select_category(Some(value.clone()))
                            >
                                {category.name.clone()}
                            </button>
                        }
                    }
                />
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
