//! Admin Page
//!
//! News-source management: list, create, toggle, crawl-now and delete.
//! State is page-local; a reload trigger refreshes the table after every
//! mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SourceInput};
use crate::models::NewsSource;
use crate::toast;
use crate::utils::format_date;

const SOURCE_TYPES: &[&str] = &["rss", "html"];

#[component]
pub fn AdminPage() -> impl IntoView {
    let (sources, set_sources) = signal(Vec::<NewsSource>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let reload = move || set_reload_trigger.update(|n| *n += 1);

    let (new_name, set_new_name) = signal(String::new());
    let (new_url, set_new_url) = signal(String::new());
    let (new_type, set_new_type) = signal(String::from("rss"));

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            if let Ok(list) = api::admin_list_sources().await {
                set_sources.set(list);
            }
        });
    });

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked();
        let url = new_url.get_untracked();
        if name.is_empty() || url.is_empty() {
            return;
        }
        let source_type = new_type.get_untracked();
        spawn_local(async move {
            let input = SourceInput {
                name: Some(name),
                url: Some(url),
                source_type: Some(source_type),
                ..Default::default()
            };
            if api::admin_create_source(&input).await.is_ok() {
                set_new_name.set(String::new());
                set_new_url.set(String::new());
                toast::success("新闻源已创建");
                reload();
            }
        });
    };

    let toggle_active = move |source: NewsSource| {
        spawn_local(async move {
            let input = SourceInput {
                is_active: Some(!source.is_active),
                ..Default::default()
            };
            if api::admin_update_source(source.id, &input).await.is_ok() {
                reload();
            }
        });
    };

    let fetch_now = move |id: u32| {
        spawn_local(async move {
            if api::admin_fetch_source(id).await.is_ok() {
                toast::success("抓取任务已触发");
                reload();
            }
        });
    };

    let delete_source = move |id: u32| {
        spawn_local(async move {
            if api::admin_delete_source(id).await.is_ok() {
                toast::success("新闻源已删除");
                reload();
            }
        });
    };

    view! {
        <section class="admin-page">
            <h1>"新闻源管理"</h1>

            <form class="source-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="名称"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <input
                    type="url"
                    placeholder="URL"
                    prop:value=move || new_url.get()
                    on:input=move |ev| set_new_url.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_new_type.set(event_target_value(&ev))>
                    {SOURCE_TYPES.iter().map(|kind| view! {
                        <option value=*kind>{*kind}</option>
                    }).collect_view()}
                </select>
                <button type="submit">"添加"</button>
            </form>

            <table class="source-table">
                <thead>
                    <tr>
                        <th>"名称"</th>
                        <th>"类型"</th>
                        <th>"状态"</th>
                        <th>"上次抓取"</th>
                        <th>"操作"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || sources.get()
                        key=|source| (source.id, source.is_active, source.updated_at.clone())
                        children=move |source| {
                            let id = source.id;
                            let toggled = source.clone();
                            let last_fetch = source
                                .last_fetch_time
                                .as_deref()
                                .map(format_date)
                                .unwrap_or_else(|| "—".to_string());
                            view! {
                                <tr>
                                    <td class="source-name">{source.name.clone()}</td>
                                    <td>{source.source_type.clone()}</td>
                                    <td>{if source.is_active { "启用" } else { "停用" }}</td>
                                    <td>{last_fetch}</td>
                                    <td class="source-actions">
                                        <button on:click=move |_| toggle_active(toggled.clone())>
                                            {if source.is_active { "停用" } else { "启用" }}
                                        </button>
                                        <button on:click=move |_| fetch_now(id)>"抓取"</button>
                                        <button class="danger" on:click=move |_| delete_source(id)>
                                            "删除"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
