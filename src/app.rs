//! AI News App Shell
//!
//! Root component: provides the global stores, restores a persisted session,
//! loads reference data and declares the route table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{
    AdminPage, ArticleDetailPage, CategoriesPage, HomePage, LoginPage, NavBar, NotFoundPage,
    ProfilePage, ProgressBar, RegisterPage, SearchPage, ToastHost, TodayPage,
};
use crate::progress;
use crate::router::{
    Guarded, ADMIN_META, ARTICLE_META, CATEGORIES_META, HOME_META, LOGIN_META, NOT_FOUND_META,
    PROFILE_META, REGISTER_META, SEARCH_META, TODAY_META,
};
use crate::stores;
use crate::toast;

#[component]
pub fn App() -> impl IntoView {
    progress::init();
    toast::init();

    let auth = stores::provide_auth_store();
    stores::provide_article_store();
    stores::provide_today_store();
    let common = stores::provide_common_store();

    // A persisted token is only half a session; resolve it to a profile.
    Effect::new(move |_| stores::resolve_session(auth));

    // Sources and categories feed the filter controls on several views.
    Effect::new(move |_| {
        spawn_local(stores::initialize_data(common));
    });

    view! {
        <Router>
            <ProgressBar/>
            <ToastHost/>
            <NavBar/>
            <main class="page-content">
                <Routes fallback=|| view! { <Guarded meta=NOT_FOUND_META><NotFoundPage/></Guarded> }>
                    <Route path=path!("/") view=|| view! { <Guarded meta=HOME_META><HomePage/></Guarded> }/>
                    <Route path=path!("/today") view=|| view! { <Guarded meta=TODAY_META><TodayPage/></Guarded> }/>
                    <Route path=path!("/search") view=|| view! { <Guarded meta=SEARCH_META><SearchPage/></Guarded> }/>
                    <Route path=path!("/categories") view=|| view! { <Guarded meta=CATEGORIES_META><CategoriesPage/></Guarded> }/>
                    <Route path=path!("/article/:id") view=|| view! { <Guarded meta=ARTICLE_META><ArticleDetailPage/></Guarded> }/>
                    <Route path=path!("/login") view=|| view! { <Guarded meta=LOGIN_META><LoginPage/></Guarded> }/>
                    <Route path=path!("/register") view=|| view! { <Guarded meta=REGISTER_META><RegisterPage/></Guarded> }/>
                    <Route path=path!("/profile") view=|| view! { <Guarded meta=PROFILE_META><ProfilePage/></Guarded> }/>
                    <Route path=path!("/admin") view=|| view! { <Guarded meta=ADMIN_META><AdminPage/></Guarded> }/>
                </Routes>
            </main>
        </Router>
    }
}
