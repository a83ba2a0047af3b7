//! Blog index and post detail pages.
//!
//! Load failures never block the page: the index renders an empty state and
//! the detail view renders a not-found state.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::notification_center::notify;
use crate::config::page_location;
use crate::net::types::BlogPost;
use crate::state::notifications::{NotificationKind, NotificationState};
use crate::state::remote::Remote;
use crate::util::clipboard::{copy_text, post_share_url};
use crate::util::markdown::render_blog_html;

pub const CATEGORIES: &[(&str, &str)] = &[
    ("all", "All"),
    ("investing", "Investing"),
    ("saving", "Saving"),
    ("family", "Family"),
    ("business", "Business"),
    ("product", "Product news"),
];

/// "Sep 28, 2026" from an ISO date or timestamp; unparseable input is
/// returned as-is.
pub fn format_post_date(raw: &str) -> String {
    const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
    let date = raw.get(..10).unwrap_or(raw);
    let mut parts = date.split('-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return raw.to_owned();
    };
    let month = month.parse::<usize>().ok().and_then(|m| m.checked_sub(1)).and_then(|m| MONTHS.get(m));
    match (month, day.parse::<u32>()) {
        (Some(month), Ok(day)) if year.len() == 4 => format!("{month} {day}, {year}"),
        _ => raw.to_owned(),
    }
}

/// Byline parts that are present, e.g. "Jordan Lee · Sep 28, 2026 · 4 min read".
pub fn post_byline(post: &BlogPost) -> String {
    let mut parts = Vec::new();
    if let Some(author) = post.author.as_deref().filter(|a| !a.is_empty()) {
        parts.push(author.to_owned());
    }
    if let Some(date) = post.published_at.as_deref().filter(|d| !d.is_empty()) {
        parts.push(format_post_date(date));
    }
    if let Some(minutes) = post.read_time.filter(|m| *m > 0) {
        parts.push(format!("{minutes} min read"));
    }
    parts.join(" · ")
}

#[component]
fn PostCard(post: BlogPost) -> impl IntoView {
    let href = format!("/blog/{}", post.slug);
    let byline = post_byline(&post);
    view! {
        <a class="post-card" href=href>
            {post.featured_image.map(|src| view! { <img class="post-card__image" src=src alt="" /> })}
            <div class="post-card__body">
                {post.category.map(|c| view! { <span class="post-card__category">{c}</span> })}
                <h2 class="post-card__title">{post.title}</h2>
                <p class="post-card__excerpt">{post.excerpt.unwrap_or_default()}</p>
                <p class="post-card__byline">{byline}</p>
            </div>
        </a>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let category = RwSignal::new("all".to_owned());
    let posts = RwSignal::new(Remote::<Vec<BlogPost>>::Pending);

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<crate::net::api::ApiClient>();
        let alive = crate::util::liveness::use_liveness();
        Effect::new(move || {
            let selected = category.get();
            let api = api.clone();
            let alive = alive.clone();
            posts.set(Remote::Pending);
            leptos::task::spawn_local(async move {
                let result = api.fetch_blog_posts(crate::config::BLOG_PAGE_SIZE, Some(&selected)).await;
                if let Err(e) = &result {
                    log::warn!("blog posts unavailable: {e}");
                }
                if alive.accepts(&category.get_untracked(), &selected) {
                    posts.set(Remote::from_result(result));
                }
            });
        });
    }

    view! {
        <div class="blog-page">
            <h1>"The Kamioi Blog"</h1>
            <div class="blog-page__categories" role="tablist">
                {CATEGORIES
                    .iter()
                    .map(|&(id, label)| {
                        view! {
                            <button
                                class="btn blog-page__category"
                                class:blog-page__category--active=move || category.get() == id
                                on:click=move |_| category.set(id.to_owned())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match posts.get() {
                Remote::Pending => view! { <p class="blog-page__status">"Loading posts..."</p> }.into_any(),
                Remote::Ready(list) if !list.is_empty() => {
                    view! {
                        <div class="blog-page__grid">
                            {list.into_iter().map(|post| view! { <PostCard post=post /> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
                Remote::Ready(_) | Remote::Failed => {
                    view! { <p class="blog-page__status">"No posts yet. Check back soon."</p> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("slug").unwrap_or_default()));
    let post = RwSignal::new(Remote::<BlogPost>::Pending);
    let notifications = expect_context::<RwSignal<NotificationState>>();

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<crate::net::api::ApiClient>();
        let alive = crate::util::liveness::use_liveness();
        Effect::new(move || {
            let requested = slug.get();
            let api = api.clone();
            let alive = alive.clone();
            post.set(Remote::Pending);
            leptos::task::spawn_local(async move {
                let result = api.fetch_blog_post(&requested).await;
                if let Err(e) = &result {
                    log::warn!("blog post {requested} unavailable: {e}");
                }
                if alive.accepts(&slug.get_untracked(), &requested) {
                    post.set(Remote::from_result(result));
                }
            });
        });
    }

    let on_share = move |_| {
        let url = post_share_url(&page_location().1, &slug.get_untracked());
        leptos::task::spawn_local(async move {
            let copied = copy_text(&url).await;
            match copied {
                Ok(()) => notify(notifications, NotificationKind::Success, "Link copied", url),
                Err(e) => notify(notifications, NotificationKind::Error, "Couldn't copy link", e.to_string()),
            }
        });
    };

    view! {
        <div class="blog-post-page">
            <a href="/blog" class="blog-post-page__back">"← All posts"</a>
            {move || match post.get() {
                Remote::Pending => view! { <p class="blog-post-page__status">"Loading..."</p> }.into_any(),
                Remote::Failed => {
                    view! {
                        <div class="blog-post-page__not-found">
                            <h1>"Post not found"</h1>
                            <p>"This post may have moved or been unpublished."</p>
                            <a href="/blog" class="btn">"Back to the blog"</a>
                        </div>
                    }
                        .into_any()
                }
                Remote::Ready(post) => {
                    let byline = post_byline(&post);
                    let body = render_blog_html(&post.content);
                    view! {
                        <article class="blog-post">
                            {post
                                .featured_image
                                .map(|src| view! { <img class="blog-post__image" src=src alt="" /> })}
                            <h1 class="blog-post__title">{post.title}</h1>
                            <p class="blog-post__byline">{byline}</p>
                            <button class="btn blog-post__share" on:click=on_share>"Share"</button>
                            <div class="blog-post__body" inner_html=body></div>
                            <ul class="blog-post__tags">
                                {post.tags.into_iter().map(|t| view! { <li class="tag">{t}</li> }).collect_view()}
                            </ul>
                        </article>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
