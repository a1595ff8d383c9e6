use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::blog::posts::{self, BlogPost, ALL_CATEGORIES, CATEGORIES};
use crate::blog::{markup, share_links};
use crate::components::scroll::use_scroll_to_top;
use crate::Route;

fn found_label(count: usize) -> String {
    format!("{} article{} found", count, if count == 1 { "" } else { "s" })
}

#[derive(Properties, PartialEq)]
struct PostCardProps {
    post: &'static BlogPost,
}

#[function_component(PostCard)]
fn post_card(props: &PostCardProps) -> Html {
    let post = props.post;
    html! {
        <article class="blog-post-preview">
            <Link<Route> to={Route::BlogPost { id: post.id }}>
                <img src={post.image} alt={post.title} loading="lazy" class="blog-preview-image" />
                <span class="blog-category">{post.category}</span>
                <h2>{post.title}</h2>
                <p>{post.excerpt}</p>
                <div class="blog-meta">
                    <span class="blog-date">{post.display_date()}</span>
                    <span>{post.read_time}</span>
                </div>
            </Link<Route>>
        </article>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    use_scroll_to_top();
    let category = use_state(|| ALL_CATEGORIES);
    let search = use_state(String::new);

    let results = posts::filter(*category, &search);

    let oninput = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let category_buttons = CATEGORIES.iter().map(|name| {
        let active = *category == *name;
        let onclick = {
            let category = category.clone();
            Callback::from(move |_: MouseEvent| category.set(*name))
        };
        html! {
            <button class={classes!("category-button", active.then_some("active"))} {onclick}>
                {*name}
            </button>
        }
    });

    html! {
        <div class="blog-list-page">
            <section class="blog-list-hero">
                <h1>{"Blog"}</h1>
                <p>{"Web design tips, AI insights and practical advice for small business websites"}</p>
            </section>
            <section class="blog-filters">
                <input
                    type="search"
                    class="blog-search"
                    placeholder="Search articles..."
                    value={(*search).clone()}
                    {oninput}
                />
                <div class="blog-categories">{ for category_buttons }</div>
                <p class="blog-count">{found_label(results.len())}</p>
            </section>
            <section class="blog-list-section">
                if results.is_empty() {
                    <div class="blog-empty">
                        <h2>{"No articles found"}</h2>
                        <p>{"Try a different search term or category."}</p>
                    </div>
                } else {
                    { for results.into_iter().map(|post| html! { <PostCard {post} /> }) }
                }
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub id: u32,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    use_scroll_to_top();
    let clipboard = use_clipboard();

    let Some(post) = posts::find(props.id) else {
        return html! {
            <div class="blog-post-page not-found">
                <h1>{"Article Not Found"}</h1>
                <p>{"The article you're looking for doesn't exist or has been moved."}</p>
                <Link<Route> to={Route::Blog} classes="btn-primary">{"Back to Blog"}</Link<Route>>
            </div>
        };
    };

    let url = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();

    let copy = {
        let clipboard = clipboard.clone();
        let url = url.clone();
        Callback::from(move |_: MouseEvent| clipboard.write_text(url.clone()))
    };

    let related = posts::filter(post.category, "")
        .into_iter()
        .filter(|p| p.id != post.id)
        .take(2);

    html! {
        <div class="blog-post-page">
            <Link<Route> to={Route::Blog} classes="back-link">{"← Back to Blog"}</Link<Route>>
            <article class="blog-post">
                <header class="blog-post-header">
                    <span class="blog-category">{post.category}</span>
                    <h1>{post.title}</h1>
                    <div class="blog-meta">
                        <span>{post.author}</span>
                        <span class="blog-date">{post.display_date()}</span>
                        <span>{post.read_time}</span>
                    </div>
                    <img src={post.image} alt={post.title} class="blog-hero-image" />
                </header>
                <div class="blog-content">
                    { markup::render(post.content) }
                </div>
                <div class="blog-tags">
                    { for post.tags.iter().map(|tag| html! { <span class="blog-tag">{*tag}</span> }) }
                </div>
                <div class="blog-share">
                    <button class="btn-outline" onclick={copy}>
                        {if *clipboard.copied { "Link copied!" } else { "Share Article" }}
                    </button>
                    { for share_links(&url, post.title).into_iter().map(|link| html! {
                        <a href={link.href} target="_blank" rel="noopener noreferrer" class="share-link">
                            {link.network}
                        </a>
                    }) }
                </div>
            </article>
            <section class="related-posts">
                <h2>{"Related Articles"}</h2>
                { for related.map(|post| html! { <PostCard {post} /> }) }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(found_label(0), "0 articles found");
        assert_eq!(found_label(1), "1 article found");
        assert_eq!(found_label(6), "6 articles found");
    }
}
