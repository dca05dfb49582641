//! Gallery carousel with likes and copy-link.

use crate::i18n::t;
use cpbra_site::gallery::LIKES_STORAGE_KEY;
use cpbra_site::{Carousel, FetchDirection, Likes, MediaItem, Reaction};
use gloo::storage::{LocalStorage, Storage};
use gloo::timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const COPIED_NOTICE_MS: u32 = 1_500;

/// Carousel plus the fetch it is waiting on.
///
/// `fetch_seq` bumps on every new request so the fetch effect reruns even
/// when two requests point the same way.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    pub carousel: Carousel,
    pending: Option<FetchDirection>,
    fetch_seq: u32,
}

impl GalleryState {
    /// Empty carousel with the first batch already requested.
    #[must_use]
    pub fn awaiting_first_batch(window: usize) -> Self {
        let mut carousel = Carousel::new(window);
        carousel.begin_fetch();
        Self {
            carousel,
            pending: Some(FetchDirection::Right),
            fetch_seq: 0,
        }
    }

    #[must_use]
    pub fn preloaded(window: usize, media: Vec<MediaItem>) -> Self {
        let mut carousel = Carousel::new(window);
        carousel.absorb(media, FetchDirection::Right);
        Self {
            carousel,
            pending: None,
            fetch_seq: 0,
        }
    }

    #[must_use]
    pub const fn pending(&self) -> Option<FetchDirection> {
        self.pending
    }

    fn request(&mut self, direction: Option<FetchDirection>) {
        if let Some(direction) = direction {
            self.carousel.begin_fetch();
            self.pending = Some(direction);
            self.fetch_seq = self.fetch_seq.wrapping_add(1);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GalleryAction {
    Next,
    Prev,
    Loaded(Vec<MediaItem>, FetchDirection),
    Failed,
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            GalleryAction::Next => {
                let request = next.carousel.next();
                next.request(request);
            }
            GalleryAction::Prev => {
                let request = next.carousel.prev();
                next.request(request);
            }
            GalleryAction::Loaded(batch, direction) => {
                next.pending = None;
                next.carousel.absorb(batch, direction);
            }
            GalleryAction::Failed => {
                next.pending = None;
                next.carousel.fetch_failed();
            }
        }
        Rc::new(next)
    }
}

fn load_likes() -> Likes {
    let raw = LocalStorage::raw().get_item(LIKES_STORAGE_KEY).ok().flatten();
    raw.map_or_else(Likes::default, |raw| {
        Likes::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("Ignoring unreadable gallery likes: {err}");
            Likes::default()
        })
    })
}

fn save_likes(likes: &Likes) {
    if let Err(err) = LocalStorage::set(LIKES_STORAGE_KEY, likes) {
        log::warn!("Failed to persist gallery likes: {err}");
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryProps {
    /// Preloaded first batch; the media feed is only hit for later batches when set.
    #[prop_or_default]
    pub media: Option<Vec<MediaItem>>,
    #[prop_or_else(|| crate::config::site_config().gallery_window)]
    pub window: usize,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let state = {
        let window = props.window;
        let media = props.media.clone();
        use_reducer(move || match media {
            Some(media) => GalleryState::preloaded(window, media),
            None => GalleryState::awaiting_first_batch(window),
        })
    };
    let likes = use_state(Likes::default);
    let copied = use_state(|| None::<String>);

    {
        let likes = likes.clone();
        use_effect_with((), move |()| {
            likes.set(load_likes());
            || ()
        });
    }

    {
        let dispatcher = state.dispatcher();
        let pending = state.pending();
        use_effect_with(state.fetch_seq, move |_| {
            if let Some(direction) = pending {
                let url = crate::config::site_config().media_api.clone();
                spawn_local(async move {
                    match cpbra_site::load_media(&crate::feeds::FetchClient, &url).await {
                        Ok(batch) => dispatcher.dispatch(GalleryAction::Loaded(batch, direction)),
                        Err(_) => dispatcher.dispatch(GalleryAction::Failed),
                    }
                });
            }
            || ()
        });
    }

    let on_prev = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(GalleryAction::Prev))
    };
    let on_next = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(GalleryAction::Next))
    };

    let loading = state.carousel.is_loading();
    let visible = state.carousel.visible();

    let cards = visible.iter().map(|item| {
        let title = item.title.clone();
        let on_like = {
            let likes = likes.clone();
            let title = title.clone();
            Callback::from(move |_: MouseEvent| {
                let mut updated = (*likes).clone();
                updated.toggle(&title, Reaction::Like);
                save_likes(&updated);
                likes.set(updated);
            })
        };
        let on_copy = {
            let copied = copied.clone();
            let image = item.image.clone();
            let title = title.clone();
            Callback::from(move |_: MouseEvent| {
                let copied = copied.clone();
                let image = image.clone();
                let title = title.clone();
                spawn_local(async move {
                    match crate::dom::copy_to_clipboard(&image).await {
                        Ok(()) => {
                            copied.set(Some(title));
                            TimeoutFuture::new(COPIED_NOTICE_MS).await;
                            copied.set(None);
                        }
                        Err(err) => log::warn!("Failed to copy link: {err}"),
                    }
                });
            })
        };
        let on_open = {
            let image = item.image.clone();
            Callback::from(move |_: MouseEvent| crate::dom::open_in_new_tab(&image))
        };
        let liked = likes.is_liked(&title);
        let show_copied = copied.as_deref() == Some(title.as_str());

        html! {
            <div class="gallery-card">
                <div class="image-container">
                    <img src={item.image.clone()} alt={title.clone()} loading="lazy" onclick={on_open} />
                </div>
                <div class="card-content">
                    <p class="title">{ title.clone() }</p>
                    <p class="desc">{ item.description.clone() }</p>
                    <div class="buttons">
                        <button
                            type="button"
                            class={classes!("action-btn", "like", liked.then_some("active"))}
                            aria-pressed={liked.to_string()}
                            title={t("gallery.like")}
                            onclick={on_like}
                        >{ "♥" }</button>
                        <button type="button" class="action-btn share" title={t("gallery.copy")} onclick={on_copy}>{ "🔗" }</button>
                    </div>
                    if show_copied {
                        <p class="copied" role="status">{ t("gallery.copied") }</p>
                    }
                </div>
            </div>
        }
    });

    html! {
        <div class="gallery">
            <h2>{ t("gallery.title") }</h2>
            <div class="carousel">
                <button type="button" class="arrow prev" aria-label={t("gallery.prev")} disabled={loading} onclick={on_prev}>{ "‹" }</button>
                <div class="slides">
                    { for cards }
                    if visible.is_empty() && !loading {
                        <p class="empty">{ t("gallery.empty") }</p>
                    }
                </div>
                <button type="button" class="arrow next" aria-label={t("gallery.next")} disabled={loading} onclick={on_next}>{ "›" }</button>
            </div>
            if loading {
                <p class="loading" role="status">{ t("gallery.loading") }</p>
            }
        </div>
    }
}
