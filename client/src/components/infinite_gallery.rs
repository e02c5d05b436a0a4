//! Bridge component between Leptos rendering and the `gallery` animator.
//!
//! ARCHITECTURE
//! ============
//! Leptos renders the repeated card strip and the hover overlay. On hydration
//! the scroller element is handed to `gallery::dom::Gallery`, which measures
//! the cards, drives the per-frame transform through `requestAnimationFrame`
//! and re-measures on resize. Pointer events go to the gallery core first and
//! the overlay signal mirrors whatever it decides.

use leptos::prelude::*;

use gallery::consts::{DEFAULT_REPEAT, DEFAULT_SCROLL_SPEED_PX_PER_SEC};
use gallery::item::{GalleryConfig, Item};
use gallery::sequence::{DisplaySlot, build_display_sequence};

#[cfg(feature = "hydrate")]
use gallery::dom::{Gallery, GalleryHandle};
#[cfg(feature = "hydrate")]
use gallery::engine::{GalleryCore, LayoutChange};
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// Horizontally auto-scrolling strip of item cards.
///
/// Scrolling pauses while a card is hovered and the hovered card shows its
/// description. An empty `items` list renders nothing.
#[component]
pub fn InfiniteGallery(
    #[prop(optional)] items: Vec<Item>,
    /// Pixels per second.
    #[prop(default = DEFAULT_SCROLL_SPEED_PX_PER_SEC)]
    scroll_speed: f64,
    /// Copies of `items` rendered back to back; raised to at least 2.
    #[prop(default = DEFAULT_REPEAT)]
    repeat: usize,
) -> impl IntoView {
    if items.is_empty() {
        return ().into_any();
    }

    let config = GalleryConfig::new(scroll_speed, repeat).unwrap_or_else(|err| {
        log::warn!("invalid gallery config, using defaults: {err}");
        GalleryConfig::default()
    });

    let base_len = items.len();
    let repeat = RwSignal::new(config.repeat);
    let hovered = RwSignal::new(None::<usize>);
    let scroller_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    let gallery = StoredValue::new_local(Rc::new(RefCell::new(Gallery::new(GalleryCore::new(
        items.clone(),
        config,
    )))));
    #[cfg(feature = "hydrate")]
    let handle = StoredValue::new_local(None::<GalleryHandle>);

    let items = StoredValue::new(items);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(scroller) = scroller_ref.get() else {
                return;
            };
            if handle.with_value(Option::is_some) {
                return;
            }
            let shared = gallery.get_value();
            shared.borrow_mut().attach(scroller.into());
            let started = Gallery::start(&shared, move |change| {
                if let LayoutChange::Resequenced { repeat: copies } = change {
                    repeat.set(copies);
                }
            });
            handle.set_value(Some(started));
        });

        on_cleanup(move || {
            handle.try_update_value(|h| {
                h.take();
            });
            gallery.try_with_value(|g| g.borrow_mut().detach());
        });
    }

    let pointer_enter = move |index: usize| {
        #[cfg(feature = "hydrate")]
        {
            let active = gallery.with_value(|g| {
                let mut g = g.borrow_mut();
                g.core_mut().pointer_enter(index);
                g.core().hovered()
            });
            hovered.set(active);
        }
        #[cfg(not(feature = "hydrate"))]
        hovered.set(Some(index));
    };

    let pointer_leave = move |index: usize| {
        #[cfg(feature = "hydrate")]
        {
            let active = gallery.with_value(|g| {
                let mut g = g.borrow_mut();
                g.core_mut().pointer_leave(index);
                g.core().hovered()
            });
            hovered.set(active);
        }
        #[cfg(not(feature = "hydrate"))]
        if hovered.get_untracked() == Some(index) {
            hovered.set(None);
        }
    };

    let slots = move || build_display_sequence(base_len, repeat.get());

    view! {
        <div class="gallery">
            <div class="gallery__glow" aria-hidden="true">
                <div class="gallery__glow-orb gallery__glow-orb--orange"></div>
                <div class="gallery__glow-orb gallery__glow-orb--pink"></div>
            </div>

            <div class="gallery__scroller" node_ref=scroller_ref>
                <For each=slots key=|slot: &DisplaySlot| slot.index let:slot>
                    {
                        let index = slot.index;
                        let active = move || hovered.get() == Some(index);
                        match items.with_value(|list| list.get(slot.source).cloned()) {
                            Some(item) => {
                                view! {
                                    <GalleryCard
                                        item=item
                                        active=Signal::derive(active)
                                        on_enter=Callback::new(move |()| pointer_enter(index))
                                        on_leave=Callback::new(move |()| pointer_leave(index))
                                    />
                                }
                                    .into_any()
                            }
                            None => ().into_any(),
                        }
                    }
                </For>
            </div>

            <div class="gallery__fade gallery__fade--left" aria-hidden="true"></div>
            <div class="gallery__fade gallery__fade--right" aria-hidden="true"></div>
        </div>
    }
    .into_any()
}

/// One card in the strip. `active` reveals the description overlay.
#[component]
fn GalleryCard(item: Item, active: Signal<bool>, on_enter: Callback<()>, on_leave: Callback<()>) -> impl IntoView {
    let Item { name, image, description } = item;
    let alt = name.clone();

    view! {
        <div
            class="gallery__card"
            class:gallery__card--active=move || active.get()
            on:mouseenter=move |_| on_enter.run(())
            on:mouseleave=move |_| on_leave.run(())
        >
            <div class="gallery__frame">
                <img class="gallery__image" src=image alt=alt/>
                <div class="gallery__shade"></div>
                <Show when=move || active.get()>
                    <div class="gallery__overlay">
                        <p class="gallery__description">{description.clone()}</p>
                    </div>
                </Show>
                <div class="gallery__accent"></div>
            </div>
            <div class="gallery__caption">
                <h3 class="gallery__name">{name}</h3>
                <div class="gallery__underline"></div>
            </div>
        </div>
    }
}
