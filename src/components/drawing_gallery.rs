//! Drawing Gallery Component
//!
//! Submitted drawings, each with a delete control.

use leptos::prelude::*;

use crate::config::DELETE_ICON;
use crate::store::{store_delete_drawing, use_app_store, AppStateStoreFields};

#[component]
pub fn DrawingGallery() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="drawing-gallery">
            <For
                each=move || store.gallery().read().drawings().to_vec()
                key=|drawing| drawing.id
                children=move |drawing| {
                    let url = drawing.record.image_url;
                    let delete_url = url.clone();
                    view! {
                        <li class="drawing-item">
                            <img class="drawing-image" src=url alt="Drawing" />
                            <img
                                class="delete-btn"
                                src=DELETE_ICON
                                alt="Delete Drawing"
                                on:click=move |_| store_delete_drawing(&store, &delete_url)
                            />
                        </li>
                    }
                }
            />
        </ul>
        <Show when=move || store.gallery().read().is_empty()>
            <p class="gallery-empty">"No drawings yet."</p>
        </Show>
    }
}
