use leptos::{html, prelude::*};

use crate::content::IDENTITY;
use crate::image::ImageState;

/// Profile picture with an initials badge standing in when the image can't be loaded.
#[component]
pub fn Avatar() -> impl IntoView {
    let image = RwSignal::new(ImageState::default());
    let img_ref = NodeRef::<html::Img>::new();

    // the image may already have failed before hydration attached `on:error`;
    // tracking the ref re-runs this once the node is bound
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            image.update(|s| s.check_loaded(img.complete(), img.natural_width()));
        }
    });

    view! {
        <div class="relative w-48 h-48 mx-auto mb-8 group">
            <div class="absolute inset-0 bg-gradient-to-r from-blue-500 via-cyan-500 to-blue-500 rounded-full animate-spin-slow blur-md opacity-75"></div>
            <div class="relative w-full h-full rounded-full bg-gradient-to-r from-blue-500 to-cyan-500 p-1.5 transform transition-transform group-hover:scale-110 duration-300">
                <img
                    node_ref=img_ref
                    src=IDENTITY.profile_image
                    alt=IDENTITY.name
                    on:error=move |_| image.update(ImageState::on_error)
                    class=move || {
                        if image.with(ImageState::image_visible) {
                            "w-full h-full rounded-full object-cover border-4 border-gray-900"
                        } else {
                            "hidden"
                        }
                    }
                />
                <div class=move || {
                    if image.with(ImageState::badge_visible) {
                        "w-full h-full rounded-full bg-gradient-to-br from-gray-800 to-gray-900 flex items-center justify-center text-5xl font-bold border-4 border-gray-900"
                    } else {
                        "hidden"
                    }
                }>{IDENTITY.initials}</div>
            </div>
            <div class="absolute bottom-2 right-2 w-6 h-6 bg-green-500 rounded-full border-4 border-gray-900 animate-pulse"></div>
        </div>
    }
}
