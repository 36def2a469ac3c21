use leptos::prelude::*;

const COPYRIGHT: &str = concat!(
    "© ",
    env!("BUILD_YEAR"),
    " Moctar Cherif Bichara - Tous droits réservés"
);

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 border-t border-blue-500/20 py-8 text-center">
            <p class="text-gray-400">{COPYRIGHT}</p>
        </footer>
    }
}
