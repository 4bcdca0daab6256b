//! The "about" card shown next to the page content: name, role and contact
//! details, collapsible on small screens.

use icondata::BsChevronDown;
use leptos::{ev, prelude::*};

use crate::contact::CONTACT_ADDRESS;
use crate::media::icon;

pub fn component() -> impl IntoView {
    let expanded = RwSignal::new(false);

    view! {
        <aside class="p-6 mb-8 rounded-2xl bg-card" data-sidebar="">
            <div class="flex gap-4 justify-between items-center">
                <div class="flex gap-4 items-center">
                    <img
                        src="/avatar.webp"
                        alt="Javiera Troncoso"
                        width="72"
                        height="72"
                        class="rounded-2xl"
                    />
                    <div>
                        <h2 class="text-xl font-semibold">"Javiera Troncoso"</h2>
                        <p class="py-1 px-2 text-xs text-gray-300 rounded-lg bg-black/30 w-fit">
                            "Artista digital"
                        </p>
                    </div>
                </div>
                <button
                    class="p-2 rounded-lg transition-colors cursor-pointer sm:hidden hover:bg-white/10"
                    aria-label="Mostrar contacto"
                    on:click=move |_| expanded.update(|open| *open = !*open)
                >
                    {icon(BsChevronDown, "size-4")}
                </button>
            </div>
            <div
                class="mt-6 text-sm text-gray-300 sm:block"
                class:hidden=move || !expanded.get()
            >
                <p class="mb-1">
                    <a href=format!("mailto:{CONTACT_ADDRESS}") class="hover:underline text-[#ffef5c]">
                        {CONTACT_ADDRESS}
                    </a>
                </p>
                <p>"Valparaíso, Chile"</p>
            </div>
        </aside>
    }
}
