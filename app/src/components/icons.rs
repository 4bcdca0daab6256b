use leptos::{
    html::{a, div, span},
    prelude::*,
};

pub fn component() -> impl IntoView {
    div().class("flex flex-row gap-3 items-center h-10").child((
        a().href("https://www.instagram.com/jtroncoso.art/")
            .rel("noopener noreferrer")
            .target("_blank")
            .aria_label("Instagram")
            .class("transition-all text-white duration-500 size-6 hover:text-[#ffef5c]")
            .child(
                span().class("text-white size-6").child("IG"), // Instagram text
            ),
        a().href("https://www.behance.net/jtroncoso")
            .rel("noopener noreferrer")
            .target("_blank")
            .aria_label("Behance")
            .class("transition-all text-white duration-500 size-6 hover:text-[#ffef5c]")
            .child(
                span().class("text-white size-6").child("Be"), // Behance text
            ),
        a().href("https://www.linkedin.com/in/jtroncoso")
            .rel("noopener noreferrer")
            .target("_blank")
            .aria_label("LinkedIn")
            .class("transition-all text-white duration-500 size-6 hover:text-[#ffef5c]")
            .child(
                span().class("text-white size-6").child("in"), // LinkedIn text
            ),
    ))
}
