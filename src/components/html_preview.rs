//! Isolated rendering of generated HTML documents.
//!
//! The document goes into a sandboxed iframe via `srcdoc`, so its scripts
//! and styles cannot touch the host page. The thumbnail variant pins the
//! document body to the virtual stage; the modal variant carries its own
//! fit script and scales itself to the viewport.

use leptos::prelude::*;

use artifact::consts::{VIRTUAL_HEIGHT, VIRTUAL_WIDTH};
use artifact::doc::{modal_doc, thumbnail_doc};

const SANDBOX: &str = "allow-scripts allow-same-origin";

/// Iframe rendered at the virtual stage size; the surrounding card scales
/// it down. Pointer events are disabled so a click opens the modal instead
/// of landing inside the document.
#[component]
pub fn HtmlThumbnail(html: String) -> impl IntoView {
    view! {
        <iframe
            class="html-preview html-preview--thumbnail"
            srcdoc=thumbnail_doc(&html)
            sandbox=SANDBOX
            width=VIRTUAL_WIDTH.to_string()
            height=VIRTUAL_HEIGHT.to_string()
            style="pointer-events: none; border: 0;"
            title="Slide preview"
        ></iframe>
    }
}

/// Full-viewport iframe for the modal. The injected fit script inside the
/// document handles scaling and re-fits on resize.
#[component]
pub fn HtmlModal(html: String) -> impl IntoView {
    view! {
        <iframe
            class="html-preview html-preview--modal"
            srcdoc=modal_doc(&html)
            sandbox=SANDBOX
            style="width: 100%; height: 100%; border: 0;"
            title="Slide"
        ></iframe>
    }
}
