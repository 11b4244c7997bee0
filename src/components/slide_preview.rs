//! Thumbnail card and full-screen modal for artifact messages.
//!
//! Every artifact renders on a virtual 1280x720 stage. The thumbnail
//! measures its own card width and scales the stage down to fit; clicking
//! it opens a modal where HTML documents fit themselves via the injected
//! script and the other kinds are fitted from here.

use leptos::prelude::*;

use artifact::consts::{MODAL_TARGET_WIDTH, VIRTUAL_HEIGHT, VIRTUAL_WIDTH};
use artifact::fit;
use artifact::payload::ArtifactPayload;

use crate::components::chart_blocks::ChartBlocks;
use crate::components::component_preview::ComponentPreview;
use crate::components::html_preview::{HtmlModal, HtmlThumbnail};

fn stage_content(payload: ArtifactPayload) -> AnyView {
    match payload {
        ArtifactPayload::ComponentSource { source } => {
            view! { <ComponentPreview source=source/> }.into_any()
        }
        ArtifactPayload::HtmlDocument { html } => view! { <HtmlThumbnail html=html/> }.into_any(),
        ArtifactPayload::ChartBlocks { title, subtitle, blocks } => {
            view! { <ChartBlocks title=title subtitle=subtitle blocks=blocks/> }.into_any()
        }
    }
}

/// One artifact surface: scaled-down card inline in the transcript, modal
/// on click.
#[component]
pub fn SlidePreview(payload: ArtifactPayload) -> impl IntoView {
    let payload = StoredValue::new(payload);
    let open = RwSignal::new(false);

    // Thumbnail: track the card's width and derive the stage scale from it.
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let card_width = RwSignal::new(VIRTUAL_WIDTH);

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            if let Some(card) = card_ref.get_untracked() {
                let width = f64::from(card.client_width());
                if width > 0.0 {
                    card_width.set(width);
                }
            }
        };
        Effect::new(move || {
            // Runs once the card mounts.
            let _ = card_ref.get();
            measure();
        });
        let resize = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || resize.remove());
    }

    let card_style = move || {
        format!(
            "position: relative; overflow: hidden; height: {:.2}px;",
            fit::thumbnail_height(card_width.get())
        )
    };
    let thumb_stage_style = move || {
        format!(
            "width: {VIRTUAL_WIDTH}px; height: {VIRTUAL_HEIGHT}px; \
             transform: scale({:.4}); transform-origin: top left;",
            fit::thumbnail_scale(card_width.get())
        )
    };

    // Modal fit for the kinds rendered by the host. Polls while open, same
    // cadence the HTML document's own fit script uses.
    let modal_stage_ref = NodeRef::<leptos::html::Div>::new();
    let modal_scale = RwSignal::new(1.0_f64);

    Effect::new(move || {
        if !open.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use artifact::consts::FIT_POLL_MS;

            while open.get_untracked() {
                if let (Some(window), Some(stage)) =
                    (web_sys::window(), modal_stage_ref.get_untracked())
                {
                    let vw = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                    let vh = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                    if vw > 0.0 && vh > 0.0 {
                        let content_h = f64::from(stage.scroll_height());
                        modal_scale.set(fit::modal_scale(vw, vh, content_h));
                    }
                }
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    FIT_POLL_MS,
                )))
                .await;
            }
        });
    });

    #[cfg(feature = "hydrate")]
    {
        let escape = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && open.get_untracked() {
                open.set(false);
            }
        });
        on_cleanup(move || escape.remove());
    }

    let modal_body = move || match payload.get_value() {
        ArtifactPayload::HtmlDocument { html } => view! { <HtmlModal html=html/> }.into_any(),
        other => {
            let stage_style = move || {
                format!(
                    "width: {MODAL_TARGET_WIDTH}px; position: absolute; left: 50%; top: 50%; \
                     transform: translate(-50%, -50%) scale({:.4}); \
                     transform-origin: center center;",
                    modal_scale.get()
                )
            };
            view! {
                <div class="slide-modal__stage" node_ref=modal_stage_ref style=stage_style>
                    {stage_content(other)}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="slide-preview">
            <div
                class="slide-preview__card"
                node_ref=card_ref
                style=card_style
                on:click=move |_| open.set(true)
            >
                <div class="slide-preview__stage" style=thumb_stage_style>
                    {stage_content(payload.get_value())}
                </div>
                <div class="slide-preview__hint">"Click to expand"</div>
            </div>

            <Show when=move || open.get()>
                <div class="slide-modal" on:click=move |_| open.set(false)>
                    <button class="slide-modal__close" on:click=move |_| open.set(false)>
                        "\u{2715}"
                    </button>
                    <div class="slide-modal__body" on:click=move |ev| ev.stop_propagation()>
                        {modal_body}
                    </div>
                </div>
            </Show>
        </div>
    }
}
