//! Host surface for compiled component artifacts.
//!
//! Evaluation happens in an effect after the host div mounts. A compile or
//! runtime failure swaps the surface for an error panel showing the message
//! and the raw source, so a bad generation never takes the page down.

use leptos::prelude::*;

/// Mounts the evaluated component into a plain div sized by the parent.
/// Re-evaluates whenever `source` changes.
#[component]
pub fn ComponentPreview(source: String) -> impl IntoView {
    let host_ref = NodeRef::<leptos::html::Div>::new();
    let error = RwSignal::new(None::<(String, String)>);
    let source = StoredValue::new(source);

    Effect::new(move || {
        let Some(host) = host_ref.get() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::util::sandbox;

            let outcome = source.with_value(|src| sandbox::compile_and_run(src));
            match outcome {
                Ok(Some(component)) => {
                    if let Err(err) = component.mount(&host) {
                        leptos::logging::warn!("slide mount failed: {err}");
                        error.set(Some((err.message, err.raw_source)));
                    } else {
                        error.set(None);
                    }
                }
                Ok(None) => {
                    error.set(Some((
                        "The generated code did not produce a component.".to_owned(),
                        source.get_value(),
                    )));
                }
                Err(err) => {
                    leptos::logging::warn!("slide compile failed: {err}");
                    error.set(Some((err.message, err.raw_source)));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (host, source);
        }
    });

    view! {
        <div class="component-preview">
            <div class="component-preview__host" node_ref=host_ref></div>
            {move || {
                error.get().map(|(message, raw_source)| {
                    view! {
                        <div class="component-preview__error">
                            <div class="component-preview__error-message">{message}</div>
                            <pre class="component-preview__error-source">{raw_source}</pre>
                        </div>
                    }
                })
            }}
        </div>
    }
}
