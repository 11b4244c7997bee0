#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::{
    FIT_DAMPING, FIT_POLL_MS, MODAL_MIN_HEIGHT, MODAL_TARGET_WIDTH, VIRTUAL_HEIGHT, VIRTUAL_WIDTH,
};

static BODY_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<body([^>]*)>").unwrap());
static BODY_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</body>").unwrap());

const HEAD_CLOSE: &str = "</head>";

/// Container id the fit script targets inside the modal document.
pub const SLIDE_CONTAINER_ID: &str = "slide-container";

/// Build the thumbnail document: the original HTML with a style block that
/// pins the body to the fixed virtual canvas. The host renders the result
/// at native size and scales it down visually.
///
/// Documents without a `</head>` are returned unchanged and render unpinned.
#[must_use]
pub fn thumbnail_doc(html: &str) -> String {
    let style = format!(
        "<style>\n\
         body {{\n\
           width: {VIRTUAL_WIDTH}px;\n\
           height: {VIRTUAL_HEIGHT}px;\n\
           overflow: hidden;\n\
           margin: 0;\n\
           transform-origin: top left;\n\
         }}\n\
         </style>{HEAD_CLOSE}"
    );
    html.replacen(HEAD_CLOSE, &style, 1)
}

/// Build the modal document: the body content is wrapped in a fixed-width,
/// absolutely centered container, and a host-injected script keeps the
/// container scaled to the viewport.
///
/// The script is the in-document mirror of [`crate::fit::modal_scale`]: it
/// reads the container's natural height, floors it, and rescales on resize,
/// on load, and on a fixed polling interval since the untrusted content
/// provides no resize notification.
#[must_use]
pub fn modal_doc(html: &str) -> String {
    let injected = format!(
        "<style>\n\
         html, body {{ width: 100%; height: 100%; margin: 0; padding: 0; overflow: hidden; }}\n\
         body {{ background: #f8fafc; }}\n\
         #{SLIDE_CONTAINER_ID} {{\n\
           width: {MODAL_TARGET_WIDTH}px;\n\
           position: absolute;\n\
           left: 50%;\n\
           top: 50%;\n\
           background: white;\n\
           transform-origin: center center;\n\
           overflow: hidden;\n\
         }}\n\
         </style>\n\
         <script>\n\
         function fit() {{\n\
           const container = document.getElementById('{SLIDE_CONTAINER_ID}');\n\
           if (!container) return;\n\
           const contentH = Math.max({MODAL_MIN_HEIGHT}, container.scrollHeight);\n\
           const scale = Math.min(window.innerWidth / {MODAL_TARGET_WIDTH}, window.innerHeight / contentH) * {FIT_DAMPING};\n\
           container.style.transform = 'translate(-50%, -50%) scale(' + scale + ')';\n\
         }}\n\
         window.addEventListener('resize', fit);\n\
         window.addEventListener('load', fit);\n\
         setInterval(fit, {FIT_POLL_MS});\n\
         </script>{HEAD_CLOSE}"
    );

    let with_head = html.replacen(HEAD_CLOSE, &injected, 1);
    let with_open = BODY_OPEN.replacen(
        &with_head,
        1,
        format!("<body$1><div id=\"{SLIDE_CONTAINER_ID}\">"),
    );
    BODY_CLOSE.replacen(&with_open, 1, "</div></body>").into_owned()
}
