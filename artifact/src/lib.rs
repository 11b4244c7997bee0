//! # artifact
//!
//! Pure logic for slide artifacts: classification of persisted assistant
//! text, payload validity, the text stages of the component compile
//! pipeline, sandbox document construction, and scale/fit math.
//!
//! Nothing in this crate touches the browser, so every module is natively
//! testable. The `slidechat` client supplies the DOM and network glue.

pub mod classify;
pub mod compile;
pub mod consts;
pub mod doc;
pub mod fit;
pub mod payload;
pub mod progress;
