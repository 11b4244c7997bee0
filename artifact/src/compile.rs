#[cfg(test)]
#[path = "compile_test.rs"]
mod compile_test;

use once_cell::sync::Lazy;
use regex::Regex;

/// `import ... from '...';` including multi-line specifier lists.
static IMPORT_FROM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)import\s.*?from\s+['"][^'"]+['"];?"#).unwrap());

/// Bare side-effect imports: `import 'lib';`.
static IMPORT_BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"import\s+['"][^'"]+['"];?"#).unwrap());

/// Any surviving import declaration. Used to verify sanitization.
static IMPORT_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*import\s").unwrap());

const EXPORT_DEFAULT: &str = "export default";
const DEFAULT_BINDING: &str = "__slide_default";

/// Names injected into the evaluation scope, in parameter order: the DOM
/// construction primitives, the charting namespace, and the icon namespace.
/// The evaluated source can reference these and nothing else.
pub const SCOPE_NAMES: [&str; 5] = ["el", "text", "svg", "Charts", "Icons"];

/// Remove every module-import declaration from untrusted source. The code
/// must not be able to pull in external modules; everything it may use is
/// injected through [`SCOPE_NAMES`].
#[must_use]
pub fn strip_imports(source: &str) -> String {
    let without_from = IMPORT_FROM.replace_all(source, "");
    IMPORT_BARE.replace_all(&without_from, "").into_owned()
}

/// True when the text still contains an import declaration.
#[must_use]
pub fn has_import_decl(source: &str) -> bool {
    IMPORT_DECL.is_match(source)
}

/// Rewrite a default export into a local binding returned at the end of the
/// text. Sources without a default export get a trailing `return null;`, so
/// the compiled body always evaluates to a renderable unit or null and
/// never throws for a missing export.
#[must_use]
pub fn normalize_exports(source: &str) -> String {
    if source.contains(EXPORT_DEFAULT) {
        let mut out = source.replacen(EXPORT_DEFAULT, &format!("const {DEFAULT_BINDING} ="), 1);
        out.push_str(&format!(";\nreturn {DEFAULT_BINDING};"));
        out
    } else {
        format!("{source};\nreturn null;")
    }
}

/// Full text pipeline: sanitize imports, then normalize the default export.
/// The result is the body of a JS function, so a top-level `return` is
/// legal. Stateless; re-run in full whenever the source changes.
#[must_use]
pub fn prepare_source(source: &str) -> String {
    normalize_exports(strip_imports(source).trim())
}

/// Failure anywhere in the compile/evaluate pipeline. Carries the original
/// raw source unmodified so the error panel can show what the model
/// actually produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CompileError {
    pub message: String,
    pub raw_source: String,
}

impl CompileError {
    #[must_use]
    pub fn new(message: impl Into<String>, raw_source: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raw_source: raw_source.into(),
        }
    }
}
