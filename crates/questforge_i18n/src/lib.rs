//! QuestForge internationalization (i18n)
//!
//! Goals:
//! - Qt Linguist (`.ts`) catalogs, one file per locale
//! - Exact `(context, source, disambiguation)` lookup, falling back to
//!   the source text when no translation is available
//! - Positional `%N` message formatting with `%%` escapes
//! - Runtime locale switching with an app-provided changed callback;
//!   catalogs are immutable after load and swapped atomically

mod catalog;
mod error;
mod format;
mod linguist;
mod locale;
mod message;
mod state;

pub use catalog::{
    Catalog, CatalogStats, ContextStats, EntryStatus, Location, MessageKey, TranslationEntry,
};
pub use error::I18nError;
pub use format::format_positional;
pub use linguist::{load_ts, parse_ts, MalformedCatalog};
pub use locale::{catalog_file_candidates, locale_fallback_chain, normalize_locale};
pub use message::{ArgValue, Label, Message};
pub use state::Translator;

/// Convenience macro for building a translatable [`Label`].
///
/// Examples:
/// - `tr!("MainWindow", "Zoom")`
/// - `tr!("QuestResources", "Map", disambig = "resource_type")`
/// - `tr!("ChangeDialogIdDialog", "New id for %1 '%2':", kind, id)`
#[macro_export]
macro_rules! tr {
    ($ctx:literal, $src:literal) => {
        $crate::Label::msg($crate::Message::new($ctx, $src))
    };
    ($ctx:literal, $src:literal, disambig = $tag:expr) => {
        $crate::Label::msg($crate::Message::new($ctx, $src).disambiguation($tag))
    };
    ($ctx:literal, $src:literal, disambig = $tag:expr, $($arg:expr),+ $(,)?) => {{
        let mut m = $crate::Message::new($ctx, $src).disambiguation($tag);
        $(
            m = m.arg($arg);
        )*
        $crate::Label::msg(m)
    }};
    ($ctx:literal, $src:literal, $($arg:expr),+ $(,)?) => {{
        let mut m = $crate::Message::new($ctx, $src);
        $(
            m = m.arg($arg);
        )*
        $crate::Label::msg(m)
    }};
}
