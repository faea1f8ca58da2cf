use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::I18nError;
use crate::format::format_positional;
use crate::linguist;
use crate::locale::{catalog_file_candidates, normalize_locale};
use crate::message::{Label, Message};

/// Runtime translation state for one application.
///
/// Constructed by the app and passed by reference wherever strings are
/// resolved; tests build their own instances. The active catalog lives
/// behind an `Arc` that is swapped wholesale on a locale switch, so
/// readers never observe a half-loaded catalog.
pub struct Translator {
    dir: PathBuf,
    base: String,
    source_locale: String,
    locale: RwLock<String>,
    active: RwLock<Option<Arc<Catalog>>>,
    changed: Mutex<Option<fn()>>,
}

impl Translator {
    /// Create a translator reading `<dir>/<base>_<locale>.ts` files,
    /// with `"en"` as the source language.
    pub fn new(dir: impl Into<PathBuf>, base: impl Into<String>) -> Self {
        Self::with_source_locale(dir, base, "en")
    }

    /// Create a translator with an explicit source language. While the
    /// source language is active, lookups are identity (no catalog).
    pub fn with_source_locale(
        dir: impl Into<PathBuf>,
        base: impl Into<String>,
        source_locale: impl Into<String>,
    ) -> Self {
        let source_locale = normalize_locale(&source_locale.into());
        Self {
            dir: dir.into(),
            base: base.into(),
            locale: RwLock::new(source_locale.clone()),
            source_locale,
            active: RwLock::new(None),
            changed: Mutex::new(None),
        }
    }

    /// Set the locale-changed callback.
    ///
    /// The app should set this to whatever re-renders its widgets.
    pub fn set_changed_callback(&self, callback: fn()) {
        *self.changed.lock().unwrap() = Some(callback);
    }

    fn trigger_changed(&self) {
        if let Some(cb) = *self.changed.lock().unwrap() {
            cb();
        }
    }

    /// The currently active locale tag.
    pub fn locale(&self) -> String {
        self.locale.read().unwrap().clone()
    }

    /// The active catalog, if a non-source locale is loaded.
    pub fn catalog(&self) -> Option<Arc<Catalog>> {
        self.active.read().unwrap().clone()
    }

    /// Switch to another locale, loading its catalog from disk.
    ///
    /// All-or-nothing: on any load failure the previous catalog stays
    /// active, a diagnostic goes to the log, and the error is returned
    /// to the caller once. Switching to the source language clears the
    /// catalog and lookups become identity.
    pub fn set_locale(&self, locale: &str) -> Result<(), I18nError> {
        let loc = normalize_locale(locale);
        if loc.is_empty() {
            return Ok(());
        }

        let current = self.locale.read().unwrap().clone();
        if current == loc {
            return Ok(());
        }

        if self.is_source_locale(&loc) {
            debug!("Translator::set_locale: {} -> {} (source language)", current, loc);
            *self.active.write().unwrap() = None;
            *self.locale.write().unwrap() = loc;
            self.trigger_changed();
            return Ok(());
        }

        let catalog = match self.load_catalog(&loc) {
            Ok(cat) => cat,
            Err(e) => {
                warn!(
                    locale = %loc,
                    error = %e,
                    "failed to activate locale, keeping `{}`",
                    current
                );
                return Err(e);
            }
        };

        debug!("Translator::set_locale: {} -> {}", current, loc);
        *self.active.write().unwrap() = Some(Arc::new(catalog));
        *self.locale.write().unwrap() = loc;
        self.trigger_changed();
        Ok(())
    }

    fn is_source_locale(&self, loc: &str) -> bool {
        loc == self.source_locale || loc.split('_').next() == Some(self.source_locale.as_str())
    }

    fn load_catalog(&self, locale: &str) -> Result<Catalog, I18nError> {
        for path in catalog_file_candidates(&self.dir, &self.base, locale) {
            if path.exists() {
                return linguist::load_ts(&path);
            }
        }
        Err(I18nError::MissingCatalog {
            locale: locale.to_string(),
        })
    }

    /// Translate a message: catalog lookup (falling back to the source
    /// text) followed by positional formatting.
    pub fn tr(&self, msg: &Message) -> String {
        let args = msg.arg_strings();
        let template = match self.catalog() {
            Some(cat) => cat
                .lookup(&msg.context, &msg.source, msg.disambiguation.as_deref())
                .to_string(),
            None => msg.source.to_string(),
        };
        format_positional(&template, &args)
    }

    /// Translate a label to a displayable string.
    pub fn resolve_label(&self, label: &Label) -> String {
        match label {
            Label::Raw(s) => s.clone(),
            Label::Msg(m) => self.tr(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    const ES: &str = r#"<TS version="2.1" language="es_ES">
<context>
    <name>MainWindow</name>
    <message><source>Zoom</source><translation>Ampliar</translation></message>
    <message>
        <source>New id for %1 '%2':</source>
        <translation>Nuevo id para %1 '%2':</translation>
    </message>
</context>
</TS>
"#;

    fn setup(dir: &std::path::Path) {
        fs::write(dir.join("quest_editor_es.ts"), ES).unwrap();
        fs::write(dir.join("quest_editor_de.ts"), "<TS><context>").unwrap();
    }

    #[test]
    fn switch_and_translate() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());
        let tr = Translator::new(tmp.path(), "quest_editor");

        // Source language: identity.
        let msg = Message::new("MainWindow", "Zoom");
        assert_eq!(tr.tr(&msg), "Zoom");

        tr.set_locale("es").unwrap();
        assert_eq!(tr.locale(), "es");
        assert_eq!(tr.tr(&msg), "Ampliar");
    }

    #[test]
    fn regional_tag_falls_back_to_language_file() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());
        let tr = Translator::new(tmp.path(), "quest_editor");

        // No quest_editor_es_ES.ts on disk; the bare-language file serves.
        tr.set_locale("es-ES").unwrap();
        assert_eq!(tr.locale(), "es_ES");
        assert_eq!(tr.tr(&Message::new("MainWindow", "Zoom")), "Ampliar");
    }

    #[test]
    fn tr_formats_positional_args() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());
        let tr = Translator::new(tmp.path(), "quest_editor");
        tr.set_locale("es").unwrap();

        let msg = Message::new("MainWindow", "New id for %1 '%2':")
            .arg("Map")
            .arg("boss_room");
        assert_eq!(tr.tr(&msg), "Nuevo id para Map 'boss_room':");
    }

    #[test]
    fn missing_translation_falls_back_to_source() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());
        let tr = Translator::new(tmp.path(), "quest_editor");
        tr.set_locale("es").unwrap();

        assert_eq!(tr.tr(&Message::new("MainWindow", "Quit")), "Quit");
    }

    #[test]
    fn failed_switch_keeps_previous_catalog() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());
        let tr = Translator::new(tmp.path(), "quest_editor");
        tr.set_locale("es").unwrap();

        // Malformed catalog on disk.
        let err = tr.set_locale("de").unwrap_err();
        assert!(matches!(
            err,
            I18nError::Malformed(linguist::MalformedCatalog::Xml(_))
        ));

        // Previous state fully functional.
        assert_eq!(tr.locale(), "es");
        assert_eq!(tr.tr(&Message::new("MainWindow", "Zoom")), "Ampliar");
    }

    #[test]
    fn unknown_locale_is_missing_catalog() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());
        let tr = Translator::new(tmp.path(), "quest_editor");

        let err = tr.set_locale("ja").unwrap_err();
        assert!(matches!(err, I18nError::MissingCatalog { ref locale } if locale == "ja"));
        // Still running in the source language.
        assert_eq!(tr.tr(&Message::new("MainWindow", "Zoom")), "Zoom");
    }

    #[test]
    fn switching_back_to_source_clears_catalog() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());
        let tr = Translator::new(tmp.path(), "quest_editor");
        tr.set_locale("es").unwrap();
        assert!(tr.catalog().is_some());

        tr.set_locale("en-US").unwrap();
        assert!(tr.catalog().is_none());
        assert_eq!(tr.tr(&Message::new("MainWindow", "Zoom")), "Zoom");
    }

    #[test]
    fn changed_callback_fires_on_success_only() {
        static CHANGES: AtomicUsize = AtomicUsize::new(0);
        fn on_change() {
            CHANGES.fetch_add(1, Ordering::SeqCst);
        }

        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());
        let tr = Translator::new(tmp.path(), "quest_editor");
        tr.set_changed_callback(on_change);

        tr.set_locale("es").unwrap();
        assert_eq!(CHANGES.load(Ordering::SeqCst), 1);

        // Failed switch: no callback.
        let _ = tr.set_locale("de");
        assert_eq!(CHANGES.load(Ordering::SeqCst), 1);

        // Same locale again: no-op, no callback.
        tr.set_locale("es").unwrap();
        assert_eq!(CHANGES.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn resolve_label_variants() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());
        let tr = Translator::new(tmp.path(), "quest_editor");
        tr.set_locale("es").unwrap();

        assert_eq!(tr.resolve_label(&Label::raw("boss_room")), "boss_room");
        assert_eq!(tr.resolve_label(&crate::tr!("MainWindow", "Zoom")), "Ampliar");
    }

    #[test]
    fn catalog_is_shared_by_arc_swap() {
        let tmp = tempfile::tempdir().unwrap();
        setup(tmp.path());
        let tr = Translator::new(tmp.path(), "quest_editor");
        tr.set_locale("es").unwrap();

        let held = tr.catalog().unwrap();
        tr.set_locale("en").unwrap();

        // A reader holding the old catalog keeps a consistent view.
        assert_eq!(held.lookup("MainWindow", "Zoom", None), "Ampliar");
        assert!(tr.catalog().is_none());
    }
}
