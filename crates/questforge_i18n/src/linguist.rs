//! Qt Linguist (`.ts`) catalog backend.
//!
//! A `.ts` document declares a target locale and an ordered list of
//! `<context>` blocks; each block holds `<message>` entries with a
//! `<source>`, an optional `<comment>` disambiguation tag, an optional
//! `<extracomment>` translator note, optional `<location>` provenance
//! hints, and a `<translation>` with a status flag.
//!
//! Loading is all-or-nothing: any structural problem aborts with
//! [`MalformedCatalog`] and no partial catalog is produced.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};
use thiserror::Error;

use crate::catalog::{Catalog, EntryStatus, Location, TranslationEntry};
use crate::error::I18nError;

#[derive(Debug, Error)]
pub enum MalformedCatalog {
    #[error("catalog is not well-formed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("unexpected root element `{0}`, expected `TS`")]
    UnexpectedRoot(String),

    #[error("message without <source> in context `{context}`")]
    MissingSource { context: String },
}

/// Read and parse a `.ts` catalog file.
pub fn load_ts(path: &Path) -> Result<Catalog, I18nError> {
    let src = fs::read_to_string(path).map_err(|source| I18nError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_ts(&src)?)
}

/// Parse a `.ts` document into a [`Catalog`].
///
/// Vanished (and Qt's `obsolete`) entries parse fine and are kept as
/// inactive. Duplicate `(context, source, disambiguation)` keys resolve
/// last-write-wins.
pub fn parse_ts(src: &str) -> Result<Catalog, MalformedCatalog> {
    // Qt Linguist files carry a `<!DOCTYPE TS>` declaration, which
    // roxmltree rejects unless DTDs are explicitly allowed.
    let doc = Document::parse_with_options(
        src,
        ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        },
    )?;
    let root = doc.root_element();
    if root.tag_name().name() != "TS" {
        return Err(MalformedCatalog::UnexpectedRoot(
            root.tag_name().name().to_string(),
        ));
    }

    let locale = root.attribute("language").unwrap_or_default();
    let mut catalog = Catalog::new(locale);

    for context in root
        .children()
        .filter(|n| n.is_element() && n.has_tag_name("context"))
    {
        let name = context
            .children()
            .find(|n| n.has_tag_name("name"))
            .map(element_text)
            .unwrap_or_default();

        for message in context
            .children()
            .filter(|n| n.is_element() && n.has_tag_name("message"))
        {
            catalog.push_entry(parse_message(&name, message)?);
        }
    }

    Ok(catalog)
}

fn parse_message(context: &str, node: Node<'_, '_>) -> Result<TranslationEntry, MalformedCatalog> {
    let mut source_text = None;
    let mut disambiguation = None;
    let mut translator_note = None;
    let mut translation_text = String::new();
    let mut status = EntryStatus::Unfinished;
    let mut locations = Vec::new();

    for child in node.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "source" => source_text = Some(element_text(child)),
            "comment" => disambiguation = Some(element_text(child)),
            "extracomment" => translator_note = Some(element_text(child)),
            "location" => locations.push(Location {
                file: child.attribute("filename").unwrap_or_default().to_string(),
                line: child
                    .attribute("line")
                    .and_then(|l| l.parse().ok())
                    .unwrap_or(0),
            }),
            "translation" => {
                status = match child.attribute("type") {
                    Some("unfinished") => EntryStatus::Unfinished,
                    Some("vanished") | Some("obsolete") => EntryStatus::Vanished,
                    _ => EntryStatus::Finished,
                };
                // Plural (numerus) messages carry their forms in child
                // elements; this subsystem is single-form, so the first
                // form stands in and parsing does not fail.
                translation_text = match child
                    .children()
                    .find(|n| n.has_tag_name("numerusform"))
                {
                    Some(form) => element_text(form),
                    None => element_text(child),
                };
            }
            _ => {}
        }
    }

    let source_text = source_text.ok_or_else(|| MalformedCatalog::MissingSource {
        context: context.to_string(),
    })?;

    // An empty finished translation is a draft in all but name.
    if translation_text.is_empty() && status == EntryStatus::Finished {
        status = EntryStatus::Unfinished;
    }

    Ok(TranslationEntry {
        context: context.to_string(),
        source_text,
        disambiguation,
        translation_text,
        status,
        locations,
        translator_note,
    })
}

/// Concatenated text content of an element's direct text nodes.
/// Embedded newlines are significant and preserved as-is.
fn element_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
