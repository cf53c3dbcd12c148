//! Single-size page pipeline
//!
//! Provides `assemble`, which runs parse -> classify -> suggest -> compose
//! and renders the Markdown page plus the requested JSON-LD documents.
//! CLI, bulk and WASM callers all go through here so they produce
//! identical output for the same input.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::content::{compose, sanitize, PageCopy};
use crate::docx::to_docx;
use crate::error::{Error, Result};
use crate::parse::{parse_tyre_size, TyreSize};
use crate::schema::SchemaKind;
use crate::segment::Segment;
use crate::spec::SPEC;
use crate::suggest::suggest;

// ─── Config / Result types ───────────────────────────────────────────

/// Which structured-data documents to include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    pub include_product_schema: bool,
    pub include_faq_schema: bool,
    pub include_local_business_schema: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            include_product_schema: true,
            include_faq_schema: true,
            include_local_business_schema: false,
        }
    }
}

impl PageOptions {
    /// Requested schema kinds in output order
    pub fn schema_kinds(&self) -> Vec<SchemaKind> {
        [
            (SchemaKind::Product, self.include_product_schema),
            (SchemaKind::Faq, self.include_faq_schema),
            (SchemaKind::LocalBusiness, self.include_local_business_schema),
        ]
        .into_iter()
        .filter_map(|(kind, on)| on.then_some(kind))
        .collect()
    }
}

/// Everything generated for one size
#[derive(Debug, Clone)]
pub struct PageResult {
    pub size: TyreSize,
    pub segment: Segment,
    pub copy: PageCopy,
    pub suggestions: Vec<TyreSize>,
    pub markdown: String,
    pub schemas: Vec<(SchemaKind, Value)>,
}

impl PageResult {
    pub fn canonical(&self) -> String {
        self.size.canonical()
    }

    pub fn body_word_count(&self) -> usize {
        self.copy.body_word_count()
    }

    /// One-line status, e.g. for a CLI
    pub fn summary(&self) -> String {
        sanitize(&format!(
            "Generated for {} [{}]. Approx body words: {} (target {} across sections).",
            self.size,
            self.segment,
            self.body_word_count(),
            SPEC.word_target
        ))
    }

    /// Output filename -> bytes: Markdown, docx, then each JSON-LD document
    pub fn files(&self) -> Result<IndexMap<String, Vec<u8>>> {
        let stem = self.size.file_stem();
        let mut files = IndexMap::new();
        files.insert(format!("{}.md", stem), self.markdown.clone().into_bytes());
        files.insert(format!("{}.docx", stem), to_docx(&self.markdown)?);
        for (kind, doc) in &self.schemas {
            let json = serde_json::to_string_pretty(doc)?;
            files.insert(kind.file_name(&self.size), sanitize(&json).into_bytes());
        }
        Ok(files)
    }
}

// ─── Pipeline ────────────────────────────────────────────────────────

/// Generate the page for a raw size string.
///
/// Fails only with [`Error::InvalidSizeFormat`]; nothing after parsing
/// runs for an unrecognised size.
pub fn assemble(raw: &str, config: &GeneratorConfig) -> Result<PageResult> {
    let size = parse_tyre_size(raw).ok_or_else(|| Error::InvalidSizeFormat {
        input: raw.to_string(),
    })?;
    Ok(assemble_size(size, config))
}

/// Generate the page for an already parsed size
pub fn assemble_size(size: TyreSize, config: &GeneratorConfig) -> PageResult {
    let segment = Segment::of(&size);
    let copy = compose(&size, segment, &config.brand);
    let suggestions = suggest(&size, segment);
    let markdown = render_markdown(&size, &copy, &suggestions);
    let schemas = config
        .options
        .schema_kinds()
        .into_iter()
        .map(|kind| (kind, kind.build(&size, &config.brand)))
        .collect();

    debug!("Generated page for {} [{}]", size, segment);

    PageResult {
        size,
        segment,
        copy,
        suggestions,
        markdown,
        schemas,
    }
}

/// Render the page body in fixed section order
pub fn render_markdown(size: &TyreSize, copy: &PageCopy, suggestions: &[TyreSize]) -> String {
    let others: Vec<String> = suggestions.iter().map(TyreSize::canonical).collect();
    let b = &copy.bullets;
    let content = format!(
        "Target Keywords: {keywords}

Meta Title: {title}

Meta Description: {description}

H1: {size} Tyres

Intro (50\u{2013}70 words)
{intro}

H2: Buy {size} Tyres Online
{buy}

H2: Why Choose {size} Tyres?
- {b0}
- {b1}
- {b2}
- {b3}

H2: Other Popular Sizes
\u{2022} {others}

CTA:
{cta}",
        keywords = copy.keywords.join(", "),
        title = copy.meta_title,
        description = copy.meta_description,
        intro = copy.intro,
        buy = copy.buy,
        b0 = b[0],
        b1 = b[1],
        b2 = b[2],
        b3 = b[3],
        others = others.join(" \u{2022} "),
        cta = copy.cta,
    );
    sanitize(&content)
}

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// WASM-friendly generation: Markdown on success, validation message otherwise
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "generatePageMarkdown")]
pub fn generate_page_markdown_wasm(raw: &str) -> String {
    match assemble(raw, &GeneratorConfig::default()) {
        Ok(page) => page.markdown,
        Err(e) => e.to_string(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
