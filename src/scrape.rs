// src/scrape.rs
//
// Load pipeline: documents → vendor extraction → normalization →
// classification → metrics → canonical sort. Documents are handled one at a
// time, in input order; a bad document becomes a warning, never an abort.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::options::PipelineOptions,
    core::dom::Document,
    data::CanonicalTable,
    engine,
    error::DocumentError,
    model::NormalizedProduct,
    normalize::normalize,
    progress::Progress,
    report::{BatchResult, DocumentReport, DocumentStatus},
    specs::Vendor,
};

/// Read one document as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String, DocumentError> {
    let bytes = fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| DocumentError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every file in `paths` into a fresh canonical table.
pub fn load_documents<P: AsRef<Path>>(paths: &[P], opts: &PipelineOptions) -> BatchResult {
    load_documents_with_progress(paths, opts, None)
}

pub fn load_documents_with_progress<P: AsRef<Path>>(
    paths: &[P],
    opts: &PipelineOptions,
    progress: Option<&mut dyn Progress>,
) -> BatchResult {
    let inputs = paths.iter().map(|p| {
        let path = p.as_ref();
        (path.to_path_buf(), read_document(path))
    });
    run(inputs, paths.len(), opts, progress)
}

/// Same pipeline over in-memory documents, each labelled for reports.
pub fn load_texts<L: AsRef<str>, T: AsRef<str>>(docs: &[(L, T)], opts: &PipelineOptions) -> BatchResult {
    let inputs = docs
        .iter()
        .map(|(label, text)| (PathBuf::from(label.as_ref()), Ok(s!(text.as_ref()))));
    run(inputs, docs.len(), opts, None)
}

fn run(
    inputs: impl Iterator<Item = (PathBuf, Result<String, DocumentError>)>,
    total: usize,
    opts: &PipelineOptions,
    mut progress: Option<&mut dyn Progress>,
) -> BatchResult {
    logf!("Loading {total} document(s), rate {}", opts.exchange_rate);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
        p.log("Reading documents…");
    }

    let mut products: Vec<NormalizedProduct> = Vec::new();
    let mut documents = Vec::with_capacity(total);
    let mut raw_found = 0usize;

    for (source, text) in inputs {
        let report = match text {
            Ok(text) => {
                let (report, found) = process_document(source, &text, opts, &mut products);
                raw_found += found;
                report
            }
            Err(e) => {
                loge!("{e}");
                DocumentReport { source, status: DocumentStatus::Failed(e), skipped: Vec::new() }
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            let name = report.source.display().to_string();
            if let Some(msg) = report.warning() {
                p.item_failed(&name, &msg);
            }
            p.item_done(&name);
        }
        documents.push(report);
    }

    let table = CanonicalTable::from_products(products);
    let batch = BatchResult { table, documents, raw_found };
    logf!("{}", batch.summary());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    batch
}

/// Extract and normalize one document, appending accepted records to `out`.
/// Returns the report and the number of raw records the extractor found.
fn process_document(
    source: PathBuf,
    text: &str,
    opts: &PipelineOptions,
    out: &mut Vec<NormalizedProduct>,
) -> (DocumentReport, usize) {
    let Some(vendor) = Vendor::detect(text) else {
        logd!("{}: no vendor fingerprint", source.display());
        return (
            DocumentReport { source, status: DocumentStatus::Unrecognized, skipped: Vec::new() },
            0,
        );
    };

    let doc = Document::parse(text);
    let lines = doc.lines();
    let extraction = vendor.extract(&lines);
    logd!("{}: {vendor}, {} line nodes", source.display(), lines.len());

    if let Some(reason) = extraction.rejection {
        loge!("{} ({vendor}): {reason}", source.display());
        return (
            DocumentReport {
                source,
                status: DocumentStatus::Rejected { vendor, reason },
                skipped: extraction.skipped,
            },
            0,
        );
    }

    let found = extraction.products.len();
    let mut skipped = extraction.skipped;
    let before = out.len();

    for raw in extraction.products {
        match normalize(raw) {
            Ok(parsed) => {
                let category = opts.rules.classify(&parsed.name);
                out.push(engine::compute(parsed, category, opts.exchange_rate));
            }
            Err(reason) => {
                logd!("{}: skipped, {reason}", source.display());
                skipped.push(reason);
            }
        }
    }

    let products = out.len() - before;
    logf!("{}: {vendor}, {products} of {found} records accepted", source.display());
    (
        DocumentReport { source, status: DocumentStatus::Parsed { vendor, products }, skipped },
        found,
    )
}
