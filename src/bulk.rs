//! Bulk generation from a spreadsheet of sizes
//!
//! 1. Read candidate strings from CSV: the "Tyre Size" column if present,
//!    otherwise the first size-like substring of every cell
//! 2. Strict-parse and deduplicate into a canonical size set
//! 3. Run the single-size pipeline per size and merge all output files
//! 4. Package the merged files into a zip archive

use std::io::{Cursor, Read, Seek, Write};

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::parse::{extract_size_candidate, parse_tyre_size, TyreSize};
use crate::pipeline::assemble_size;

/// Header of the preferred size column
pub const SIZE_COLUMN: &str = "Tyre Size";

/// Result of a bulk run
#[derive(Debug, Clone)]
pub struct BulkOutput {
    /// Canonical sizes generated, in first-seen order
    pub sizes: Vec<TyreSize>,
    /// Merged filename -> bytes across all sizes
    pub files: IndexMap<String, Vec<u8>>,
}

impl BulkOutput {
    /// Zip the merged files
    pub fn archive(&self) -> Result<Vec<u8>> {
        archive_bytes(&self.files)
    }
}

/// Raw size candidates from CSV text with a header row
pub fn extract_candidates<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.byte_headers()?.clone();
    let size_column = headers
        .iter()
        .position(|h| String::from_utf8_lossy(h).trim() == SIZE_COLUMN);
    if size_column.is_none() {
        warn!("No \"{}\" column; scanning every cell for sizes", SIZE_COLUMN);
    }

    let mut candidates = Vec::new();
    // Decoded lossily: spreadsheet exports are often Windows-1252
    for record in rdr.byte_records() {
        let record = record?;
        match size_column {
            Some(idx) => {
                if let Some(cell) = record.get(idx).map(String::from_utf8_lossy) {
                    let cell = cell.trim();
                    if !cell.is_empty() {
                        candidates.push(cell.to_string());
                    }
                }
            }
            None => {
                for cell in record.iter().map(String::from_utf8_lossy) {
                    if let Some(found) = extract_size_candidate(&cell) {
                        candidates.push(found.to_string());
                    }
                }
            }
        }
    }
    Ok(candidates)
}

/// Strict-parse candidates, dropping invalid ones and collapsing duplicates
pub fn canonical_sizes<I, S>(candidates: I) -> IndexSet<TyreSize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .filter_map(|raw| {
            let raw = raw.as_ref();
            let size = parse_tyre_size(raw);
            if size.is_none() {
                debug!("Dropping unparseable size {:?}", raw);
            }
            size
        })
        .collect()
}

/// Generate every size and merge the output files.
///
/// Size-independent files (the local business document) collapse to a
/// single entry since their content is identical.
pub fn run_bulk(sizes: &IndexSet<TyreSize>, config: &GeneratorConfig) -> Result<BulkOutput> {
    if sizes.is_empty() {
        return Err(Error::NoValidSizes);
    }

    let mut files = IndexMap::new();
    for size in sizes {
        let page = assemble_size(*size, config);
        files.extend(page.files()?);
    }

    info!("Generated {} pages ({} files)", sizes.len(), files.len());
    Ok(BulkOutput {
        sizes: sizes.iter().copied().collect(),
        files,
    })
}

/// CSV in, merged outputs out
pub fn bulk_from_csv<R: Read>(reader: R, config: &GeneratorConfig) -> Result<BulkOutput> {
    let candidates = extract_candidates(reader)?;
    let sizes = canonical_sizes(&candidates);
    info!("Found {} valid tyre sizes", sizes.len());
    run_bulk(&sizes, config)
}

pub fn write_archive<W: Write + Seek>(files: &IndexMap<String, Vec<u8>>, writer: W) -> Result<()> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(writer);
    for (name, bytes) in files {
        zip.start_file(name.as_str(), options)?;
        zip.write_all(bytes)?;
    }
    zip.finish()?;
    Ok(())
}

pub fn archive_bytes(files: &IndexMap<String, Vec<u8>>) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    write_archive(files, &mut buf)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::PageOptions;

    const SIZE_COLUMN_CSV: &str = "\
Tyre Size,Notes
225/45R19,front
225/45R19,rear
not a size,ignore
205 55 16,
";

    fn canon(sizes: &IndexSet<TyreSize>) -> Vec<String> {
        sizes.iter().map(TyreSize::canonical).collect()
    }

    #[test]
    fn test_size_column_dedupes_and_drops_invalid() {
        let candidates = extract_candidates(SIZE_COLUMN_CSV.as_bytes()).unwrap();
        assert_eq!(candidates, vec!["225/45R19", "225/45R19", "not a size", "205 55 16"]);
        let sizes = canonical_sizes(&candidates);
        assert_eq!(canon(&sizes), vec!["225/45R19", "205/55R16"]);
    }

    #[test]
    fn test_fallback_scans_all_cells() {
        let csv = "\
Vehicle,Front,Rear
Hatch,Fits 205/55R16 all round,
Ute,265/65 R17,tow pack 265 70 16
Coupe,225/45r19,225/45R19
";
        let candidates = extract_candidates(csv.as_bytes()).unwrap();
        let sizes = canonical_sizes(&candidates);
        assert_eq!(
            canon(&sizes),
            vec!["205/55R16", "265/65R17", "265/70R16", "225/45R19"]
        );
    }

    #[test]
    fn test_fallback_ignores_header_cells() {
        let csv = "205/55R16,Notes\nnothing,here\n";
        let candidates = extract_candidates(csv.as_bytes()).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_empty_set_is_no_valid_sizes() {
        let csv = "Tyre Size\nbogus\n\n";
        let err = bulk_from_csv(csv.as_bytes(), &GeneratorConfig::default()).unwrap_err();
        assert!(matches!(err, Error::NoValidSizes));
    }

    #[test]
    fn test_bulk_merges_files_per_size() {
        let config = GeneratorConfig {
            options: PageOptions {
                include_local_business_schema: true,
                ..PageOptions::default()
            },
            ..GeneratorConfig::default()
        };
        let out = bulk_from_csv(SIZE_COLUMN_CSV.as_bytes(), &config).unwrap();
        assert_eq!(out.sizes.len(), 2);
        for stem in ["225-45R19", "205-55R16"] {
            for ext in ["md", "docx", "product.jsonld", "faq.jsonld"] {
                let name = format!("{}.{}", stem, ext);
                assert!(out.files.contains_key(&name), "missing {}", name);
            }
        }
        // 4 per size plus one shared local business document
        assert_eq!(out.files.len(), 9);
    }

    #[test]
    fn test_archive_contains_every_file() {
        let out = bulk_from_csv(SIZE_COLUMN_CSV.as_bytes(), &GeneratorConfig::default()).unwrap();
        let bytes = out.archive().unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), out.files.len());

        let mut md = String::new();
        archive
            .by_name("205-55R16.md")
            .unwrap()
            .read_to_string(&mut md)
            .unwrap();
        assert!(md.starts_with("Target Keywords: 205/55R16 tyres"));
    }

    #[test]
    fn test_non_utf8_cells_do_not_abort_the_run() {
        // Windows-1252 "café" in a column that is never read
        let bytes: &[u8] = b"Tyre Size,Notes\n225/45R19,caf\xe9\n205/55R16,ok\n";
        let out = bulk_from_csv(bytes, &GeneratorConfig::default()).unwrap();
        let canon: Vec<String> = out.sizes.iter().map(TyreSize::canonical).collect();
        assert_eq!(canon, vec!["225/45R19", "205/55R16"]);
    }

    #[test]
    fn test_non_utf8_cells_in_fallback_scan() {
        let bytes: &[u8] = b"Model,Front\nCitro\xebn,205/55R16\n\xff 225/45R19,\n";
        let candidates = extract_candidates(bytes).unwrap();
        assert_eq!(candidates, vec!["205/55R16", "225/45R19"]);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
        }
    }

    #[test]
    fn test_unreadable_input_is_an_error() {
        let result = extract_candidates(FailingReader);
        assert!(matches!(result, Err(Error::Csv(_))));
    }
}
