use crate::commands::{CmdMessage, CmdResult, ScrollEntry};
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::store::DocumentStore;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::helpers::{open_model, scroll_entry};

/// Writes the selected Scrolls (all of them when `coordinates` is empty) to
/// a gzipped tarball in `out_dir`, one text file per Scroll.
pub fn run<S: DocumentStore>(
    store: &S,
    doc: &str,
    coordinates: &[Coordinate],
    out_dir: &Path,
) -> Result<CmdResult> {
    let entries = resolve_scrolls(store, doc, coordinates)?;

    if entries.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No scrolls to export."));
        return Ok(res);
    }

    let now = Utc::now();
    let path = out_dir.join(format!("terse-{}.tar.gz", now.format("%Y-%m-%d_%H-%M-%S")));
    let file = File::create(&path)?;
    write_archive(file, &archive_root(doc), &entries)?;

    let mut result = CmdResult::default().with_paths(vec![path.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Exported {} scrolls to {}",
        entries.len(),
        path.display()
    )));
    Ok(result)
}

/// Entries carry tagged addresses, which double as archive file names.
fn resolve_scrolls<S: DocumentStore>(
    store: &S,
    doc: &str,
    coordinates: &[Coordinate],
) -> Result<Vec<ScrollEntry>> {
    let model = open_model(store, doc, true)?;
    let tree = model.tree();

    if coordinates.is_empty() {
        return Ok(tree
            .scrolls()
            .into_iter()
            .map(|(coordinate, text)| scroll_entry(coordinate, text, true))
            .collect());
    }

    Ok(coordinates
        .iter()
        .map(|coordinate| (coordinate, tree.read_text(coordinate)))
        .filter(|(_, text)| !text.is_empty())
        .map(|(coordinate, text)| scroll_entry(*coordinate, text, true))
        .collect())
}

fn write_archive<W: Write>(writer: W, root: &str, entries: &[ScrollEntry]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for entry in entries {
        let entry_name = format!("{}/{}.txt", root, entry.address);

        let mut header = tar::Header::new_gnu();
        header.set_size(entry.text.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, entry.text.as_bytes())?;
    }

    tar.into_inner()?.finish()?;
    Ok(())
}

/// Directory name inside the archive, derived from the document name.
fn archive_root(doc: &str) -> String {
    let stem = Path::new(doc)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let safe: String = stem
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if safe.is_empty() {
        "terse".to_string()
    } else {
        safe
    }
}
