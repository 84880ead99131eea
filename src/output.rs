//! Reading and writing GeoJSON documents.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::Result;
use crate::models::FeatureCollection;

/// Write `collection` as pretty-printed UTF-8 GeoJSON.
///
/// The document goes to a temporary file next to `path` and is renamed into
/// place once complete, so a failed run never leaves a partial file behind.
pub fn write_collection<P: AsRef<Path>>(path: P, collection: &FeatureCollection) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut writer, collection)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| e.error)?;

    info!("Output written to: {}", path.display());
    Ok(())
}

pub fn read_collection<P: AsRef<Path>>(path: P) -> Result<FeatureCollection> {
    let file = File::open(path)?;
    let collection = serde_json::from_reader(BufReader::new(file))?;
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Feature, FeatureProperties, Location};

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sushi.geojson");

        let collection = FeatureCollection::new(vec![Feature::new(
            Location::new(139.5, 35.25),
            FeatureProperties {
                osm_id: "node/1".to_string(),
                name: "寿司清".to_string(),
                source: "OSM".to_string(),
                ..Default::default()
            },
        )]);
        write_collection(&path, &collection).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("寿司清"));
        assert!(text.contains("  \"type\": \"FeatureCollection\""));

        let back = read_collection(&path).unwrap();
        assert_eq!(back, collection);
    }

    #[test]
    fn test_empty_collection_is_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.geojson");
        write_collection(&path, &FeatureCollection::new(vec![])).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_missing_directory_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.geojson");
        assert!(write_collection(&path, &FeatureCollection::new(vec![])).is_err());
        assert!(!path.exists());
    }
}
