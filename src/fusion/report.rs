use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use serde::Serialize;
use crate::fusion::config::BySource;
use crate::fusion::error::FusionError;
pub const SUMMARY_FILE_NAME: &str = "fusion_summary.json";
#[derive(Clone, Debug, Serialize)]
pub struct FusedRecording {
    pub id: String,
    pub samples: usize,
    pub mean: f64,
    pub csv: PathBuf,
    pub plot: Option<PathBuf>,
}
#[derive(Clone, Debug, Serialize)]
pub struct FailedRecording {
    pub id: String,
    pub reason: String,
}
/// What a single run did, written next to the fused files.
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub weights: BySource<f64>,
    pub files_found: BySource<usize>,
    pub matched: usize,
    pub fused: Vec<FusedRecording>,
    pub failed: Vec<FailedRecording>,
}
impl RunSummary {
    pub fn write_json(&self, path: &Path) -> Result<(), FusionError> {
        let write_err = |source| FusionError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| write_err(std::io::Error::from(e)))?;
        writer.flush().map_err(write_err)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn summary_serializes_per_source_counts() {
        let dir = tempfile::tempdir().unwrap();
        let summary = RunSummary {
            output_dir: dir.path().to_path_buf(),
            weights: crate::fusion::config::DEFAULT_WEIGHTS,
            files_found: BySource {
                pos: 3,
                physnet: 2,
                effphys: 4,
            },
            matched: 2,
            fused: vec![FusedRecording {
                id: "v1".into(),
                samples: 120,
                mean: 71.5,
                csv: dir.path().join("v1_weighted.csv"),
                plot: None,
            }],
            failed: vec![FailedRecording {
                id: "v2".into(),
                reason: "too short".into(),
            }],
        };
        let path = dir.path().join(SUMMARY_FILE_NAME);
        summary.write_json(&path).unwrap();
        let value: serde_json::Value =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(value["files_found"]["physnet"], 2);
        assert_eq!(value["weights"]["effphys"], 0.6);
        assert_eq!(value["fused"][0]["id"], "v1");
        assert!(value["fused"][0]["plot"].is_null());
        assert_eq!(value["failed"][0]["reason"], "too short");
    }
}
