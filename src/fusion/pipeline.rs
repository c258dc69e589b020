use std::fs;
use log::{error, info, warn};
use crate::fusion::combine::fuse;
use crate::fusion::config::{BySource, FusionConfig};
use crate::fusion::error::FusionError;
use crate::fusion::index::{scan_directory, FileIndex};
use crate::fusion::matching::{match_recordings, MatchedRecording};
use crate::fusion::plot::render_fused_png;
use crate::fusion::report::{FailedRecording, FusedRecording, RunSummary, SUMMARY_FILE_NAME};
use crate::fusion::table::read_trace;
use crate::fusion::writer::{fused_csv_path, fused_plot_path, write_fused_csv, write_png};
/// Batch driver: scan the three source trees, match ids and fuse each recording.
pub struct FusionPipeline {
    config: FusionConfig,
}
impl FusionPipeline {
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }
    pub fn config(&self) -> &FusionConfig {
        &self.config
    }
    pub fn scan_sources(&self) -> BySource<FileIndex> {
        self.config.roots.map(|kind, root| {
            info!("scanning {} source", kind.label());
            scan_directory(root, &self.config.index)
        })
    }
    /// Runs the whole batch. Per-recording failures are logged and skipped;
    /// only an unwritable output directory or an empty intersection fails the run.
    pub fn run(&self) -> Result<RunSummary, FusionError> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|source| FusionError::Write {
            path: output_dir.clone(),
            source,
        })?;
        if !self.config.weights.is_normalized() {
            warn!(
                "fusion weights sum to {:.3}, not 1.0",
                self.config.weights.total()
            );
        }
        let indexes = self.scan_sources();
        let recordings = match_recordings(&indexes);
        if recordings.is_empty() {
            return Err(FusionError::NoCommonIds);
        }
        info!("found {} matching recordings", recordings.len());
        let mut summary = RunSummary {
            output_dir: output_dir.clone(),
            weights: self.config.weights,
            files_found: indexes.map(|_, index| index.files_seen()),
            matched: recordings.len(),
            fused: Vec::new(),
            failed: Vec::new(),
        };
        let total = recordings.len();
        for (i, recording) in recordings.iter().enumerate() {
            info!("[{}/{}] fusing {}", i + 1, total, recording.id);
            match self.process_recording(recording) {
                Ok(done) => {
                    info!(
                        "[{}/{}] {} done: {} samples, mean {:.1}",
                        i + 1,
                        total,
                        recording.id,
                        done.samples,
                        done.mean
                    );
                    summary.fused.push(done);
                }
                Err(e) => {
                    error!("error processing {}: {e}", recording.id);
                    summary.failed.push(FailedRecording {
                        id: recording.id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        let summary_path = output_dir.join(SUMMARY_FILE_NAME);
        if let Err(e) = summary.write_json(&summary_path) {
            warn!("could not write run summary: {e}");
        }
        info!(
            "processed {} of {} recordings, results in {}",
            summary.fused.len(),
            total,
            output_dir.display()
        );
        Ok(summary)
    }
    /// Load, fuse and persist one recording. The plot is rendered before anything is
    /// written, so a recording that fails leaves no files behind.
    pub fn process_recording(
        &self,
        recording: &MatchedRecording,
    ) -> Result<FusedRecording, FusionError> {
        let traces = recording.paths.try_map(|_, path| read_trace(path))?;
        let signal = fuse(&traces, &self.config.weights, self.config.min_overlap)?;
        let png = if self.config.render_plots {
            Some(render_fused_png(&signal, &recording.id, &self.config.plot_style)?)
        } else {
            None
        };
        let csv = fused_csv_path(&self.config.output_dir, &recording.id);
        write_fused_csv(&csv, &signal)?;
        let plot = match png {
            Some(png) => {
                let path = fused_plot_path(&self.config.output_dir, &recording.id);
                write_png(&path, &png)?;
                Some(path)
            }
            None => None,
        };
        Ok(FusedRecording {
            id: recording.id.clone(),
            samples: signal.len(),
            mean: signal.mean,
            csv,
            plot,
        })
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    fn write_csv(path: &Path, values: &[&str]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut text = String::from("Time_Sec,Value\n");
        for (i, v) in values.iter().enumerate() {
            text.push_str(&format!("{},{}\n", i as f64 * 0.5, v));
        }
        fs::write(path, text).unwrap();
    }
    fn constant(value: &str, n: usize) -> Vec<&str> {
        vec![value; n]
    }
    fn config_in(base: &Path) -> FusionConfig {
        FusionConfig {
            render_plots: false,
            ..FusionConfig::rooted_at(base)
        }
    }
    #[test]
    fn fuses_matching_recordings_and_skips_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let roots = config.roots.clone();
        write_csv(&roots.pos.join("subj1/clip_filtered.csv"), &constant("10", 40));
        write_csv(&roots.physnet.join("clip_trace.csv"), &constant("20", 45));
        write_csv(&roots.effphys.join("deep/clip_clean.csv"), &constant("30", 50));
        // too short in one source
        write_csv(&roots.pos.join("short.csv"), &constant("1", 100));
        write_csv(&roots.physnet.join("short.csv"), &constant("1", 29));
        write_csv(&roots.effphys.join("short.csv"), &constant("1", 100));
        // only two sources
        write_csv(&roots.pos.join("pair.csv"), &constant("1", 100));
        write_csv(&roots.effphys.join("pair.csv"), &constant("1", 100));
        // ignored fusion output
        write_csv(&roots.physnet.join("pair_ensemble.csv"), &constant("1", 100));
        let pipeline = FusionPipeline::new(config);
        let summary = pipeline.run().unwrap();
        let out = &pipeline.config().output_dir;
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.files_found.pos, 3);
        assert_eq!(summary.files_found.physnet, 2);
        assert_eq!(summary.fused.len(), 1);
        assert_eq!(summary.fused[0].id, "clip");
        assert_eq!(summary.fused[0].samples, 40);
        assert!((summary.fused[0].mean - 24.0).abs() < 1e-9);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].id, "short");
        let fused = fs::read_to_string(out.join("clip_weighted.csv")).unwrap();
        let mut lines = fused.lines();
        assert_eq!(lines.next(), Some("Time_Sec,Weighted_Value"));
        assert_eq!(lines.count(), 40);
        assert!(!out.join("short_weighted.csv").exists());
        assert!(!out.join("short_graph.png").exists());
        assert!(!out.join("pair_weighted.csv").exists());
        assert!(out.join(SUMMARY_FILE_NAME).exists());
    }
    #[test]
    fn non_numeric_cells_count_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let roots = config.roots.clone();
        let mut pos = constant("10", 30);
        pos[0] = "oops";
        write_csv(&roots.pos.join("v.csv"), &pos);
        write_csv(&roots.physnet.join("v.csv"), &constant("10", 30));
        let mut eff = constant("10", 30);
        eff[0] = "";
        write_csv(&roots.effphys.join("v.csv"), &eff);
        let pipeline = FusionPipeline::new(config);
        pipeline.run().unwrap();
        let fused = fs::read_to_string(pipeline.config().output_dir.join("v_weighted.csv")).unwrap();
        let first: f64 = fused.lines().nth(1).unwrap().split(',').nth(1).unwrap().parse().unwrap();
        assert!((first - 2.0).abs() < 1e-9);
    }
    #[test]
    fn no_common_ids_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_csv(&config.roots.pos.join("a.csv"), &constant("1", 40));
        write_csv(&config.roots.physnet.join("b.csv"), &constant("1", 40));
        let err = FusionPipeline::new(config).run().unwrap_err();
        assert!(matches!(err, FusionError::NoCommonIds));
    }
    #[test]
    fn plots_are_written_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let config = FusionConfig::rooted_at(dir.path());
        for root in [&config.roots.pos, &config.roots.physnet, &config.roots.effphys] {
            write_csv(&root.join("v.csv"), &constant("72", 60));
        }
        let pipeline = FusionPipeline::new(config);
        let summary = pipeline.run().unwrap();
        let plot = summary.fused[0].plot.clone().unwrap();
        assert!(plot.ends_with("v_graph.png"));
        assert!(fs::metadata(plot).unwrap().len() > 0);
    }
    #[test]
    fn text_time_axis_still_fuses_and_plots() {
        let dir = tempfile::tempdir().unwrap();
        let config = FusionConfig::rooted_at(dir.path());
        let roots = config.roots.clone();
        fs::create_dir_all(&roots.pos).unwrap();
        fs::write(roots.pos.join("v.csv"), format!("t,v\n{}", "x,1\n".repeat(40))).unwrap();
        write_csv(&roots.physnet.join("v.csv"), &constant("1", 40));
        write_csv(&roots.effphys.join("v.csv"), &constant("1", 40));
        let pipeline = FusionPipeline::new(config);
        let summary = pipeline.run().unwrap();
        assert!(summary.failed.is_empty());
        assert_eq!(summary.fused[0].samples, 40);
        let out = &pipeline.config().output_dir;
        assert!(out.join("v_weighted.csv").exists());
        assert!(out.join("v_graph.png").exists());
    }
    #[test]
    fn failed_plot_leaves_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = FusionConfig::rooted_at(dir.path());
        for root in [&config.roots.pos, &config.roots.physnet, &config.roots.effphys] {
            write_csv(&root.join("v.csv"), &constant("inf", 40));
        }
        let pipeline = FusionPipeline::new(config);
        let summary = pipeline.run().unwrap();
        assert!(summary.fused.is_empty());
        assert_eq!(summary.failed[0].id, "v");
        let out = &pipeline.config().output_dir;
        assert!(!out.join("v_weighted.csv").exists());
        assert!(!out.join("v_graph.png").exists());
    }
}
