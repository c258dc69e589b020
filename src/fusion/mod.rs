// src/fusion/mod.rs
pub mod combine;
pub mod config;
pub mod error;
pub mod index;
pub mod matching;
pub mod pipeline;
pub mod plot;
pub mod report;
pub mod table;
pub mod writer;
pub use combine::{fuse, FusedSignal};
pub use config::{BySource, FusionConfig, IndexOptions, SourceKind};
pub use error::FusionError;
pub use index::{normalize_id, scan_directory, FileIndex};
pub use matching::{common_ids, match_recordings, MatchedRecording};
pub use pipeline::FusionPipeline;
pub use plot::{render_fused_png, PlotStyle};
pub use report::{FailedRecording, FusedRecording, RunSummary};
pub use table::{read_trace, SignalTrace};
pub use writer::write_fused_csv;
