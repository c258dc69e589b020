use std::path::PathBuf;
use serde::Serialize;
use crate::fusion::plot::PlotStyle;
/// Fused series shorter than this are treated as broken recordings.
pub const MIN_OVERLAP_SAMPLES: usize = 30;
/// Extraction pipeline that produced a signal estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SourceKind {
    Pos,
    PhysNet,
    EfficientPhys,
}
impl SourceKind {
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Pos => "POS",
            SourceKind::PhysNet => "PhysNet",
            SourceKind::EfficientPhys => "EfficientPhys",
        }
    }
}
/// One value per source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BySource<T> {
    pub pos: T,
    pub physnet: T,
    pub effphys: T,
}
impl<T> BySource<T> {
    pub fn get(&self, kind: SourceKind) -> &T {
        match kind {
            SourceKind::Pos => &self.pos,
            SourceKind::PhysNet => &self.physnet,
            SourceKind::EfficientPhys => &self.effphys,
        }
    }
    pub fn map<U>(&self, mut f: impl FnMut(SourceKind, &T) -> U) -> BySource<U> {
        BySource {
            pos: f(SourceKind::Pos, &self.pos),
            physnet: f(SourceKind::PhysNet, &self.physnet),
            effphys: f(SourceKind::EfficientPhys, &self.effphys),
        }
    }
    pub fn try_map<U, E>(
        &self,
        mut f: impl FnMut(SourceKind, &T) -> Result<U, E>,
    ) -> Result<BySource<U>, E> {
        Ok(BySource {
            pos: f(SourceKind::Pos, &self.pos)?,
            physnet: f(SourceKind::PhysNet, &self.physnet)?,
            effphys: f(SourceKind::EfficientPhys, &self.effphys)?,
        })
    }
}
impl BySource<f64> {
    pub fn total(&self) -> f64 {
        self.pos + self.physnet + self.effphys
    }
    /// Weights are expected to sum to one, but nothing downstream relies on it.
    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() < 1e-9
    }
}
/// 60% EfficientPhys, 20% POS, 20% PhysNet.
pub const DEFAULT_WEIGHTS: BySource<f64> = BySource {
    pos: 0.20,
    physnet: 0.20,
    effphys: 0.60,
};
/// Rules used when turning file names into recording ids.
#[derive(Clone, Debug)]
pub struct IndexOptions {
    pub extension: String,
    /// Files whose name contains this token are ignored (earlier fusion output).
    pub excluded_token: String,
    pub strip_suffixes: Vec<String>,
}
impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            extension: "csv".into(),
            excluded_token: "ensemble".into(),
            strip_suffixes: vec!["_filtered".into(), "_trace".into(), "_clean".into()],
        }
    }
}
#[derive(Clone, Debug)]
pub struct FusionConfig {
    pub roots: BySource<PathBuf>,
    pub output_dir: PathBuf,
    pub weights: BySource<f64>,
    pub min_overlap: usize,
    pub index: IndexOptions,
    pub render_plots: bool,
    pub plot_style: PlotStyle,
}
impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            roots: BySource {
                pos: PathBuf::from("final_pos_results-"),
                physnet: PathBuf::from("final_physnet_graphs_full-"),
                effphys: PathBuf::from("final_efficientphys_graphs_full-"),
            },
            output_dir: PathBuf::from("FINAL_WEIGHTED_RESULTS"),
            weights: DEFAULT_WEIGHTS,
            min_overlap: MIN_OVERLAP_SAMPLES,
            index: IndexOptions::default(),
            render_plots: true,
            plot_style: PlotStyle::default(),
        }
    }
}
impl FusionConfig {
    /// Same constants, with the three sources and the output placed under `base`.
    pub fn rooted_at(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        let defaults = Self::default();
        Self {
            roots: defaults.roots.map(|_, root| base.join(root)),
            output_dir: base.join(&defaults.output_dir),
            ..defaults
        }
    }
}
