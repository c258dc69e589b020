// src/main.rs
use anyhow::{bail, Context, Result};
use log::{error, info};
use rppg_fusion::fusion::{FusionConfig, FusionError, FusionPipeline};
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = FusionConfig::default();
    info!(
        "starting weighted fusion ({:.0}% EfficientPhys / {:.0}% POS / {:.0}% PhysNet)",
        config.weights.effphys * 100.0,
        config.weights.pos * 100.0,
        config.weights.physnet * 100.0
    );
    let pipeline = FusionPipeline::new(config);
    match pipeline.run() {
        Ok(summary) => {
            info!(
                "done: {} fused, {} failed",
                summary.fused.len(),
                summary.failed.len()
            );
            Ok(())
        }
        Err(FusionError::NoCommonIds) => {
            error!("no matching recording ids found");
            error!("file names in all three folders must share a common core name");
            bail!(FusionError::NoCommonIds)
        }
        Err(e) => Err(e).context("weighted fusion failed"),
    }
}
