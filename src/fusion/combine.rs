use ndarray::{Array1, ArrayView1};
use crate::fusion::config::BySource;
use crate::fusion::error::FusionError;
use crate::fusion::table::SignalTrace;
/// Weighted combination of three traces on a shared positional time axis.
#[derive(Clone, Debug, PartialEq)]
pub struct FusedSignal {
    pub time: Vec<f64>,
    pub values: Vec<f64>,
    pub mean: f64,
}
impl FusedSignal {
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
/// Truncates all traces to the shortest one and sums them with `weights`.
///
/// The time axis is taken from the POS trace. Nothing is resampled: sample `i` of
/// every trace is assumed to describe the same instant.
pub fn fuse(
    traces: &BySource<SignalTrace>,
    weights: &BySource<f64>,
    min_overlap: usize,
) -> Result<FusedSignal, FusionError> {
    let len = traces
        .pos
        .len()
        .min(traces.physnet.len())
        .min(traces.effphys.len());
    if len < min_overlap {
        return Err(FusionError::OverlapTooShort {
            actual: len,
            minimum: min_overlap,
        });
    }
    let fused: Array1<f64> = &head(&traces.pos, len) * weights.pos
        + &head(&traces.physnet, len) * weights.physnet
        + &head(&traces.effphys, len) * weights.effphys;
    let mean = fused.mean().unwrap_or(f64::NAN);
    Ok(FusedSignal {
        time: traces.pos.time[..len].to_vec(),
        values: fused.to_vec(),
        mean,
    })
}
fn head(trace: &SignalTrace, len: usize) -> ArrayView1<'_, f64> {
    ArrayView1::from(&trace.values[..len])
}
