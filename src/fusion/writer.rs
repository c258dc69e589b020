use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use crate::fusion::combine::FusedSignal;
use crate::fusion::error::FusionError;
pub const CSV_HEADER: &str = "Time_Sec,Weighted_Value";
pub fn fused_csv_path(output_dir: &Path, id: &str) -> PathBuf {
    output_dir.join(format!("{id}_weighted.csv"))
}
pub fn fused_plot_path(output_dir: &Path, id: &str) -> PathBuf {
    output_dir.join(format!("{id}_graph.png"))
}
pub fn write_fused_csv(path: &Path, signal: &FusedSignal) -> Result<(), FusionError> {
    let write_err = |source| FusionError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    write_fused_table(&mut writer, signal).map_err(write_err)?;
    writer.flush().map_err(write_err)
}
/// Writes the two-column table; a NaN time is left as an empty cell.
pub fn write_fused_table<W: Write>(w: &mut W, signal: &FusedSignal) -> io::Result<()> {
    writeln!(w, "{CSV_HEADER}")?;
    for (time, value) in signal.time.iter().zip(&signal.values) {
        if time.is_nan() {
            writeln!(w, ",{value}")?;
        } else {
            writeln!(w, "{time},{value}")?;
        }
    }
    Ok(())
}
pub fn write_png(path: &Path, png: &[u8]) -> Result<(), FusionError> {
    fs::write(path, png).map_err(|source| FusionError::Write {
        path: path.to_path_buf(),
        source,
    })
}
