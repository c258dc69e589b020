use std::fs;
use std::path::Path;
use crate::fusion::error::FusionError;
/// One extracted signal: the first column as time, the last column as samples.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignalTrace {
    pub time: Vec<f64>,
    pub values: Vec<f64>,
}
impl SignalTrace {
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
pub fn read_trace(path: &Path) -> Result<SignalTrace, FusionError> {
    let contents = fs::read_to_string(path).map_err(|source| FusionError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_trace(&contents).ok_or_else(|| FusionError::EmptyTable {
        path: path.to_path_buf(),
    })
}
/// Returns `None` when there is no header line.
pub fn parse_trace(contents: &str) -> Option<SignalTrace> {
    let mut lines = contents.lines().filter(|line| !line.trim().is_empty());
    let header = split_record(lines.next()?);
    let signal_column = header.len().saturating_sub(1);
    let mut trace = SignalTrace::default();
    for line in lines {
        let fields = split_record(line);
        let cell = |column: usize| fields.get(column).and_then(|f| coerce_numeric(f));
        trace.time.push(cell(0).unwrap_or(f64::NAN));
        trace.values.push(cell(signal_column).unwrap_or(0.0));
    }
    Some(trace)
}
/// Parses a cell as a number; blanks, text and NaN count as missing.
pub fn coerce_numeric(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}
/// Splits one CSV line, honouring double quotes and `""` escapes.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
