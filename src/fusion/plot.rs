use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use crate::fusion::combine::FusedSignal;
use crate::fusion::error::FusionError;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub signal_color: RGBColor,
    pub mean_color: RGBColor,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            background: WHITE,
            signal_color: RGBColor(0xdc, 0x26, 0x26),
            mean_color: RGBColor(0x25, 0x63, 0xeb),
        }
    }
}
/// Renders the fused series with its mean as a dashed reference line.
pub fn render_fused_png(
    signal: &FusedSignal,
    id: &str,
    style: &PlotStyle,
) -> Result<Vec<u8>, FusionError> {
    let points: Vec<(f64, f64)> = x_axis(signal)
        .into_iter()
        .zip(signal.values.iter().copied())
        .filter(|(t, v)| t.is_finite() && v.is_finite())
        .collect();
    if points.is_empty() {
        return Err(FusionError::Plot(format!("{id}: no finite samples to plot")));
    }
    let (x_min, x_max) = padded_bounds(points.iter().map(|p| p.0), 0.0);
    let (y_min, y_max) = padded_bounds(points.iter().map(|p| p.1), 0.05);
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .caption(
                format!("Video: {id} | Weighted Mean: {:.1}", signal.mean),
                ("sans-serif", 20).into_font().color(&BLACK),
            )
            .set_label_area_size(LabelAreaPosition::Left, 55)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
        chart
            .configure_mesh()
            .x_desc("Time (s)")
            .y_desc("Value")
            .bold_line_style(BLACK.mix(0.3))
            .light_line_style(BLACK.mix(0.05))
            .draw()?;
        let signal_color = style.signal_color;
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                signal_color.stroke_width(2),
            ))?
            .label("Fused Signal")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], signal_color));
        let mean_color = style.mean_color;
        chart
            .draw_series(DashedLineSeries::new(
                vec![(x_min, signal.mean), (x_max, signal.mean)],
                8,
                5,
                mean_color.stroke_width(1),
            ))?
            .label(format!("Mean: {:.1}", signal.mean))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], mean_color));
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .border_style(BLACK.mix(0.3))
            .background_style(style.background.mix(0.9))
            .draw()?;
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
/// The time axis, or sample positions when no time value is numeric.
fn x_axis(signal: &FusedSignal) -> Vec<f64> {
    if signal.time.iter().any(|t| t.is_finite()) {
        signal.time.clone()
    } else {
        (0..signal.values.len()).map(|i| i as f64).collect()
    }
}
/// Min/max of `values` widened by `pad` of the span; a flat series gets a unit span.
fn padded_bounds(values: impl Iterator<Item = f64>, pad: f64) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    (lo - span * pad, hi + span * pad)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, FusionError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| FusionError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
