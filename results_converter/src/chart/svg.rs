//!
//! The SVG chart renderer.
//!

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::HPos;
use plotters::style::text_anchor::Pos;
use plotters::style::text_anchor::VPos;

use crate::chart::Chart;
use crate::chart::IChartRenderer;

/// The series bar colors.
const COLORS: &[RGBColor] = &[
    RGBColor(9, 105, 218),
    RGBColor(255, 140, 0),
    RGBColor(130, 80, 223),
    RGBColor(26, 127, 55),
];

/// The plotting area background.
const BACKGROUND: RGBColor = RGBColor(246, 248, 250);
/// The text color.
const FOREGROUND: RGBColor = RGBColor(36, 41, 47);
/// The color of a change where the candidate grew.
const GROWTH: RGBColor = RGBColor(207, 34, 46);
/// The color of a change where the candidate shrank.
const SHRINK: RGBColor = RGBColor(17, 99, 41);

const TITLE_FONT_SIZE: u32 = 32;
const AXIS_LABEL_FONT_SIZE: u32 = 20;
const TICK_LABEL_FONT_SIZE: u32 = 14;
const DATA_LABEL_FONT_SIZE: u32 = 13;

///
/// The SVG chart renderer.
///
/// Draws the series as grouped vertical bars, one group per category.
///
#[derive(Debug, Clone, Copy)]
pub struct Svg {
    /// The image width in pixels.
    pub width: u32,
    /// The image height in pixels.
    pub height: u32,
}

impl Default for Svg {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 720,
        }
    }
}

impl IChartRenderer for Svg {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, chart: &Chart, path: &Path) -> anyhow::Result<()> {
        let root = SVGBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let (minimum, maximum) = chart
            .series
            .iter()
            .flat_map(|series| series.values.iter().copied())
            .filter(|value| value.is_finite())
            .fold((0.0_f64, 0.0_f64), |(minimum, maximum), value| {
                (minimum.min(value), maximum.max(value))
            });
        let padding = if maximum > minimum {
            (maximum - minimum) * 0.15
        } else {
            1.0
        };
        let bottom = if minimum < 0.0 { minimum - padding } else { 0.0 };
        let top = maximum + padding;
        let count = chart.categories.len().max(1);

        let mut context = ChartBuilder::on(&root)
            .caption(chart.title.as_str(), ("sans-serif", TITLE_FONT_SIZE))
            .margin(20)
            .x_label_area_size(140)
            .y_label_area_size(90)
            .build_cartesian_2d(-0.5..(count as f64 - 0.5), bottom..top)?;
        context.plotting_area().fill(&BACKGROUND)?;

        let categories = chart.categories.as_slice();
        context
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(count)
            .x_label_formatter(&|x| {
                let index = x.round();
                if index < 0.0 || (x - index).abs() > 0.3 {
                    return String::new();
                }
                categories
                    .get(index as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .y_desc(chart.y_label.as_str())
            .label_style(("sans-serif", TICK_LABEL_FONT_SIZE).into_font().color(&FOREGROUND))
            .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE).into_font().color(&FOREGROUND))
            .draw()?;

        let group_width = 0.8;
        let bar_width = group_width / (chart.series.len().max(1) as f64);
        for (series_index, series) in chart.series.iter().enumerate() {
            let color = COLORS[series_index % COLORS.len()];
            let offset =
                (series_index as f64 - (chart.series.len() as f64 - 1.0) / 2.0) * bar_width;
            let bars = series
                .values
                .iter()
                .enumerate()
                .filter(|(_, value)| value.is_finite())
                .map(|(category_index, value)| {
                    let center = category_index as f64 + offset;
                    Rectangle::new(
                        [
                            (center - bar_width / 2.0 + 0.01, 0.0),
                            (center + bar_width / 2.0 - 0.01, *value),
                        ],
                        color.filled(),
                    )
                });
            context
                .draw_series(bars)?
                .label(series.name.as_str())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled())
                });
        }

        for (category_index, change) in chart.changes.iter().enumerate() {
            if !change.is_finite() {
                continue;
            }
            let height = chart
                .series
                .iter()
                .filter_map(|series| series.values.get(category_index))
                .copied()
                .filter(|value| value.is_finite())
                .fold(0.0_f64, f64::max);
            let color = if *change >= 0.0 { GROWTH } else { SHRINK };
            context.draw_series(std::iter::once(Text::new(
                format!("{change:.1}%"),
                (category_index as f64, height + padding * 0.1),
                ("sans-serif", DATA_LABEL_FONT_SIZE)
                    .into_font()
                    .color(&color)
                    .pos(Pos::new(HPos::Center, VPos::Bottom)),
            )))?;
        }

        context
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", TICK_LABEL_FONT_SIZE))
            .draw()?;

        root.present()?;
        Ok(())
    }
}
