//!
//! XLSX worksheet for a merged metric table.
//!

///
/// XLSX worksheet for a merged metric table.
///
#[derive(Default)]
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// Header names and their column widths.
    pub headers: Vec<(String, usize)>,
    /// Profile names in column order.
    pub profiles: Vec<String>,
    /// The number of data rows written.
    pub rows: u32,
}

impl Worksheet {
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 14;
    /// Width of the change column.
    const CHANGE_COLUMN_WIDTH: usize = 12;

    ///
    /// Creates a new worksheet with the index and profile columns.
    ///
    pub fn new(
        name: &str,
        headers: Vec<(String, usize)>,
        profiles: Vec<String>,
        change_caption: &str,
    ) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        for (header_index, (header_name, column_width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                header_name.as_str(),
                &Self::worksheet_caption_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }
        for (profile_index, profile) in profiles.iter().enumerate() {
            let column_index = (headers.len() + profile_index) as u16;
            worksheet.write_with_format(
                0,
                column_index,
                profile.as_str(),
                &Self::column_header_format(),
            )?;
            worksheet.set_column_width(column_index, Self::VALUE_COLUMN_WIDTH as f64)?;
        }
        let change_column = (headers.len() + profiles.len()) as u16;
        worksheet.write_with_format(
            0,
            change_column,
            change_caption,
            &Self::column_comparison_header_format(),
        )?;
        worksheet.set_column_width(change_column, Self::CHANGE_COLUMN_WIDTH as f64)?;

        Ok(Self {
            worksheet,
            headers,
            profiles,
            rows: 0,
        })
    }

    ///
    /// Appends a row with the index cells, one value per profile, and the change.
    ///
    /// `NaN` values and changes leave their cells empty.
    ///
    pub fn write_row(&mut self, index: &[&str], values: &[f64], change: f64) -> anyhow::Result<()> {
        let row_index = self.rows + 1;
        self.rows += 1;

        for (column_index, cell) in index.iter().enumerate() {
            self.worksheet.write_with_format(
                row_index,
                column_index as u16,
                *cell,
                &Self::row_header_format(),
            )?;
        }
        for (profile_index, value) in values.iter().enumerate() {
            if value.is_nan() {
                continue;
            }
            self.worksheet.write_with_format(
                row_index,
                (self.headers.len() + profile_index) as u16,
                *value,
                &Self::value_format(),
            )?;
        }
        if change.is_finite() {
            self.worksheet.write_with_format(
                row_index,
                (self.headers.len() + self.profiles.len()) as u16,
                change / 100.0,
                &Self::percent_format(),
            )?;
        }
        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(14);
        let format = format.set_font_color("#FFFFFF");
        let format = format.set_background_color("#0969DA");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::VerticalCenter);
        format.set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#24292F");
        let format = format.set_background_color("#F6F8FA");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        format.set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_comparison_header_format() -> rust_xlsxwriter::Format {
        let format = Self::column_header_format();
        let format = format.set_font_size(11);
        format.set_text_wrap()
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#24292F");
        let format = format.set_background_color("#DDF4FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        format.set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#000000");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        format.set_num_format("0.###")
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn percent_format() -> rust_xlsxwriter::Format {
        let format = Self::value_format();
        format.set_num_format("0.00%")
    }
}
