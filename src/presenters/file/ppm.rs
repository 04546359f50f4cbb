use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary PPM (`P6`) images.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);
        self.write_to(buffer, &mut file)?;
        file.flush()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(&self, buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
        let width = buffer.pixel_rect().width();
        let height = buffer.pixel_rect().height();

        // P6 is binary RGB, followed by width, height and max colour value
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", width, height)?;
        writeln!(writer, "255")?;
        writer.write_all(buffer.buffer())
    }
}
