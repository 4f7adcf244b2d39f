//! Writing rendered frames to disk or stdout.
//!
//! Plain PPM is written by hand so the exact text layout is under our
//! control; PNG and JPEG go through the `image` crate.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::RenderError;
use crate::sky_image::SkyImage;

/// Output path that streams plain PPM to stdout.
pub const STDOUT_PATH: &str = "-";

/// Encodings the renderer can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// ASCII `P3` portable pixmap.
    PlainPpm,
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Pick the format from the file extension. No extension and `-` both
    /// mean plain PPM.
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        if path.as_os_str() == STDOUT_PATH {
            return Ok(Self::PlainPpm);
        }
        let Some(ext) = path.extension() else {
            return Ok(Self::PlainPpm);
        };
        match ext.to_string_lossy().to_ascii_lowercase().as_str() {
            "ppm" => Ok(Self::PlainPpm),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            other => Err(RenderError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::PlainPpm => "ppm",
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

/// Write `image` as plain PPM.
///
/// Header `P3`, `W H`, `255`, then one text line per row. Each pixel is
/// three right-aligned three-wide integers, pixels separated by three spaces.
pub fn write_ppm<W: Write>(image: &SkyImage, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;

    for row in image.rows() {
        for (x, [r, g, b]) in row.iter().enumerate() {
            if x > 0 {
                writer.write_all(b"   ")?;
            }
            write!(writer, "{r:3} {g:3} {b:3}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Plain PPM as an in-memory string.
pub fn ppm_string(image: &SkyImage) -> String {
    let mut buf = Vec::with_capacity(image.pixels().len() * 14 + 32);
    // Writing into a Vec cannot fail and only ASCII is produced.
    let _ = write_ppm(image, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Save `image` to `path`, choosing the encoding from its extension.
///
/// `-` streams plain PPM to stdout. Missing parent directories are created.
pub fn save_image(image: &SkyImage, path: &Path) -> Result<OutputFormat, RenderError> {
    let format = OutputFormat::from_path(path)?;

    if path.as_os_str() == STDOUT_PATH {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        write_ppm(image, &mut writer)?;
        writer.flush()?;
        info!("Wrote {}x{} PPM to stdout", image.width(), image.height());
        return Ok(format);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    match format {
        OutputFormat::PlainPpm => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_ppm(image, &mut writer)?;
            writer.flush()?;
        }
        OutputFormat::Png => image
            .to_rgb_image()
            .save_with_format(path, image::ImageFormat::Png)?,
        OutputFormat::Jpeg => image
            .to_rgb_image()
            .save_with_format(path, image::ImageFormat::Jpeg)?,
    }

    info!(
        "Wrote {}x{} {} to {}",
        image.width(),
        image.height(),
        format.extension(),
        path.display()
    );
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn two_by_two() -> SkyImage {
        SkyImage::from_pixels(
            2,
            2,
            vec![[255, 0, 7], [19, 38, 57], [0, 0, 0], [100, 200, 255]],
        )
        .unwrap()
    }

    #[test]
    fn test_format_from_extension() {
        let cases = [
            ("sky.ppm", OutputFormat::PlainPpm),
            ("sky", OutputFormat::PlainPpm),
            ("-", OutputFormat::PlainPpm),
            ("out/sky.png", OutputFormat::Png),
            ("SKY.PNG", OutputFormat::Png),
            ("sky.jpeg", OutputFormat::Jpeg),
            ("sky.jpg", OutputFormat::Jpeg),
        ];
        for (path, expected) in cases {
            assert_eq!(
                OutputFormat::from_path(&PathBuf::from(path)).unwrap(),
                expected,
                "{path}"
            );
        }
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = OutputFormat::from_path(Path::new("sky.tiff")).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedFormat(ref ext) if ext == "tiff"));
    }

    #[test]
    fn test_ppm_layout() {
        let text = ppm_string(&two_by_two());
        let expected = concat!(
            "P3\n",
            "2 2\n",
            "255\n",
            "255   0   7    19  38  57\n",
            "  0   0   0   100 200 255\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_ppm_line_count() {
        let image = SkyImage::from_pixels(3, 5, vec![[1, 2, 3]; 15]).unwrap();
        let text = ppm_string(&image);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3 + 5);
        assert_eq!(lines[1], "3 5");
        assert_eq!(lines[3], "  1   2   3     1   2   3     1   2   3");
    }

    #[test]
    fn test_save_ppm_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/sky.ppm");
        let format = save_image(&two_by_two(), &path).unwrap();
        assert_eq!(format, OutputFormat::PlainPpm);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, ppm_string(&two_by_two()));
    }

    #[test]
    fn test_save_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sky.png");
        assert_eq!(
            save_image(&two_by_two(), &path).unwrap(),
            OutputFormat::Png
        );

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(1, 0).0, [19, 38, 57]);
    }

    #[test]
    fn test_save_unsupported_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sky.bmp");
        assert!(save_image(&two_by_two(), &path).is_err());
        assert!(!path.exists());
    }
}
