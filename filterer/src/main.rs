use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use fast_image_filter as ff;
use fast_image_filter::images::Image;
use image::{ColorType, ImageReader};
use log::debug;

const OUTPUT_PATH: &str = "output.png";

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
    /// Path to source image file
    #[clap(value_parser)]
    source_path: PathBuf,

    /// Name of the convolution kernel: edge, sharpen, blur, gauss or
    /// emboss. Any other name selects the identity kernel that copies
    /// the image unchanged.
    #[clap(value_parser)]
    kernel: String,

    /// Count of worker threads
    #[clap(value_parser)]
    threads: u32,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    filter(&cli)
}

fn filter(cli: &Cli) -> Result<()> {
    let started_at = Instant::now();
    let (src_image, color_type) = open_source_image(cli)?;
    let mut dst_image = Image::new(
        src_image.width(),
        src_image.height(),
        src_image.channels(),
    )?;

    let kernel_type = get_kernel_type(&cli.kernel);
    debug!(
        "Convolve the {}x{} source image with the {:?} kernel using {} threads",
        src_image.width(),
        src_image.height(),
        kernel_type,
        cli.threads
    );
    ff::Filterer::new()
        .filter(
            &src_image,
            &mut dst_image,
            &ff::FilterOptions::new()
                .kernel_type(kernel_type)
                .thread_count(cli.threads),
        )
        .with_context(|| "Failed to filter image")?;

    save_result(&dst_image, color_type)?;
    debug!("Took {:.3} seconds", started_at.elapsed().as_secs_f64());
    Ok(())
}

fn open_source_image(cli: &Cli) -> Result<(Image<'static>, ColorType)> {
    let source_path = &cli.source_path;
    debug!("Opening the source image {:?}", source_path);
    let image = ImageReader::open(source_path)
        .with_context(|| format!("Failed to read source file from {:?}", source_path))?
        .decode()
        .with_context(|| "Failed to decode source image")?;

    let width = image.width();
    let height = image.height();

    // Images with 16-bit and float components are narrowed to 8 bits
    // per sample, the count of channels is kept.
    let (buffer, channels, color_type) = match image.color() {
        ColorType::L8 | ColorType::L16 => (image.to_luma8().into_raw(), 1, ColorType::L8),
        ColorType::La8 | ColorType::La16 => {
            (image.to_luma_alpha8().into_raw(), 2, ColorType::La8)
        }
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => {
            (image.to_rgb8().into_raw(), 3, ColorType::Rgb8)
        }
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => {
            (image.to_rgba8().into_raw(), 4, ColorType::Rgba8)
        }
        other => {
            return Err(anyhow!(
                "Unsupported pixel's format of source image: {:?}",
                other
            ))
        }
    };

    let src_image = Image::from_vec_u8(width, height, channels, buffer)
        .with_context(|| "Failed to create source image pixels container")?;
    Ok((src_image, color_type))
}

fn save_result(image: &Image, color_type: ColorType) -> Result<()> {
    debug!(
        "Save the result image into the file {:?} with row stride {}",
        OUTPUT_PATH,
        image.row_stride()
    );
    image::save_buffer(
        OUTPUT_PATH,
        image.buffer(),
        image.width(),
        image.height(),
        color_type,
    )
    .with_context(|| "Failed to save the result image")?;
    Ok(())
}

/// Maps the kernel name given on the command line to the kernel type.
/// Unknown names select the identity kernel.
fn get_kernel_type(name: &str) -> ff::KernelType {
    match name {
        "edge" => ff::KernelType::EdgeDetect,
        "sharpen" => ff::KernelType::Sharpen,
        "blur" => ff::KernelType::BoxBlur,
        "gauss" => ff::KernelType::GaussianBlur,
        "emboss" => ff::KernelType::Emboss,
        _ => ff::KernelType::Identity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }

    #[test]
    fn kernel_names() {
        assert_eq!(get_kernel_type("edge"), ff::KernelType::EdgeDetect);
        assert_eq!(get_kernel_type("sharpen"), ff::KernelType::Sharpen);
        assert_eq!(get_kernel_type("blur"), ff::KernelType::BoxBlur);
        assert_eq!(get_kernel_type("gauss"), ff::KernelType::GaussianBlur);
        assert_eq!(get_kernel_type("emboss"), ff::KernelType::Emboss);
    }

    #[test]
    fn unknown_kernel_name_falls_back_to_identity() {
        assert_eq!(get_kernel_type("identity"), ff::KernelType::Identity);
        assert_eq!(get_kernel_type("EDGE"), ff::KernelType::Identity);
        assert_eq!(get_kernel_type(""), ff::KernelType::Identity);
    }
}
