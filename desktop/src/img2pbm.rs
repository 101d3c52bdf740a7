use argh::FromArgs;
use embedded_pbm::PixelGrid;
use image::{DynamicImage, imageops::FilterType};

#[derive(FromArgs)]
/// Converts an image into a badge emoji asset
struct Args {
    /// input image path
    #[argh(option, short = 'i')]
    input_path: String,

    /// output PBM file path
    #[argh(option, short = 'o')]
    output_path: String,

    /// fit the image into a square of this many pixels first
    #[argh(option, short = 's')]
    size: Option<u32>,

    /// luma below this becomes ink
    #[argh(option, short = 't', default = "128")]
    threshold: u8,

    /// write the plain text (P1) format instead of raw (P4)
    #[argh(switch, short = 'p')]
    plain: bool,
}

fn main() {
    let args: Args = argh::from_env();

    let mut image = image::open(&args.input_path).expect("Failed to open input image");
    if let Some(size) = args.size {
        image = image.resize(size, size, FilterType::Nearest);
    }

    let grid = threshold(image, args.threshold);
    let mut out = Vec::new();
    if args.plain {
        embedded_pbm::write_p1(&mut out, &grid).expect("Failed to encode P1");
    } else {
        embedded_pbm::write_p4(&mut out, &grid).expect("Failed to encode P4");
    }
    std::fs::write(&args.output_path, out).expect("Failed to write PBM file");
    println!(
        "Wrote {}x{} bitmap to {}",
        grid.width(),
        grid.height(),
        args.output_path
    );
}

fn threshold(image: DynamicImage, threshold: u8) -> PixelGrid {
    let image = image.into_luma8();
    let pixels: Vec<u8> = image
        .pixels()
        .map(|pixel| u8::from(pixel[0] < threshold))
        .collect();
    PixelGrid::from_flat(image.width(), image.height(), &pixels)
}
