use embedded_graphics::{
    Drawable, Pixel,
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Point, Primitive, Size},
    primitives::{ContainsPoint, Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use embedded_pbm::PixelGrid;
use log::{error, trace};

/// Where a scaled bitmap ends up inside its target rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Integer magnification, at least 1.
    pub scale: u32,
    /// May lie outside the target (and the canvas) for oversized bitmaps.
    pub top_left: Point,
    pub size: Size,
}

/// Largest integer scale at which `grid` fits `target`, centered.
/// Bitmaps larger than the target are not shrunk.
pub fn placement(grid: &PixelGrid, target: &Rectangle) -> Placement {
    let width = grid.width().max(1);
    let height = grid.height().max(1);
    let scale = (target.size.width / width)
        .min(target.size.height / height)
        .max(1);
    let size = Size::new(width * scale, height * scale);
    let offset = Point::new(
        (target.size.width as i32 - size.width as i32).div_euclid(2),
        (target.size.height as i32 - size.height as i32).div_euclid(2),
    );
    Placement {
        scale,
        top_left: target.top_left + offset,
        size,
    }
}

/// Paints `grid` scaled and centered into `target`.
///
/// Ink becomes `BinaryColor::Off`, paper `BinaryColor::On`. Pixels that fall
/// outside the canvas are dropped, pixels missing from ragged rows are left
/// untouched.
pub fn blit<D>(grid: &PixelGrid, target: &Rectangle, canvas: &mut D) -> Result<Placement, D::Error>
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    let placement = placement(grid, target);
    trace!("Blitting {}x{} bitmap at {:?}", grid.width(), grid.height(), placement);

    let bounds = Rectangle::new(Point::zero(), canvas.size());
    let scale = placement.scale as i32;
    let origin = placement.top_left;

    let pixels = (0..grid.height())
        .flat_map(|y| (0..grid.width()).map(move |x| (x, y)))
        .filter_map(|(x, y)| grid.get(x, y).map(|value| (x, y, value)))
        .flat_map(move |(x, y, value)| {
            let color = if value == 0 {
                BinaryColor::On
            } else {
                BinaryColor::Off
            };
            let corner = origin + Point::new(x as i32 * scale, y as i32 * scale);
            (0..scale).flat_map(move |sy| {
                (0..scale).map(move |sx| Pixel(corner + Point::new(sx, sy), color))
            })
        })
        .filter(|Pixel(point, _)| bounds.contains(*point));

    canvas.draw_iter(pixels)?;
    Ok(placement)
}

/// Centre of the stand-in smiley drawn when a bitmap could not be rendered.
pub const TEST_PATTERN_CENTER: Point = Point::new(100, 90);

/// Draws a simple smiley face in place of a bitmap that failed to render.
pub fn draw_test_pattern<D>(canvas: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let c = TEST_PATTERN_CENTER;
    let ink = PrimitiveStyle::with_fill(BinaryColor::Off);

    Rectangle::new(c - Point::new(30, 30), Size::new(60, 60))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::Off, 1))
        .draw(canvas)?;
    Rectangle::new(c + Point::new(-15, -10), Size::new(5, 5))
        .into_styled(ink)
        .draw(canvas)?;
    Rectangle::new(c + Point::new(10, -10), Size::new(5, 5))
        .into_styled(ink)
        .draw(canvas)?;
    Line::new(c + Point::new(-15, 10), c + Point::new(14, 10))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::Off, 1))
        .draw(canvas)?;
    canvas.draw_iter([
        Pixel(c + Point::new(-16, 9), BinaryColor::Off),
        Pixel(c + Point::new(16, 9), BinaryColor::Off),
    ])
}

/// Renders an optional bitmap into `target`.
///
/// A missing bitmap is replaced by an error notice at `notice`, a failed blit
/// by [`draw_test_pattern`]. Neither case is reported to the caller.
pub fn render_or_placeholder<D>(
    grid: Option<&PixelGrid>,
    target: &Rectangle,
    notice: Point,
    canvas: &mut D,
) where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    let Some(grid) = grid else {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::Off);
        Text::with_baseline("Error loading", notice, style, Baseline::Top)
            .draw(canvas)
            .ok();
        Text::with_baseline("emoji image", notice + Point::new(0, 20), style, Baseline::Top)
            .draw(canvas)
            .ok();
        return;
    };
    if blit(grid, target, canvas).is_err() {
        error!("Bitmap rendering failed, drawing test pattern");
        draw_test_pattern(canvas).ok();
    }
}
