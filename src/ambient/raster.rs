use std::path::Path;

use kurbo::Point;

use crate::foundation::core::{Rgba8Premul, SurfaceSize};
use crate::foundation::error::{GlimmerError, GlimmerResult};
use crate::foundation::math::over;

/// The drawing surface consumed from the rendering host.
///
/// Deliberately minimal: pixel-dimension read/write plus the two fill primitives
/// the ambient backdrop needs. The crate ships [`RasterSurface`] as the CPU
/// implementation; hosts with a native canvas can provide their own.
pub trait PaintSurface {
    /// Current pixel dimensions.
    fn size(&self) -> SurfaceSize;

    /// Resynchronize pixel dimensions to the containing element. Implementations
    /// behave like a canvas resize: the backing store is cleared.
    fn set_size(&mut self, size: SurfaceSize);

    /// Source-over fill of the whole surface with a linear gradient along
    /// `from -> to`.
    fn fill_linear_gradient(
        &mut self,
        from: Point,
        to: Point,
        start: Rgba8Premul,
        end: Rgba8Premul,
    );

    /// Source-over fill of a solid disc.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8Premul);
}

/// CPU raster surface: tightly packed premultiplied RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    size: SurfaceSize,
    data: Vec<u8>,
}

impl RasterSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            data: vec![0; size.area() * 4],
        }
    }

    /// Raw premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read one pixel. Out-of-bounds reads return transparent.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8Premul {
        if x >= self.size.width || y >= self.size.height {
            return Rgba8Premul::transparent();
        }
        let i = (y as usize * self.size.width as usize + x as usize) * 4;
        Rgba8Premul {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        }
    }

    /// Encode the surface as a PNG at `path`.
    pub fn write_png(&self, path: &Path) -> GlimmerResult<()> {
        if self.size.is_empty() {
            return Err(GlimmerError::render("cannot encode an empty surface"));
        }
        image::save_buffer_with_format(
            path,
            &self.data,
            self.size.width,
            self.size.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| GlimmerError::render(format!("png write '{}': {e}", path.display())))
    }

    fn blend_pixel(&mut self, x: usize, y: usize, src: Rgba8Premul) {
        let i = (y * self.size.width as usize + x) * 4;
        let dst = [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]];
        let out = over(dst, src.to_bytes(), 1.0);
        self.data[i..i + 4].copy_from_slice(&out);
    }
}

fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

fn lerp_rgba(a: Rgba8Premul, b: Rgba8Premul, t: f64) -> Rgba8Premul {
    Rgba8Premul {
        r: lerp_u8(a.r, b.r, t),
        g: lerp_u8(a.g, b.g, t),
        b: lerp_u8(a.b, b.b, t),
        a: lerp_u8(a.a, b.a, t),
    }
}

impl PaintSurface for RasterSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn set_size(&mut self, size: SurfaceSize) {
        if size == self.size {
            return;
        }
        self.size = size;
        self.data = vec![0; size.area() * 4];
    }

    fn fill_linear_gradient(
        &mut self,
        from: Point,
        to: Point,
        start: Rgba8Premul,
        end: Rgba8Premul,
    ) {
        if self.size.is_empty() {
            return;
        }

        let axis = to - from;
        let len2 = axis.dot(axis);

        let width = self.size.width as usize;
        let height = self.size.height as usize;
        for y in 0..height {
            for x in 0..width {
                // Sample at the pixel center, projected onto the gradient axis.
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let t = if len2 > 0.0 {
                    ((p - from).dot(axis) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                self.blend_pixel(x, y, lerp_rgba(start, end, t));
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8Premul) {
        if self.size.is_empty() || radius <= 0.0 {
            return;
        }

        let min_x = ((center.x - radius).floor().max(0.0)) as usize;
        let min_y = ((center.y - radius).floor().max(0.0)) as usize;
        let max_x = ((center.x + radius).ceil() as usize).min(self.size.width as usize);
        let max_y = ((center.y + radius).ceil() as usize).min(self.size.height as usize);

        let r2 = radius * radius;
        for y in min_y..max_y {
            for x in min_x..max_x {
                let dx = (x as f64 + 0.5) - center.x;
                let dy = (y as f64 + 0.5) - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(r: u8, g: u8, b: u8) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(r, g, b, 255)
    }

    #[test]
    fn gradient_fill_covers_every_pixel() {
        let mut s = RasterSurface::new(SurfaceSize::new(16, 8));
        s.fill_linear_gradient(
            Point::ZERO,
            Point::new(16.0, 8.0),
            opaque(255, 0, 0),
            opaque(0, 0, 255),
        );
        for y in 0..8 {
            for x in 0..16 {
                assert_eq!(s.pixel(x, y).a, 255, "({x},{y})");
            }
        }
        // Endpoints trend from red toward blue along the diagonal.
        assert!(s.pixel(0, 0).r > s.pixel(15, 7).r);
        assert!(s.pixel(0, 0).b < s.pixel(15, 7).b);
    }

    #[test]
    fn degenerate_axis_fills_with_start_color() {
        let mut s = RasterSurface::new(SurfaceSize::new(4, 4));
        s.fill_linear_gradient(Point::ZERO, Point::ZERO, opaque(10, 20, 30), opaque(200, 0, 0));
        assert_eq!(s.pixel(3, 3), opaque(10, 20, 30));
    }

    #[test]
    fn translucent_fill_blends_over_existing_content() {
        let mut s = RasterSurface::new(SurfaceSize::new(2, 1));
        s.fill_linear_gradient(
            Point::ZERO,
            Point::new(2.0, 1.0),
            opaque(0, 0, 0),
            opaque(0, 0, 0),
        );
        let translucent = Rgba8Premul::from_straight_rgba(255, 255, 255, 128);
        s.fill_linear_gradient(Point::ZERO, Point::new(2.0, 1.0), translucent, translucent);

        let px = s.pixel(0, 0);
        assert_eq!(px.a, 255);
        // Half white over black lands mid-gray.
        assert!((i32::from(px.r) - 128).abs() <= 2);
    }

    #[test]
    fn circle_fill_stays_inside_radius() {
        let mut s = RasterSurface::new(SurfaceSize::new(9, 9));
        s.fill_circle(Point::new(4.5, 4.5), 2.0, opaque(255, 255, 255));
        assert_eq!(s.pixel(4, 4).a, 255);
        assert_eq!(s.pixel(0, 0).a, 0);
        assert_eq!(s.pixel(8, 4).a, 0);
    }

    #[test]
    fn zero_radius_circle_paints_nothing() {
        let mut s = RasterSurface::new(SurfaceSize::new(4, 4));
        s.fill_circle(Point::new(2.0, 2.0), 0.0, opaque(255, 255, 255));
        assert!(s.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn resize_clears_backing_store() {
        let mut s = RasterSurface::new(SurfaceSize::new(8, 6));
        s.fill_linear_gradient(
            Point::ZERO,
            Point::new(8.0, 6.0),
            opaque(255, 0, 0),
            opaque(255, 0, 0),
        );
        s.set_size(SurfaceSize::new(12, 8));
        assert_eq!(s.size(), SurfaceSize::new(12, 8));
        assert_eq!(s.data().len(), 12 * 8 * 4);
        assert!(s.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn set_size_same_dims_keeps_content() {
        let mut s = RasterSurface::new(SurfaceSize::new(4, 4));
        s.fill_circle(Point::new(2.0, 2.0), 1.0, opaque(9, 9, 9));
        let before = s.data().to_vec();
        s.set_size(SurfaceSize::new(4, 4));
        assert_eq!(s.data(), &before[..]);
    }

    #[test]
    fn write_png_rejects_empty_surface() {
        let s = RasterSurface::new(SurfaceSize::new(0, 0));
        let err = s.write_png(Path::new("unused.png")).unwrap_err();
        assert!(err.to_string().contains("render error:"));
    }

    #[test]
    fn write_png_produces_a_file() {
        let mut s = RasterSurface::new(SurfaceSize::new(4, 4));
        s.fill_circle(Point::new(2.0, 2.0), 2.0, opaque(255, 0, 0));
        let path = std::env::temp_dir().join("glimmer_raster_png_roundtrip.png");
        s.write_png(&path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn empty_surface_paints_are_noops() {
        let mut s = RasterSurface::new(SurfaceSize::new(0, 10));
        s.fill_linear_gradient(
            Point::ZERO,
            Point::new(1.0, 1.0),
            opaque(1, 2, 3),
            opaque(4, 5, 6),
        );
        s.fill_circle(Point::new(0.0, 0.0), 5.0, opaque(1, 2, 3));
        assert!(s.data().is_empty());
    }
}
