use crate::color::Rgb565;
use crate::draw::DrawError;
use crate::surface::Surface;

impl Surface {
    /// Integer Bresenham line between two inclusive endpoints.
    ///
    /// Endpoints are ordered along the fast axis before stepping, so swapping
    /// them yields the same pixels. The final endpoint is written after the
    /// loop.
    pub fn draw_line_bresenham(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgb565,
    ) -> Result<(), DrawError> {
        self.check_point(x0, y0)?;
        self.check_point(x1, y1)?;

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let shallow = dx >= dy;

        let ((x0, y0), (x1, y1)) = if (shallow && x0 > x1) || (!shallow && y0 > y1) {
            ((x1, y1), (x0, y0))
        } else {
            ((x0, y0), (x1, y1))
        };

        if shallow {
            let step_y = if y0 < y1 { 1 } else { -1 };
            let mut y = y0;
            let mut error = 2 * dy - dx;

            for x in x0..x1 {
                self.plot(x, y, color);
                if error > 0 {
                    y += step_y;
                    error -= 2 * dx;
                }
                error += 2 * dy;
            }
        } else {
            let step_x = if x0 < x1 { 1 } else { -1 };
            let mut x = x0;
            let mut error = 2 * dx - dy;

            for y in y0..y1 {
                self.plot(x, y, color);
                if error > 0 {
                    x += step_x;
                    error -= 2 * dy;
                }
                error += 2 * dx;
            }
        }
        self.plot(x1, y1, color);

        Ok(())
    }

    /// Outline through the four vertices `(cx ± half_width, cy)` and
    /// `(cx, cy ± half_height)`. Edges with an endpoint off the surface are
    /// skipped and reported after the others are drawn.
    pub fn draw_diamond_outline(
        &mut self,
        center_x: i32,
        center_y: i32,
        half_width: i32,
        half_height: i32,
        color: Rgb565,
    ) -> Result<(), DrawError> {
        let left = (center_x - half_width, center_y);
        let right = (center_x + half_width, center_y);
        let top = (center_x, center_y - half_height);
        let bottom = (center_x, center_y + half_height);

        [(left, bottom), (left, top), (right, bottom), (right, top)]
            .into_iter()
            .map(|((x0, y0), (x1, y1))| self.draw_line_bresenham(x0, y0, x1, y1, color))
            .fold(Ok(()), Result::and)
    }

    /// Caller guarantees the point lies inside the surface.
    #[inline]
    fn plot(&mut self, x: i32, y: i32, color: Rgb565) {
        let index = self.index(x as u16, y as u16);
        self.back_buffer_mut()[index] = color;
    }
}
