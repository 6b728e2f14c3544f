use crate::color::Rgb565;
use crate::draw::DrawError;
use crate::surface::Surface;

impl Surface {
    /// Writes `length` consecutive cells starting at `(x, y)` without any
    /// validation. A run longer than the remaining row continues on the next
    /// one.
    ///
    /// # Panics
    ///
    /// Panics if the run ends past the last cell of the buffer.
    #[inline]
    pub fn draw_line_unchecked(&mut self, x: u16, y: u16, length: u16, color: Rgb565) {
        let start = self.index(x, y);
        self.back_buffer_mut()[start..start + length as usize].fill(color);
    }

    /// Horizontal run that must stay within row `y`.
    pub fn draw_line(
        &mut self,
        x: u16,
        y: u16,
        length: u16,
        color: Rgb565,
    ) -> Result<(), DrawError> {
        self.check_area(y, 1, x, length)?;
        self.draw_line_unchecked(x, y, length, color);

        Ok(())
    }

    pub fn draw_rectangle(
        &mut self,
        y: u16,
        height: u16,
        x: u16,
        width: u16,
        color: Rgb565,
    ) -> Result<(), DrawError> {
        self.check_area(y, height, x, width)?;

        for row in y..y + height {
            self.draw_line_unchecked(x, row, width, color);
        }

        Ok(())
    }

    /// Same result as [`Surface::draw_rectangle`]: the first row is filled
    /// and then copied down in bulk.
    pub fn draw_rectangle_fast(
        &mut self,
        y: u16,
        height: u16,
        x: u16,
        width: u16,
        color: Rgb565,
    ) -> Result<(), DrawError> {
        self.check_area(y, height, x, width)?;

        if height == 0 || width == 0 {
            return Ok(());
        }

        let stride = self.width() as usize;
        let start = self.index(x, y);
        let row = start..start + width as usize;
        let buffer = self.back_buffer_mut();
        buffer[row.clone()].fill(color);

        for n in 1..height as usize {
            buffer.copy_within(row.clone(), start + n * stride);
        }

        Ok(())
    }
}
