//! CPU framebuffer drawing
//!
//! Everything on screen is a solid rectangle. `Frame` wraps the pixel
//! buffer handed out by the presentation surface; `draw_world` is the one
//! place that knows the back-to-front draw order.

use crate::consts::*;
use crate::sim::{Floor, Player, Sky, World};

/// A mutable view over a 0RGB pixel buffer (one `u32` per pixel)
pub struct Frame<'a> {
    pixels: &'a mut [u32],
    width: i32,
    height: i32,
}

impl<'a> Frame<'a> {
    /// Wrap a pixel buffer of exactly `width * height` pixels
    pub fn new(pixels: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            pixels,
            width: width as i32,
            height: height as i32,
        }
    }

    /// Fill the whole frame with one color
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle, clipped to the frame bounds
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for row in y0..y1 {
            let start = (row * self.width + x0) as usize;
            let end = (row * self.width + x1) as usize;
            self.pixels[start..end].fill(color);
        }
    }

    /// Color of the pixel at (x, y); None outside the frame
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }
}

/// Draw the whole world back to front: background, floor, player, sky.
///
/// Floor before player is a correctness contract (the player stands in
/// front of it); sky decorations are overlaid last.
pub fn draw_world(frame: &mut Frame, world: &World) {
    frame.clear(COLOR_BACKGROUND);
    draw_floor(frame, &world.floor);
    draw_player(frame, &world.player);
    draw_sky(frame, &world.sky);
}

fn draw_floor(frame: &mut Frame, floor: &Floor) {
    frame.fill_rect(0, GROUND_Y, SCREEN_WIDTH, GROUND_LINE_HEIGHT, COLOR_FLOOR);
    for element in &floor.elements {
        frame.fill_rect(
            element.pos.x,
            element.pos.y,
            FLOOR_ELEMENT_WIDTH,
            FLOOR_ELEMENT_HEIGHT,
            COLOR_FLOOR,
        );
    }
}

fn draw_player(frame: &mut Frame, player: &Player) {
    // The square extends upward from the feet position
    frame.fill_rect(
        player.pos.x,
        player.pos.y - PLAYER_SIZE,
        PLAYER_SIZE,
        PLAYER_SIZE,
        COLOR_PLAYER,
    );
}

fn draw_sky(frame: &mut Frame, sky: &Sky) {
    for element in &sky.elements {
        frame.fill_rect(
            element.pos.x,
            element.pos.y,
            SKY_ELEMENT_WIDTH,
            SKY_ELEMENT_HEIGHT,
            COLOR_SKY_ELEMENT,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_frame(pixels: &mut Vec<u32>, w: u32, h: u32) -> Frame<'_> {
        pixels.resize((w * h) as usize, 0);
        Frame::new(pixels, w, h)
    }

    #[test]
    fn test_fill_rect_clips_at_edges() {
        let mut pixels = Vec::new();
        let mut frame = test_frame(&mut pixels, 8, 8);

        // Partially off every edge; must not panic and must fill the overlap
        frame.fill_rect(-4, -4, 6, 6, 0xff0000);
        assert_eq!(frame.pixel(0, 0), Some(0xff0000));
        assert_eq!(frame.pixel(1, 1), Some(0xff0000));
        assert_eq!(frame.pixel(2, 2), Some(0));

        frame.fill_rect(6, 6, 10, 10, 0x00ff00);
        assert_eq!(frame.pixel(7, 7), Some(0x00ff00));
        assert_eq!(frame.pixel(5, 5), Some(0));
    }

    #[test]
    fn test_fill_rect_fully_outside_is_noop() {
        let mut pixels = Vec::new();
        let mut frame = test_frame(&mut pixels, 8, 8);
        frame.fill_rect(100, 100, 4, 4, 0xff0000);
        frame.fill_rect(-50, 2, 4, 4, 0xff0000);
        assert!(pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_draw_order_player_over_floor() {
        let mut world = World::new(3);
        // Park a floor element directly under the player square
        world.floor.elements[0].pos.x = PLAYER_X;
        world.floor.elements[0].pos.y = GROUND_Y - 10;

        let mut pixels = Vec::new();
        let mut frame = test_frame(
            &mut pixels,
            SCREEN_WIDTH as u32,
            SCREEN_HEIGHT as u32,
        );
        draw_world(&mut frame, &world);

        // Player color wins where the two overlap
        assert_eq!(frame.pixel(PLAYER_X + 1, GROUND_Y - 9), Some(COLOR_PLAYER));
        // Background shows where nothing was drawn
        assert_eq!(frame.pixel(SCREEN_WIDTH - 1, 0), Some(COLOR_BACKGROUND));
        // Ground line is present
        assert_eq!(frame.pixel(0, GROUND_Y), Some(COLOR_FLOOR));
    }

    #[test]
    fn test_sky_drawn_last() {
        let mut world = World::new(3);
        // Sky element overlapping the player rect: sky is overlaid on top
        world.sky.elements[0].pos.x = PLAYER_X;
        world.sky.elements[0].pos.y = GROUND_Y - PLAYER_SIZE;

        let mut pixels = Vec::new();
        let mut frame = test_frame(
            &mut pixels,
            SCREEN_WIDTH as u32,
            SCREEN_HEIGHT as u32,
        );
        draw_world(&mut frame, &world);

        assert_eq!(
            frame.pixel(PLAYER_X + 1, GROUND_Y - PLAYER_SIZE + 1),
            Some(COLOR_SKY_ELEMENT)
        );
    }
}
