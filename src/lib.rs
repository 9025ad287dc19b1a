//! Strider - a minimalist side-scrolling runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, scrolling scenery)
//! - `render`: CPU framebuffer drawing (solid rectangles, fixed draw order)
//! - `app`: winit window loop with softbuffer presentation
//! - `settings`: Persisted run preferences

pub mod app;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// One simulation tick of wall time (~60 Hz fixed cadence)
    pub const TICK: Duration = Duration::from_millis(16);

    /// Screen dimensions (simulation space and window size)
    pub const SCREEN_WIDTH: i32 = 1280;
    pub const SCREEN_HEIGHT: i32 = 720;

    /// Height of the floor band at the bottom of the screen
    pub const FLOOR_HEIGHT: i32 = 120;
    /// The y coordinate the player's feet rest on when grounded
    pub const GROUND_Y: i32 = SCREEN_HEIGHT - FLOOR_HEIGHT;

    /// Downward acceleration added to vertical velocity each tick
    pub const GRAVITY: i32 = 1;
    /// Vertical velocity set by a jump (negative = upward)
    pub const JUMP_VELOCITY: i32 = -25;

    /// Player square: fixed x, edge length, fill color
    pub const PLAYER_X: i32 = 100;
    pub const PLAYER_SIZE: i32 = 40;
    pub const COLOR_PLAYER: u32 = 0xff_ff_ff;

    /// Scene colors (0RGB, as presented by softbuffer)
    pub const COLOR_BACKGROUND: u32 = 0x6a_7a_8c;
    pub const COLOR_FLOOR: u32 = 0x00_00_00;
    pub const COLOR_SKY_ELEMENT: u32 = 0xe8_ee_f4;

    /// Thickness of the ground line drawn at `GROUND_Y`
    pub const GROUND_LINE_HEIGHT: i32 = 2;

    /// Floor scenery: count, size, scroll speed, vertical placement band
    pub const FLOOR_ELEMENT_COUNT: usize = 16;
    pub const FLOOR_ELEMENT_WIDTH: i32 = 40;
    pub const FLOOR_ELEMENT_HEIGHT: i32 = 6;
    pub const FLOOR_ELEMENT_SPEED: i32 = 6;
    pub const FLOOR_BAND_TOP: i32 = GROUND_Y + 8;
    pub const FLOOR_BAND_BOTTOM: i32 = SCREEN_HEIGHT - 8;

    /// Sky scenery scrolls slower than the floor for a parallax feel
    pub const SKY_ELEMENT_COUNT: usize = 10;
    pub const SKY_ELEMENT_WIDTH: i32 = 56;
    pub const SKY_ELEMENT_HEIGHT: i32 = 14;
    pub const SKY_ELEMENT_SPEED: i32 = 2;
    pub const SKY_BAND_TOP: i32 = 40;
    pub const SKY_BAND_BOTTOM: i32 = 320;
}
