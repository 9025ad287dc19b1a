//! World state and entity types
//!
//! Everything that changes tick to tick lives here. The `World` exclusively
//! owns its player and scenery by value; the only source of randomness is
//! the seeded RNG it carries.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Whether the player is resting on the ground or in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    Grounded,
    Airborne,
}

/// The player square
///
/// `pos` is the feet position: the square is drawn extending `PLAYER_SIZE`
/// pixels upward from it. When grounded, `pos.y == GROUND_Y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub pos: IVec2,
    /// Vertical velocity in pixels per tick (negative = upward)
    pub vel_y: i32,
    pub stance: Stance,
}

impl Player {
    /// Create a player at rest on the ground line
    pub fn new() -> Self {
        Self {
            pos: IVec2::new(PLAYER_X, GROUND_Y),
            vel_y: 0,
            stance: Stance::Grounded,
        }
    }

    /// Integrate gravity for one tick: velocity first, then position,
    /// then clamp to the ground line
    pub fn apply_gravity(&mut self) {
        self.vel_y += GRAVITY;
        self.pos.y += self.vel_y;

        if self.pos.y >= GROUND_Y {
            self.pos.y = GROUND_Y;
            self.vel_y = 0;
            self.stance = Stance::Grounded;
        } else {
            self.stance = Stance::Airborne;
        }
    }

    /// Start a jump. Only allowed from the ground; a jump issued while
    /// airborne is a no-op.
    pub fn jump(&mut self) {
        if self.stance == Stance::Grounded {
            self.vel_y = JUMP_VELOCITY;
            self.stance = Stance::Airborne;
        }
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.stance == Stance::Grounded
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A decorative sky rectangle drifting leftward
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkyElement {
    pub pos: IVec2,
}

impl SkyElement {
    fn spawn(rng: &mut Pcg32) -> Self {
        Self {
            pos: IVec2::new(
                rng.random_range(0..SCREEN_WIDTH),
                rng.random_range(SKY_BAND_TOP..SKY_BAND_BOTTOM - SKY_ELEMENT_HEIGHT),
            ),
        }
    }

    /// Move left one tick; wrap to the right edge when past the left edge
    pub fn scroll(&mut self) {
        self.pos.x -= SKY_ELEMENT_SPEED;
        if self.pos.x < 0 {
            self.pos.x = SCREEN_WIDTH;
        }
    }
}

/// A decorative floor rectangle scrolling leftward
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorElement {
    pub pos: IVec2,
}

impl FloorElement {
    fn spawn(rng: &mut Pcg32) -> Self {
        Self {
            pos: IVec2::new(rng.random_range(0..SCREEN_WIDTH), Self::random_y(rng)),
        }
    }

    fn random_y(rng: &mut Pcg32) -> i32 {
        rng.random_range(FLOOR_BAND_TOP..FLOOR_BAND_BOTTOM - FLOOR_ELEMENT_HEIGHT)
    }

    /// Move left one tick; on wraparound also pick a fresh y within the
    /// floor band so the texture does not repeat
    pub fn scroll(&mut self, rng: &mut Pcg32) {
        self.pos.x -= FLOOR_ELEMENT_SPEED;
        if self.pos.x < 0 {
            self.pos.x = SCREEN_WIDTH;
            self.pos.y = Self::random_y(rng);
        }
    }
}

/// Fixed-count collection of sky elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sky {
    pub elements: Vec<SkyElement>,
}

impl Sky {
    fn new(rng: &mut Pcg32) -> Self {
        Self {
            elements: (0..SKY_ELEMENT_COUNT).map(|_| SkyElement::spawn(rng)).collect(),
        }
    }

    pub fn update(&mut self) {
        for element in &mut self.elements {
            element.scroll();
        }
    }
}

/// Fixed-count collection of floor elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    pub elements: Vec<FloorElement>,
}

impl Floor {
    fn new(rng: &mut Pcg32) -> Self {
        Self {
            elements: (0..FLOOR_ELEMENT_COUNT)
                .map(|_| FloorElement::spawn(rng))
                .collect(),
        }
    }

    pub fn update(&mut self, rng: &mut Pcg32) {
        for element in &mut self.elements {
            element.scroll(rng);
        }
    }
}

/// Complete world state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub floor: Floor,
    pub sky: Sky,
    /// RNG for floor element re-placement on wraparound
    pub(crate) rng: Pcg32,
}

impl World {
    /// Create a new world with the given seed. Element placement is fully
    /// determined by the seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let floor = Floor::new(&mut rng);
        let sky = Sky::new(&mut rng);

        Self {
            seed,
            time_ticks: 0,
            player: Player::new(),
            floor,
            sky,
            rng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_grounded() {
        let player = Player::new();
        assert_eq!(player.pos, IVec2::new(PLAYER_X, GROUND_Y));
        assert_eq!(player.vel_y, 0);
        assert!(player.is_grounded());
    }

    #[test]
    fn test_jump_from_ground() {
        let mut player = Player::new();
        player.jump();
        assert_eq!(player.vel_y, JUMP_VELOCITY);
        assert_eq!(player.stance, Stance::Airborne);
    }

    #[test]
    fn test_jump_locked_out_while_airborne() {
        let mut player = Player::new();
        player.jump();
        player.apply_gravity();
        let vel_before = player.vel_y;

        // Mid-air jump must not reset velocity
        player.jump();
        assert_eq!(player.vel_y, vel_before);
    }

    #[test]
    fn test_landing_resets_velocity_to_zero() {
        let mut player = Player::new();
        player.pos.y = GROUND_Y - 10;
        player.vel_y = 8;
        player.stance = Stance::Airborne;

        player.apply_gravity();
        assert_eq!(player.pos.y, GROUND_Y);
        assert_eq!(player.vel_y, 0);
        assert!(player.is_grounded());
    }

    #[test]
    fn test_world_element_counts() {
        let world = World::new(7);
        assert_eq!(world.floor.elements.len(), FLOOR_ELEMENT_COUNT);
        assert_eq!(world.sky.elements.len(), SKY_ELEMENT_COUNT);
    }

    #[test]
    fn test_initial_placement_within_bands() {
        let world = World::new(42);
        for element in &world.floor.elements {
            assert!((0..SCREEN_WIDTH).contains(&element.pos.x));
            assert!(element.pos.y >= FLOOR_BAND_TOP);
            assert!(element.pos.y + FLOOR_ELEMENT_HEIGHT <= FLOOR_BAND_BOTTOM);
        }
        for element in &world.sky.elements {
            assert!((0..SCREEN_WIDTH).contains(&element.pos.x));
            assert!(element.pos.y >= SKY_BAND_TOP);
            assert!(element.pos.y + SKY_ELEMENT_HEIGHT <= SKY_BAND_BOTTOM);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = World::new(1234);
        let b = World::new(1234);
        assert_eq!(a.floor.elements, b.floor.elements);
        assert_eq!(a.sky.elements, b.sky.elements);
    }

    #[test]
    fn test_different_seed_different_layout() {
        let a = World::new(1);
        let b = World::new(2);
        assert_ne!(a.floor.elements, b.floor.elements);
    }
}
