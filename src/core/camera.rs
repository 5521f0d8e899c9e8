//! Viewer camera
//!
//! Only the position matters to the field cache; the direction steers movement.

use serde::{Deserialize, Serialize};

use crate::core::types::{DQuat, DVec3};

/// Initial camera position
pub const DEFAULT_POSITION: DVec3 = DVec3::new(-1.0, 0.0, -1.0);
/// Initial view direction
pub const DEFAULT_DIRECTION: DVec3 = DVec3::new(1.0, 0.0, 1.0);

/// Camera with a world position and an (unnormalized) view direction
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World position
    pub position: DVec3,
    /// View direction; its length doubles as the step scale
    pub direction: DVec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION, DEFAULT_DIRECTION)
    }
}

impl Camera {
    /// Create a new camera
    pub fn new(position: DVec3, direction: DVec3) -> Self {
        Self { position, direction }
    }

    /// Move along the view direction
    pub fn move_forward(&mut self, speed: f64) {
        self.position += self.direction * speed;
    }

    /// Move against the view direction
    pub fn move_backward(&mut self, speed: f64) {
        self.position -= self.direction * speed;
    }

    /// Sidestep to the left of the view direction (Y up)
    pub fn strafe_left(&mut self, speed: f64) {
        self.position += yaw(self.direction * speed, std::f64::consts::FRAC_PI_2);
    }

    /// Sidestep to the right of the view direction (Y up)
    pub fn strafe_right(&mut self, speed: f64) {
        self.position += yaw(self.direction * speed, -std::f64::consts::FRAC_PI_2);
    }

    /// Move straight up
    pub fn rise(&mut self, speed: f64) {
        self.position.y += speed;
    }

    /// Move straight down
    pub fn sink(&mut self, speed: f64) {
        self.position.y -= speed;
    }

    /// Rotate the view direction around the Y axis
    pub fn turn(&mut self, yaw_radians: f64) {
        self.direction = yaw(self.direction, yaw_radians);
    }

    /// Return to the initial position and direction
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn yaw(v: DVec3, radians: f64) -> DVec3 {
    DQuat::from_rotation_y(radians) * v
}
