//! Third-person follow camera smoothing

use bevy::prelude::*;

/// Fraction of the remaining distance covered each tick (not scaled by frame time)
pub const FOLLOW_SMOOTHING: f32 = 0.1;

/// `value + (target - value) * factor`
#[inline]
pub fn lerp(value: f32, target: f32, factor: f32) -> f32 {
    value + (target - value) * factor
}

/// Where the camera should be and what it should look at after a tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    /// `None` when no look-at anchor exists; orientation is left as is
    pub look_at: Option<Vec3>,
}

/// Smoothed camera position and look-at point. Never reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraState {
    /// Start from where the camera was spawned, looking at the origin
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            look_at: Vec3::ZERO,
        }
    }

    /// Ease toward the rig anchor and, when present, the look-at anchor
    pub fn follow(&mut self, rig_anchor: Vec3, look_anchor: Option<Vec3>) -> CameraPose {
        self.position = self.position.lerp(rig_anchor, FOLLOW_SMOOTHING);

        let look_at = look_anchor.map(|anchor| {
            self.look_at = self.look_at.lerp(anchor, FOLLOW_SMOOTHING);
            self.look_at
        });

        CameraPose {
            position: self.position,
            look_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_single_step() {
        assert_eq!(lerp(0.0, 10.0, FOLLOW_SMOOTHING), 1.0);
    }

    #[test]
    fn test_lerp_approaches_without_overshoot() {
        let mut value = 0.0;
        for _ in 0..10 {
            let next = lerp(value, 10.0, FOLLOW_SMOOTHING);
            assert!(next > value);
            assert!(next < 10.0);
            value = next;
        }
        // 10 * (1 - 0.9^10) ≈ 6.513
        assert!((value - 6.513_216).abs() < 1e-3);
    }

    #[test]
    fn test_follow_moves_ten_percent() {
        let mut camera = CameraState::new(Vec3::new(3.0, 3.0, 3.0));
        let pose = camera.follow(Vec3::new(3.0, 13.0, -7.0), Some(Vec3::new(10.0, 0.0, 0.0)));

        assert!((pose.position - Vec3::new(3.0, 4.0, 2.0)).length() < 1e-5);
        assert_eq!(pose.look_at, Some(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(camera.look_at, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_missing_look_anchor_keeps_look_at() {
        let mut camera = CameraState::new(Vec3::ZERO);
        camera.look_at = Vec3::new(0.0, 0.0, 1.5);

        let pose = camera.follow(Vec3::new(0.0, 10.0, 0.0), None);

        assert_eq!(pose.look_at, None);
        assert_eq!(camera.look_at, Vec3::new(0.0, 0.0, 1.5));
        // position still follows
        assert!((camera.position.y - 1.0).abs() < 1e-6);
    }
}
