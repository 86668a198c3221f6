//! Camera path recording and playback
//!
//! Records timestamped camera keyframes at a fixed interval while flying,
//! and plays them back with linear interpolation between the bracketing
//! pair. Recording and playback are mutually exclusive; starting either one
//! stops the other.

use std::fs;
use std::path::Path;

use glam::Vec3;
use mapedit_renderer::Camera;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Seconds between recorded samples.
pub const SAMPLE_INTERVAL: f32 = 0.5;

#[derive(Debug, thiserror::Error)]
pub enum CameraPathError {
    #[error("camera path file access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("camera path JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// One recorded camera pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraKeyframe {
    pub position: Vec3,
    pub target: Vec3,
    pub time: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathState {
    #[default]
    Idle,
    Recording,
    Playing,
}

/// Recorder and player for camera fly-through paths.
#[derive(Debug, Default)]
pub struct CameraPathRecorder {
    keyframes: Vec<CameraKeyframe>,
    state: PathState,
    record_clock: f32,
    last_sample_time: f32,
    playback_clock: f32,
}

impl CameraPathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PathState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == PathState::Recording
    }

    pub fn is_playing(&self) -> bool {
        self.state == PathState::Playing
    }

    pub fn keyframes(&self) -> &[CameraKeyframe] {
        &self.keyframes
    }

    /// Recorded positions, for drawing the path polyline.
    pub fn path_points(&self) -> Vec<Vec3> {
        self.keyframes.iter().map(|k| k.position).collect()
    }

    /// Total length of the recorded path in seconds.
    pub fn duration(&self) -> f32 {
        self.keyframes.last().map_or(0.0, |k| k.time)
    }

    pub fn playback_clock(&self) -> f32 {
        self.playback_clock
    }

    /// Discard the previous path and begin a new recording. The first
    /// keyframe is captured immediately at time zero.
    pub fn start_recording(&mut self, camera: &Camera) {
        self.state = PathState::Recording;
        self.keyframes.clear();
        self.record_clock = 0.0;
        self.last_sample_time = 0.0;
        self.keyframes.push(Self::sample(camera, 0.0));
        info!("Camera path recording started");
    }

    pub fn stop_recording(&mut self) {
        if self.state == PathState::Recording {
            self.state = PathState::Idle;
            info!(keyframes = self.keyframes.len(), "Camera path recording stopped");
        }
    }

    /// Begin playback from the start of the path. A path needs at least two
    /// keyframes to interpolate; shorter paths are refused.
    pub fn start_playback(&mut self) -> bool {
        if self.keyframes.len() < 2 {
            return false;
        }
        self.state = PathState::Playing;
        self.playback_clock = 0.0;
        true
    }

    pub fn stop_playback(&mut self) {
        if self.state == PathState::Playing {
            self.state = PathState::Idle;
        }
    }

    /// Per-frame driver. While recording this samples the camera; while
    /// playing it moves the camera along the path.
    pub fn update(&mut self, camera: &mut Camera, dt: f32) {
        match self.state {
            PathState::Idle => {}
            PathState::Recording => {
                self.record_clock += dt;
                if self.record_clock - self.last_sample_time >= SAMPLE_INTERVAL {
                    self.last_sample_time = self.record_clock;
                    self.keyframes.push(Self::sample(camera, self.record_clock));
                }
            }
            PathState::Playing => {
                self.playback_clock += dt;
                let end = self.duration();
                if self.playback_clock >= end {
                    self.apply_at_time(camera, end);
                    self.state = PathState::Idle;
                } else {
                    self.apply_at_time(camera, self.playback_clock);
                }
            }
        }
    }

    /// Move the camera to the interpolated pose at `time`. Times outside
    /// the recorded range clamp to the nearest endpoint.
    pub fn apply_at_time(&self, camera: &mut Camera, time: f32) {
        let Some((first, last)) = self.keyframes.first().zip(self.keyframes.last()) else {
            return;
        };

        let pose = if time <= first.time {
            *first
        } else if time >= last.time {
            *last
        } else {
            let mut pose = *last;
            for pair in self.keyframes.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if time >= a.time && time <= b.time {
                    let span = b.time - a.time;
                    let t = if span > f32::EPSILON {
                        (time - a.time) / span
                    } else {
                        0.0
                    };
                    pose = CameraKeyframe {
                        position: a.position.lerp(b.position, t),
                        target: a.target.lerp(b.target, t),
                        time,
                    };
                    break;
                }
            }
            pose
        };

        camera.eye = pose.position;
        camera.look_at(pose.target);
    }

    /// Replace the path wholesale, stopping any recording or playback.
    pub fn set_keyframes(&mut self, keyframes: Vec<CameraKeyframe>) {
        self.keyframes = keyframes;
        self.state = PathState::Idle;
        self.playback_clock = 0.0;
    }

    pub fn clear(&mut self) {
        self.keyframes.clear();
        self.state = PathState::Idle;
    }

    /// Write the recorded path as JSON.
    pub fn export_json(&self, path: &Path) -> Result<(), CameraPathError> {
        let json = serde_json::to_string_pretty(&self.keyframes)?;
        fs::write(path, json)?;
        info!(path = %path.display(), keyframes = self.keyframes.len(), "Camera path exported");
        Ok(())
    }

    /// Replace the current path with one loaded from JSON.
    pub fn import_json(&mut self, path: &Path) -> Result<(), CameraPathError> {
        let json = fs::read_to_string(path)?;
        self.set_keyframes(serde_json::from_str(&json)?);
        info!(path = %path.display(), keyframes = self.keyframes.len(), "Camera path imported");
        Ok(())
    }

    fn sample(camera: &Camera, time: f32) -> CameraKeyframe {
        CameraKeyframe {
            position: camera.eye,
            target: camera.target,
            time,
        }
    }
}
