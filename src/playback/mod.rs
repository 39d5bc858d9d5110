//! Synthetic player state for the watch page.
//!
//! There is no media pipeline: progress is a percentage nudged forward by a
//! timer, and every title is assumed to be `total_secs` long.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::PlaybackConfig;
use crate::error::TimestampError;

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,3}):([0-5]\d):([0-5]\d)$").expect("timestamp pattern is valid")
});

/// Parse `HH:MM:SS` into whole seconds.
pub fn parse_timestamp(timestamp: &str) -> Result<u64, TimestampError> {
    let caps = TIMESTAMP_RE
        .captures(timestamp.trim())
        .ok_or_else(|| TimestampError(timestamp.to_string()))?;
    let field = |i: usize| -> Result<u64, TimestampError> {
        caps[i]
            .parse::<u64>()
            .map_err(|_| TimestampError(timestamp.to_string()))
    };
    Ok(field(1)? * 3600 + field(2)? * 60 + field(3)?)
}

/// Render seconds as zero-padded `HH:MM:SS` (fractions are dropped).
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub playing: bool,
    pub muted: bool,
    /// 0.0..=100.0
    pub progress: f64,
    pub controls_visible: bool,
    idle_ms: u64,
    scene_marker: Option<String>,
    config: PlaybackConfig,
}

impl PlaybackState {
    /// Start playing, optionally from a scene-finder timestamp.
    pub fn new(config: PlaybackConfig, timestamp: Option<&str>) -> Self {
        let mut progress = 0.0;
        let mut scene_marker = None;
        if let Some(ts) = timestamp.filter(|ts| !ts.is_empty()) {
            match parse_timestamp(ts) {
                Ok(secs) => {
                    progress = percent_of(secs as f64, config.total_secs);
                    scene_marker = Some(ts.to_string());
                }
                Err(e) => tracing::warn!("Ignoring start position: {}", e),
            }
        }

        Self {
            playing: true,
            muted: false,
            progress,
            controls_visible: true,
            idle_ms: 0,
            scene_marker,
            config,
        }
    }

    /// Progress timer callback. Returns whether anything changed.
    pub fn tick(&mut self) -> bool {
        if !self.playing || self.progress >= 100.0 {
            return false;
        }
        self.progress = (self.progress + self.config.progress_step).min(100.0);
        true
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
        self.pointer_moved();
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Rewind (negative) or fast-forward by whole seconds.
    pub fn skip(&mut self, delta_secs: i64) {
        let target = self.current_secs() + delta_secs as f64;
        self.progress = percent_of(target, self.config.total_secs);
        self.pointer_moved();
    }

    pub fn rewind(&mut self) {
        self.skip(-(self.config.skip_secs as i64));
    }

    pub fn forward(&mut self) {
        self.skip(self.config.skip_secs as i64);
    }

    /// Any pointer activity brings the controls back and restarts the idle clock.
    pub fn pointer_moved(&mut self) {
        self.controls_visible = true;
        self.idle_ms = 0;
    }

    /// Advance the idle clock. Controls only auto-hide while playing.
    pub fn idle_elapsed(&mut self, ms: u64) {
        self.idle_ms = self.idle_ms.saturating_add(ms);
        if self.playing && self.idle_ms >= self.config.controls_idle_ms {
            self.controls_visible = false;
        }
    }

    pub fn current_secs(&self) -> f64 {
        self.progress / 100.0 * self.config.total_secs as f64
    }

    pub fn total_secs(&self) -> u64 {
        self.config.total_secs
    }

    /// "00:12:45 / 02:00:00"
    pub fn time_label(&self) -> String {
        format!(
            "{} / {}",
            format_time(self.current_secs()),
            format_time(self.config.total_secs as f64)
        )
    }

    /// Timestamp this session was opened at from a scene match.
    pub fn scene_marker(&self) -> Option<&str> {
        self.scene_marker.as_deref()
    }

    pub fn tick_ms(&self) -> u64 {
        self.config.tick_ms
    }

    pub fn controls_idle_ms(&self) -> u64 {
        self.config.controls_idle_ms
    }
}

fn percent_of(secs: f64, total_secs: u64) -> f64 {
    if total_secs == 0 {
        return 0.0;
    }
    (secs / total_secs as f64 * 100.0).clamp(0.0, 100.0)
}
