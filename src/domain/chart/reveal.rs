//! One-shot reveal state machine: `Hidden -> Revealing -> Settled`.
//!
//! Progress is driven by frame timestamps, never by frame counts. The start
//! time is latched from the first frame after the trigger, and a settled
//! reveal never restarts.

use super::scene::DashReveal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Revealing,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// Primary path is drawn along its length.
    PathDraw,
    /// Items fade in one after another.
    StaggeredFade,
}

/// Opacity of an item that starts fading `delay_ms` into the reveal.
pub fn stagger_opacity(elapsed_ms: f64, delay_ms: f64, fade_ms: f64) -> f64 {
    if fade_ms <= 0.0 {
        return if elapsed_ms >= delay_ms { 1.0 } else { 0.0 };
    }
    ((elapsed_ms - delay_ms) / fade_ms).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealAnimation {
    kind: RevealKind,
    duration_ms: f64,
    phase: RevealPhase,
    started_at: Option<f64>,
    elapsed_ms: f64,
    total_path_length: f64,
    start_count: u32,
}

impl RevealAnimation {
    pub fn new(kind: RevealKind, duration_ms: f64) -> Self {
        Self {
            kind,
            duration_ms: duration_ms.max(0.0),
            phase: RevealPhase::Hidden,
            started_at: None,
            elapsed_ms: 0.0,
            total_path_length: 0.0,
            start_count: 0,
        }
    }

    pub fn path_draw(duration_ms: f64) -> Self {
        Self::new(RevealKind::PathDraw, duration_ms)
    }

    pub fn staggered_fade(duration_ms: f64) -> Self {
        Self::new(RevealKind::StaggeredFade, duration_ms)
    }

    /// Same configuration, already settled. Used for static renders.
    pub fn into_settled(mut self) -> Self {
        self.phase = RevealPhase::Settled;
        self.elapsed_ms = self.duration_ms;
        self
    }

    pub fn kind(&self) -> RevealKind {
        self.kind
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// How many times the reveal has left `Hidden`. At most one.
    pub fn start_count(&self) -> u32 {
        self.start_count
    }

    /// Start revealing. Only a hidden reveal can start; returns whether it did.
    pub fn trigger(&mut self, total_path_length: f64) -> bool {
        if self.phase != RevealPhase::Hidden {
            return false;
        }
        self.phase = RevealPhase::Revealing;
        self.total_path_length = if total_path_length.is_finite() { total_path_length.max(0.0) } else { 0.0 };
        self.started_at = None;
        self.elapsed_ms = 0.0;
        self.start_count += 1;
        true
    }

    /// Feed a frame timestamp.
    pub fn advance(&mut self, now_ms: f64) -> RevealPhase {
        if self.phase != RevealPhase::Revealing {
            return self.phase;
        }
        let started = *self.started_at.get_or_insert(now_ms);
        self.elapsed_ms = (now_ms - started).max(0.0);
        if self.elapsed_ms >= self.duration_ms {
            self.elapsed_ms = self.duration_ms;
            self.phase = RevealPhase::Settled;
        }
        self.phase
    }

    /// Progress in `0..=1`.
    pub fn elapsed_fraction(&self) -> f64 {
        match self.phase {
            RevealPhase::Hidden => 0.0,
            RevealPhase::Settled => 1.0,
            RevealPhase::Revealing if self.duration_ms <= 0.0 => 1.0,
            RevealPhase::Revealing => (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0),
        }
    }

    /// Progress of a path drawn `speed` times faster, capped at 1.
    pub fn scaled_fraction(&self, speed: f64) -> f64 {
        (self.elapsed_fraction() * speed).clamp(0.0, 1.0)
    }

    /// Dash pattern for a path of `length` drawn at `speed`; `None` once fully shown.
    pub fn dash_reveal(&self, length: f64, speed: f64) -> Option<DashReveal> {
        let fraction = self.scaled_fraction(speed);
        if fraction >= 1.0 || !length.is_finite() {
            return None;
        }
        Some(DashReveal { length, offset: length * (1.0 - fraction) })
    }

    /// Dash pattern for the primary path. Uses the length latched by
    /// [`trigger`](Self::trigger); `measured` only applies before the first trigger.
    pub fn primary_dash(&self, measured: f64, speed: f64) -> Option<DashReveal> {
        let length = if self.start_count > 0 { self.total_path_length } else { measured };
        self.dash_reveal(length, speed)
    }

    /// Opacity of a staggered item.
    pub fn item_opacity(&self, delay_ms: f64, fade_ms: f64) -> f64 {
        match self.phase {
            RevealPhase::Hidden => 0.0,
            RevealPhase::Settled => 1.0,
            RevealPhase::Revealing => stagger_opacity(self.elapsed_ms, delay_ms, fade_ms),
        }
    }
}
