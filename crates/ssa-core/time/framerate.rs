//! Frame-rate model converting between frame indices and milliseconds
//!
//! A video frame `i` is presented at `pts(i) = i * time_scale / fps` ticks,
//! rounded according to a [`RoundingMethod`]. Subtitle times relate to that
//! grid through a [`TimeType`]:
//!
//! ```text
//! frame:        i-1        i         i+1
//! pts:     ----|----------|----------|----
//! START i       (pts(i-1), pts(i)]
//! EXACT i                 [pts(i), pts(i+1))
//! END i                   (pts(i), pts(i+1)]
//! ```
//!
//! A subtitle starting at any time in the START interval first appears on
//! frame `i`; one ending in the END interval is last shown on frame `i`.

use super::rational::{div_floor, div_round, Rational};

/// Milliseconds per second, the output unit of every conversion here
const MS_PER_SECOND: i128 = 1000;

/// Role of a time value relative to the frame grid
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeType {
    /// Start time of a subtitle segment
    Start,
    /// End time of a subtitle segment
    End,
    /// Presentation instant of a frame
    Exact,
}

/// How fractional presentation timestamps are snapped to the time base
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMethod {
    /// Round half away from zero (what Matroska muxers do)
    #[default]
    Round,
    /// Truncate toward negative infinity
    Floor,
}

impl RoundingMethod {
    const fn apply(self, num: i128, den: i128) -> i128 {
        match self {
            Self::Round => div_round(num, den),
            Self::Floor => div_floor(num, den),
        }
    }
}

/// Conversion between frame indices and milliseconds
///
/// Implementations must be monotonic: a later frame never maps to an
/// earlier time.
pub trait Timestamps {
    /// Millisecond time for `frame` in the given role
    fn frame_to_time(&self, frame: i64, time_type: TimeType) -> i64;

    /// Frame whose `time_type` interval contains `time` (milliseconds)
    fn time_to_frame(&self, time: i64, time_type: TimeType) -> i64;
}

/// Constant frame rate timestamps
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FpsTimestamps {
    rounding: RoundingMethod,
    time_scale: Rational,
    fps: Rational,
}

impl FpsTimestamps {
    /// Create a fully specified model
    ///
    /// `time_scale` is the number of ticks per second that presentation
    /// timestamps are rounded to. Returns `None` unless both `time_scale` and
    /// `fps` are positive.
    #[must_use]
    pub const fn new(rounding: RoundingMethod, time_scale: Rational, fps: Rational) -> Option<Self> {
        if !time_scale.is_positive() || !fps.is_positive() {
            return None;
        }
        Some(Self {
            rounding,
            time_scale,
            fps,
        })
    }

    /// Default model for a bare frame rate: round-to-nearest on a millisecond time base
    #[must_use]
    pub const fn from_fps(fps: Rational) -> Option<Self> {
        Self::new(RoundingMethod::Round, Rational::from_int(1000), fps)
    }

    /// Frame rate of this model
    #[must_use]
    pub const fn fps(&self) -> Rational {
        self.fps
    }

    /// Presentation time of `frame` in milliseconds
    ///
    /// Saturates at the `i64` range for frames far outside any real video.
    #[must_use]
    pub fn pts(&self, frame: i64) -> i64 {
        clamp_i64(self.pts_wide(frame))
    }

    /// Unclamped presentation time, so searches near the `i64` limits stay monotonic
    fn pts_wide(&self, frame: i64) -> i128 {
        // ticks = frame * time_scale / fps
        let ticks = self.rounding.apply(
            i128::from(frame)
                .saturating_mul(i128::from(self.time_scale.num()) * i128::from(self.fps.den())),
            i128::from(self.time_scale.den()) * i128::from(self.fps.num()),
        );
        // ms = ticks * 1000 / time_scale
        div_round(
            ticks.saturating_mul(MS_PER_SECOND * i128::from(self.time_scale.den())),
            i128::from(self.time_scale.num()),
        )
    }

    /// First guess for the frame shown at `time`, refined by the callers
    fn estimate_frame(&self, time: i64) -> i64 {
        clamp_i64(div_floor(
            i128::from(time) * i128::from(self.fps.num()),
            MS_PER_SECOND * i128::from(self.fps.den()),
        ))
    }

    /// Smallest frame whose presentation time is at or after `time`
    fn first_frame_at_or_after(&self, time: i64) -> i64 {
        let mut frame = self.estimate_frame(time);
        let time = i128::from(time);
        while frame < i64::MAX && self.pts_wide(frame) < time {
            frame += 1;
        }
        while frame > i64::MIN && self.pts_wide(frame - 1) >= time {
            frame -= 1;
        }
        frame
    }

    /// Largest frame whose presentation time is at or before `time`
    fn last_frame_at_or_before(&self, time: i64) -> i64 {
        let mut frame = self.estimate_frame(time);
        let time = i128::from(time);
        while frame < i64::MAX && self.pts_wide(frame + 1) <= time {
            frame += 1;
        }
        while frame > i64::MIN && self.pts_wide(frame) > time {
            frame -= 1;
        }
        frame
    }
}

impl Timestamps for FpsTimestamps {
    fn frame_to_time(&self, frame: i64, time_type: TimeType) -> i64 {
        match time_type {
            TimeType::Start | TimeType::Exact => self.pts(frame),
            TimeType::End => self.pts(frame.saturating_add(1)),
        }
    }

    fn time_to_frame(&self, time: i64, time_type: TimeType) -> i64 {
        match time_type {
            TimeType::Start => self.first_frame_at_or_after(time),
            TimeType::End => self.first_frame_at_or_after(time).saturating_sub(1),
            TimeType::Exact => self.last_frame_at_or_before(time),
        }
    }
}

fn clamp_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}
