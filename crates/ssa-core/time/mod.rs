//! Subtitle time conversion
//!
//! Times are signed millisecond counts. This module converts them to and from
//! clock components, clock strings, and frame indices. Every function is a
//! pure transform; rounding (half away from zero) happens exactly once per
//! conversion so repeated round-trips are stable.
//!
//! # Example
//!
//! ```rust
//! use ssa_core::time::{components_to_ms, ms_to_clock_string, make_time, MakeTime, Fps, TimeType};
//!
//! assert_eq!(components_to_ms(0.0, 0.0, 1.5, 0.0), 1500);
//! assert_eq!(ms_to_clock_string(-3_723_004, true), "-1:02:03.004");
//!
//! let two_seconds = make_time(MakeTime {
//!     frames: Some(50),
//!     fps: Some(Fps::Rate(25.0)),
//!     time_type: Some(TimeType::Start),
//!     ..MakeTime::default()
//! })?;
//! assert_eq!(two_seconds, 2000);
//! # Ok::<(), ssa_core::CoreError>(())
//! ```

mod framerate;
mod rational;

pub use framerate::{FpsTimestamps, RoundingMethod, TimeType, Timestamps};
pub use rational::Rational;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::{CoreError, Result};

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1000;

/// Matches `H:MM:SS.fff` and `H:MM:SS,fff` with one to three fractional digits
pub static TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{1,2}):(\d{1,2})[.,](\d{1,3})").expect("static pattern")
});

/// Matches `H:M:S` without fraction, as written by tools that skip zero padding
pub static TIMESTAMP_SHORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{1,2}):(\d{1,2})").expect("static pattern"));

/// Clock components of a non-negative time
///
/// Invariant: `ms < 1000`, `s < 60`, `m < 60`; hours are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Times {
    pub h: i64,
    pub m: i64,
    pub s: i64,
    pub ms: i64,
}

/// Sum hours, minutes, seconds and milliseconds into milliseconds
///
/// Components may be fractional, negative, or unnormalized (`s = 120` is
/// two minutes). The sum is rounded half away from zero.
#[must_use]
pub fn components_to_ms(h: f64, m: f64, s: f64, ms: f64) -> i64 {
    let total = (s * MS_PER_SECOND as f64)
        + (m * MS_PER_MINUTE as f64)
        + (h * MS_PER_HOUR as f64)
        + ms;
    total.round() as i64
}

/// Split milliseconds into normalized clock components
///
/// Expects a non-negative value; callers format the sign themselves.
#[must_use]
pub const fn ms_to_components(ms: i64) -> Times {
    let h = ms.div_euclid(MS_PER_HOUR);
    let ms = ms.rem_euclid(MS_PER_HOUR);
    let m = ms / MS_PER_MINUTE;
    let ms = ms % MS_PER_MINUTE;
    let s = ms / MS_PER_SECOND;
    let ms = ms % MS_PER_SECOND;
    Times { h, m, s, ms }
}

/// Format milliseconds as `[-]H:MM:SS[.mmm]`
///
/// Handles huge and negative times. Non-negative output with `fractions`
/// is matched by [`TIMESTAMP`].
#[must_use]
pub fn ms_to_clock_string(ms: i64, fractions: bool) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let Times { h, m, s, ms } = ms_to_components(ms.saturating_abs());
    if fractions {
        format!("{sign}{h}:{m:02}:{s:02}.{ms:03}")
    } else {
        format!("{sign}{h}:{m:02}:{s:02}")
    }
}

/// Convert the captured groups of a [`TIMESTAMP`] or [`TIMESTAMP_SHORT`] match
///
/// With four groups the last one holds fractional seconds whose weight
/// depends on its width: `"42"` is 420 ms, `"042"` is 42 ms.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTime`] unless exactly three or four numeric
/// groups are given, or if the total does not fit in an `i64`.
pub fn parse_clock_match(groups: &[&str]) -> Result<i64> {
    let number = |group: &str| -> Result<i64> {
        group
            .parse::<i64>()
            .map_err(|_| CoreError::invalid_time(group, "not a number"))
    };

    let (h, m, s, ms) = match groups {
        [h, m, s] => (number(h)?, number(m)?, number(s)?, 0),
        [h, m, s, frac] => {
            let width = u32::try_from(frac.len())
                .ok()
                .filter(|w| (1..=3).contains(w))
                .ok_or_else(|| CoreError::invalid_time(frac, "expected 1 to 3 digits"))?;
            (
                number(h)?,
                number(m)?,
                number(s)?,
                number(frac)? * 10_i64.pow(3 - width),
            )
        }
        _ => {
            return Err(CoreError::invalid_time(
                groups.join(":"),
                "unexpected number of groups",
            ))
        }
    };

    let weighted = [(h, MS_PER_HOUR), (m, MS_PER_MINUTE), (s, MS_PER_SECOND), (ms, 1)];
    weighted
        .into_iter()
        .try_fold(0_i64, |total, (value, unit)| {
            value.checked_mul(unit)?.checked_add(total)
        })
        .ok_or_else(|| CoreError::invalid_time(groups.join(":"), "out of range"))
}

/// Parse a clock string, trying the strict pattern before the short one
///
/// A leading `-` negates the result.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTime`] if neither pattern matches.
pub fn parse_timestamp(text: &str) -> Result<i64> {
    let text = text.trim();
    let (negative, digits) = text
        .strip_prefix('-')
        .map_or((false, text), |rest| (true, rest));

    for pattern in [&*TIMESTAMP, &*TIMESTAMP_SHORT] {
        if let Some(captures) = pattern.captures(digits) {
            let groups: Vec<&str> = captures
                .iter()
                .skip(1)
                .flatten()
                .map(|group| group.as_str())
                .collect();
            let ms = parse_clock_match(&groups)?;
            return Ok(if negative { -ms } else { ms });
        }
    }

    Err(CoreError::invalid_time(text, "expected H:MM:SS.cc or H:M:S"))
}

fn timestamps_for_rate(fps: f64) -> Result<FpsTimestamps> {
    if fps.is_nan() || fps <= 0.0 {
        return Err(CoreError::InvalidFrameRate(fps));
    }
    Rational::from_f64(fps)
        .and_then(FpsTimestamps::from_fps)
        .ok_or(CoreError::InvalidFrameRate(fps))
}

/// Convert a frame index to milliseconds at a constant frame rate
///
/// # Errors
///
/// Returns [`CoreError::InvalidFrameRate`] if `fps` is not a positive number.
pub fn frame_to_ms(frame: i64, fps: f64, time_type: TimeType) -> Result<i64> {
    Ok(timestamps_for_rate(fps)?.frame_to_time(frame, time_type))
}

/// Convert milliseconds to a frame index at a constant frame rate
///
/// # Errors
///
/// Returns [`CoreError::InvalidFrameRate`] if `fps` is not a positive number.
pub fn ms_to_frame(ms: i64, fps: f64, time_type: TimeType) -> Result<i64> {
    Ok(timestamps_for_rate(fps)?.time_to_frame(ms, time_type))
}

/// Frame rate source accepted by [`make_time`]
#[derive(Clone, Copy)]
pub enum Fps<'a> {
    /// Bare frames per second, converted to a default [`FpsTimestamps`]
    Rate(f64),
    /// Fully specified model
    Timestamps(&'a dyn Timestamps),
}

/// Arguments for [`make_time`]
///
/// Either the clock components or all three of `frames`, `fps` and
/// `time_type` are used.
#[derive(Clone, Copy, Default)]
pub struct MakeTime<'a> {
    pub h: f64,
    pub m: f64,
    pub s: f64,
    pub ms: f64,
    pub frames: Option<i64>,
    pub fps: Option<Fps<'a>>,
    pub time_type: Option<TimeType>,
}

/// Build a millisecond time from components or from a frame index
///
/// # Errors
///
/// Returns [`CoreError::InvalidArguments`] when only some of `frames`, `fps`
/// and `time_type` are given, and [`CoreError::InvalidFrameRate`] for a
/// non-positive rate.
pub fn make_time(args: MakeTime<'_>) -> Result<i64> {
    match (args.frames, args.fps, args.time_type) {
        (None, None, None) => Ok(components_to_ms(args.h, args.m, args.s, args.ms)),
        (Some(frames), Some(Fps::Rate(fps)), Some(time_type)) => {
            frame_to_ms(frames, fps, time_type)
        }
        (Some(frames), Some(Fps::Timestamps(timestamps)), Some(time_type)) => {
            Ok(timestamps.frame_to_time(frames, time_type))
        }
        _ => Err(CoreError::InvalidArguments(
            "frames, fps and time_type must be specified together".into(),
        )),
    }
}
