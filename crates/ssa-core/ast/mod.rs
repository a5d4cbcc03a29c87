//! Owned document model
//!
//! Parsed values are fully typed and own their data: times are milliseconds,
//! colors are [`Color`] channels, anchors are [`Alignment`] values. Text form
//! details such as the schema version only matter to the parser and writer.

mod alignment;
mod color;
mod document;
mod event;
mod style;

pub use alignment::Alignment;
pub use color::{color_to_ass_rgba, color_to_ssa_rgb, rgba_to_color, Color};
pub use document::Document;
pub use event::{Event, EventType};
pub use style::Style;
