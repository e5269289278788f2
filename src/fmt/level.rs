//! Level encoders for the `<...>` segment.

use crate::field::ArrayEncoder;
use crate::level::Level;

/// Appends the plain display name (`warning` for [`Level::Warn`]).
pub fn encode_name(level: Level, enc: &mut dyn ArrayEncoder) {
    enc.append_str(level.display_name());
}
