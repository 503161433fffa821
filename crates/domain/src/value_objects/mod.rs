//! Value objects - Immutable objects defined by their attributes

mod api_reference;
mod dice;
mod numeric;
mod speed;

pub use api_reference::ApiReference;
pub use dice::{DiceExpression, DiceParseError};
pub use numeric::coerce_int;
pub use speed::{Speed, SpeedKind, SPEED_UNIT_SUFFIX};
