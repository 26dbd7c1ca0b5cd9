mod conversion;
mod difference;
mod equality;
mod math;
mod space;
mod string;

// conversion
pub(crate) use conversion::{convert, from_24bit, to_24bit};

// difference
pub(crate) use difference::{delta_e_lch, find_closest};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::{normalize_hue, to_eq_bits};
pub(crate) use equality::{normalize, to_eq_coordinates};

// math
pub(crate) use math::FloatExt;

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format, parse};
