//! Record vocabulary: the immutable building record and the ordinal rating
//! scale its energy grade is measured on.

pub mod building;
pub mod rating;
