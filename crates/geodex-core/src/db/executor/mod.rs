//! Module: executor
//! Responsibility: page slicing over an already-ordered record sequence.
//! Does not own: filtering, ordering, or the cursor wire format.

mod page;


pub use page::{PageWindow, paginate};
