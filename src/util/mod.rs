//! Browser seams that the rest of the crate only touches through small
//! wrappers.

pub mod dialogs;
