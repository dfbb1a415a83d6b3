pub mod activities;

pub use activities::{ActivityDirectory, ActivityRecord};
