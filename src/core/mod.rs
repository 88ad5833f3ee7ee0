pub mod add;
pub mod duration;
