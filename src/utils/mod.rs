// Utils compartidos

pub mod constants;
pub mod time;
