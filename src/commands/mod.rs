mod help;
mod start;

pub use help::help;
pub use start::start;
