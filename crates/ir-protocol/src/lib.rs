pub mod annotation;
pub mod category;
pub mod classification;
pub mod feedback;

pub use annotation::*;
pub use category::*;
pub use classification::*;
pub use feedback::*;
