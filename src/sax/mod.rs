pub mod breakpoints;
pub mod encode;
pub mod invert;
pub mod paa;
