//! 应用层

pub mod note;
pub mod product;
