pub mod colors;
pub mod common;
pub mod elements;
pub mod image;
pub mod page;
pub mod presentation;
pub mod properties;
pub mod shape;
pub mod text;
