pub mod loupe_image;

pub use loupe_image::LoupeImage;
