pub mod alpha_refiner;
pub mod background_estimator;
pub mod config;
pub mod frame;
pub mod pixel_classifier;
pub mod remove_background;
