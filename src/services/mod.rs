pub mod analysis;
pub mod classifier;
pub mod composer;
pub mod extraction;
pub mod harmonization;
pub mod history;
pub mod ocr;
pub mod parser;
pub mod regional;
pub mod scoring;
