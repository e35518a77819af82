pub mod cell;
pub mod dataset;
pub mod view;
