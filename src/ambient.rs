pub mod palette;
pub mod raster;
pub mod renderer;
