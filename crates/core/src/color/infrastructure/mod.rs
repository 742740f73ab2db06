pub mod average_color_reducer;
pub mod dominant_color_reducer;
pub mod kmeans;
pub mod reducer_factory;
