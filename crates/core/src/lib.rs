//! Video color palettes: sample frames from a video, reduce each one to a
//! single color, and lay the colors out as vertical strips in one image.

pub mod shared {
    pub mod color;
    pub mod constants;
    pub mod error;
    pub mod frame;
    pub mod palette_settings;
    pub mod video_metadata;
}

pub mod video {
    pub mod domain {
        pub mod display_sink;
        pub mod image_writer;
        pub mod video_reader;
    }
    pub mod infrastructure;
}

pub mod sampling {
    pub mod domain {
        pub mod frame_sampler;
        pub mod stride;
    }
}

pub mod color {
    pub mod domain {
        pub mod color_method;
        pub mod color_reducer;
    }
    pub mod infrastructure;
}

pub mod compositing {
    pub mod domain {
        pub mod batch_fold;
        pub mod strip_compositor;
        pub mod strip_width;
    }
}

pub mod pipeline {
    pub mod create_palette_use_case;
    pub mod extract_colors_use_case;
    pub mod pipeline_logger;
}
