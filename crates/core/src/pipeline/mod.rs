pub mod blur_image_use_case;
pub mod pipeline_logger;
