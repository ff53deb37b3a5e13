pub mod http_image_submitter;
