pub mod image_submitter;
pub mod result_image;
pub mod selected_file;
pub mod submission_payload;
pub mod upload_form;
