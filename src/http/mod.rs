//! HTTP building blocks shared by the handlers

pub mod mime;
pub mod response;

pub use response::{
    build_404_response, build_405_response, build_500_response, build_html_response,
    build_json_response, build_static_file_response,
};
