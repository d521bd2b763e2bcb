pub mod descriptor_json;
pub mod hex;
pub mod readback;
pub mod static_header;

pub use descriptor_json::render_descriptor;
pub use readback::{descriptor_payload, header_payload};
pub use static_header::{render_format_header, render_static_data, HeaderOptions};
