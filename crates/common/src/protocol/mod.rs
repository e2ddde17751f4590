mod descriptor;
mod response;

pub use descriptor::{OutboundHeaders, RequestDescriptor, header_key_name, header_value_name};
pub use response::RelayedResponse;
