pub mod consts;
pub mod error;
pub mod frame;
pub mod manifest;
pub mod mapper;
pub mod overlay;
pub mod region;
pub mod render;
pub mod zoom;
