pub mod gallery;
pub mod search;
pub mod upload;

pub use gallery::Gallery;
pub use search::Search;
pub use upload::Upload;

/// Which screen the content area shows. All three stay alive so the feed
/// keeps receiving upload invalidations while another screen is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Gallery,
    Search,
    Upload,
}
