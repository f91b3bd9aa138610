pub mod banner;
pub mod option_group;
pub mod playlist;
pub mod spinner;

pub use banner::Banner;
pub use option_group::OptionGroup;
pub use playlist::{PlaylistPanel, TrackDetails};
pub use spinner::Spinner;
