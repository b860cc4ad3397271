pub mod recording_sink;

pub use mock_auth::*;
pub use recording_sink::*;
pub use signal_helpers::*;
pub use test_peer::*;
