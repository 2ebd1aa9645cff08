pub mod osv_feed_client;

pub use osv_feed_client::OsvFeedClient;
