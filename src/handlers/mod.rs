mod url_received;

pub use url_received::url_received;
