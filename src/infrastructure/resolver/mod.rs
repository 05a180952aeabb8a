mod http_media_resolver;

pub use http_media_resolver::HttpMediaResolver;
