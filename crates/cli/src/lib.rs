pub mod carrier;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod link;
pub mod linkify;
pub mod output;
pub mod pattern;
pub mod template;

pub use carrier::{Carrier, CarrierDefinition, CarrierRegistry};
pub use cli::{Cli, Command, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use link::LinkAttributes;
pub use linkify::{CarrierMatch, Linkifier, LinkifyOptions};
pub use pattern::TrackingPattern;
pub use template::UrlTemplate;
