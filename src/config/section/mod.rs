//! Configuration section definitions.
//!
//! | Section    | Purpose                                            |
//! |------------|----------------------------------------------------|
//! | `[output]` | Emission directory, filename template, inline limit |
//! | `[host]`   | Host build mode and JavaScript compilation step     |
//! | `[svgr]`   | Plugin options (export mode, mixed import, query)   |

mod host;
mod output;
mod svgr;

pub use host::{BuildMode, HostConfig, JsLoader};
pub use output::{
    DEFAULT_DATA_URI_LIMIT, DataUriLimit, DistPathConfig, FilenameConfig, OutputConfig,
    SVG_LIMIT_KEY,
};
pub use svgr::{EXPORT_TYPE_KEY, SvgDefaultExport, SvgrConfig};
