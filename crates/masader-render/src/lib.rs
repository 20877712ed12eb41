//! HTML rendering and static output for the Masader website.
//!
//! Every section is a minijinja template fed the composed [`masader_content::Site`].
//! [`SiteRenderer`] turns those into pages; [`StaticBuilder`] writes them to disk
//! with the stylesheet, client script, sitemap and robots file.

pub mod assets;
pub mod builder;
pub mod icons;
pub mod site;
pub mod templates;

pub use assets::AssetPipeline;
pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use site::{Page, RenderOptions, SiteRenderer};
pub use templates::{RenderError, TemplateEngine};
