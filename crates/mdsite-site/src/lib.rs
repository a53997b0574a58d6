//! Static site generation for mdsite.
//!
//! Turns a directory of markdown files into a directory of HTML pages:
//! the output directory is recreated from the static directory, then every
//! `.md` file under the content directory is converted, wrapped in a
//! [`Template`] and written as `.html` at the same relative path.

mod builder;
mod files;
mod page;
mod template;

pub use builder::{BuildError, BuildReport, SiteBuilder, SiteSettings, SkippedPage};
pub use files::{copy_static, find_markdown};
pub use page::{generate_page, render_page, rewrite_base_path};
pub use template::{DEFAULT_TEMPLATE, Template};
