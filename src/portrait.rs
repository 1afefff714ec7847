use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};

pub const PORTRAIT_HOST: &str = "randomuser.me";

/// Every portrait index published per category.
pub const PORTRAIT_INDICES: Range<u32> = 0..100;

pub const DEFAULT_BASE_DIR: &str = "../public/dummy_images";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Men,
    Women,
}

impl Category {
    /// Iteration order of the driver loop.
    pub const ALL: [Category; 2] = [Category::Men, Category::Women];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Men => "men",
            Category::Women => "women",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn portrait_url(category: Category, index: u32) -> String {
    format!("https://{PORTRAIT_HOST}/api/portraits/{category}/{index}.jpg")
}

pub fn category_dir(base: &Path, category: Category) -> PathBuf {
    base.join(category.as_str())
}

pub fn portrait_path(base: &Path, category: Category, index: u32) -> PathBuf {
    category_dir(base, category).join(format!("{index}.jpg"))
}
