//! CMS payload types.
//!
//! The content provider serves JSON that is already shaped for rendering:
//! rich text arrives as HTML strings, images carry their dimensions.

use serde::{Deserialize, Serialize};

/// Pixel dimensions of an image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Height for a given width, preserving aspect ratio.
    pub fn height_for(&self, width: u32) -> u32 {
        if self.width == 0 {
            return 0;
        }
        ((self.height as u64 * width as u64) / self.width as u64) as u32
    }
}

/// Image descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub dimensions: Dimensions,
}

/// External link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Landing page content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Homepage {
    pub title: String,
    /// Rich text as HTML
    pub body: String,
    #[serde(default)]
    pub portrait: Option<Image>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Entry in the project listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub thumbnail: Option<Image>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Full project page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    /// Rich text as HTML
    pub body: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Contact page content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactPage {
    pub title: String,
    /// Rich text as HTML
    pub body: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Resolved content for one page.
#[derive(Clone, Debug, PartialEq)]
pub enum PageContent {
    Home(Homepage),
    Work(Vec<ProjectSummary>),
    Project(Project),
    Contact(ContactPage),
    NotFound,
}
