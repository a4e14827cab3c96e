//! Image CDN URL construction.
//!
//! CMS images are served from a resizing CDN; sizes are requested with
//! query parameters (`w`, `h`, `fit`, `auto=format`).

use crate::models::Image;

/// Resize behaviour when both dimensions are given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Fit {
    /// Scale to fit inside the box
    #[default]
    Max,
    /// Fill the box, cropping overflow
    Crop,
}

impl Fit {
    fn as_param(self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Crop => "crop",
        }
    }
}

/// Widths offered in `srcset`.
pub const SRCSET_WIDTHS: &[u32] = &[480, 960, 1440, 1920];

/// Resolve a relative source against the image base URL.
pub fn absolute_src(src: &str, base: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") || src.starts_with("//") {
        return src.to_string();
    }
    if base.is_empty() {
        return src.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        src.trim_start_matches('/')
    )
}

/// URL for `src` resized to `width` (and optionally `height`).
pub fn resized_url(src: &str, base: &str, width: u32, height: Option<u32>, fit: Fit) -> String {
    let url = absolute_src(src, base);
    let separator = if url.contains('?') { '&' } else { '?' };
    let mut params = format!("w={}", width);
    if let Some(h) = height {
        params.push_str(&format!("&h={}&fit={}", h, fit.as_param()));
    }
    params.push_str("&auto=format");
    format!("{}{}{}", url, separator, params)
}

/// `srcset` attribute value. Widths above the original are skipped, except
/// that at least the smallest width is always offered.
pub fn srcset(image: &Image, base: &str) -> String {
    let original = image.dimensions.width;
    let widths: Vec<u32> = SRCSET_WIDTHS
        .iter()
        .copied()
        .enumerate()
        .filter(|(i, w)| *i == 0 || original == 0 || *w <= original)
        .map(|(_, w)| w)
        .collect();

    widths
        .iter()
        .map(|w| format!("{} {}w", resized_url(&image.src, base, *w, None, Fit::Max), w))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dimensions;

    const CDN: &str = "https://images.example.com/";

    #[test]
    fn test_absolute_src() {
        assert_eq!(absolute_src("/a.jpg", CDN), "https://images.example.com/a.jpg");
        assert_eq!(absolute_src("https://x.io/a.jpg", CDN), "https://x.io/a.jpg");
        assert_eq!(absolute_src("/a.jpg", ""), "/a.jpg");
    }

    #[test]
    fn test_resized_url_params() {
        assert_eq!(
            resized_url("/a.jpg", CDN, 800, None, Fit::Max),
            "https://images.example.com/a.jpg?w=800&auto=format"
        );
        assert_eq!(
            resized_url("/a.jpg?v=2", CDN, 800, Some(600), Fit::Crop),
            "https://images.example.com/a.jpg?v=2&w=800&h=600&fit=crop&auto=format"
        );
    }

    #[test]
    fn test_srcset_skips_upscaling() {
        let image = Image {
            src: "/a.jpg".to_string(),
            alt: String::new(),
            dimensions: Dimensions {
                width: 1000,
                height: 500,
            },
        };
        let set = srcset(&image, CDN);
        assert!(set.contains("480w"));
        assert!(set.contains("960w"));
        assert!(!set.contains("1440w"));
    }

    #[test]
    fn test_srcset_small_original_keeps_one_entry() {
        let image = Image {
            src: "/tiny.png".to_string(),
            alt: String::new(),
            dimensions: Dimensions {
                width: 100,
                height: 100,
            },
        };
        assert_eq!(srcset(&image, "").split(", ").count(), 1);
    }
}
