//! CMS images served through the resizing CDN.

use leptos::prelude::*;

use crate::config::site;
use crate::core::image::{Fit, resized_url, srcset};
use crate::models::Image;

/// Default rendition width when `srcset` is not supported.
const DEFAULT_WIDTH: u32 = 960;

/// Full image with a width-based `srcset`.
#[component]
pub fn ResponsiveImage(
    image: Image,
    /// `sizes` attribute; defaults to half the viewport
    #[prop(optional)]
    sizes: Option<&'static str>,
) -> impl IntoView {
    let base = site().image_base_url.as_str();
    let src = resized_url(&image.src, base, DEFAULT_WIDTH, None, Fit::Max);
    let srcset = srcset(&image, base);
    let Image {
        alt, dimensions, ..
    } = image;

    view! {
        <img
            src=src
            srcset=srcset
            sizes=sizes.unwrap_or("50vw")
            alt=alt
            width=dimensions.width
            height=dimensions.height
            loading="lazy"
            decoding="async"
        />
    }
}

/// Fixed-size cropped thumbnail.
#[component]
pub fn Thumbnail(image: Image, width: u32, height: u32) -> impl IntoView {
    let base = site().image_base_url.as_str();
    let src = resized_url(&image.src, base, width, Some(height), Fit::Crop);
    // 2x rendition for dense screens
    let dense = resized_url(&image.src, base, width * 2, Some(height * 2), Fit::Crop);

    view! {
        <img
            src=src
            srcset=format!("{} 2x", dense)
            alt=image.alt
            width=width
            height=height
            loading="lazy"
            decoding="async"
        />
    }
}
