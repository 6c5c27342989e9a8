//! Derived CDN URLs for image and file assets.
//!
//! Pure string work, no I/O: asset references like
//! `image-{id}-{WxH}-{format}` carry everything needed to address the
//! asset CDN, and each site surface (card, hero, social share) fixes its
//! own crop and quality policy. Equal inputs always produce equal URLs,
//! so the CDN cache key for a given asset and surface never drifts.

use crate::config::SanityConfig;
use crate::models::{AssetRef, FileRef, ImageRef};

const CDN_BASE: &str = "https://cdn.sanity.io";

/// Default card width. Cards crop to 16:10 at quality 85.
pub const CARD_WIDTH: u32 = 1600;
/// Default hero width. Heroes crop to 16:9 at quality 90.
pub const HERO_WIDTH: u32 = 1920;
/// Default social-share width. Share images crop to 1.91:1 at quality 85.
pub const OG_WIDTH: u32 = 1200;

const CARD_ASPECT: f64 = 0.625;
const HERO_ASPECT: f64 = 0.5625;
const OG_RATIO: f64 = 1.91;

const CARD_QUALITY: u8 = 85;
const HERO_QUALITY: u8 = 90;
const OG_QUALITY: u8 = 85;
const DEFAULT_QUALITY: u8 = 85;

/// Dimensions and format parsed out of an `image-…` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedImageRef<'a> {
    asset_id: &'a str,
    width: u32,
    height: u32,
    format: &'a str,
}

fn parse_image_ref(reference: &str) -> Option<ParsedImageRef<'_>> {
    let rest = reference.strip_prefix("image-")?;
    let mut parts = rest.rsplitn(3, '-');
    let format = parts.next()?;
    let dimensions = parts.next()?;
    let asset_id = parts.next()?;
    let (width, height) = dimensions.split_once('x')?;
    Some(ParsedImageRef {
        asset_id,
        width: width.parse().ok()?,
        height: height.parse().ok()?,
        format,
    })
}

fn parse_file_ref(reference: &str) -> Option<(&str, &str)> {
    reference.strip_prefix("file-")?.rsplit_once('-')
}

/// Crop and quality directives appended to a base asset URL.
struct Derivation {
    width: u32,
    height: Option<u32>,
    quality: u8,
    crop: bool,
}

/// Builds CDN URLs for a project's assets.
///
/// # Example
///
/// ```rust
/// use folio_content::{ImageUrlBuilder, AssetRef, ImageRef};
///
/// let images = ImageUrlBuilder::new("w8eezxao", "production");
/// let card = ImageRef {
///     asset: Some(AssetRef {
///         reference: Some("image-abc123-2000x1250-jpg".into()),
///         url: None,
///     }),
/// };
/// assert_eq!(
///     images.card_image_url(&card).as_deref(),
///     Some("https://cdn.sanity.io/images/w8eezxao/production/abc123-2000x1250.jpg?w=1600&h=1000&q=85&auto=format"),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    pub fn from_config(config: &SanityConfig) -> Self {
        Self::new(config.project_id.clone(), config.dataset.clone())
    }

    /// Card URL at the default width.
    pub fn card_image_url(&self, image: &ImageRef) -> Option<String> {
        self.card_image_url_at(image, CARD_WIDTH)
    }

    /// Card URL at a caller-chosen width. Height follows the 16:10 crop,
    /// rounded half up.
    pub fn card_image_url_at(&self, image: &ImageRef, width: u32) -> Option<String> {
        self.derive_url(
            image,
            Derivation {
                width,
                height: Some(ratio_height(width, CARD_ASPECT)),
                quality: CARD_QUALITY,
                crop: false,
            },
        )
    }

    /// Hero URL at the default width.
    pub fn hero_image_url(&self, image: &ImageRef) -> Option<String> {
        self.hero_image_url_at(image, HERO_WIDTH)
    }

    /// Hero URL at a caller-chosen width. Height follows the 16:9 crop.
    pub fn hero_image_url_at(&self, image: &ImageRef, width: u32) -> Option<String> {
        self.derive_url(
            image,
            Derivation {
                width,
                height: Some(ratio_height(width, HERO_ASPECT)),
                quality: HERO_QUALITY,
                crop: false,
            },
        )
    }

    /// Social-share URL at the standard 1200px width.
    pub fn og_image_url(&self, image: &ImageRef) -> Option<String> {
        self.og_image_url_at(image, OG_WIDTH)
    }

    /// Social-share URL at a caller-chosen width. Height follows the 1.91:1
    /// ratio and the CDN crops to fill rather than letterboxing.
    pub fn og_image_url_at(&self, image: &ImageRef, width: u32) -> Option<String> {
        self.derive_url(
            image,
            Derivation {
                width,
                height: Some((width as f64 / OG_RATIO).round() as u32),
                quality: OG_QUALITY,
                crop: true,
            },
        )
    }

    /// Free-form variant: explicit width, optional height, explicit quality.
    pub fn optimized_image_url(
        &self,
        image: &ImageRef,
        width: u32,
        height: Option<u32>,
        quality: Option<u8>,
    ) -> Option<String> {
        self.derive_url(
            image,
            Derivation {
                width,
                height,
                quality: quality.unwrap_or(DEFAULT_QUALITY),
                crop: false,
            },
        )
    }

    /// Direct download URL for an uploaded file, e.g. the resume PDF.
    pub fn file_url(&self, file: &FileRef) -> Option<String> {
        let asset = file.asset.as_ref()?;
        if let Some((asset_id, extension)) = asset
            .reference
            .as_deref()
            .and_then(parse_file_ref)
        {
            return Some(format!(
                "{}/files/{}/{}/{}.{}",
                CDN_BASE, self.project_id, self.dataset, asset_id, extension
            ));
        }
        asset.url.clone()
    }

    fn derive_url(&self, image: &ImageRef, derivation: Derivation) -> Option<String> {
        let asset = image.asset.as_ref()?;
        let base = self.base_url(asset)?;
        let separator = if base.contains('?') { '&' } else { '?' };
        let mut url = format!("{}{}w={}", base, separator, derivation.width);
        if let Some(height) = derivation.height {
            url.push_str(&format!("&h={}", height));
        }
        url.push_str(&format!("&q={}", derivation.quality));
        url.push_str("&auto=format");
        if derivation.crop {
            url.push_str("&fit=crop");
        }
        Some(url)
    }

    // Reference form wins so URLs stay on the CDN; the stored URL covers
    // references this parser does not recognize.
    fn base_url(&self, asset: &AssetRef) -> Option<String> {
        if let Some(parsed) = asset.reference.as_deref().and_then(parse_image_ref) {
            return Some(format!(
                "{}/images/{}/{}/{}-{}x{}.{}",
                CDN_BASE,
                self.project_id,
                self.dataset,
                parsed.asset_id,
                parsed.width,
                parsed.height,
                parsed.format
            ));
        }
        asset.url.clone()
    }
}

fn ratio_height(width: u32, aspect: f64) -> u32 {
    (width as f64 * aspect).round() as u32
}
