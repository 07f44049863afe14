//! Turns manifest text into layout options and photo sizes.

use justified::{LayoutOptions, Size};
use log::debug;

use crate::syntax::{self, RawDeclaration, RawPhoto};
use crate::values::to_pixels;
use crate::{Manifest, ManifestError};

/// Parses a full manifest, validating every value.
pub fn parse_manifest(source: &str) -> Result<Manifest, ManifestError> {
    let mut options: Option<LayoutOptions> = None;
    let mut photos: Option<Vec<Size>> = None;

    let mut input = skip_ws(source, source)?;
    while !input.is_empty() {
        let (rest, name) = syntax::block_open(input)
            .map_err(|e| syntax_error(source, e, "expected `gallery {` or `photos {`"))?;

        input = match name {
            "gallery" => {
                if options.is_some() {
                    return Err(ManifestError::DuplicateBlock(name.to_string()));
                }
                let (rest, declarations) = syntax::gallery_body(rest)
                    .map_err(|e| syntax_error(source, e, "expected `property: value;` or `}`"))?;
                options = Some(layout_options(&declarations)?);
                rest
            }
            "photos" => {
                if photos.is_some() {
                    return Err(ManifestError::DuplicateBlock(name.to_string()));
                }
                let (rest, entries) = syntax::photos_body(rest)
                    .map_err(|e| syntax_error(source, e, "expected `WxH;`, `auto;` or `}`"))?;
                photos = Some(photo_sizes(&entries)?);
                rest
            }
            other => return Err(ManifestError::UnknownBlock(other.to_string())),
        };
        input = skip_ws(source, input)?;
    }

    let options = options.ok_or(ManifestError::MissingGallery)?;
    let photos = photos.unwrap_or_default();
    debug!(
        "manifest: {} photos, width {}, padding {}",
        photos.len(),
        options.container_width,
        options.padding
    );

    Ok(Manifest { options, photos })
}

fn layout_options(declarations: &[RawDeclaration<'_>]) -> Result<LayoutOptions, ManifestError> {
    let mut width = None;
    let mut padding = None;
    let mut row_padding = None;

    for declaration in declarations {
        let slot = match declaration.property {
            "width" => &mut width,
            "padding" => &mut padding,
            "row-padding" => &mut row_padding,
            other => return Err(ManifestError::UnknownProperty(other.to_string())),
        };
        if slot.is_some() {
            return Err(ManifestError::DuplicateProperty(
                declaration.property.to_string(),
            ));
        }
        *slot = Some(to_pixels(declaration.property, declaration.value)?);
    }

    let mut options = LayoutOptions::new(width.ok_or(ManifestError::MissingWidth)?);
    if let Some(padding) = padding {
        options = options.with_padding(padding);
    }
    if let Some(row_padding) = row_padding {
        options = options.with_row_padding(row_padding);
    }
    Ok(options)
}

fn photo_sizes(entries: &[RawPhoto<'_>]) -> Result<Vec<Size>, ManifestError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match *entry {
            RawPhoto::Auto => Ok(Size::UNKNOWN),
            RawPhoto::Sized { width, height } => {
                let property = format!("photo {}", index);
                Ok(Size::new(
                    to_pixels(&property, width)?,
                    to_pixels(&property, height)?,
                ))
            }
        })
        .collect()
}

fn skip_ws<'a>(source: &str, input: &'a str) -> Result<&'a str, ManifestError> {
    syntax::ws(input)
        .map(|(rest, _)| rest)
        .map_err(|e| syntax_error(source, e, "unexpected input"))
}

/// Build an `InvalidSyntax` error pointing at the line where parsing stopped.
fn syntax_error(
    source: &str,
    err: nom::Err<nom::error::Error<&str>>,
    message: &str,
) -> ManifestError {
    let rest = match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e.input,
        nom::Err::Incomplete(_) => "",
    };
    let offset = source.len().saturating_sub(rest.len());
    let line = source[..offset].matches('\n').count() + 1;

    ManifestError::InvalidSyntax {
        line,
        message: message.to_string(),
    }
}
