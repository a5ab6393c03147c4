use std::path::Path;

use lofty::file::TaggedFileExt;
use lofty::picture::PictureType;

use crate::error::CoverError;

/// Picture bytes stored in the file's tags, front cover preferred.
pub fn embedded_art(path: &Path) -> Result<Option<Vec<u8>>, CoverError> {
    let tagged = lofty::read_from_path(path)?;

    let pictures: Vec<_> = tagged.tags().iter().flat_map(|t| t.pictures()).collect();

    let chosen = pictures
        .iter()
        .find(|p| p.pic_type() == PictureType::CoverFront)
        .or_else(|| pictures.first());

    Ok(chosen
        .map(|p| p.data().to_vec())
        .filter(|data| !data.is_empty()))
}
