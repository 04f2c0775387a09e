use std::fs::read_to_string;
use std::path::Path;

use anyhow::Context;
use translit_core::{Converter, Direction, Layout, LayoutFile};

/// Read and parse a layout data file.
pub fn load_layout_file(path: &Path) -> anyhow::Result<LayoutFile> {
    let text = read_to_string(path)
        .with_context(|| format!("cannot read layout file {}", path.display()))?;
    Ok(LayoutFile::parse(&text))
}

/// Resolve one layout from a layout data file.
pub fn load_layout(path: &Path, name: &str) -> anyhow::Result<Layout> {
    let file = load_layout_file(path)?;
    let layout = file.layout(name)?;
    Ok(layout)
}

/// Build a converter for a layout in the requested direction.
pub fn build_converter(layout: &Layout, reverse: bool) -> Converter {
    let direction = if reverse {
        Direction::Reverse
    } else {
        Direction::Forward
    };
    Converter::new(layout, direction)
}

/// Batch-convert `text`, optionally leaving markup tags untouched.
pub fn convert_text(converter: &Converter, text: &str, skip_markup: bool) -> String {
    if skip_markup {
        converter.convert_skip_markup(text)
    } else {
        converter.convert_plain(text)
    }
}
