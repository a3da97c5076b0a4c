use anyhow::anyhow;
use gpui::*;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// An asset source that loads assets from the `./assets` folder.
#[derive(RustEmbed)]
#[folder = "./assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow!("could not find asset at path \"{path}\""))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

use gpui_component::IconNamed;

pub enum IconName {
    ChevronLeft,
    ChevronDown,
    Plus,
    Pin,
    PinOff,
    Trash,
    Download,
    Close,
    LoaderCircle,
    Link,
    Bold,
    Italic,
}

impl IconNamed for IconName {
    fn path(self) -> gpui::SharedString {
        match self {
            Self::ChevronLeft => "icons/chevron-left.svg",
            Self::ChevronDown => "icons/chevron-down.svg",
            Self::Plus => "icons/plus.svg",
            Self::Pin => "icons/pin.svg",
            Self::PinOff => "icons/pin-off.svg",
            Self::Trash => "icons/trash.svg",
            Self::Download => "icons/download.svg",
            Self::Close => "icons/x.svg",
            Self::LoaderCircle => "icons/loader-circle.svg",
            Self::Link => "icons/link.svg",
            Self::Bold => "icons/bold.svg",
            Self::Italic => "icons/italic.svg",
        }
        .into()
    }
}
