//! Declarative description of the wizard pages
//!
//! Pages are plain data. The view turns them into widgets; nothing here
//! knows how they are drawn.

use serde::Serialize;

/// Asset drawn behind every page.
pub const BACKGROUND_IMAGE: &str = "Background_Image.svg";
pub const LOGO_IMAGE: &str = "Sundial.svg";

const FILLER_TEXT: &str = "Lorem Ipsum is simply dummy text of the printing industry. \
Lorem Ipsum has been the industry's standard text ever since the 1500s, when an unknown.";

const BROWSERS: [&str; 10] = [
    "Firefox",
    "Google Chrome",
    "Opera",
    "Safari",
    "Vivaldi",
    "Microsoft Edge",
    "Brave",
    "Tor",
    "Pale Moon",
    "Waterfox",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Fills the whole window behind the content
    Background,
    /// Small brand mark in the top-left corner
    Logo,
    /// Large picture filling the right-hand column
    Illustration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub file: &'static str,
    pub label: &'static str,
    pub placement: Placement,
}

impl ImageRef {
    pub const fn background() -> Self {
        Self {
            file: BACKGROUND_IMAGE,
            label: "Background",
            placement: Placement::Background,
        }
    }

    pub const fn logo() -> Self {
        Self {
            file: LOGO_IMAGE,
            label: "Sundial",
            placement: Placement::Logo,
        }
    }

    pub const fn illustration(file: &'static str, label: &'static str) -> Self {
        Self {
            file,
            label,
            placement: Placement::Illustration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Paragraph {
        text: String,
    },
    BulletColumns {
        items: Vec<String>,
        per_column: usize,
    },
    Image(ImageRef),
}

impl Element {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Element::Paragraph { text: text.into() }
    }

    pub fn bullets<I, S>(items: I, per_column: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Element::BulletColumns {
            items: items.into_iter().map(Into::into).collect(),
            per_column: per_column.max(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub id: &'static str,
    pub title: &'static str,
    pub elements: Vec<Element>,
}

impl Page {
    pub fn new(id: &'static str, title: &'static str) -> Self {
        Self {
            id,
            title,
            elements: Vec::new(),
        }
    }

    pub fn element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageRef> {
        self.elements.iter().filter_map(|e| match e {
            Element::Image(image) => Some(image),
            _ => None,
        })
    }

    pub fn image_at(&self, placement: Placement) -> Option<&ImageRef> {
        self.images().find(|i| i.placement == placement)
    }

    /// Text-bearing elements in display order.
    pub fn body(&self) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(|e| !matches!(e, Element::Image(_)))
    }
}

/// Split a bullet list into display columns of at most `per_column` items.
pub fn columns(items: &[String], per_column: usize) -> Vec<&[String]> {
    items.chunks(per_column.max(1)).collect()
}

/// The ordered set of pages shown by the wizard.
#[derive(Debug, Clone)]
pub struct PageCatalog {
    pages: Vec<Page>,
}

impl PageCatalog {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    pub fn builtin() -> Self {
        let privacy = Page::new("privacy", "Our Pledge to Privacy")
            .element(Element::Image(ImageRef::background()))
            .element(Element::Image(ImageRef::logo()))
            .element(Element::Image(ImageRef::illustration(
                "Group_30513.png",
                "Privacy illustration",
            )))
            .element(Element::paragraph(FILLER_TEXT))
            .element(Element::paragraph(FILLER_TEXT));

        let security = Page::new("security", "Data Security & Encryption")
            .element(Element::Image(ImageRef::background()))
            .element(Element::Image(ImageRef::logo()))
            .element(Element::Image(ImageRef::illustration(
                "Group_30513.png",
                "Security illustration",
            )))
            .element(Element::paragraph(FILLER_TEXT))
            .element(Element::paragraph(FILLER_TEXT));

        let browsers = Page::new("browsers", "Browser Compatibility")
            .element(Element::Image(ImageRef::background()))
            .element(Element::Image(ImageRef::logo()))
            .element(Element::Image(ImageRef::illustration(
                "Group_30501.svg",
                "Supported browsers",
            )))
            .element(Element::paragraph(
                "Lorem Ipsum is simply dummy text of the printing industry.",
            ))
            .element(Element::bullets(BROWSERS, 5));

        Self::new(vec![privacy, security, browsers])
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    /// Find a page by id, returning its index.
    pub fn find(&self, id: &str) -> Option<(usize, &Page)> {
        self.pages.iter().enumerate().find(|(_, p)| p.id == id)
    }

    /// Every distinct asset file referenced, in page order.
    pub fn image_files(&self) -> Vec<&'static str> {
        let mut files = Vec::new();
        for image in self.pages.iter().flat_map(Page::images) {
            if !files.contains(&image.file) {
                files.push(image.file);
            }
        }
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_titles_in_order() {
        let catalog = PageCatalog::builtin();
        let titles: Vec<_> = catalog.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec![
                "Our Pledge to Privacy",
                "Data Security & Encryption",
                "Browser Compatibility"
            ]
        );
    }

    #[test]
    fn test_browser_page_has_two_columns_of_five() {
        let catalog = PageCatalog::builtin();
        let (index, page) = catalog.find("browsers").unwrap();
        assert_eq!(index, 2);

        let (items, per_column) = page
            .body()
            .find_map(|e| match e {
                Element::BulletColumns { items, per_column } => Some((items, *per_column)),
                _ => None,
            })
            .unwrap();
        let cols = columns(items, per_column);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].first().map(String::as_str), Some("Firefox"));
        assert_eq!(cols[1].first().map(String::as_str), Some("Microsoft Edge"));
        assert!(cols.iter().all(|c| c.len() == 5));
    }

    #[test]
    fn test_columns_handles_uneven_lists() {
        let items: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let cols = columns(&items, 2);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[1], &["c".to_string()]);
        assert_eq!(columns(&items, 0).len(), 3);
    }

    #[test]
    fn test_image_files_are_deduplicated() {
        let files = PageCatalog::builtin().image_files();
        assert_eq!(
            files,
            vec![
                BACKGROUND_IMAGE,
                LOGO_IMAGE,
                "Group_30513.png",
                "Group_30501.svg"
            ]
        );
    }

    #[test]
    fn test_every_page_has_background_logo_and_illustration() {
        for page in PageCatalog::builtin().iter() {
            assert_eq!(
                page.image_at(Placement::Background).map(|i| i.file),
                Some(BACKGROUND_IMAGE),
                "{}",
                page.id
            );
            assert!(page.image_at(Placement::Logo).is_some(), "{}", page.id);
            assert!(page.image_at(Placement::Illustration).is_some(), "{}", page.id);
        }
    }
}
