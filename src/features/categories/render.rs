//! Category page assembly.
//!
//! A category document is rendered as an ordered list of sections, one
//! per nested collection, in a fixed order. Sections with no items still
//! render as empty containers. The gallery subsection gets a view model
//! for tag filtering and the per-item image viewer.

use serde::Serialize;
use utoipa::ToSchema;

use crate::features::categories::models::{
    ArtPieceRecord, BespokeCreation, BlogPostTeaser, CategoryDocument, CommitmentItem, FaqEntry,
    TestimonialRecord,
};
use crate::shared::constants::{ALL_TAG, DEFAULT_ICON, KNOWN_ICONS, SECTION_ORDER};

/// One rendered page section.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageSection {
    Gallery { items: Vec<ArtPieceRecord> },
    Process { steps: Vec<RenderedStep> },
    Commitment { items: Vec<CommitmentItem> },
    Bespoke { items: Vec<BespokeCreation> },
    Testimonials { items: Vec<TestimonialRecord> },
    Blog { posts: Vec<BlogPostTeaser> },
    Care { tips: Vec<String> },
    Faq { entries: Vec<FaqEntry> },
}

/// Process step with its icon resolved.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenderedStep {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Resolve an icon name against the known set, falling back to the
/// default instead of erroring.
pub fn resolve_icon(name: Option<&str>) -> &'static str {
    name.and_then(|n| KNOWN_ICONS.iter().find(|known| **known == n))
        .copied()
        .unwrap_or(DEFAULT_ICON)
}

/// Render every section of a category document in the fixed page order.
pub fn render_sections(doc: &CategoryDocument) -> Vec<PageSection> {
    SECTION_ORDER
        .iter()
        .map(|section| match *section {
            "gallery" => PageSection::Gallery {
                items: doc.art_pieces.0.clone(),
            },
            "process" => PageSection::Process {
                steps: doc
                    .process_steps
                    .0
                    .iter()
                    .map(|step| RenderedStep {
                        icon: resolve_icon(step.icon.as_deref()).to_string(),
                        title: step.title.clone(),
                        description: step.description.clone(),
                    })
                    .collect(),
            },
            "commitment" => PageSection::Commitment {
                items: doc.commitment.0.clone(),
            },
            "bespoke" => PageSection::Bespoke {
                items: doc.bespoke_creations.0.clone(),
            },
            "testimonials" => PageSection::Testimonials {
                items: doc.testimonials.0.clone(),
            },
            "blog" => PageSection::Blog {
                posts: doc.blog_posts.0.clone(),
            },
            "care" => PageSection::Care {
                tips: doc.care_tips.0.clone(),
            },
            "faq" => PageSection::Faq {
                entries: doc.faqs.0.clone(),
            },
            other => unreachable!("unknown section '{}' in SECTION_ORDER", other),
        })
        .collect()
}

// =============================================================================
// GALLERY VIEW MODEL
// =============================================================================

/// Tag-filterable gallery over a category's art pieces.
///
/// Items are deduplicated by title up front: the page loops the list
/// visually, so the same piece must not appear twice.
#[derive(Debug, Clone)]
pub struct GalleryView {
    items: Vec<ArtPieceRecord>,
    active_tag: Option<String>,
}

impl GalleryView {
    pub fn new(items: &[ArtPieceRecord]) -> Self {
        let mut seen = std::collections::HashSet::new();
        let items = items
            .iter()
            .filter(|item| seen.insert(item.title.clone()))
            .cloned()
            .collect();

        Self {
            items,
            active_tag: None,
        }
    }

    /// Unique tags across all items, with the clear-filter label first.
    pub fn tags(&self) -> Vec<String> {
        let mut tags = vec![ALL_TAG.to_string()];
        for item in &self.items {
            for tag in &item.tags {
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }

    /// Select a tag filter. The `All` label clears the filter.
    pub fn select_tag(&mut self, tag: &str) {
        if tag == ALL_TAG {
            self.active_tag = None;
        } else {
            self.active_tag = Some(tag.to_string());
        }
    }

    pub fn active_tag(&self) -> Option<&str> {
        self.active_tag.as_deref()
    }

    /// Items matching the active filter, in insertion order.
    pub fn visible_items(&self) -> Vec<&ArtPieceRecord> {
        match &self.active_tag {
            None => self.items.iter().collect(),
            Some(tag) => self
                .items
                .iter()
                .filter(|item| item.tags.iter().any(|t| t == tag))
                .collect(),
        }
    }
}

// =============================================================================
// DETAIL VIEWER
// =============================================================================

/// Per-item image viewer for the gallery detail modal.
///
/// The image index wraps modulo the open item's image count in both
/// directions and resets to 0 whenever a different item is opened.
#[derive(Debug, Clone, Default)]
pub struct ItemViewer {
    open_item: Option<String>,
    image_count: usize,
    image_index: usize,
}

#[allow(dead_code)]
impl ItemViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, item: &ArtPieceRecord) {
        if self.open_item.as_deref() != Some(item.title.as_str()) {
            self.image_index = 0;
        }
        self.open_item = Some(item.title.clone());
        self.image_count = item.images.len();
    }

    pub fn close(&mut self) {
        self.open_item = None;
        self.image_count = 0;
        self.image_index = 0;
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn next_image(&mut self) {
        if self.image_count > 0 {
            self.image_index = (self.image_index + 1) % self.image_count;
        }
    }

    pub fn prev_image(&mut self) {
        if self.image_count > 0 {
            self.image_index = (self.image_index + self.image_count - 1) % self.image_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn piece(title: &str, tags: &[&str], images: usize) -> ArtPieceRecord {
        ArtPieceRecord {
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            images: (0..images).map(|i| format!("/uploads/{}-{}.jpg", title, i)).collect(),
            ..Default::default()
        }
    }

    fn empty_doc() -> CategoryDocument {
        CategoryDocument {
            id: Uuid::new_v4(),
            name: "Mehndi".to_string(),
            href: "mehndi".to_string(),
            description: String::new(),
            image: String::new(),
            art_pieces: Json(vec![]),
            process_steps: Json(vec![]),
            commitment: Json(vec![]),
            bespoke_creations: Json(vec![]),
            testimonials: Json(vec![]),
            blog_posts: Json(vec![]),
            care_tips: Json(vec![]),
            faqs: Json(vec![]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_collections_render_empty_sections() {
        let sections = render_sections(&empty_doc());
        assert_eq!(sections.len(), SECTION_ORDER.len());

        match &sections[0] {
            PageSection::Gallery { items } => assert!(items.is_empty()),
            other => panic!("expected gallery first, got {:?}", other),
        }
        match sections.last().unwrap() {
            PageSection::Faq { entries } => assert!(entries.is_empty()),
            other => panic!("expected faq last, got {:?}", other),
        }
    }

    #[test]
    fn unknown_icons_fall_back_to_default() {
        assert_eq!(resolve_icon(Some("Palette")), "Palette");
        assert_eq!(resolve_icon(Some("NotARealIcon")), DEFAULT_ICON);
        assert_eq!(resolve_icon(None), DEFAULT_ICON);
    }

    #[test]
    fn rendered_steps_carry_resolved_icons() {
        let mut doc = empty_doc();
        doc.process_steps = Json(vec![
            crate::features::categories::models::ProcessStep {
                icon: Some("Brush".to_string()),
                title: "Sketch".to_string(),
                description: String::new(),
            },
            crate::features::categories::models::ProcessStep {
                icon: Some("Quill".to_string()),
                title: "Apply".to_string(),
                description: String::new(),
            },
        ]);

        let sections = render_sections(&doc);
        let PageSection::Process { steps } = &sections[1] else {
            panic!("expected process section");
        };
        assert_eq!(steps[0].icon, "Brush");
        assert_eq!(steps[1].icon, DEFAULT_ICON);
    }

    #[test]
    fn gallery_view_dedupes_by_title() {
        let items = vec![
            piece("Paisley", &["bridal"], 2),
            piece("Paisley", &["festival"], 1),
            piece("Lotus", &["festival"], 3),
        ];
        let view = GalleryView::new(&items);
        assert_eq!(view.visible_items().len(), 2);
    }

    #[test]
    fn tag_filter_narrows_and_all_clears() {
        let items = vec![
            piece("Paisley", &["bridal"], 1),
            piece("Lotus", &["festival"], 1),
            piece("Vine", &["bridal", "festival"], 1),
        ];
        let mut view = GalleryView::new(&items);

        assert_eq!(view.tags(), vec!["All", "bridal", "festival"]);

        view.select_tag("bridal");
        let visible: Vec<_> = view.visible_items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(visible, vec!["Paisley", "Vine"]);

        view.select_tag("All");
        assert_eq!(view.active_tag(), None);
        assert_eq!(view.visible_items().len(), 3);
    }

    #[test]
    fn viewer_wraps_in_both_directions() {
        let item = piece("Paisley", &[], 4);
        let mut viewer = ItemViewer::new();
        viewer.open(&item);

        // "next" N times returns to the start
        for _ in 0..4 {
            viewer.next_image();
        }
        assert_eq!(viewer.image_index(), 0);

        // "prev" from 0 lands on N-1
        viewer.prev_image();
        assert_eq!(viewer.image_index(), 3);
    }

    #[test]
    fn viewer_resets_only_for_a_different_item() {
        let paisley = piece("Paisley", &[], 3);
        let lotus = piece("Lotus", &[], 5);

        let mut viewer = ItemViewer::new();
        viewer.open(&paisley);
        viewer.next_image();
        assert_eq!(viewer.image_index(), 1);

        // Re-opening the same item keeps the position
        viewer.open(&paisley);
        assert_eq!(viewer.image_index(), 1);

        // A different item starts from the first image
        viewer.open(&lotus);
        assert_eq!(viewer.image_index(), 0);
    }

    #[test]
    fn viewer_tolerates_missing_images() {
        let bare = piece("Bare", &[], 0);
        let mut viewer = ItemViewer::new();
        viewer.open(&bare);
        viewer.next_image();
        viewer.prev_image();
        assert_eq!(viewer.image_index(), 0);
    }

    #[test]
    fn malformed_records_deserialize_with_empty_collections() {
        let record: ArtPieceRecord =
            serde_json::from_str(r#"{"title": "Sparse"}"#).expect("record");
        assert!(record.images.is_empty());
        assert!(record.tags.is_empty());
        assert!(record.price.is_none());
    }
}
