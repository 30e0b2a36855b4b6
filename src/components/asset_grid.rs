//! Asset Grid Component
//!
//! Displays an ordered, fixed-length collection of ad creatives as a
//! responsive grid. Each cell reveals a caption overlay on hover; the
//! hover flag is owned by the cell, never shared across cells.

use dioxus::prelude::*;

/// One image in the grid.
#[derive(Clone, PartialEq)]
pub struct AssetItem {
    /// Opaque renderable handle (a data URI resolved at compile time)
    pub image: String,
    /// Explicit accessibility text; positional fallback when absent
    pub alt: Option<String>,
    /// 0-based position within the collection, assigned at construction
    pub position: usize,
}

impl AssetItem {
    /// Accessibility text for this cell.
    ///
    /// Falls back to `"Ad Example {position + 1}"` when no explicit
    /// description was supplied.
    pub fn alt_text(&self) -> String {
        self.alt
            .clone()
            .unwrap_or_else(|| format!("Ad Example {}", self.position + 1))
    }
}

/// Ordered collection of grid items.
///
/// Insertion order is meaningful: items render in the order given, and
/// positions are assigned from that order. The collection is fixed at
/// composition time and never re-sorted.
#[derive(Clone, PartialEq, Default)]
pub struct AssetCollection {
    items: Vec<AssetItem>,
}

impl AssetCollection {
    /// Build a collection from `(image, alt)` pairs, assigning positions
    /// from insertion order.
    pub fn new(images: impl IntoIterator<Item = (String, Option<String>)>) -> Self {
        let items = images
            .into_iter()
            .enumerate()
            .map(|(position, (image, alt))| AssetItem {
                image,
                alt,
                position,
            })
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetItem> {
        self.items.iter()
    }
}

/// CSS class for a cell overlay given its hover flag.
fn overlay_class(hovered: bool) -> &'static str {
    if hovered {
        "asset-cell__overlay visible"
    } else {
        "asset-cell__overlay"
    }
}

/// Responsive grid of ad creatives.
///
/// Renders exactly one cell per item, in input order. An empty collection
/// renders an empty grid with zero cells.
#[component]
pub fn AssetGrid(items: AssetCollection) -> Element {
    rsx! {
        div { class: "asset-grid",
            for item in items.iter() {
                AssetCell {
                    key: "{item.position}",
                    item: item.clone(),
                }
            }
        }
    }
}

/// Single grid cell.
///
/// Owns its own ephemeral hover flag; hovering one cell never affects
/// another cell's overlay.
#[component]
fn AssetCell(item: AssetItem) -> Element {
    let mut hovered = use_signal(|| false);

    let alt = item.alt_text();

    rsx! {
        div {
            class: "asset-cell",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            img {
                class: "asset-cell__img",
                src: "{item.image}",
                alt: "{alt}",
            }

            div { class: "{overlay_class(hovered())}",
                span { class: "asset-cell__label", "{alt}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::rc::Rc;

    use dioxus::dioxus_core::{Event, Mutation, VirtualDom};
    use dioxus::html::{
        set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
    };

    use super::*;

    fn collection_of(n: usize) -> AssetCollection {
        AssetCollection::new((0..n).map(|i| (format!("data:image/png;base64,{}", i), None)))
    }

    #[test]
    fn test_collection_preserves_insertion_order() {
        let items = AssetCollection::new([
            ("b".to_string(), None),
            ("a".to_string(), None),
            ("c".to_string(), None),
        ]);
        let images: Vec<&str> = items.iter().map(|i| i.image.as_str()).collect();
        assert_eq!(images, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_collection_assigns_unique_positions() {
        let items = collection_of(4);
        let positions: Vec<usize> = items.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_collection_is_valid() {
        let items = collection_of(0);
        assert!(items.is_empty());
        assert_eq!(items.len(), 0);
    }

    #[test]
    fn test_fallback_alt_text_is_one_based() {
        let items = collection_of(4);
        let alts: Vec<String> = items.iter().map(|i| i.alt_text()).collect();
        assert_eq!(
            alts,
            vec!["Ad Example 1", "Ad Example 2", "Ad Example 3", "Ad Example 4"]
        );
    }

    #[test]
    fn test_explicit_alt_text_wins() {
        let items = AssetCollection::new([(
            "img".to_string(),
            Some("Campanha de verão".to_string()),
        )]);
        let item = items.iter().next().unwrap();
        assert_eq!(item.alt_text(), "Campanha de verão");
    }

    #[test]
    fn test_overlay_class_when_hovered() {
        assert_eq!(overlay_class(true), "asset-cell__overlay visible");
    }

    #[test]
    fn test_overlay_class_when_not_hovered() {
        assert_eq!(overlay_class(false), "asset-cell__overlay");
    }

    fn two_cell_grid() -> Element {
        rsx! {
            AssetGrid { items: collection_of(2) }
        }
    }

    fn pointer_event() -> Event<dyn Any> {
        Event::new(
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
            false,
        )
    }

    #[test]
    fn test_hover_toggles_only_the_hovered_cell() {
        set_event_converter(Box::new(SerializedHtmlEventConverter));

        let mut dom = VirtualDom::new(two_cell_grid);
        let mutations = dom.rebuild_to_vec();

        let cells: Vec<_> = mutations
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name.as_str() == "mouseenter" => {
                    Some(*id)
                }
                _ => None,
            })
            .collect();
        assert_eq!(cells.len(), 2);

        dom.runtime().handle_event("mouseenter", pointer_event(), cells[0]);
        let edits = dom.render_immediate_to_vec().edits;

        // Exactly one attribute changes in the whole tree: the hovered
        // cell's overlay class. The sibling cell stays untouched.
        assert_eq!(edits.len(), 1);
        match &edits[0] {
            Mutation::SetAttribute { id, .. } => assert_ne!(*id, cells[1]),
            other => panic!("expected an overlay class change, got {:?}", other),
        }
    }
}
