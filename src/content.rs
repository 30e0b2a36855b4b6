//! Marketing copy and bundled creatives for the landing page.
//!
//! All content is render-time configuration: built from literals, never
//! persisted or mutated. Gallery images are embedded at compile time and
//! handed to the grid as opaque data URIs.

use crate::components::AssetCollection;

// Example creatives shipped with the app
const AD_EXAMPLE_1: &[u8] = include_bytes!("../assets/ad-example-1.png");
const AD_EXAMPLE_2: &[u8] = include_bytes!("../assets/ad-example-2.png");
const AD_EXAMPLE_3: &[u8] = include_bytes!("../assets/ad-example-3.png");
const AD_EXAMPLE_4: &[u8] = include_bytes!("../assets/ad-example-4.png");

/// Copy for one promotional section.
#[derive(Clone, PartialEq)]
pub struct PromoContent {
    pub heading: String,
    pub body: String,
    pub action_label: String,
}

/// Hero section copy.
pub fn hero_promo() -> PromoContent {
    PromoContent {
        heading: "Dê vida às suas ideias".to_string(),
        body: "Crie campanhas completas em segundos com o poder da inteligência \
               artificial. Sem designers, sem agências, sem espera."
            .to_string(),
        action_label: "Experimentar Gratuitamente".to_string(),
    }
}

/// Bottom-of-page banner copy.
pub fn closing_promo() -> PromoContent {
    PromoContent {
        heading: "Pronto para transformar seu marketing?".to_string(),
        body: "Junte-se a milhares de marcas que já criam anúncios profissionais com IA."
            .to_string(),
        action_label: "Começar Agora".to_string(),
    }
}

fn data_uri(bytes: &[u8]) -> String {
    use base64::Engine;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:image/png;base64,{}", encoded)
}

/// The gallery collection, in display order.
///
/// No explicit alt text is supplied, so cells fall back to their
/// positional labels ("Ad Example 1".."Ad Example 4").
pub fn gallery_items() -> AssetCollection {
    AssetCollection::new([
        (data_uri(AD_EXAMPLE_1), None),
        (data_uri(AD_EXAMPLE_2), None),
        (data_uri(AD_EXAMPLE_3), None),
        (data_uri(AD_EXAMPLE_4), None),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promo_copy_is_non_empty() {
        for promo in [hero_promo(), closing_promo()] {
            assert!(!promo.heading.is_empty());
            assert!(!promo.body.is_empty());
            assert!(!promo.action_label.is_empty());
        }
    }

    #[test]
    fn test_gallery_has_four_creatives() {
        let items = gallery_items();
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn test_gallery_images_are_data_uris() {
        for item in gallery_items().iter() {
            assert!(item.image.starts_with("data:image/png;base64,"));
        }
    }

    #[test]
    fn test_gallery_uses_positional_alt_text() {
        let alts: Vec<String> = gallery_items().iter().map(|i| i.alt_text()).collect();
        assert_eq!(
            alts,
            vec!["Ad Example 1", "Ad Example 2", "Ad Example 3", "Ad Example 4"]
        );
    }
}
