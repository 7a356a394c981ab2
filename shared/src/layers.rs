use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Independently toggleable map layers. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerId {
    Inundacao,
    Deslizamento,
    Topografia,
    Hidrografia,
    Infraestrutura,
    Deformacao,
}

impl LayerId {
    pub const ALL: [LayerId; 6] = [
        Self::Inundacao,
        Self::Deslizamento,
        Self::Topografia,
        Self::Hidrografia,
        Self::Infraestrutura,
        Self::Deformacao,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Inundacao => "inundacao",
            Self::Deslizamento => "deslizamento",
            Self::Topografia => "topografia",
            Self::Hidrografia => "hidrografia",
            Self::Infraestrutura => "infraestrutura",
            Self::Deformacao => "deformacao",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|layer| layer.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Inundacao => "Áreas de Inundação",
            Self::Deslizamento => "Áreas de Deslizamento",
            Self::Topografia => "Topografia",
            Self::Hidrografia => "Hidrografia",
            Self::Infraestrutura => "Infraestruturas",
            Self::Deformacao => "Deformação Solo",
        }
    }

    /// Glyph shown next to the layer switch.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Inundacao | Self::Hidrografia => "\u{1F4A7}",
            Self::Deslizamento => "\u{26A0}",
            Self::Topografia => "\u{223F}",
            Self::Infraestrutura => "\u{1F3E2}",
            Self::Deformacao => "\u{1F321}",
        }
    }
}

/// Set of currently visible layers. Duplicates are impossible by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayerVisibility {
    visible: BTreeSet<LayerId>,
}

impl LayerVisibility {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_layers(layers: impl IntoIterator<Item = LayerId>) -> Self {
        Self {
            visible: layers.into_iter().collect(),
        }
    }

    /// Remove `layer` if visible, otherwise show it.
    pub fn toggle(&mut self, layer: LayerId) {
        if !self.visible.remove(&layer) {
            self.visible.insert(layer);
        }
    }

    /// Toggle by wire name. Unknown names leave the set untouched; returns
    /// whether a layer was toggled.
    pub fn toggle_named(&mut self, name: &str) -> bool {
        match LayerId::from_name(name) {
            Some(layer) => {
                self.toggle(layer);
                true
            }
            None => false,
        }
    }

    pub fn is_visible(&self, layer: LayerId) -> bool {
        self.visible.contains(&layer)
    }

    pub fn iter(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.visible.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{LayerId, LayerVisibility};

    #[test]
    fn names_roundtrip_for_every_layer() {
        for layer in LayerId::ALL {
            assert_eq!(LayerId::from_name(layer.name()), Some(layer));
        }
        assert_eq!(LayerId::from_name("satelite"), None);
    }

    #[test]
    fn toggle_twice_restores_visibility() {
        for layer in LayerId::ALL {
            let mut layers = LayerVisibility::with_layers([LayerId::Inundacao]);
            let before = layers.clone();
            layers.toggle(layer);
            assert_ne!(layers.is_visible(layer), before.is_visible(layer));
            layers.toggle(layer);
            assert_eq!(layers, before);
        }
    }

    #[test]
    fn unknown_name_is_a_noop() {
        let mut layers = LayerVisibility::with_layers([LayerId::Infraestrutura]);
        assert!(!layers.toggle_named("radar"));
        assert_eq!(layers, LayerVisibility::with_layers([LayerId::Infraestrutura]));
    }

    #[test]
    fn toggle_named_accepts_wire_names() {
        let mut layers = LayerVisibility::empty();
        assert!(layers.toggle_named("hidrografia"));
        assert!(layers.is_visible(LayerId::Hidrografia));
        assert_eq!(layers.len(), 1);
    }

    #[test]
    fn duplicates_collapse() {
        let layers = LayerVisibility::with_layers([LayerId::Topografia, LayerId::Topografia]);
        assert_eq!(layers.len(), 1);
    }

    #[test]
    fn iterates_in_display_order() {
        let layers = LayerVisibility::with_layers([LayerId::Deformacao, LayerId::Inundacao]);
        let order: Vec<_> = layers.iter().collect();
        assert_eq!(order, vec![LayerId::Inundacao, LayerId::Deformacao]);
    }
}
