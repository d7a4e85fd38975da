// SPDX-License-Identifier: MPL-2.0
//! Built-in enhancement styles.

/// A stylistic preset offered in the studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnhancementStyle {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Style keywords forwarded to the model.
    pub prompt: &'static str,
    pub icon: &'static str,
}

/// The style catalog. The first entry is the default selection.
pub const STYLES: &[EnhancementStyle] = &[
    EnhancementStyle {
        id: "masterpiece",
        name: "Masterpiece 8K",
        description: "Cinematic lighting and hyper-detailed textures.",
        prompt: "8k resolution, extreme close-up, hyper-detailed textures, cinematic lighting, \
                 sharp focus, professional color grading, vivid tones, noise reduction, \
                 masterpiece quality, unreal engine 5 render style, crystal clear.",
        icon: "✨",
    },
    EnhancementStyle {
        id: "youtube_viral",
        name: "YouTube Viral",
        description: "High contrast with vibrant, glowing colors.",
        prompt: "High-contrast YouTube thumbnail style, vibrant saturated colors, bold lighting, \
                 volumetric fog, sharp edges, HDR (High Dynamic Range), 3D pop-out effect, \
                 glowing outlines, professional digital art finish, catchy visual clarity.",
        icon: "🔥",
    },
    EnhancementStyle {
        id: "portrait_enhancer",
        name: "Portrait Perfect",
        description: "Skin texture correction and natural lighting.",
        prompt: "Photorealistic portrait, flawless skin texture, sharp eyes, natural lighting, \
                 bokeh background, 85mm lens effect, soft shadows, high definition, \
                 professional photography, color corrected, subsurface scattering, ray tracing.",
        icon: "👤",
    },
];

impl EnhancementStyle {
    /// Looks up a style by id.
    #[must_use]
    pub fn by_id(id: &str) -> Option<&'static EnhancementStyle> {
        STYLES.iter().find(|style| style.id == id)
    }
}

impl Default for EnhancementStyle {
    fn default() -> Self {
        STYLES[0]
    }
}

impl std::fmt::Display for EnhancementStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in STYLES.iter().enumerate() {
            for b in &STYLES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn default_is_first_style() {
        assert_eq!(EnhancementStyle::default().id, "masterpiece");
    }

    #[test]
    fn by_id_finds_known_styles() {
        assert_eq!(
            EnhancementStyle::by_id("portrait_enhancer").map(|s| s.name),
            Some("Portrait Perfect")
        );
        assert!(EnhancementStyle::by_id("sepia").is_none());
    }
}
