// SPDX-License-Identifier: MPL-2.0
//! Prompt composition for an enhancement run.

use std::fmt;

/// Fallback used when the user leaves the instructions empty.
pub const DEFAULT_INSTRUCTIONS: &str = "Standard enhancement";

/// Output aspect ratio requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Square,
    Widescreen,
}

impl AspectRatio {
    /// Thumbnail-style presets get a widescreen frame, everything else is
    /// square.
    #[must_use]
    pub fn for_style_prompt(style_prompt: &str) -> Self {
        if style_prompt.to_lowercase().contains("youtube") {
            AspectRatio::Widescreen
        } else {
            AspectRatio::Square
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output resolution class requested from the model (e.g. `"4K"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSize(String);

impl ImageSize {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::new("4K")
    }
}

/// Everything the remote model needs for one run.
#[derive(Debug, Clone)]
pub struct EnhanceRequest {
    /// Source image, PNG-encoded.
    pub image_png: Vec<u8>,
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    pub image_size: ImageSize,
}

impl EnhanceRequest {
    #[must_use]
    pub fn new(
        image_png: Vec<u8>,
        style_prompt: &str,
        instructions: &str,
        image_size: ImageSize,
    ) -> Self {
        Self {
            image_png,
            prompt: compose_prompt(style_prompt, instructions),
            aspect_ratio: AspectRatio::for_style_prompt(style_prompt),
            image_size,
        }
    }
}

/// Builds the full instruction text sent alongside the image.
#[must_use]
pub fn compose_prompt(style_prompt: &str, instructions: &str) -> String {
    let instructions = match instructions.trim() {
        "" => DEFAULT_INSTRUCTIONS,
        text => text,
    };

    format!(
        "Task: Enhance and Reimagine this image.\n\
         Style Presets: {style_prompt}\n\
         User Specific Order Instructions: {instructions}\n\
         \n\
         Guidelines:\n\
         1. Preserve composition but dramatically elevate resolution and texture.\n\
         2. Apply high-end professional color grading.\n\
         3. If specific instructions are provided in the chat context, prioritize them (e.g. changing eye color, lighting).\n\
         4. Remove noise and artifacts.\n\
         5. Output ONLY the resulting image."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_styles_are_widescreen() {
        assert_eq!(
            AspectRatio::for_style_prompt("High-contrast YouTube thumbnail style"),
            AspectRatio::Widescreen
        );
        assert_eq!(
            AspectRatio::for_style_prompt("flawless skin texture"),
            AspectRatio::Square
        );
    }

    #[test]
    fn aspect_ratio_strings() {
        assert_eq!(AspectRatio::Square.to_string(), "1:1");
        assert_eq!(AspectRatio::Widescreen.to_string(), "16:9");
    }

    #[test]
    fn blank_instructions_use_default() {
        let prompt = compose_prompt("sharp focus", "   ");
        assert!(prompt.contains("User Specific Order Instructions: Standard enhancement"));
        assert!(prompt.contains("Style Presets: sharp focus"));
    }

    #[test]
    fn instructions_are_trimmed_and_embedded() {
        let prompt = compose_prompt("sharp focus", "  make the eyes green \n");
        assert!(prompt.contains("User Specific Order Instructions: make the eyes green\n"));
        assert!(prompt.ends_with("5. Output ONLY the resulting image."));
    }

    #[test]
    fn request_derives_ratio_from_style() {
        let request = EnhanceRequest::new(vec![1, 2, 3], "youtube", "", ImageSize::default());
        assert_eq!(request.aspect_ratio, AspectRatio::Widescreen);
        assert_eq!(request.image_size.as_str(), "4K");
        assert_eq!(request.image_png, vec![1, 2, 3]);
    }
}
