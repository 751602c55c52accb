use serde::{Deserialize, Serialize};

/// Text color supported by the external API, foreground or background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Blue,
    BlueBackground,
    Brown,
    BrownBackground,
    Gray,
    GrayBackground,
    Green,
    GreenBackground,
    Orange,
    OrangeBackground,
    Pink,
    PinkBackground,
    Purple,
    PurpleBackground,
    Red,
    RedBackground,
    Yellow,
    YellowBackground,
}

/// Formatting flags applied to a single rich text span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

/// Hyperlink target of a text span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLink {
    pub url: String,
}

/// Content of a plain text span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<TextLink>,
}

/// Content of an inline equation span (LaTeX expression)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationSpan {
    pub expression: String,
}

/// Referenced workspace user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub object: String,
    pub id: String,
}

/// Referenced page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRef {
    pub id: String,
}

/// Target of an inline mention span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MentionTarget {
    User { user: UserRef },
    Page { page: PageRef },
}

/// A single styled span in the external API's rich text schema.
///
/// Constructors and builder methods are pure data shaping: the same inputs
/// always produce the same nested structure, with no network access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichText {
    Text {
        text: TextSpan,
        #[serde(default)]
        annotations: Annotations,
    },
    Equation {
        equation: EquationSpan,
        #[serde(default)]
        annotations: Annotations,
    },
    Mention {
        mention: MentionTarget,
        #[serde(default)]
        annotations: Annotations,
    },
}

impl RichText {
    /// Plain text span with default annotations.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            text: TextSpan {
                content: content.into(),
                link: None,
            },
            annotations: Annotations::default(),
        }
    }

    /// Inline LaTeX equation span.
    pub fn equation(expression: impl Into<String>) -> Self {
        Self::Equation {
            equation: EquationSpan {
                expression: expression.into(),
            },
            annotations: Annotations::default(),
        }
    }

    /// Mention of a workspace user by ID.
    pub fn mention_user(user_id: impl Into<String>) -> Self {
        Self::Mention {
            mention: MentionTarget::User {
                user: UserRef {
                    object: "user".to_string(),
                    id: user_id.into(),
                },
            },
            annotations: Annotations::default(),
        }
    }

    /// Mention of a page by ID.
    pub fn mention_page(page_id: impl Into<String>) -> Self {
        Self::Mention {
            mention: MentionTarget::Page {
                page: PageRef { id: page_id.into() },
            },
            annotations: Annotations::default(),
        }
    }

    pub fn bold(mut self) -> Self {
        self.annotations_mut().bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.annotations_mut().italic = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.annotations_mut().strikethrough = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.annotations_mut().underline = true;
        self
    }

    pub fn code(mut self) -> Self {
        self.annotations_mut().code = true;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.annotations_mut().color = color;
        self
    }

    /// Replace the whole annotation set at once.
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        *self.annotations_mut() = annotations;
        self
    }

    /// Attach a hyperlink. Only meaningful on text spans; equation and
    /// mention spans are returned unchanged.
    pub fn link(mut self, url: impl Into<String>) -> Self {
        if let Self::Text { text, .. } = &mut self {
            text.link = Some(TextLink { url: url.into() });
        }
        self
    }

    pub fn annotations(&self) -> &Annotations {
        match self {
            Self::Text { annotations, .. }
            | Self::Equation { annotations, .. }
            | Self::Mention { annotations, .. } => annotations,
        }
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        match self {
            Self::Text { annotations, .. }
            | Self::Equation { annotations, .. }
            | Self::Mention { annotations, .. } => annotations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bold_sets_only_bold() {
        let span = RichText::text("hi").bold();
        let annotations = *span.annotations();

        assert!(annotations.bold);
        assert!(!annotations.italic);
        assert!(!annotations.strikethrough);
        assert!(!annotations.underline);
        assert!(!annotations.code);
        assert_eq!(annotations.color, Color::Default);
    }

    #[test]
    fn text_span_serializes_to_api_shape() {
        let span = RichText::text("hello").bold().color(Color::Red);
        assert_eq!(
            serde_json::to_value(&span).unwrap(),
            json!({
                "type": "text",
                "text": { "content": "hello" },
                "annotations": {
                    "bold": true,
                    "italic": false,
                    "strikethrough": false,
                    "underline": false,
                    "code": false,
                    "color": "red"
                }
            })
        );
    }

    #[test]
    fn linked_text_carries_url() {
        let span = RichText::text("docs").link("https://example.com");
        let value = serde_json::to_value(&span).unwrap();
        assert_eq!(value["text"]["link"]["url"], "https://example.com");
    }

    #[test]
    fn link_on_equation_is_a_no_op() {
        let span = RichText::equation("E = mc^2").link("https://example.com");
        let value = serde_json::to_value(&span).unwrap();
        assert_eq!(value["type"], "equation");
        assert_eq!(value["equation"]["expression"], "E = mc^2");
        assert!(value.get("text").is_none());
    }

    #[test]
    fn identical_inputs_produce_identical_structures() {
        let a = RichText::text("x").italic().underline().color(Color::Green);
        let b = RichText::text("x").italic().underline().color(Color::Green);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn background_colors_serialize_snake_case() {
        assert_eq!(
            serde_json::to_value(Color::GrayBackground).unwrap(),
            json!("gray_background")
        );
    }

    #[test]
    fn rich_text_round_trips() {
        let span = RichText::mention_user("user-1").bold();
        let value = serde_json::to_value(&span).unwrap();
        let back: RichText = serde_json::from_value(value).unwrap();
        assert_eq!(back, span);
    }
}
