use crate::rich_text::{Color, RichText};
use crate::types::{ExternalFile, Icon};
use serde::{Deserialize, Serialize};

/// A block in the shape the external API expects for creation.
///
/// Constructors cover the creation surface: content blocks (paragraph,
/// headings, callout, quote, toggle, code, to-do, list items), structural
/// blocks (divider, table of contents, breadcrumb, equation, table) and
/// media blocks (image, video, embed, bookmark, link paragraph).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub object: String,
    #[serde(flatten)]
    pub payload: BlockPayload,
}

/// Type-tagged block payload, serialized as `{"type": T, T: {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockPayload {
    Paragraph {
        paragraph: ParagraphValue,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: HeadingValue,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: HeadingValue,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: HeadingValue,
    },
    Callout {
        callout: CalloutValue,
    },
    Quote {
        quote: QuoteValue,
    },
    Toggle {
        toggle: ToggleValue,
    },
    Code {
        code: CodeValue,
    },
    ToDo {
        to_do: ToDoValue,
    },
    BulletedListItem {
        bulleted_list_item: ListItemValue,
    },
    NumberedListItem {
        numbered_list_item: ListItemValue,
    },
    Divider {
        divider: EmptyValue,
    },
    TableOfContents {
        table_of_contents: ColorValue,
    },
    Breadcrumb {
        breadcrumb: EmptyValue,
    },
    Equation {
        equation: EquationValue,
    },
    Table {
        table: TableValue,
    },
    Image {
        image: FileValue,
    },
    Video {
        video: FileValue,
    },
    Embed {
        embed: EmbedValue,
    },
    Bookmark {
        bookmark: BookmarkValue,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphValue {
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingValue {
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub is_toggleable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutValue {
    pub rich_text: Vec<RichText>,
    pub icon: Icon,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteValue {
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleValue {
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeValue {
    pub rich_text: Vec<RichText>,
    pub language: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDoValue {
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItemValue {
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyValue {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorValue {
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationValue {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableValue {
    pub table_width: u32,
    pub has_column_header: bool,
    pub has_row_header: bool,
    pub children: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(rename = "type")]
    pub kind: String,
    pub table_row: TableRowValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRowValue {
    pub cells: Vec<Vec<RichText>>,
}

/// Reference to a completed file upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileUploadRef {
    pub id: String,
}

/// Media source: externally hosted URL or a completed file upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileValue {
    External {
        external: ExternalFile,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        caption: Vec<RichText>,
    },
    FileUpload {
        file_upload: FileUploadRef,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        caption: Vec<RichText>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedValue {
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkValue {
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<RichText>,
}

impl Block {
    fn wrap(payload: BlockPayload) -> Self {
        Self {
            object: "block".to_string(),
            payload,
        }
    }

    pub fn paragraph(rich_text: Vec<RichText>) -> Self {
        Self::wrap(BlockPayload::Paragraph {
            paragraph: ParagraphValue {
                rich_text,
                color: Color::Default,
            },
        })
    }

    /// Heading block. Levels outside 1..=3 fall back to level 1.
    pub fn heading(level: u8, rich_text: Vec<RichText>) -> Self {
        let value = HeadingValue {
            rich_text,
            color: Color::Default,
            is_toggleable: false,
        };
        Self::wrap(match level {
            2 => BlockPayload::Heading2 { heading_2: value },
            3 => BlockPayload::Heading3 { heading_3: value },
            _ => BlockPayload::Heading1 { heading_1: value },
        })
    }

    pub fn callout(rich_text: Vec<RichText>, icon: Icon) -> Self {
        Self::wrap(BlockPayload::Callout {
            callout: CalloutValue {
                rich_text,
                icon,
                color: Color::Default,
            },
        })
    }

    pub fn quote(rich_text: Vec<RichText>) -> Self {
        Self::wrap(BlockPayload::Quote {
            quote: QuoteValue {
                rich_text,
                color: Color::Default,
            },
        })
    }

    pub fn toggle(rich_text: Vec<RichText>) -> Self {
        Self::wrap(BlockPayload::Toggle {
            toggle: ToggleValue {
                rich_text,
                color: Color::Default,
            },
        })
    }

    pub fn code(rich_text: Vec<RichText>, language: impl Into<String>) -> Self {
        Self::wrap(BlockPayload::Code {
            code: CodeValue {
                rich_text,
                language: language.into(),
                caption: Vec::new(),
            },
        })
    }

    pub fn to_do(rich_text: Vec<RichText>, checked: bool) -> Self {
        Self::wrap(BlockPayload::ToDo {
            to_do: ToDoValue {
                rich_text,
                checked,
                color: Color::Default,
            },
        })
    }

    pub fn bulleted_list_item(rich_text: Vec<RichText>) -> Self {
        Self::wrap(BlockPayload::BulletedListItem {
            bulleted_list_item: ListItemValue {
                rich_text,
                color: Color::Default,
            },
        })
    }

    pub fn numbered_list_item(rich_text: Vec<RichText>) -> Self {
        Self::wrap(BlockPayload::NumberedListItem {
            numbered_list_item: ListItemValue {
                rich_text,
                color: Color::Default,
            },
        })
    }

    pub fn divider() -> Self {
        Self::wrap(BlockPayload::Divider {
            divider: EmptyValue {},
        })
    }

    pub fn table_of_contents() -> Self {
        Self::wrap(BlockPayload::TableOfContents {
            table_of_contents: ColorValue {
                color: Color::Default,
            },
        })
    }

    pub fn breadcrumb() -> Self {
        Self::wrap(BlockPayload::Breadcrumb {
            breadcrumb: EmptyValue {},
        })
    }

    pub fn equation(expression: impl Into<String>) -> Self {
        Self::wrap(BlockPayload::Equation {
            equation: EquationValue {
                expression: expression.into(),
            },
        })
    }

    /// Table scaffold: header cells are pre-filled (`Header N` across the
    /// first row, `Row N` down the first column), all other cells empty.
    pub fn table(width: u32, height: u32, has_column_header: bool, has_row_header: bool) -> Self {
        let children = (0..height)
            .map(|row| {
                let cells = (0..width)
                    .map(|col| {
                        let content = if has_column_header && row == 0 {
                            format!("Header {}", col + 1)
                        } else if has_row_header && col == 0 {
                            format!("Row {}", row + 1)
                        } else {
                            String::new()
                        };
                        vec![RichText::text(content)]
                    })
                    .collect();
                TableRow {
                    kind: "table_row".to_string(),
                    table_row: TableRowValue { cells },
                }
            })
            .collect();

        Self::wrap(BlockPayload::Table {
            table: TableValue {
                table_width: width,
                has_column_header,
                has_row_header,
                children,
            },
        })
    }

    pub fn image(url: impl Into<String>, caption: Vec<RichText>) -> Self {
        Self::wrap(BlockPayload::Image {
            image: FileValue::External {
                external: ExternalFile { url: url.into() },
                caption,
            },
        })
    }

    /// Image block backed by a completed file upload.
    pub fn image_upload(file_upload_id: impl Into<String>) -> Self {
        Self::wrap(BlockPayload::Image {
            image: FileValue::FileUpload {
                file_upload: FileUploadRef {
                    id: file_upload_id.into(),
                },
                caption: Vec::new(),
            },
        })
    }

    pub fn video(url: impl Into<String>, caption: Vec<RichText>) -> Self {
        Self::wrap(BlockPayload::Video {
            video: FileValue::External {
                external: ExternalFile { url: url.into() },
                caption,
            },
        })
    }

    pub fn embed(url: impl Into<String>, caption: Vec<RichText>) -> Self {
        Self::wrap(BlockPayload::Embed {
            embed: EmbedValue {
                url: url.into(),
                caption,
            },
        })
    }

    pub fn bookmark(url: impl Into<String>, caption: Vec<RichText>) -> Self {
        Self::wrap(BlockPayload::Bookmark {
            bookmark: BookmarkValue {
                url: url.into(),
                caption,
            },
        })
    }

    /// Paragraph whose single span links to `url`. The visible text is
    /// `title` when given, otherwise the URL itself.
    pub fn link(url: impl Into<String>, title: Option<String>) -> Self {
        let url = url.into();
        let text = title.filter(|t| !t.is_empty()).unwrap_or_else(|| url.clone());
        Self::paragraph(vec![RichText::text(text).link(url)])
    }
}
