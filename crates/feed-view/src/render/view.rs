//! Renderer-agnostic view tree
//!
//! A front end walks this tree and maps each node to its own widgets. The
//! tree serializes to JSON with a `type` tag on every node.

use feed_core::SortOrder;
use serde::Serialize;

/// Icons referenced by the view tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Warning,
    Empty,
    User,
    Hash,
    Comments,
    Claps,
    Views,
    Words,
    ReadTime,
    Trash,
    Edit,
    Reply,
    More,
}

/// Text emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    #[default]
    Body,
    Strong,
    Heading,
    Caption,
}

/// Severity of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
}

/// What happens when an interactive node is activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UiAction {
    /// Repeat the failed feed request
    Retry,
    /// Drop the search text
    ClearSearch,
    /// Switch the sort order
    SetSort { sort: SortOrder },
    EditComment,
    ReplyToComment,
    DeleteComment,
    ConfirmDelete,
    CancelDelete,
    DismissLoginPrompt,
    SignIn,
    SubmitComment,
    CloseForm,
}

/// Labelled button bound to an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    pub action: UiAction,
}

impl Button {
    pub fn new(label: impl Into<String>, action: UiAction) -> Self {
        Self {
            label: label.into(),
            icon: None,
            action,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// One option of a single-choice selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: SortOrder,
    pub label: String,
    pub selected: bool,
}

/// An entry of a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Stable key for diffing
    pub key: String,
    /// The viewport observer watches this item to load the next page
    pub sentinel: bool,
    pub content: View,
}

/// Node of the view tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum View {
    Column {
        children: Vec<View>,
    },
    Row {
        children: Vec<View>,
    },
    /// Bordered container for one post or comment
    Card {
        children: Vec<View>,
    },
    Text {
        text: String,
        style: TextStyle,
    },
    Link {
        href: String,
        content: Box<View>,
    },
    Image {
        src: String,
        alt: String,
    },
    Icon {
        icon: Icon,
        /// Text read by assistive technology
        label: String,
    },
    /// Icon followed by a short text
    Stat {
        icon: Icon,
        text: String,
    },
    Chip {
        icon: Icon,
        label: String,
    },
    Alert {
        severity: Severity,
        icon: Icon,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        action: Option<Button>,
    },
    Loader,
    Button(Button),
    Select {
        options: Vec<SelectOption>,
    },
    List {
        items: Vec<ListItem>,
    },
    /// Drop-down menu behind a trigger icon
    Menu {
        trigger: Icon,
        items: Vec<Button>,
    },
    /// Modal dialog
    Dialog {
        title: String,
        message: String,
        actions: Vec<Button>,
    },
    /// Single-field text form
    Form {
        value: String,
        placeholder: String,
        submit: Button,
        cancel: Button,
    },
}

impl View {
    pub fn column(children: Vec<View>) -> Self {
        Self::Column { children }
    }

    pub fn row(children: Vec<View>) -> Self {
        Self::Row { children }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::styled(text, TextStyle::Body)
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self::Text {
            text: text.into(),
            style,
        }
    }

    pub fn link(href: impl Into<String>, content: View) -> Self {
        Self::Link {
            href: href.into(),
            content: Box::new(content),
        }
    }

    pub fn stat(icon: Icon, text: impl Into<String>) -> Self {
        Self::Stat {
            icon,
            text: text.into(),
        }
    }

    /// Direct children of a container node
    pub fn children(&self) -> Vec<&View> {
        match self {
            Self::Column { children } | Self::Row { children } | Self::Card { children } => {
                children.iter().collect()
            }
            Self::Link { content, .. } => vec![content.as_ref()],
            Self::List { items } => items.iter().map(|item| &item.content).collect(),
            _ => Vec::new(),
        }
    }

    /// Every visible string in the subtree, depth first
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts(&self, out: &mut Vec<String>) {
        match self {
            Self::Text { text, .. } | Self::Stat { text, .. } => out.push(text.clone()),
            Self::Chip { label, .. } => out.push(label.clone()),
            Self::Alert {
                message, action, ..
            } => {
                out.push(message.clone());
                if let Some(button) = action {
                    out.push(button.label.clone());
                }
            }
            Self::Button(button) => out.push(button.label.clone()),
            Self::Select { options } => out.extend(options.iter().map(|o| o.label.clone())),
            Self::Menu { items, .. } => out.extend(items.iter().map(|b| b.label.clone())),
            Self::Dialog {
                title,
                message,
                actions,
            } => {
                out.push(title.clone());
                out.push(message.clone());
                out.extend(actions.iter().map(|b| b.label.clone()));
            }
            Self::Form { submit, cancel, .. } => {
                out.push(submit.label.clone());
                out.push(cancel.label.clone());
            }
            _ => {}
        }
        for child in self.children() {
            child.collect_texts(out);
        }
    }

    /// Check whether any visible string in the subtree equals `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|text| text == needle)
    }
}
