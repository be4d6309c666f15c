/// Tags serialized in self-closing form when they carry no value.
const VOID_TAGS: &[&str] = &["img"];

/// Node shape violation detected at serialization time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SerializeError {
    /// A text leaf (no tag) must carry a value.
    #[error("text leaf has neither tag nor value")]
    EmptyLeaf,
    /// A tagged, non-void leaf must carry a value.
    #[error("leaf node <{tag}> requires a value")]
    MissingValue { tag: String },
    /// A parent must have at least one child.
    #[error("parent node <{tag}> requires at least one child")]
    NoChildren { tag: String },
}

/// An insertion-ordered attribute mapping with unique keys.
///
/// Order is significant: attributes serialize in the order they were set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets an attribute, replacing the value in place if the key exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders as a leading space followed by space-joined `key="value"`
    /// pairs, or an empty string when there are no attributes.
    pub fn to_html(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let pairs: Vec<String> = self
            .0
            .iter()
            .map(|(key, value)| format!("{key}=\"{value}\""))
            .collect();
        format!(" {}", pairs.join(" "))
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in pairs {
            attrs.set(key, value);
        }
        attrs
    }
}

/// A tagged tree element modelling HTML output before serialization.
///
/// Trees are built bottom-up per block and owned by the block that produced
/// them; there is no sharing between documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A leaf: optional tag, optional text value, attributes.
    ///
    /// A tagless leaf is raw text and must have a value. A void-tag leaf
    /// (`img`) may omit its value and serializes self-closing.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Attributes,
    },
    /// An element with children. Must have at least one child by
    /// serialization time.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    },
}

impl HtmlNode {
    /// A raw text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// A tagged leaf without attributes.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// A tagged leaf with attributes and an optional value.
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: Option<String>,
        attrs: Attributes,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value,
            attrs,
        }
    }

    /// An element wrapping `children`.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs: Attributes::new(),
        }
    }

    /// Serializes the tree depth-first with no whitespace between children.
    pub fn to_html(&self) -> Result<String, SerializeError> {
        match self {
            HtmlNode::Leaf { tag: None, value, .. } => {
                value.clone().ok_or(SerializeError::EmptyLeaf)
            }
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                attrs,
            } => {
                let is_void = VOID_TAGS.contains(&tag.as_str());
                match value {
                    Some(value) if !(is_void && value.is_empty()) => {
                        Ok(format!("<{tag}{}>{value}</{tag}>", attrs.to_html()))
                    }
                    _ if is_void => Ok(format!("<{tag}{}>", attrs.to_html())),
                    _ => Err(SerializeError::MissingValue { tag: tag.clone() }),
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                if children.is_empty() {
                    return Err(SerializeError::NoChildren { tag: tag.clone() });
                }
                let inner: String = children
                    .iter()
                    .map(HtmlNode::to_html)
                    .collect::<Result<_, _>>()?;
                Ok(format!("<{tag}{}>{inner}</{tag}>", attrs.to_html()))
            }
        }
    }
}
