//! Namespace-agnostic lookups over a parsed `roxmltree` document.
//!
//! Elements and attributes are always matched on their local name so prefixed feeds
//! (`<rea:residential>`) read the same as plain ones.

use roxmltree::Node;

/// Describes where a value lives relative to an element.
///
/// * no element: the element itself
/// * element only: the first direct child with that name
/// * element + attribute: the first descendant carrying the attribute, yielding the attribute value
/// * element + attribute + value: the first descendant whose attribute equals the value,
///   yielding that element's own text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XmlQuery<'q> {
    element: Option<&'q str>,
    attribute: Option<&'q str>,
    attribute_value: Option<&'q str>,
}

impl<'q> XmlQuery<'q> {
    pub fn this() -> Self {
        Self::default()
    }

    pub fn element(name: &'q str) -> Self {
        Self {
            element: Some(name),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: &'q str) -> Self {
        self.attribute = Some(name);
        self
    }

    pub fn matching(mut self, value: &'q str) -> Self {
        self.attribute_value = Some(value);
        self
    }

    pub fn element_name(&self) -> Option<&'q str> {
        self.element
    }

    /// Resolves the query to the element holding the value.
    pub fn locate<'a, 'input>(&self, node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
        let Some(element) = self.element else {
            return Some(node);
        };

        match (self.attribute, self.attribute_value) {
            (None, _) => child(node, element),
            (Some(attribute), None) => first_descendant(node, element, |n| {
                local_attribute(n, attribute).is_some()
            }),
            (Some(attribute), Some(value)) => first_descendant(node, element, |n| {
                local_attribute(n, attribute) == Some(value)
            }),
        }
    }

    /// Trimmed text the query points at; whitespace-only counts as no value.
    pub fn value_or_default(&self, node: Node<'_, '_>) -> Option<String> {
        let found = self.locate(node)?;
        let raw = match (self.attribute, self.attribute_value) {
            (Some(attribute), None) => local_attribute(found, attribute)?.to_string(),
            _ => shallow_value(found),
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

pub fn value_or_default(node: Node<'_, '_>, query: &XmlQuery<'_>) -> Option<String> {
    query.value_or_default(node)
}

/// Concatenation of the element's direct text nodes, ignoring descendants.
pub fn shallow_value(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}

pub fn local_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|attribute| attribute.name() == name)
        .map(|attribute| attribute.value())
}

/// Attribute value trimmed, with blank values treated as absent.
pub fn attribute_or_default(node: Node<'_, '_>, name: &str) -> Option<String> {
    local_attribute(node, name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn first_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
    predicate: impl Fn(Node<'a, 'input>) -> bool,
) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|n| n.is_element() && n.tag_name().name() == name && predicate(*n))
}

pub fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// Descendant elements with the given local name, excluding `node` itself.
pub fn descendants<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .skip(1)
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

pub fn name_of<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// `parent.child` label used in coercion error messages.
pub fn element_label(node: Node<'_, '_>, element: Option<&str>) -> String {
    match element {
        Some(element) => format!("{}.{}", name_of(node), element),
        None => name_of(node).to_string(),
    }
}

/// The element's original markup, as it appears in the source text.
pub fn outer_xml<'input>(node: Node<'_, 'input>) -> &'input str {
    let text = node.document().input_text();
    text.get(node.range()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const AGENT: &str = r#"<listingAgent id="1">
        <name>Princess Leia</name>
        <telephone type="BH">05 1234 5678</telephone>
        <telephone type="mobile">1234 1234</telephone>
        <email>ImAPrincess@rebelalliance.com</email>
        <note>outer <b>inner</b> tail</note>
        <blank>   </blank>
    </listingAgent>"#;

    #[test]
    fn element_query_reads_direct_child() {
        let doc = Document::parse(AGENT).expect("valid xml");
        let root = doc.root_element();
        assert_eq!(
            XmlQuery::element("name").value_or_default(root).as_deref(),
            Some("Princess Leia")
        );
        assert_eq!(XmlQuery::element("missing").value_or_default(root), None);
        assert_eq!(XmlQuery::element("blank").value_or_default(root), None);
    }

    #[test]
    fn attribute_value_disambiguates_siblings() {
        let doc = Document::parse(AGENT).expect("valid xml");
        let root = doc.root_element();
        let mobile = XmlQuery::element("telephone")
            .with_attribute("type")
            .matching("mobile");
        assert_eq!(mobile.value_or_default(root).as_deref(), Some("1234 1234"));

        let landline = XmlQuery::element("telephone")
            .with_attribute("type")
            .matching("BH");
        assert_eq!(landline.value_or_default(root).as_deref(), Some("05 1234 5678"));
    }

    #[test]
    fn attribute_without_value_returns_the_attribute() {
        let doc = Document::parse(AGENT).expect("valid xml");
        let root = doc.root_element();
        let query = XmlQuery::element("telephone").with_attribute("type");
        assert_eq!(query.value_or_default(root).as_deref(), Some("BH"));

        let own = XmlQuery::this().with_attribute("id");
        assert_eq!(own.value_or_default(root).as_deref(), Some("1"));
    }

    #[test]
    fn shallow_value_ignores_descendant_text() {
        let doc = Document::parse(AGENT).expect("valid xml");
        let note = child(doc.root_element(), "note").expect("note element");
        assert_eq!(shallow_value(note), "outer  tail");
    }

    #[test]
    fn prefixed_names_match_on_local_name() {
        let xml = r#"<r:residential xmlns:r="urn:rea" r:status="current"><r:headline>Hi</r:headline></r:residential>"#;
        let doc = Document::parse(xml).expect("valid xml");
        let root = doc.root_element();
        assert_eq!(name_of(root), "residential");
        assert_eq!(local_attribute(root, "status"), Some("current"));
        assert_eq!(
            XmlQuery::element("headline").value_or_default(root).as_deref(),
            Some("Hi")
        );
    }

    #[test]
    fn outer_xml_is_the_source_markup() {
        let doc = Document::parse(AGENT).expect("valid xml");
        let email = child(doc.root_element(), "email").expect("email element");
        assert_eq!(outer_xml(email), "<email>ImAPrincess@rebelalliance.com</email>");
        assert_eq!(element_label(doc.root_element(), Some("email")), "listingAgent.email");
    }
}
