use std::cell::RefCell;

use ego_tree::{NodeId, NodeMut, NodeRef, Tree};
use fragment_loader::container::ContainerHost;
use fragment_loader::error::ContainerError;
use log::{debug, trace};
use scraper::{ElementRef, Html, Node};

/// A parsed html page whose elements can be filled by id.
pub struct PageDocument {
    html: RefCell<Html>,
}

impl PageDocument {
    pub fn parse(source: &str) -> PageDocument {
        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            debug!("Page parsed with {} recoverable errors", html.errors.len());
        }
        PageDocument { html: RefCell::new(html) }
    }

    /// Ids of all elements in document order.
    pub fn container_ids(&self) -> Vec<String> {
        self.html.borrow().tree.root().descendants()
            .filter_map(|node| node.value().as_element()?.id().map(String::from))
            .collect()
    }

    pub fn inner_html_of(&self, container_id: &str) -> Option<String> {
        let html = self.html.borrow();
        let node_id = find_element_by_id(&html.tree, container_id)?;
        let node = html.tree.get(node_id)?;
        ElementRef::wrap(node).map(|element| element.inner_html())
    }

    /// Serializes the page, including its doctype.
    pub fn render(&self) -> String {
        let html = self.html.borrow();
        let doctype = html.tree.root().children()
            .find_map(|node| match node.value() {
                Node::Doctype(doctype) => Some(format!("<!DOCTYPE {}>\n", doctype.name())),
                _ => None,
            })
            .unwrap_or_default();
        format!("{}{}", doctype, html.root_element().html())
    }
}

fn find_element_by_id(tree: &Tree<Node>, container_id: &str) -> Option<NodeId> {
    tree.root().descendants()
        .find(|node| node.value().as_element().and_then(|element| element.id()) == Some(container_id))
        .map(|node| node.id())
}

fn append_copies(target: &mut NodeMut<Node>, source: NodeRef<Node>) {
    for child in source.children() {
        let mut appended = target.append(child.value().clone());
        append_copies(&mut appended, child);
    }
}

impl ContainerHost for PageDocument {
    fn contains_container(&self, container_id: &str) -> bool {
        find_element_by_id(&self.html.borrow().tree, container_id).is_some()
    }

    fn set_container_content(&self, container_id: &str, markup: &str) -> Result<(), ContainerError> {
        let mut html = self.html.borrow_mut();
        let node_id = find_element_by_id(&html.tree, container_id)
            .ok_or_else(|| ContainerError::NotFound(container_id.into()))?;
        let mut container = html.tree.get_mut(node_id)
            .ok_or_else(|| ContainerError::NotFound(container_id.into()))?;

        while let Some(mut child) = container.first_child() {
            child.detach();
        }

        let fragment = Html::parse_fragment(markup);
        append_copies(&mut container, *fragment.root_element());
        trace!("Replaced content of {} ({} bytes)", container_id, markup.len());
        Ok(())
    }
}
