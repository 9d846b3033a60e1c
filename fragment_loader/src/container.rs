use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::ContainerError;

/// Something that owns containers addressable by id, usually a page.
///
/// Containers are looked up, never created. All writes happen on the loading task,
/// so implementations are free to use single threaded interior mutability.
pub trait ContainerHost {
    fn contains_container(&self, container_id: &str) -> bool;

    /// Replaces the container's content with `markup`.
    fn set_container_content(&self, container_id: &str, markup: &str) -> Result<(), ContainerError>;
}

/// Containers kept in memory, with every write remembered in order.
#[derive(Debug, Default)]
pub struct InMemoryContainers {
    contents: RefCell<HashMap<String, Vec<String>>>,
}

impl InMemoryContainers {
    pub fn new() -> InMemoryContainers {
        InMemoryContainers::default()
    }

    pub fn with_containers<'a>(container_ids: impl IntoIterator<Item = &'a str>) -> InMemoryContainers {
        let containers = InMemoryContainers::new();
        container_ids.into_iter().for_each(|id| containers.add_container(id));
        containers
    }

    /// Adds an empty container. Existing containers keep their content.
    pub fn add_container(&self, container_id: &str) {
        self.contents.borrow_mut().entry(container_id.into()).or_insert_with(Vec::new);
    }

    pub fn remove_container(&self, container_id: &str) {
        self.contents.borrow_mut().remove(container_id);
    }

    /// Current content; empty for a container that was never written.
    pub fn content_of(&self, container_id: &str) -> Option<String> {
        self.contents.borrow().get(container_id)
            .map(|writes| writes.last().cloned().unwrap_or_default())
    }

    pub fn history_of(&self, container_id: &str) -> Vec<String> {
        self.contents.borrow().get(container_id).cloned().unwrap_or_default()
    }
}

impl ContainerHost for InMemoryContainers {
    fn contains_container(&self, container_id: &str) -> bool {
        self.contents.borrow().contains_key(container_id)
    }

    fn set_container_content(&self, container_id: &str, markup: &str) -> Result<(), ContainerError> {
        match self.contents.borrow_mut().get_mut(container_id) {
            Some(writes) => {
                writes.push(markup.into());
                Ok(())
            }
            None => Err(ContainerError::NotFound(container_id.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_container_is_empty() {
        let containers = InMemoryContainers::with_containers(vec!["navbar-container"]);

        assert!(containers.contains_container("navbar-container"));
        assert_eq!(containers.content_of("navbar-container"), Some(String::new()));
        assert_eq!(containers.content_of("footer-container"), None);
    }

    #[test]
    fn writes_are_kept_in_order() {
        let containers = InMemoryContainers::with_containers(vec!["navbar-container"]);

        containers.set_container_content("navbar-container", "first").unwrap();
        containers.set_container_content("navbar-container", "second").unwrap();

        assert_eq!(containers.content_of("navbar-container").unwrap(), "second");
        assert_eq!(containers.history_of("navbar-container"), vec!["first", "second"]);
    }

    #[test]
    fn writing_to_unknown_container_fails() {
        let containers = InMemoryContainers::new();

        let result = containers.set_container_content("footer-container", "<footer/>");

        assert_eq!(result, Err(ContainerError::NotFound("footer-container".into())));
    }

    #[test]
    fn removed_container_is_gone() {
        let containers = InMemoryContainers::with_containers(vec!["footer-container"]);

        containers.remove_container("footer-container");

        assert!(!containers.contains_container("footer-container"));
    }
}
