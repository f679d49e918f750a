//! Main-menu tree built from dot-separated window names.
//!
//! Each window's full name ("Engine.Metrics") is split on `.` and inserted
//! into a tree, creating intermediate branch nodes as needed. Leaves carry
//! the owning window's identity; rendering recurses depth-first.

use smallvec::SmallVec;

use crate::registry::WindowRegistry;
use crate::window::WindowId;

/// A node of the main menu: a branch (submenu) or a leaf owning a window.
#[derive(Debug, Default, Clone)]
pub struct MenuNode {
    pub name: String,
    pub window: Option<WindowId>,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Create an empty root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Insert `path` (dot-separated), creating intermediate nodes, and return
    /// the final node.
    pub fn insert(&mut self, path: &str) -> &mut MenuNode {
        let segments: SmallVec<[&str; 8]> = path.split('.').collect();

        let mut current = self;
        for segment in segments {
            let pos = current.children.iter().position(|c| c.name == segment);
            current = match pos {
                Some(idx) => &mut current.children[idx],
                None => {
                    current.children.push(MenuNode {
                        name: segment.to_string(),
                        window: None,
                        children: Vec::new(),
                    });
                    let last = current.children.len() - 1;
                    &mut current.children[last]
                }
            };
        }
        current
    }

    /// Rebuild the whole tree from the registry, sorted lexicographically by
    /// full window name. The result is independent of registration order.
    pub fn sorted_from_registry(registry: &WindowRegistry) -> Self {
        let mut names: Vec<(&str, WindowId)> = registry
            .iter()
            .filter(|e| e.in_main_menu())
            .map(|e| (e.full_name(), e.id()))
            .collect();
        names.sort_by(|a, b| a.0.cmp(b.0));

        let mut root = Self::root();
        for (full_name, id) in names {
            root.insert(full_name).window = Some(id);
        }
        root
    }
}
