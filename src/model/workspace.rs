//! Workspace management - file tree sidebar and workspace tracking
//!
//! The file tree is a snapshot: it is rebuilt wholesale each time a folder
//! is opened or reloaded, and is never reconciled with later filesystem
//! changes.

use std::collections::HashSet;
use std::fs::{self, Metadata, ReadDir};
use std::path::{Path, PathBuf};

use crate::error::{EditorError, Result};

// ============================================================================
// File Tree Nodes
// ============================================================================

/// One filesystem entry in the mirrored tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    /// File or directory name (not full path)
    pub name: String,
    /// Full path to the file/directory
    pub path: PathBuf,
    /// Whether this is a directory
    pub is_dir: bool,
    /// Children in directory-read order (only populated for directories)
    pub children: Vec<DisplayNode>,
}

impl DisplayNode {
    /// Create a new file node
    pub fn new_file(path: PathBuf) -> Self {
        Self {
            name: display_name(&path),
            path,
            is_dir: false,
            children: Vec::new(),
        }
    }

    /// Create a new directory node
    pub fn new_dir(path: PathBuf) -> Self {
        Self {
            name: display_name(&path),
            path,
            is_dir: true,
            children: Vec::new(),
        }
    }

    /// Find a node by path in this subtree
    pub fn find(&self, path: &Path) -> Option<&DisplayNode> {
        if self.path == path {
            return Some(self);
        }
        if self.is_dir && path.starts_with(&self.path) {
            return self.children.iter().find_map(|child| child.find(path));
        }
        None
    }

    /// Total number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DisplayNode::node_count).sum::<usize>()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

// ============================================================================
// Tree Mirror
// ============================================================================

/// Identity of a directory, used to stop recursion through symlink cycles
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum DirId {
    #[cfg(unix)]
    Inode { dev: u64, ino: u64 },
    #[cfg(not(unix))]
    Path(PathBuf),
}

#[cfg(unix)]
fn dir_id(_path: &Path, metadata: &Metadata) -> DirId {
    use std::os::unix::fs::MetadataExt;
    DirId::Inode {
        dev: metadata.dev(),
        ino: metadata.ino(),
    }
}

#[cfg(not(unix))]
fn dir_id(path: &Path, _metadata: &Metadata) -> DirId {
    DirId::Path(fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()))
}

/// Build a display tree mirroring `root`.
///
/// Entries appear in the order the filesystem returns them; no sorting is
/// applied, so sibling order is platform dependent. Symlinks are followed.
/// A directory that is already one of its own ancestors is emitted without
/// children instead of recursing forever.
///
/// Only an unreadable root is an error. Inside the tree, entries that fail
/// to enumerate are skipped, entries whose metadata cannot be read are shown
/// as files, and unreadable subdirectories are shown empty.
pub fn build_tree(root: &Path) -> Result<DisplayNode> {
    let entries = fs::read_dir(root).map_err(|e| EditorError::access(root, e))?;

    let mut ancestors = HashSet::new();
    if let Ok(metadata) = fs::metadata(root) {
        ancestors.insert(dir_id(root, &metadata));
    }

    let mut node = DisplayNode::new_dir(root.to_path_buf());
    node.children = scan_entries(entries, &mut ancestors);

    tracing::debug!(
        "Built file tree for {} ({} nodes)",
        root.display(),
        node.node_count()
    );
    Ok(node)
}

fn scan_directory(dir: &Path, ancestors: &mut HashSet<DirId>) -> Vec<DisplayNode> {
    match fs::read_dir(dir) {
        Ok(entries) => scan_entries(entries, ancestors),
        Err(e) => {
            tracing::debug!("Cannot read directory {}: {}", dir.display(), e);
            Vec::new()
        }
    }
}

fn scan_entries(entries: ReadDir, ancestors: &mut HashSet<DirId>) -> Vec<DisplayNode> {
    let mut nodes = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };
        let path = entry.path();

        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                // Dangling symlinks and the like still show up, as files
                tracing::debug!("No metadata for {}: {}", path.display(), e);
                nodes.push(DisplayNode::new_file(path));
                continue;
            }
        };

        if !metadata.is_dir() {
            nodes.push(DisplayNode::new_file(path));
            continue;
        }

        let mut dir_node = DisplayNode::new_dir(path);
        let id = dir_id(&dir_node.path, &metadata);
        if ancestors.insert(id.clone()) {
            dir_node.children = scan_directory(&dir_node.path, ancestors);
            ancestors.remove(&id);
        } else {
            tracing::debug!("Directory cycle at {}", dir_node.path.display());
        }
        nodes.push(dir_node);
    }

    nodes
}

// ============================================================================
// Visible rows
// ============================================================================

/// A row of the flattened tree as shown in the sidebar
#[derive(Debug, Clone, Copy)]
pub struct VisibleItem<'a> {
    pub node: &'a DisplayNode,
    pub depth: usize,
    pub is_expanded: bool,
}

fn collect_visible<'a>(
    node: &'a DisplayNode,
    depth: usize,
    expanded: &HashSet<PathBuf>,
    items: &mut Vec<VisibleItem<'a>>,
) {
    let is_expanded = node.is_dir && expanded.contains(&node.path);
    items.push(VisibleItem {
        node,
        depth,
        is_expanded,
    });

    if is_expanded {
        for child in &node.children {
            collect_visible(child, depth + 1, expanded, items);
        }
    }
}

// ============================================================================
// Workspace
// ============================================================================

/// Workspace state - manages the file tree and sidebar selection
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Root directory of the workspace
    pub root: PathBuf,

    /// Snapshot of the directory structure
    pub tree: DisplayNode,

    /// Expanded folder paths
    pub expanded_folders: HashSet<PathBuf>,

    /// Currently selected item in file tree
    pub selected_item: Option<PathBuf>,

    /// Scroll offset in the file tree (in items)
    pub scroll_offset: usize,
}

impl Workspace {
    /// Open a directory as workspace
    pub fn open(root: PathBuf) -> Result<Self> {
        // Canonicalize so that "." gets a usable display name
        let root = fs::canonicalize(&root).map_err(|e| EditorError::access(&root, e))?;
        let tree = build_tree(&root)?;
        Ok(Self::with_tree(root, tree))
    }

    /// Wrap an already built tree; the root starts expanded and selected
    pub fn with_tree(root: PathBuf, tree: DisplayNode) -> Self {
        let mut expanded_folders = HashSet::new();
        expanded_folders.insert(root.clone());

        Self {
            selected_item: Some(root.clone()),
            root,
            tree,
            expanded_folders,
            scroll_offset: 0,
        }
    }

    /// Rebuild the tree from disk.
    ///
    /// On failure the current tree is left untouched.
    pub fn reload(&mut self) -> Result<()> {
        let tree = build_tree(&self.root)?;
        self.tree = tree;

        // Drop view state that points at entries which no longer exist
        let tree = &self.tree;
        self.expanded_folders
            .retain(|path| tree.find(path).is_some_and(|n| n.is_dir));
        if let Some(selected) = &self.selected_item {
            if tree.find(selected).is_none() {
                self.selected_item = Some(self.root.clone());
            }
        }
        Ok(())
    }

    /// Toggle folder expansion
    pub fn toggle_folder(&mut self, path: &Path) {
        if self.expanded_folders.contains(path) {
            self.expanded_folders.remove(path);
        } else {
            self.expanded_folders.insert(path.to_path_buf());
        }
    }

    /// Check if a folder is expanded
    pub fn is_expanded(&self, path: &Path) -> bool {
        self.expanded_folders.contains(path)
    }

    /// Rows currently visible in the sidebar (collapsed folders hide their children)
    pub fn visible_items(&self) -> Vec<VisibleItem<'_>> {
        let mut items = Vec::new();
        collect_visible(&self.tree, 0, &self.expanded_folders, &mut items);
        items
    }

    /// Get visible item count (for scrolling)
    pub fn visible_item_count(&self) -> usize {
        self.visible_items().len()
    }

    /// Index of the selected item among the visible rows
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected_item.as_ref()?;
        self.visible_items()
            .iter()
            .position(|item| &item.node.path == selected)
    }

    /// The node currently selected, if it still exists in the tree
    pub fn selected_node(&self) -> Option<&DisplayNode> {
        self.selected_item
            .as_ref()
            .and_then(|path| self.tree.find(path))
    }

    /// Move the selection up (negative) or down (positive) among visible rows
    pub fn select_adjacent(&mut self, delta: isize) {
        let new_path = {
            let items = self.visible_items();
            if items.is_empty() {
                return;
            }
            let current = self
                .selected_item
                .as_ref()
                .and_then(|sel| items.iter().position(|item| &item.node.path == sel));
            let next = match current {
                Some(idx) => (idx as isize + delta).clamp(0, items.len() as isize - 1) as usize,
                None => 0,
            };
            items[next].node.path.clone()
        };
        self.selected_item = Some(new_path);
    }

    /// Adjust the scroll offset so the selection fits in `visible_rows`
    pub fn ensure_selection_visible(&mut self, visible_rows: usize) {
        let Some(idx) = self.selected_index() else {
            return;
        };
        if visible_rows == 0 {
            return;
        }
        if idx < self.scroll_offset {
            self.scroll_offset = idx;
        } else if idx >= self.scroll_offset + visible_rows {
            self.scroll_offset = idx + 1 - visible_rows;
        }
    }

    /// Directory a new entry should go into when the selection is used as target
    pub fn selected_directory(&self) -> PathBuf {
        match self.selected_node() {
            Some(node) if node.is_dir => node.path.clone(),
            Some(node) => node
                .path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.root.clone()),
            None => self.root.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DisplayNode {
        let mut root = DisplayNode::new_dir(PathBuf::from("/ws"));
        let mut src = DisplayNode::new_dir(PathBuf::from("/ws/src"));
        src.children
            .push(DisplayNode::new_file(PathBuf::from("/ws/src/main.py")));
        root.children.push(src);
        root.children
            .push(DisplayNode::new_file(PathBuf::from("/ws/README")));
        root
    }

    #[test]
    fn test_node_names() {
        let node = DisplayNode::new_file(PathBuf::from("/path/to/main.py"));
        assert_eq!(node.name, "main.py");
        assert!(!node.is_dir);
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_find_and_count() {
        let tree = sample_tree();
        assert_eq!(tree.node_count(), 4);
        assert!(tree.find(Path::new("/ws/src/main.py")).is_some());
        assert!(tree.find(Path::new("/ws/other")).is_none());
    }

    #[test]
    fn test_workspace_folder_toggle() {
        let mut ws = Workspace::with_tree(PathBuf::from("/ws"), sample_tree());
        let folder = Path::new("/ws/src");

        assert!(!ws.is_expanded(folder));
        assert_eq!(ws.visible_item_count(), 3);
        ws.toggle_folder(folder);
        assert!(ws.is_expanded(folder));
        assert_eq!(ws.visible_item_count(), 4);
        ws.toggle_folder(folder);
        assert!(!ws.is_expanded(folder));
    }

    #[test]
    fn test_select_adjacent_clamps() {
        let mut ws = Workspace::with_tree(PathBuf::from("/ws"), sample_tree());
        ws.select_adjacent(-1);
        assert_eq!(ws.selected_item, Some(PathBuf::from("/ws")));
        ws.select_adjacent(1);
        assert_eq!(ws.selected_item, Some(PathBuf::from("/ws/src")));
        ws.select_adjacent(10);
        assert_eq!(ws.selected_item, Some(PathBuf::from("/ws/README")));
    }

    #[test]
    fn test_ensure_selection_visible() {
        let mut ws = Workspace::with_tree(PathBuf::from("/ws"), sample_tree());
        ws.selected_item = Some(PathBuf::from("/ws/README"));
        ws.ensure_selection_visible(2);
        assert_eq!(ws.scroll_offset, 1);
        ws.selected_item = Some(PathBuf::from("/ws"));
        ws.ensure_selection_visible(2);
        assert_eq!(ws.scroll_offset, 0);
    }

    #[test]
    fn test_selected_directory() {
        let mut ws = Workspace::with_tree(PathBuf::from("/ws"), sample_tree());
        assert_eq!(ws.selected_directory(), PathBuf::from("/ws"));
        ws.selected_item = Some(PathBuf::from("/ws/src/main.py"));
        assert_eq!(ws.selected_directory(), PathBuf::from("/ws/src"));
    }
}
