//! Integration tests for the file tree mirror and sidebar interactions

mod common;

use std::fs;

use albert::error::EditorError;
use albert::messages::{Msg, UiMsg, WorkspaceMsg};
use albert::model::{build_tree, FocusTarget, ModalState};
use albert::update::update;

use common::{child_names, workspace_model, write_file};

// ============================================================================
// Tree mirror
// ============================================================================

#[test]
fn test_tree_mirrors_nested_folders() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.py", "print(1)\n");
    write_file(dir.path(), "b/c.py", "");

    let tree = build_tree(dir.path()).unwrap();
    assert!(tree.is_dir);
    assert_eq!(tree.node_count(), 4);

    let a = tree.find(&dir.path().join("a.py")).unwrap();
    assert!(!a.is_dir);
    let b = tree.find(&dir.path().join("b")).unwrap();
    assert!(b.is_dir);
    assert_eq!(b.children.len(), 1);
    assert_eq!(b.children[0].name, "c.py");
    assert!(!b.children[0].is_dir);
}

#[test]
fn test_empty_folder_has_no_children() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();

    let tree = build_tree(dir.path()).unwrap();
    let empty = tree.find(&dir.path().join("empty")).unwrap();
    assert!(empty.is_dir);
    assert!(empty.children.is_empty());
}

#[test]
fn test_missing_root_is_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = build_tree(&dir.path().join("missing"));
    assert!(matches!(result, Err(EditorError::Access { .. })));
}

#[cfg(unix)]
#[test]
fn test_symlink_cycle_terminates() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "sub/x.py", "");
    std::os::unix::fs::symlink(dir.path(), dir.path().join("sub/loop")).unwrap();

    let tree = build_tree(dir.path()).unwrap();
    let looped = tree.find(&dir.path().join("sub/loop")).unwrap();
    assert!(looped.is_dir);
    assert!(looped.children.is_empty());
}

#[cfg(unix)]
#[test]
fn test_symlinked_folder_is_followed() {
    let outside = tempfile::tempdir().unwrap();
    write_file(outside.path(), "lib.py", "");
    let dir = tempfile::tempdir().unwrap();
    std::os::unix::fs::symlink(outside.path(), dir.path().join("linked")).unwrap();

    let tree = build_tree(dir.path()).unwrap();
    let linked = tree.find(&dir.path().join("linked")).unwrap();
    assert!(linked.is_dir);
    assert_eq!(linked.children[0].name, "lib.py");
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_shows_as_file() {
    let dir = tempfile::tempdir().unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();

    let tree = build_tree(dir.path()).unwrap();
    let node = tree.find(&dir.path().join("dangling")).unwrap();
    assert!(!node.is_dir);
}

// ============================================================================
// Opening and reloading through the model
// ============================================================================

#[test]
fn test_open_folder_focuses_sidebar() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.py", "");

    let model = workspace_model(dir.path());
    let workspace = model.workspace.as_ref().unwrap();
    assert_eq!(model.ui.focus, FocusTarget::Sidebar);
    assert_eq!(workspace.selected_item.as_ref(), Some(&workspace.root));
    assert_eq!(child_names(&model, &workspace.root), vec!["a.py"]);
}

#[test]
fn test_focus_moves_between_tree_and_editor() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.py", "");
    let mut model = workspace_model(dir.path());

    update(&mut model, Msg::Ui(UiMsg::FocusEditor));
    assert_eq!(model.ui.focus, FocusTarget::Editor);

    update(&mut model, Msg::Workspace(WorkspaceMsg::SelectRow(1)));
    assert_eq!(model.ui.focus, FocusTarget::Sidebar);
    let workspace = model.workspace.as_ref().unwrap();
    assert_eq!(workspace.selected_item, Some(workspace.root.join("a.py")));
}

#[cfg(unix)]
#[test]
fn test_unreadable_root_keeps_previous_tree() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.py", "");
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root bypasses permission bits
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let mut model = workspace_model(dir.path());
    let before = model.workspace.as_ref().unwrap().tree.clone();

    let result = model.open_workspace(&locked);
    assert!(matches!(result, Err(EditorError::Access { .. })));
    assert_eq!(model.workspace.as_ref().unwrap().tree, before);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_reload_picks_up_new_files() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.py", "");
    let mut model = workspace_model(dir.path());
    let root = model.workspace.as_ref().unwrap().root.clone();

    write_file(&root, "b.py", "");
    assert_eq!(child_names(&model, &root), vec!["a.py"]);

    update(&mut model, Msg::Workspace(WorkspaceMsg::Reload));
    assert_eq!(child_names(&model, &root), vec!["a.py", "b.py"]);
}

#[test]
fn test_reload_drops_selection_of_deleted_entry() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.py", "");
    let mut model = workspace_model(dir.path());
    let root = model.workspace.as_ref().unwrap().root.clone();

    update(&mut model, Msg::Workspace(WorkspaceMsg::SelectRow(1)));
    assert_eq!(
        model.workspace.as_ref().unwrap().selected_item,
        Some(root.join("a.py"))
    );

    fs::remove_file(root.join("a.py")).unwrap();
    update(&mut model, Msg::Workspace(WorkspaceMsg::Reload));
    assert_eq!(model.workspace.as_ref().unwrap().selected_item, Some(root));
}

// ============================================================================
// Sidebar interactions
// ============================================================================

#[test]
fn test_enter_on_file_opens_it() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.py", "x = 1\n");
    let mut model = workspace_model(dir.path());

    update(&mut model, Msg::Workspace(WorkspaceMsg::SelectNext));
    update(&mut model, Msg::Workspace(WorkspaceMsg::OpenOrToggle));

    assert_eq!(model.document.text(), "x = 1\n");
    assert_eq!(model.ui.focus, FocusTarget::Editor);
    assert_eq!(model.language_label(), "Language: Python");
}

#[test]
fn test_enter_on_folder_toggles_it() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "b/c.py", "");
    let mut model = workspace_model(dir.path());
    let root = model.workspace.as_ref().unwrap().root.clone();

    // Root expanded: root, b
    assert_eq!(model.workspace.as_ref().unwrap().visible_item_count(), 2);

    update(&mut model, Msg::Workspace(WorkspaceMsg::SelectNext));
    update(&mut model, Msg::Workspace(WorkspaceMsg::OpenOrToggle));
    let workspace = model.workspace.as_ref().unwrap();
    assert!(workspace.is_expanded(&root.join("b")));
    assert_eq!(workspace.visible_item_count(), 3);

    update(&mut model, Msg::Workspace(WorkspaceMsg::OpenOrToggle));
    assert_eq!(model.workspace.as_ref().unwrap().visible_item_count(), 2);
}

#[test]
fn test_open_non_utf8_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bin.py"), [0xff, 0xfe, 0x00]).unwrap();
    let mut model = workspace_model(dir.path());
    model.document = albert::model::Document::with_text("keep me");
    let root = model.workspace.as_ref().unwrap().root.clone();

    update(
        &mut model,
        Msg::Workspace(WorkspaceMsg::OpenFile(root.join("bin.py"))),
    );

    assert_eq!(model.document.text(), "keep me");
    let (title, _, _) = common::notification(&model);
    assert_eq!(title, "File Error");
}

#[test]
fn test_context_menu_actions() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.py", "abc");
    let mut model = workspace_model(dir.path());
    let root = model.workspace.as_ref().unwrap().root.clone();

    update(&mut model, Msg::Workspace(WorkspaceMsg::SelectRow(1)));
    update(&mut model, Msg::Workspace(WorkspaceMsg::OpenContextMenu));
    match &model.ui.active_modal {
        Some(ModalState::ContextMenu(menu)) => assert_eq!(menu.target, root.join("a.py")),
        other => panic!("expected context menu, got {:?}", other),
    }

    let cmd = update(
        &mut model,
        Msg::Workspace(WorkspaceMsg::CopyPath(root.join("a.py"))),
    );
    let text = root.join("a.py").to_string_lossy().into_owned();
    assert!(matches!(
        cmd,
        Some(albert::Cmd::Batch(ref cmds)) if cmds.contains(&albert::Cmd::CopyToClipboard(text.clone()))
    ));

    update(
        &mut model,
        Msg::Workspace(WorkspaceMsg::ShowProperties(root.join("a.py"))),
    );
    let (title, body, _) = common::notification(&model);
    assert_eq!(title, "File Properties");
    assert!(body.contains("Size: 3 bytes"), "{}", body);
}
