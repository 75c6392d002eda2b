//! Navigation menu data contract.
//!
//! Each dashboard variant supplies a static list of groups; the sidebar
//! turns clicks into `TabManager::open` calls and nothing else.

/// What a click on the entry does: most open a tab inside the dashboard,
/// a few jump to another console outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    OpenTab,
    Navigate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub target: &'static str,
    pub action: MenuAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub label: &'static str,
    pub items: Vec<MenuItem>,
}

impl MenuGroup {
    pub fn new(label: &'static str, items: Vec<MenuItem>) -> Self {
        Self { label, items }
    }
}

pub fn item(label: &'static str, target: &'static str) -> MenuItem {
    MenuItem {
        label,
        target,
        action: MenuAction::OpenTab,
    }
}

/// A cross-console jump, e.g. 返回用户中心 in the tech agent menu.
pub fn link(label: &'static str, target: &'static str) -> MenuItem {
    MenuItem {
        label,
        target,
        action: MenuAction::Navigate,
    }
}

/// Label for a target, when the menu knows it. Used when restoring the
/// active tab from the URL.
pub fn find_label(groups: &[MenuGroup], target: &str) -> Option<&'static str> {
    groups
        .iter()
        .flat_map(|group| group.items.iter())
        .find(|item| item.target == target)
        .map(|item| item.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_label() {
        let groups = vec![
            MenuGroup::new("平台", vec![item("用户管理", "/admin/users")]),
            MenuGroup::new("设置", vec![item("安全", "/admin/settings/security")]),
        ];
        assert_eq!(find_label(&groups, "/admin/users"), Some("用户管理"));
        assert_eq!(find_label(&groups, "/nope"), None);
    }
}
