//! Menu models.

use serde::{Deserialize, Serialize};

/// An authorization-scoped navigation node.
///
/// The backend returns these as a tree built over `parent_id`; a node with
/// `parent_id == 0` is a root. The tree is replaced wholesale on each fetch
/// and never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub parent_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub sort: i32,
    /// 1 directory, 2 menu, 3 button.
    #[serde(rename = "type", default)]
    pub kind: i32,
    #[serde(default)]
    pub permission: String,
    #[serde(default)]
    pub visible: i32,
    #[serde(default)]
    pub status: i32,
    #[serde(
        default,
        deserialize_with = "super::null_to_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Total node count of this subtree, self included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(MenuItem::subtree_len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_deserialization() {
        let json = r#"[{
            "id": 1, "parentId": 0, "name": "系统管理", "path": "/admin/system",
            "component": "", "icon": "setting", "sort": 1, "type": 1,
            "permission": "", "visible": 1, "status": 1,
            "children": [
                {"id": 2, "parentId": 1, "name": "用户管理", "path": "/admin/system/user",
                 "component": "system/User", "icon": "user", "sort": 1, "type": 2,
                 "permission": "system:user", "visible": 1, "status": 1}
            ]
        }]"#;
        let menus: Vec<MenuItem> = serde_json::from_str(json).unwrap();
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].children.len(), 1);
        assert_eq!(menus[0].children[0].kind, 2);
        assert_eq!(menus[0].subtree_len(), 2);
    }
}
