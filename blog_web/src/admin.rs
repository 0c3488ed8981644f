//! Admin dashboard configuration.
//!
//! The dashboard is declared rather than coded: a fixed menu and one
//! management screen per entity, addressed by [`crud_url`].

use serde::Serialize;

pub const DASHBOARD_TITLE: &str = "Blog administration";

/// Entities managed from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrudEntity {
    Post,
    User,
}

impl CrudEntity {
    pub fn slug(self) -> &'static str {
        match self {
            CrudEntity::Post => "post",
            CrudEntity::User => "user",
        }
    }
}

/// The screen `/admin` lands on.
pub const LANDING: CrudEntity = CrudEntity::Post;

pub fn crud_url(entity: CrudEntity) -> String {
    format!("/admin/{}", entity.slug())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuItem {
    Section {
        label: &'static str,
    },
    LinkToCrud {
        label: &'static str,
        icon: &'static str,
        entity: CrudEntity,
        url: String,
    },
}

impl MenuItem {
    pub fn section(label: &'static str) -> Self {
        MenuItem::Section { label }
    }

    pub fn link_to_crud(label: &'static str, icon: &'static str, entity: CrudEntity) -> Self {
        MenuItem::LinkToCrud {
            label,
            icon,
            entity,
            url: crud_url(entity),
        }
    }
}

pub fn configure_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem::section("Impotent"),
        MenuItem::link_to_crud("Posts", "fa fa-file-pdf", CrudEntity::Post),
        MenuItem::link_to_crud("Users", "fa fa-users", CrudEntity::User),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let items = configure_menu_items();
        assert_eq!(
            items,
            vec![
                MenuItem::Section { label: "Impotent" },
                MenuItem::LinkToCrud {
                    label: "Posts",
                    icon: "fa fa-file-pdf",
                    entity: CrudEntity::Post,
                    url: "/admin/post".to_string(),
                },
                MenuItem::LinkToCrud {
                    label: "Users",
                    icon: "fa fa-users",
                    entity: CrudEntity::User,
                    url: "/admin/user".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_landing_url() {
        assert_eq!(crud_url(LANDING), "/admin/post");
    }

    #[test]
    fn test_menu_serialization() {
        let json = serde_json::to_value(configure_menu_items()).unwrap();
        assert_eq!(json[0]["kind"], "section");
        assert_eq!(json[1]["kind"], "link_to_crud");
        assert_eq!(json[1]["entity"], "post");
        assert_eq!(json[2]["url"], "/admin/user");
    }
}
