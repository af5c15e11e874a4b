use serde::{Deserialize, Serialize};

use crate::table::{TableHeader, TableResource};

/// A named permission bucket issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Role {
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: 0,
            slug: name.to_lowercase(),
            name,
            permissions: None,
        }
    }
}

/// The authenticated identity returned by `POST login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub token: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl User {
    /// Any-of membership over the role names. A user without roles matches nothing.
    pub fn is_in_role<'a>(&self, query: impl Into<RoleQuery<'a>>) -> bool {
        let query = query.into();
        self.roles.iter().any(|role| query.matches(&role.name))
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.name.as_str()).collect()
    }
}

/// Display profile served by `GET users/me`, kept under the `userData` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// One row of the admin users list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl TableResource for ManagedUser {
    fn table_header(t: &dyn Fn(&str) -> String) -> Vec<TableHeader> {
        vec![
            TableHeader::new("id", "#"),
            TableHeader::new("fullName", t("full_name")).with_icon("user"),
            TableHeader::new("email", t("email")).with_icon("mail"),
            TableHeader::new("roles", t("roles")),
            TableHeader::new("isActive", t("active")),
        ]
    }
}

/// Role names a caller is willing to accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleQuery<'a> {
    One(&'a str),
    AnyOf(Vec<&'a str>),
}

impl RoleQuery<'_> {
    pub fn matches(&self, role_name: &str) -> bool {
        match self {
            RoleQuery::One(name) => *name == role_name,
            RoleQuery::AnyOf(names) => names.iter().any(|name| *name == role_name),
        }
    }
}

impl<'a> From<&'a str> for RoleQuery<'a> {
    fn from(name: &'a str) -> Self {
        RoleQuery::One(name)
    }
}

impl<'a> From<&'a String> for RoleQuery<'a> {
    fn from(name: &'a String) -> Self {
        RoleQuery::One(name.as_str())
    }
}

impl<'a> From<Vec<&'a str>> for RoleQuery<'a> {
    fn from(names: Vec<&'a str>) -> Self {
        RoleQuery::AnyOf(names)
    }
}

impl<'a> From<&[&'a str]> for RoleQuery<'a> {
    fn from(names: &[&'a str]) -> Self {
        RoleQuery::AnyOf(names.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for RoleQuery<'a> {
    fn from(names: [&'a str; N]) -> Self {
        RoleQuery::AnyOf(names.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(roles: &[&str]) -> User {
        User {
            id: 1,
            full_name: "X".to_string(),
            token: "t".to_string(),
            roles: roles.iter().map(|r| Role::named(*r)).collect(),
        }
    }

    #[test]
    fn test_no_roles_matches_nothing() {
        let user = user_with(&[]);
        assert!(!user.is_in_role("Admin"));
        assert!(!user.is_in_role(["Admin", "Merchant"]));
        assert!(!user.is_in_role(Vec::<&str>::new()));
    }

    #[test]
    fn test_any_of_membership() {
        let user = user_with(&["Teacher", "B"]);
        assert!(user.is_in_role(["A", "B"]));
        assert!(user.is_in_role("Teacher"));
        assert!(!user.is_in_role(["A", "C"]));
        assert!(!user.is_in_role("teacher"));
    }

    #[test]
    fn test_minimal_login_payload() {
        let json = r#"{"id":1,"fullName":"X","token":"t","roles":[{"name":"Admin"}]}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.full_name, "X");
        assert_eq!(user.role_names(), vec!["Admin"]);
        assert!(user.is_in_role("Admin"));
        assert!(!user.is_in_role("Merchant"));
    }

    #[test]
    fn test_missing_roles_defaults_to_empty() {
        let json = r#"{"id":7,"fullName":"Y","token":"abc"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.roles.is_empty());
        assert!(!user.is_in_role("Admin"));
    }

    #[test]
    fn test_managed_user_roles_cell() {
        let row = ManagedUser {
            id: 2,
            full_name: "Mona".to_string(),
            email: None,
            is_active: true,
            roles: vec![Role::named("Admin"), Role::named("Teacher")],
        };
        let cells: Vec<String> = ManagedUser::table_header(&|k: &str| k.to_string())
            .iter()
            .map(|h| crate::table::cell_text(&row, &h.key))
            .collect();
        assert_eq!(cells, vec!["2", "Mona", "", "Admin, Teacher", "true"]);
    }

    #[test]
    fn test_user_json_round_trip() {
        let mut user = user_with(&["Admin"]);
        user.roles[0].permissions = Some(vec!["exams.write".to_string()]);
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, back);
    }
}
