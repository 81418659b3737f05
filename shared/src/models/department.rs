//! Department Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::resource::Resource;

/// Department entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Department {
    pub department_id: i64,
    pub department_name: String,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DepartmentCreate {
    #[validate(length(min = 1, message = "may not be blank"))]
    pub department_name: String,
}

impl Resource for Department {
    type Create = DepartmentCreate;

    const PATH: &'static str = "department";
    const LABEL: &'static str = "Department";

    fn id(&self) -> i64 {
        self.department_id
    }

    fn field_names() -> &'static [&'static str] {
        &["DepartmentId", "DepartmentName"]
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "DepartmentId" => Some(self.department_id.to_string()),
            "DepartmentName" => Some(self.department_name.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "DepartmentName" => {
                self.department_name = value.to_string();
                true
            }
            _ => false,
        }
    }

    fn draft() -> Self {
        Self {
            department_id: 0,
            department_name: String::new(),
        }
    }

    fn to_create(&self) -> DepartmentCreate {
        DepartmentCreate {
            department_name: self.department_name.trim().to_string(),
        }
    }
}
